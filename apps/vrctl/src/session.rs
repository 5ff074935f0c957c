//! The read–execute loop around a [`Sim`].

use std::io::{self, BufRead, Write};

use vr_dispatch::DispatchPolicy;
use vr_sim::{Sim, StepOutcome};

use crate::command::{Command, parse_bytes};
use crate::narrator::Narrator;
use crate::report;

/// Whether the loop should keep reading.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// An operator session: the simulation plus its console narrator.
///
/// Every rejected command (malformed line, unknown node, illegal pickup or
/// drop) is reported on `out` and leaves the simulation untouched.
pub struct Session<P: DispatchPolicy> {
    sim:      Sim<P>,
    narrator: Narrator,
}

impl<P: DispatchPolicy> Session<P> {
    pub fn new(sim: Sim<P>, narrator: Narrator) -> Self {
        Self { sim, narrator }
    }

    pub fn sim(&self) -> &Sim<P> {
        &self.sim
    }

    /// Parse and run one raw input line.
    pub fn handle_line(&mut self, line: &[u8], out: &mut impl Write) -> io::Result<Flow> {
        match parse_bytes(line) {
            Ok(Some(cmd)) => self.execute(cmd, out),
            Ok(None)      => Ok(Flow::Continue),
            Err(e)        => {
                writeln!(out, "{e}")?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn execute(&mut self, cmd: Command, out: &mut impl Write) -> io::Result<Flow> {
        let result = match cmd {
            Command::Status => {
                report::write_status(out, &self.sim)?;
                Ok(())
            }
            Command::Path => {
                report::write_path(out, &self.sim)?;
                Ok(())
            }
            Command::Help => {
                writeln!(out, "{}", report::HELP)?;
                Ok(())
            }
            Command::Exit => return Ok(Flow::Exit),
            Command::Pickup(id) => {
                let result = self.sim.pickup(id, &mut self.narrator);
                if result.is_ok() {
                    writeln!(out, "Moving to pick up passenger at node {id}...")?;
                }
                result.map(|_| ())
            }
            Command::Drop(id) => self.sim.drop_off(id, &mut self.narrator),
            Command::Auto => {
                writeln!(out, "Running automatic dispatch...")?;
                self.sim.run_auto(&mut self.narrator).map(|_| ())
            }
            Command::Step => match self.sim.step(&mut self.narrator) {
                Ok(StepOutcome::Done) => {
                    writeln!(out, "No nodes are waiting. All nodes serviced!")?;
                    Ok(())
                }
                Ok(StepOutcome::Serviced { .. }) => Ok(()),
                Err(e) => Err(e),
            },
        };

        for line in self.narrator.take_lines() {
            writeln!(out, "{line}")?;
        }
        if let Err(e) = result {
            writeln!(out, "Error: {e}")?;
        }
        if let Some(e) = self.narrator.take_output_error() {
            writeln!(out, "Output error: {e} (CSV recording stopped)")?;
        }
        Ok(Flow::Continue)
    }

    /// Read commands from `input` until `exit`/`quit` or end of input, then
    /// close the CSV output.
    pub fn run(&mut self, mut input: impl BufRead, out: &mut impl Write, prompt: bool) -> io::Result<()> {
        let mut line = Vec::new();
        loop {
            if prompt {
                write!(out, "\nEnter command: ")?;
                out.flush()?;
            }
            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            if self.handle_line(&line, out)? == Flow::Exit {
                break;
            }
        }
        writeln!(out, "Exiting simulation.")?;
        self.close(out)
    }

    /// Close the CSV output, if any, and report what was written.
    pub fn close(&mut self, out: &mut impl Write) -> io::Result<()> {
        if let Some((rows, err)) = self.narrator.finish() {
            writeln!(out, "Wrote {rows} service rows.")?;
            if let Some(e) = err {
                writeln!(out, "Output error: {e}")?;
            }
        }
        Ok(())
    }
}
