//! Operator-facing text: status table, path listing, help.

use std::io::{self, Write};

use vr_dispatch::DispatchPolicy;
use vr_registry::Node;
use vr_sim::Sim;

pub const HELP: &str = "\
Commands:
  status         show vehicle position, totals, passengers and all nodes
  pickup <id>    drive to node <id> and pick up its passenger
  drop <id>      drop passenger <id> at the current position
  auto           service every waiting node (priority nodes first)
  step           service the next node only
  path           list every position the vehicle has visited
  help           show this list
  exit | quit    leave the simulator";

/// `" (PRIORITY)"` for priority nodes, empty otherwise.
pub fn priority_marker(node: &Node) -> &'static str {
    if node.is_priority { " (PRIORITY)" } else { "" }
}

pub fn write_status<P: DispatchPolicy>(out: &mut impl Write, sim: &Sim<P>) -> io::Result<()> {
    let vehicle = sim.vehicle();
    writeln!(out, "Current Status:")?;
    writeln!(out, "Vehicle position: {}", vehicle.position())?;
    writeln!(out, "Total distance: {:.2} km", vehicle.total_distance())?;
    writeln!(out, "Time elapsed: {:.2} hours", vehicle.time_elapsed())?;

    let passengers: Vec<String> = vehicle.passengers().iter().map(|id| id.to_string()).collect();
    if passengers.is_empty() {
        writeln!(out, "Passengers: none")?;
    } else {
        writeln!(out, "Passengers: {}", passengers.join(", "))?;
    }

    writeln!(out, "Nodes:")?;
    for node in sim.registry().iter() {
        writeln!(
            out,
            "  Node {}{}: {} - {}",
            node.id,
            priority_marker(node),
            node.pos,
            node.status()
        )?;
    }
    Ok(())
}

pub fn write_path<P: DispatchPolicy>(out: &mut impl Write, sim: &Sim<P>) -> io::Result<()> {
    let path = sim.vehicle().path();
    writeln!(out, "Path history ({} positions):", path.len())?;
    for (step, p) in path.iter().enumerate() {
        writeln!(out, "  {step:>3}: {p}")?;
    }
    Ok(())
}
