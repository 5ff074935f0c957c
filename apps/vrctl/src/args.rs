//! Command-line arguments.

use std::path::PathBuf;

use anyhow::{Result, bail};

pub const USAGE: &str = "\
Usage: vrctl [--config <file.json>] [--output <dir>] [--indexed]

  --config <file>   JSON scenario overrides (node_count, seed, extent,
                    speed, start, priority_ids); missing fields use defaults
  --output <dir>    write service_log.csv and path_history.csv to <dir>
  --indexed         dispatch through the R-tree policy instead of a linear scan
  -h, --help        show this message";

#[derive(Debug, Default, PartialEq)]
pub struct Args {
    pub config:  Option<PathBuf>,
    pub output:  Option<PathBuf>,
    pub indexed: bool,
    pub help:    bool,
}

impl Args {
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Args> {
        let mut parsed = Args::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => parsed.config = Some(value(&arg, args.next())?),
                "--output" => parsed.output = Some(value(&arg, args.next())?),
                "--indexed" => parsed.indexed = true,
                "-h" | "--help" => parsed.help = true,
                other => bail!("unknown argument '{other}'\n\n{USAGE}"),
            }
        }
        Ok(parsed)
    }
}

fn value(flag: &str, next: Option<String>) -> Result<PathBuf> {
    match next {
        Some(v) if !v.starts_with("--") => Ok(PathBuf::from(v)),
        _ => bail!("{flag} needs a value\n\n{USAGE}"),
    }
}
