//! CLI definition and exit codes.

pub mod inspect;

use clap::Parser;

/// Graylens - Interactive grayscale histogram inspector
#[derive(Parser)]
#[command(name = "graylens")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Inspector arguments (image path, modes, display options).
    #[command(flatten)]
    pub inspect: inspect::InspectArgs,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Completed normally.
    Success = 0,
    /// Input, decode or I/O failure.
    Error = 1,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code as u8)
    }
}
