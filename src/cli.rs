use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vincalc", version, about = "Pocket calculator and VIN lookup")]
pub struct Cli {
    /// Path to config.toml (defaults to the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Press calculator keys and print the display, e.g. `calc 3+4x2=`
    Calc(CalcArgs),
    /// VIN tools
    Vin {
        #[command(subcommand)]
        command: VinCommand,
    },
}

#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Keys: digits . + - x / = % neg AC (may be combined, e.g. 12.5x4=)
    #[arg(required = true, allow_hyphen_values = true)]
    pub keys: Vec<String>,

    /// Print the display after every key press
    #[arg(long)]
    pub trace: bool,
}

#[derive(Subcommand, Debug)]
pub enum VinCommand {
    /// Print the normalized form of TEXT
    Normalize {
        text: String,
        #[arg(long, help = "Output machine-readable JSON")]
        json: bool,
    },
    /// Check whether TEXT is a well-formed VIN
    Check {
        text: String,
        #[arg(long, help = "Output machine-readable JSON")]
        json: bool,
    },
    /// Find a VIN in OCR text read from FILE or stdin
    Extract {
        file: Option<PathBuf>,
        #[arg(long, help = "Output machine-readable JSON")]
        json: bool,
    },
    /// Look up vehicle details for a VIN and remember it
    Decode {
        text: String,
        #[arg(long, help = "Output machine-readable JSON")]
        json: bool,
    },
    /// List recently decoded VINs, newest first
    Recents {
        #[arg(long, help = "Output machine-readable JSON")]
        json: bool,
        /// Forget all recent VINs
        #[arg(long)]
        clear: bool,
    },
}
