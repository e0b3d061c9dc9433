use anyhow::Context;
use clap::Parser;
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use vincalc::calculator::{Calculator, parse_keys};
use vincalc::config::Config;
use vincalc::decode::VehicleDecoder;
use vincalc::recents::{JsonFileStore, RecentVins};
use vincalc::vin::{Vin, extract_vin, normalize, validate};

mod cli;

use crate::cli::{CalcArgs, Cli, Command, VinCommand};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.clone().or_else(Config::default_path);
    let config = match &config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    debug!(?config, "loaded configuration");

    match cli.command {
        Command::Calc(args) => run_calc(&args),
        Command::Vin { command } => run_vin(command, &config).await,
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_calc(args: &CalcArgs) -> anyhow::Result<ExitCode> {
    let actions = parse_keys(&args.keys.join(" "))?;
    let mut calc = Calculator::new();

    for action in actions {
        let state = calc.press(action);
        if args.trace {
            println!("{:<20} {}", format!("{:?}", action), state.display());
        }
    }

    if !args.trace {
        println!("{}", calc.display());
    }
    Ok(ExitCode::SUCCESS)
}

async fn run_vin(command: VinCommand, config: &Config) -> anyhow::Result<ExitCode> {
    match command {
        VinCommand::Normalize { text, json } => {
            let normalized = normalize(&text);
            if json {
                let out = serde_json::json!({ "input": text, "vin": normalized });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{}", normalized);
            }
            Ok(ExitCode::SUCCESS)
        }
        VinCommand::Check { text, json } => {
            let vin = normalize(&text);
            let verdict = validate(&vin);
            if json {
                let out = serde_json::json!({
                    "vin": vin,
                    "ok": verdict.is_ok(),
                    "error": verdict.err().map(|e| e.to_string()),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                match verdict {
                    Ok(()) => println!("ok"),
                    Err(e) => println!("{}", e),
                }
            }
            Ok(exit_status(verdict.is_ok()))
        }
        VinCommand::Extract { file, json } => {
            let text = read_input(file.as_deref())?;
            let found = extract_vin(&text);
            if json {
                let out = serde_json::json!({ "vin": found });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                match &found {
                    Some(vin) => println!("{}", vin),
                    None => println!("No VIN found in text"),
                }
            }
            Ok(exit_status(found.is_some()))
        }
        VinCommand::Decode { text, json } => {
            let vin = match Vin::parse(&text) {
                Ok(vin) => vin,
                Err(e) => {
                    eprintln!("{}", e);
                    return Ok(ExitCode::FAILURE);
                }
            };

            let decoder = VehicleDecoder::new(config.decode_url.clone());
            let fields = decoder.decode(&vin).await?;

            if json {
                let out = serde_json::json!({ "vin": vin, "fields": fields });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{}", vin);
                let width = fields.iter().map(|f| f.label.len()).max().unwrap_or(0);
                for field in &fields {
                    println!("  {:<width$}  {}", field.label, field.value, width = width);
                }
            }

            if let Err(e) = remember_vin(vin, config) {
                warn!("could not update recent VINs: {:#}", e);
            }
            Ok(ExitCode::SUCCESS)
        }
        VinCommand::Recents { json, clear } => {
            let mut store = JsonFileStore::new(config.recents_path());
            let recents = if clear {
                let empty = RecentVins::new();
                empty.save(&mut store)?;
                empty
            } else {
                RecentVins::load(&store)?
            };

            if json {
                let list: Vec<&str> = recents.iter().map(Vin::as_str).collect();
                println!("{}", serde_json::to_string_pretty(&list)?);
            } else if recents.is_empty() {
                println!("No recent VINs");
            } else {
                for vin in &recents {
                    println!("{}", vin);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Record a decoded VIN at the front of the recents list.
fn remember_vin(vin: Vin, config: &Config) -> anyhow::Result<()> {
    let mut store = JsonFileStore::new(config.recents_path());
    let mut recents = RecentVins::load(&store)?;
    recents.record(vin);
    recents
        .save(&mut store)
        .with_context(|| format!("failed to save recents to {}", store.path().display()))
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn exit_status(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
