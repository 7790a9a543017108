use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use add_demo::Operands;

/// Print the sum of two integers
///
/// With no arguments, prints the sum of 10 and 20
#[derive(Parser, Debug, Clone)]
#[clap(version)]
struct Cli {
    /// Path to a TOML file with `a` and/or `b`
    #[clap(short = 'O', long)]
    operands: Option<PathBuf>,
    /// First operand, overrides the operand file
    #[clap(short = 'a', allow_negative_numbers = true)]
    a: Option<i32>,
    /// Second operand, overrides the operand file
    #[clap(short = 'b', allow_negative_numbers = true)]
    b: Option<i32>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Cli::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {:?}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(args: Cli) -> anyhow::Result<()> {
    log::debug!("parsed arguments: {args:#?}");
    let operands = resolve_operands(&args)?;
    let message = operands.message().context("failed to add operands")?;
    println!("{message}");
    Ok(())
}

fn resolve_operands(args: &Cli) -> anyhow::Result<Operands> {
    let mut operands = match &args.operands {
        Some(path) => Operands::load(path)?,
        None => {
            log::trace!("no operand file given, using defaults");
            Operands::default()
        }
    };
    if let Some(a) = args.a {
        operands.a = a;
    }
    if let Some(b) = args.b {
        operands.b = b;
    }
    Ok(operands)
}
