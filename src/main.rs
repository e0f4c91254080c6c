use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;

use tiny_calc::Calculator;

/// Demo a stateless calculator wrapper delegating to an addition primitive
///
/// See <https://github.com/tiny-calc/tiny-calc>
#[derive(Parser, Debug, Clone)]
#[clap(version, allow_negative_numbers = true)]
struct Cli {
    /// First operand
    #[clap(default_value_t = 100)]
    a: i64,
    /// Second operand
    #[clap(default_value_t = 23)]
    b: i64,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let start_time = Instant::now();
    let args = Cli::parse();
    if let Err(e) = main_internal(args) {
        println!("Error: {:?}", e);
        error_message("demo failed, please see errors above.");
        return ExitCode::FAILURE;
    }

    let elapsed = start_time.elapsed();
    message(format!("done in {:.2?}", elapsed));

    ExitCode::SUCCESS
}

fn main_internal(args: Cli) -> anyhow::Result<()> {
    log::debug!("parsed arguments: {args:#?}");

    message("creating calculator");
    let calc = Calculator::new();

    message(format!("calling add({}, {})", args.a, args.b));
    let result = calc
        .add(args.a, args.b)
        .with_context(|| format!("failed to add {} and {}", args.a, args.b))?;

    println!("Result: {result}");
    Ok(())
}

fn message(message: impl std::fmt::Display) {
    println!("\x1b[1;32m[tiny-calc]\x1b[0m {message}");
}
fn error_message(message: impl std::fmt::Display) {
    println!("\x1b[1;31m[tiny-calc]\x1b[0m {message}");
}
