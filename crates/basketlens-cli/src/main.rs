use clap::Parser;

use basketlens_cli::cli::Cli;
use basketlens_cli::error::CliError;
use basketlens_cli::{commands, output};

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    let value = commands::run(&cli)?;
    output::render(&value, cli.format, cli.pretty)?;

    Ok(())
}
