//! treebench entry point

use clap::Parser;
use treebench_cli::commands::Commands;

/// Score parser-generated linguistic annotations against a gold standard
#[derive(Debug, Parser)]
#[command(name = "treebench", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.command.execute() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
