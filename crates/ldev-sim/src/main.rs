use std::error::Error;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "ldev-sim", about = "Large-deviation sampler for random-graph component sizes")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Execute a sampling run described interactively or by a YAML config.
    Run(commands::run::RunArgs),
    /// Generate one block-model graph and save it as a Graphviz file.
    Generate(commands::generate::GenerateArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Run(args) => commands::run::run(&args),
        Command::Generate(args) => commands::generate::run(&args),
    }
}
