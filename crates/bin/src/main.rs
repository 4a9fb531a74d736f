use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};
use output::OutputFormat;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("recmap=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::from_compact(cli.compact);

    match &cli.command {
        Commands::Rename(args) => commands::rename::run(args, format),
        Commands::Join(args) => commands::join::run(args, format),
        Commands::Filter(args) => commands::filter::run(args, format),
    }
}
