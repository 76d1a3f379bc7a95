//! qrframe - command-line interface for the QR rendering pipeline

use clap::Parser;
use qrframe_cli::{commands, Cli, Commands};

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let result = match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Render(args) => commands::render::run(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
