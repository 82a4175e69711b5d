mod common;
mod rotate;
mod wallpaper;

use clap::{Parser, Subcommand};
use colored::*;

use crate::rotate::cli::{NextArgs, RotateArgs, SetArgs};

/// Wallcycle main parser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Activate debug mode
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rotate the wallpaper on an interval
    Run(RotateArgs),

    /// Perform a single scan-and-rotate cycle, then exit
    Next(NextArgs),

    /// Apply a specific image without scanning
    Set(SetArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.debug {
        eprintln!("Debug mode is on");
    }

    let result = match cli.command {
        Some(Commands::Run(args)) => rotate::commands::handle_run(args, cli.debug).await,
        Some(Commands::Next(args)) => rotate::commands::handle_next(args, cli.debug).await,
        Some(Commands::Set(args)) => rotate::commands::handle_set(args, cli.debug),
        None => {
            println!("wallcycle: run with --help for usage");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red(), e);
        std::process::exit(1);
    }
}
