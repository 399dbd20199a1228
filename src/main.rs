//! social-auth - social login setup for the Tourisme Flutter app
//!
//! Writes the Google, Facebook and Apple sign-in configuration files, runs
//! the social auth test suites, and verifies the resulting setup.

use clap::Parser;
use social_auth::commands::Commands;
use social_auth::common::logging;
use social_auth::{cli, Error};

#[derive(Parser)]
#[command(name = "social-auth", about = "Social login configuration helper")]
#[command(version, long_about = None)]
struct Cli {
    /// Show diagnostic logs and stream external command output
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_cli(cli.verbose);

    if let Err(e) = cli::dispatch(cli.command, cli.verbose).await {
        match e {
            Error::Interrupted => eprintln!("\n{e}"),
            e => eprintln!("Error: {e}"),
        }
        std::process::exit(1);
    }
}
