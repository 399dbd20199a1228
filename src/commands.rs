//! CLI command definitions
//!
//! Defines the clap commands for the social-auth CLI.

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prompt for provider credentials and write every configuration file
    Configure,

    /// Install dependencies and run the social auth test suites
    Test,

    /// Check that the configuration files exist and are populated
    Verify {
        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },
}
