//! CLI command handling
//!
//! Every command runs against the current directory, which must be the
//! Flutter project root. `verify` does not read the config file.

use crate::commands::Commands;
use crate::common::config::Config;
use crate::common::{Error, Result};
use crate::configure::{self, prompt};
use crate::{testing, verify};

/// Dispatch a CLI command
pub async fn dispatch(command: Commands, verbose: bool) -> Result<()> {
    let root = std::env::current_dir()?;
    tracing::debug!(root = %root.display(), ?command, "Dispatching");

    match command {
        Commands::Configure => {
            let config = Config::load()?;
            // Prompts block, so they run off the runtime thread where Ctrl-C
            // can still be observed.
            let task = tokio::task::spawn_blocking(move || {
                let mut prompter = prompt::for_stdin();
                configure::run(prompter.as_mut(), &root, &config).map(|_| ())
            });

            tokio::select! {
                joined = task => joined.map_err(|e| Error::Prompt(e.to_string()))?,
                _ = tokio::signal::ctrl_c() => Err(Error::Interrupted),
            }
        }

        Commands::Test => {
            let config = Config::load()?;
            testing::run(&root, &config, verbose).await.map(|_| ())
        }

        Commands::Verify { json } => {
            let report = verify::run(&root, json)?;
            if report.success() {
                Ok(())
            } else {
                Err(Error::ChecksFailed {
                    failed: report.total - report.passed,
                    total: report.total,
                })
            }
        }
    }
}
