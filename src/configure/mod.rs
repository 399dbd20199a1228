//! Interactive configuration of social login
//!
//! Collects provider credentials from the operator and writes every
//! configuration artifact to its fixed location under the project root.

pub mod credentials;
pub mod prompt;
pub mod templates;

use std::path::{Path, PathBuf};

use crate::common::config::Config;
use crate::common::{paths, ui, Error, Result};

use credentials::{Credentials, IosKeys};
use prompt::Prompter;
use templates::PlistPatch;

const PREAMBLE: &str = "
This command configures social authentication for the Flutter application.

Before starting, make sure you have:
1. Created your Google Cloud, Facebook and Apple projects
2. Obtained every required API key
3. Configured Keycloak

Press Enter to continue...";

/// What happened to the iOS Info.plist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoPlistOutcome {
    Created,
    Patched,
    /// URL types already present, or the file could not be understood
    NeedsManualUpdate,
}

/// Result of a configure run
#[derive(Debug, Clone)]
pub struct ConfigureSummary {
    /// Files written, in write order
    pub written: Vec<PathBuf>,
    pub info_plist: InfoPlistOutcome,
}

/// Run the configure command
pub fn run(prompter: &mut dyn Prompter, root: &Path, config: &Config) -> Result<ConfigureSummary> {
    ui::header("SOCIAL AUTHENTICATION SETUP");

    paths::ensure_project_root(root)?;

    println!("{PREAMBLE}");
    prompter.pause()?;

    let credentials = Credentials::collect(prompter, &config.project)?;
    let summary = write_artifacts(root, &credentials, config)?;

    ui::header("CONFIGURATION COMPLETE");
    println!("\nFiles written:");
    for path in &summary.written {
        println!("  - {}", path.display());
    }
    println!(
        "\nNext steps:
1. Review every generated file
2. Run the application: flutter run
3. Configure the identity providers in Keycloak
4. Check the setup: social-auth verify"
    );

    Ok(summary)
}

/// Render and write every artifact from collected credentials
pub fn write_artifacts(
    root: &Path,
    credentials: &Credentials,
    config: &Config,
) -> Result<ConfigureSummary> {
    let mut written = Vec::new();

    println!();
    written.push(write_artifact(
        root,
        paths::SOCIAL_AUTH_CONFIG,
        &templates::social_auth_config(&credentials.flutter),
        "Flutter configuration",
    )?);
    written.push(write_artifact(
        root,
        paths::GOOGLE_SERVICES,
        &templates::google_services(&credentials.google_services, &config.project.package_name)?,
        "Google Services",
    )?);
    written.push(write_artifact(
        root,
        paths::BACKEND_PROPERTIES,
        &templates::backend_properties(&credentials.backend),
        "Backend configuration",
    )?);

    let info_plist = update_info_plist(root, &credentials.ios)?;
    if info_plist != InfoPlistOutcome::NeedsManualUpdate {
        written.push(root.join(paths::INFO_PLIST));
    }

    written.push(write_artifact(
        root,
        paths::ENTITLEMENTS,
        templates::entitlements(),
        "iOS entitlements",
    )?);
    written.push(write_artifact(
        root,
        paths::ANDROID_STRINGS,
        &templates::android_strings(&credentials.android),
        "Android strings",
    )?);

    Ok(ConfigureSummary {
        written,
        info_plist,
    })
}

fn write_artifact(root: &Path, relative: &str, contents: &str, description: &str) -> Result<PathBuf> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::file_write(parent, &e))?;
    }
    std::fs::write(&path, contents).map_err(|e| Error::file_write(&path, &e))?;

    tracing::info!(path = %path.display(), bytes = contents.len(), "Wrote artifact");
    ui::success(&format!("{description}: {relative}"));
    Ok(path)
}

fn update_info_plist(root: &Path, keys: &IosKeys) -> Result<InfoPlistOutcome> {
    let path = root.join(paths::INFO_PLIST);

    if !path.exists() {
        write_artifact(root, paths::INFO_PLIST, &templates::info_plist(keys), "iOS URL schemes")?;
        return Ok(InfoPlistOutcome::Created);
    }

    let existing = std::fs::read_to_string(&path).map_err(|e| Error::file_read(&path, &e))?;
    match templates::patch_info_plist(&existing, keys) {
        PlistPatch::Patched(patched) => {
            std::fs::write(&path, &patched).map_err(|e| Error::file_write(&path, &e))?;
            tracing::info!(path = %path.display(), "Patched URL schemes into Info.plist");
            ui::success(&format!("iOS URL schemes added: {}", paths::INFO_PLIST));
            Ok(InfoPlistOutcome::Patched)
        }
        PlistPatch::AlreadyConfigured | PlistPatch::Unrecognized => {
            tracing::warn!(path = %path.display(), "Info.plist left untouched");
            ui::warning(&format!(
                "Update {} manually, adding these URL schemes:",
                paths::INFO_PLIST
            ));
            let [google, facebook] = templates::url_schemes(keys);
            println!("    Google: {google}");
            println!("    Facebook: {facebook}");
            Ok(InfoPlistOutcome::NeedsManualUpdate)
        }
    }
}
