//! Configuration verification
//!
//! Checks that every artifact written by `configure` is present and
//! populated, and that the Flutter manifest declares the sign-in plugins.

pub mod checks;

use std::path::Path;

use serde::Serialize;

use crate::common::{paths, ui, Result};

use checks::{CheckResult, ContentStatus, Group, CHECKS};

/// Outcome of a verify run
#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    pub passed: usize,
    pub total: usize,
    pub checks: Vec<CheckResult>,
}

impl VerifyReport {
    pub fn success(&self) -> bool {
        self.passed == self.total
    }
}

/// Run every check against the project at `root` without printing
pub fn check_project(root: &Path) -> VerifyReport {
    let checks: Vec<CheckResult> = CHECKS.iter().map(|spec| checks::run_check(root, spec)).collect();
    let passed = checks.iter().filter(|c| c.passed).count();
    VerifyReport {
        passed,
        total: checks.len(),
        checks,
    }
}

/// Run the verify command
pub fn run(root: &Path, json: bool) -> Result<VerifyReport> {
    paths::ensure_project_root(root)?;

    let report = check_project(root);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(report)
}

fn print_report(report: &VerifyReport) {
    ui::header("SOCIAL AUTHENTICATION CONFIGURATION CHECK");

    let mut current: Option<Group> = None;
    let mut step = 0;
    for check in &report.checks {
        if current != Some(check.group) {
            current = Some(check.group);
            step += 1;
            ui::step(step, check.group.title());
        }
        print_check(check);
    }

    step += 1;
    ui::step(step, "Summary");
    println!("\nChecks passed: {}/{}", report.passed, report.total);

    if report.success() {
        ui::header("CONFIGURATION COMPLETE");
        println!(
            "
Every check passed. Social authentication is ready.

Next steps:
1. Run: flutter pub get
2. Run the application: flutter run
3. Try each identity provider with a test account"
        );
    } else {
        ui::header("CONFIGURATION INCOMPLETE");
        println!(
            "
{} check(s) failed. Make sure that:
1. Every configuration file exists
2. The API keys are filled in
3. The sign-in plugins are listed in pubspec.yaml

To generate the files, run: social-auth configure",
            report.total - report.passed
        );
    }
}

fn print_check(check: &CheckResult) {
    // The manifest is guaranteed to exist, only its content is interesting.
    if check.group != Group::Dependencies {
        if check.exists {
            ui::success(&format!("{}: {}", check.name, check.path));
        } else {
            ui::failure(&format!("{}: {} (missing)", check.name, check.path));
            return;
        }
    }

    match &check.content {
        ContentStatus::Valid => ui::success(&format!("{}: configuration found", check.name)),
        ContentStatus::Incomplete { missing } => {
            ui::warning(&format!("{}: incomplete, expected {}", check.name, missing.join(", ")));
        }
        ContentStatus::FileMissing => ui::failure(&format!("{}: file not found", check.name)),
        ContentStatus::ReadError { error } => {
            ui::failure(&format!("{}: read error - {error}", check.name));
        }
        ContentStatus::InvalidJson { error } => {
            ui::failure(&format!("{}: invalid JSON - {error}", check.name));
        }
    }
}
