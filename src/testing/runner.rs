//! Step sequencing
//!
//! Fatal steps stop the run at the first failure; suite failures are
//! recorded as warnings and the run moves on.

use colored::Colorize;

use crate::common::{ui, Error, Result};

use super::executor::{CommandExecutor, CommandOutput};
use super::steps::TestStep;

/// Result of one executed step
#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub label: String,
    pub fatal: bool,
    pub passed: bool,
}

/// Result of a test run
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub steps: Vec<StepOutcome>,
}

impl RunReport {
    pub fn suites_total(&self) -> usize {
        self.steps.iter().filter(|s| !s.fatal).count()
    }

    pub fn suites_passed(&self) -> usize {
        self.steps.iter().filter(|s| !s.fatal && s.passed).count()
    }

    pub fn all_passed(&self) -> bool {
        self.steps.iter().all(|s| s.passed)
    }
}

/// Execute steps in order
///
/// Returns `Error::FatalStep` as soon as a fatal step fails; no later step
/// is attempted.
pub async fn run_steps(executor: &dyn CommandExecutor, steps: &[TestStep]) -> Result<RunReport> {
    let mut report = RunReport::default();
    let mut suite_number = 0;

    for step in steps {
        if !step.fatal {
            suite_number += 1;
            ui::step(suite_number, &step.label);
        }

        let passed = run_step(executor, step).await;
        tracing::info!(step = %step.label, passed, "Step finished");

        if !passed && step.fatal {
            return Err(Error::FatalStep {
                step: step.label.clone(),
            });
        }
        if !passed {
            ui::warning(&format!("{}: some tests failed", step.label));
        }

        report.steps.push(StepOutcome {
            label: step.label.clone(),
            fatal: step.fatal,
            passed,
        });
    }

    Ok(report)
}

async fn run_step(executor: &dyn CommandExecutor, step: &TestStep) -> bool {
    println!("{} {}", "$".dimmed(), step.command.dimmed());

    match executor.execute(&step.command).await {
        Ok(output) if output.success => {
            ui::success(&format!("{} - passed", step.label));
            if !output.stdout.trim().is_empty() {
                println!("{}", output.stdout.trim_end());
            }
            true
        }
        Ok(output) => {
            ui::failure(&failure_message(&step.label, &output));
            if !output.stderr.trim().is_empty() {
                println!("{}", output.stderr.trim_end());
            }
            false
        }
        Err(e) => {
            ui::failure(&format!("{} - {}", step.label, e));
            false
        }
    }
}

fn failure_message(label: &str, output: &CommandOutput) -> String {
    match output.code {
        Some(code) => format!("{label} - failed (exit code {code})"),
        None => format!("{label} - terminated by signal"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::steps::social_auth_steps;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every command and fails those containing a marker
    struct FakeExecutor {
        fail_when: Option<&'static str>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeExecutor {
        fn new(fail_when: Option<&'static str>) -> Self {
            Self {
                fail_when,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CommandExecutor for FakeExecutor {
        async fn execute(&self, command: &str) -> Result<CommandOutput> {
            self.calls.lock().unwrap().push(command.to_string());
            let failed = self.fail_when.is_some_and(|m| command.contains(m));
            Ok(CommandOutput {
                success: !failed,
                code: Some(i32::from(failed)),
                ..CommandOutput::default()
            })
        }
    }

    #[tokio::test]
    async fn test_all_steps_pass() {
        let executor = FakeExecutor::new(None);
        let report = run_steps(&executor, &social_auth_steps("flutter")).await.unwrap();

        assert_eq!(executor.calls().len(), 6);
        assert!(report.all_passed());
        assert_eq!(report.suites_passed(), 4);
        assert_eq!(report.suites_total(), 4);
    }

    #[tokio::test]
    async fn test_failed_install_stops_before_suites() {
        let executor = FakeExecutor::new(Some("pub get"));
        let result = run_steps(&executor, &social_auth_steps("flutter")).await;

        assert!(matches!(result, Err(Error::FatalStep { .. })));
        assert_eq!(
            executor.calls(),
            vec!["flutter --version".to_string(), "flutter pub get".to_string()]
        );
    }

    #[tokio::test]
    async fn test_failed_tool_check_stops_immediately() {
        let executor = FakeExecutor::new(Some("--version"));
        let result = run_steps(&executor, &social_auth_steps("flutter")).await;

        assert!(result.is_err());
        assert_eq!(executor.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_suite_does_not_stop_run() {
        let executor = FakeExecutor::new(Some("models"));
        let report = run_steps(&executor, &social_auth_steps("flutter")).await.unwrap();

        assert_eq!(executor.calls().len(), 6);
        assert!(!report.all_passed());
        assert_eq!(report.suites_passed(), 3);
    }

    #[test]
    fn test_failure_message_reports_exit_code() {
        let output = CommandOutput {
            code: Some(3),
            ..CommandOutput::default()
        };
        assert_eq!(
            failure_message("Model tests", &output),
            "Model tests - failed (exit code 3)"
        );
    }

    #[test]
    fn test_failure_message_without_code_means_signal() {
        let output = CommandOutput::default();
        assert_eq!(
            failure_message("Model tests", &output),
            "Model tests - terminated by signal"
        );
    }
}
