//! The fixed step list

/// One external invocation in the test run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestStep {
    /// Label shown to the operator
    pub label: String,
    /// Shell command line
    pub command: String,
    /// Whether a failure aborts the run
    pub fatal: bool,
}

impl TestStep {
    fn setup(label: &str, command: String) -> Self {
        Self {
            label: label.to_string(),
            command,
            fatal: true,
        }
    }

    fn suite(label: &str, command: String) -> Self {
        Self {
            label: label.to_string(),
            command,
            fatal: false,
        }
    }
}

/// Build the step list for the given tool
pub fn social_auth_steps(tool: &str) -> Vec<TestStep> {
    vec![
        TestStep::setup("Checking build tool", format!("{tool} --version")),
        TestStep::setup("Installing dependencies", format!("{tool} pub get")),
        TestStep::suite(
            "Entity tests",
            format!("{tool} test test/social_auth_simple_test.dart"),
        ),
        TestStep::suite(
            "Model tests",
            format!("{tool} test test/social_auth_models_test.dart"),
        ),
        TestStep::suite(
            "Use case tests",
            format!("{tool} test test/social_auth_usecases_test.dart"),
        ),
        TestStep::suite(
            "All social auth tests",
            format!("{tool} test test/social_auth_*_test.dart"),
        ),
    ]
}
