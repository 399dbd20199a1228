//! Artifact checks
//!
//! Every artifact is one check: it passes when the file exists and its
//! content satisfies the artifact's rule.

use std::path::Path;

use serde::Serialize;

use crate::common::paths;

/// Platform a check belongs to, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Group {
    Flutter,
    Android,
    Ios,
    Backend,
    Dependencies,
}

impl Group {
    pub fn title(self) -> &'static str {
        match self {
            Group::Flutter => "Flutter files",
            Group::Android => "Android configuration",
            Group::Ios => "iOS configuration",
            Group::Backend => "Backend configuration",
            Group::Dependencies => "Dependencies",
        }
    }
}

/// What a file's content must satisfy
#[derive(Debug, Clone, Copy)]
pub enum ContentRule {
    /// At least one of the substrings occurs
    AnyOf(&'static [&'static str]),
    /// Parses as JSON and every key occurs in the re-serialized document
    JsonKeys(&'static [&'static str]),
}

/// Static description of a check
#[derive(Debug, Clone, Copy)]
pub struct CheckSpec {
    pub group: Group,
    pub name: &'static str,
    pub path: &'static str,
    pub rule: ContentRule,
}

/// The full checklist
pub const CHECKS: &[CheckSpec] = &[
    CheckSpec {
        group: Group::Flutter,
        name: "Flutter API keys",
        path: paths::SOCIAL_AUTH_CONFIG,
        rule: ContentRule::AnyOf(&["googleClientId", "facebookAppId", "appleServiceId"]),
    },
    CheckSpec {
        group: Group::Android,
        name: "Google Services",
        path: paths::GOOGLE_SERVICES,
        rule: ContentRule::JsonKeys(&["project_info", "client", "oauth_client"]),
    },
    CheckSpec {
        group: Group::Android,
        name: "Facebook Android strings",
        path: paths::ANDROID_STRINGS,
        rule: ContentRule::AnyOf(&["facebook_app_id", "fb_login_protocol_scheme"]),
    },
    CheckSpec {
        group: Group::Ios,
        name: "iOS URL schemes",
        path: paths::INFO_PLIST,
        rule: ContentRule::AnyOf(&["CFBundleURLTypes", "CFBundleURLSchemes"]),
    },
    CheckSpec {
        group: Group::Ios,
        name: "Apple Sign-In entitlements",
        path: paths::ENTITLEMENTS,
        rule: ContentRule::AnyOf(&["com.apple.developer.applesignin"]),
    },
    CheckSpec {
        group: Group::Backend,
        name: "Backend API keys",
        path: paths::BACKEND_PROPERTIES,
        rule: ContentRule::AnyOf(&["google.client.id", "facebook.app.id", "apple.team.id"]),
    },
    CheckSpec {
        group: Group::Dependencies,
        name: "Flutter dependencies",
        path: paths::MARKER_FILE,
        rule: ContentRule::AnyOf(&["google_sign_in", "sign_in_with_apple", "flutter_facebook_auth"]),
    },
];

/// Content verdict for one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ContentStatus {
    Valid,
    /// No expected substring, or the listed JSON keys are absent
    Incomplete { missing: Vec<String> },
    FileMissing,
    ReadError { error: String },
    InvalidJson { error: String },
}

/// Outcome of one check
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub group: Group,
    pub name: &'static str,
    pub path: &'static str,
    pub exists: bool,
    pub content: ContentStatus,
    pub passed: bool,
}

/// Run one check against the project at `root`
pub fn run_check(root: &Path, spec: &CheckSpec) -> CheckResult {
    let path = root.join(spec.path);
    let exists = path.is_file();

    let content = if exists {
        match std::fs::read_to_string(&path) {
            Ok(text) => evaluate(&text, spec.rule),
            Err(e) => ContentStatus::ReadError {
                error: e.to_string(),
            },
        }
    } else {
        ContentStatus::FileMissing
    };

    let passed = exists && content == ContentStatus::Valid;
    tracing::debug!(check = spec.name, path = %path.display(), passed, "Check finished");

    CheckResult {
        group: spec.group,
        name: spec.name,
        path: spec.path,
        exists,
        content,
        passed,
    }
}

/// Apply a content rule to file text
pub fn evaluate(text: &str, rule: ContentRule) -> ContentStatus {
    match rule {
        ContentRule::AnyOf(needles) => {
            if needles.iter().any(|n| text.contains(n)) {
                ContentStatus::Valid
            } else {
                ContentStatus::Incomplete {
                    missing: needles.iter().map(|n| (*n).to_string()).collect(),
                }
            }
        }
        ContentRule::JsonKeys(keys) => {
            let value: serde_json::Value = match serde_json::from_str(text) {
                Ok(value) => value,
                Err(e) => {
                    return ContentStatus::InvalidJson {
                        error: e.to_string(),
                    }
                }
            };
            let flattened = value.to_string();
            let missing: Vec<String> = keys
                .iter()
                .filter(|k| !flattened.contains(*k))
                .map(|k| (*k).to_string())
                .collect();
            if missing.is_empty() {
                ContentStatus::Valid
            } else {
                ContentStatus::Incomplete { missing }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const JSON_RULE: ContentRule = ContentRule::JsonKeys(&["project_info", "oauth_client"]);

    #[test]
    fn test_any_of_needs_one_match() {
        let rule = ContentRule::AnyOf(&["alpha", "beta"]);
        assert_eq!(evaluate("xx beta xx", rule), ContentStatus::Valid);
        assert!(matches!(evaluate("gamma", rule), ContentStatus::Incomplete { .. }));
    }

    #[test]
    fn test_json_keys_reports_missing() {
        let status = evaluate(r#"{"project_info": {}}"#, JSON_RULE);
        assert_eq!(
            status,
            ContentStatus::Incomplete {
                missing: vec!["oauth_client".to_string()]
            }
        );
    }

    #[test]
    fn test_json_keys_found_at_any_depth() {
        let text = r#"{"project_info": {}, "client": [{"oauth_client": []}]}"#;
        assert_eq!(evaluate(text, JSON_RULE), ContentStatus::Valid);
    }

    #[test]
    fn test_invalid_json_fails() {
        assert!(matches!(
            evaluate("project_info oauth_client", JSON_RULE),
            ContentStatus::InvalidJson { .. }
        ));
    }

    #[test]
    fn test_missing_file_fails_check() {
        let dir = tempdir().unwrap();
        let result = run_check(dir.path(), &CHECKS[0]);
        assert!(!result.exists);
        assert!(!result.passed);
        assert_eq!(result.content, ContentStatus::FileMissing);
    }

    #[test]
    fn test_present_file_with_content_passes() {
        let dir = tempdir().unwrap();
        let spec = &CHECKS[4];
        let path = dir.path().join(spec.path);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "<key>com.apple.developer.applesignin</key>").unwrap();

        let result = run_check(dir.path(), spec);
        assert!(result.passed);
    }

    #[test]
    fn test_present_file_without_content_fails() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(paths::MARKER_FILE), "name: app\n").unwrap();

        let result = run_check(dir.path(), &CHECKS[6]);
        assert!(result.exists);
        assert!(!result.passed);
    }
}
