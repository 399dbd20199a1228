//! Project layout and configuration paths
//!
//! Artifact locations are fixed and relative to the Flutter project root.
//! The backend lives in a sibling directory one level above it.

use std::path::{Path, PathBuf};

use super::{Error, Result};

/// Name used for the configuration directory
const APP_NAME: &str = "social-auth";

/// File whose presence identifies the Flutter project root
pub const MARKER_FILE: &str = "pubspec.yaml";

pub const SOCIAL_AUTH_CONFIG: &str = "lib/config/social_auth_config.dart";
pub const GOOGLE_SERVICES: &str = "android/app/google-services.json";
pub const BACKEND_PROPERTIES: &str =
    "../Tourisme-Back-end/src/main/resources/application-social.properties";
pub const INFO_PLIST: &str = "ios/Runner/Info.plist";
pub const ENTITLEMENTS: &str = "ios/Runner/Runner.entitlements";
pub const ANDROID_STRINGS: &str = "android/app/src/main/res/values/strings.xml";

/// Ensure `dir` is a Flutter project root
///
/// Returns the path of the marker file on success.
pub fn ensure_project_root(dir: &Path) -> Result<PathBuf> {
    let marker = dir.join(MARKER_FILE);
    if marker.is_file() {
        Ok(marker)
    } else {
        Err(Error::not_project_root(MARKER_FILE, dir))
    }
}

/// Get the configuration directory path
///
/// Uses the directories crate for platform-appropriate locations:
/// - Linux: `~/.config/social-auth/`
/// - macOS: `~/Library/Application Support/social-auth/`
/// - Windows: `%APPDATA%\social-auth\`
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_project_root_requires_marker() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            ensure_project_root(dir.path()),
            Err(Error::NotProjectRoot { .. })
        ));

        std::fs::write(dir.path().join(MARKER_FILE), "name: app\n").unwrap();
        let marker = ensure_project_root(dir.path()).unwrap();
        assert_eq!(marker, dir.path().join(MARKER_FILE));
    }

    #[test]
    fn test_marker_directory_is_not_a_project_root() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join(MARKER_FILE)).unwrap();
        assert!(ensure_project_root(dir.path()).is_err());
    }

    #[test]
    fn test_backend_properties_is_outside_project() {
        assert!(Path::new(BACKEND_PROPERTIES).starts_with(".."));
    }
}
