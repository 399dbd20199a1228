//! Credential collection
//!
//! Values are grouped by the artifact they end up in and asked in a fixed
//! order. Some providers' ids are asked more than once because each platform
//! console issues its own.

use crate::common::config::ProjectConfig;
use crate::common::{ui, Result};

use super::prompt::Prompter;

/// Keys compiled into the Flutter app
#[derive(Debug, Clone, Default)]
pub struct FlutterKeys {
    pub google_client_id: String,
    pub google_web_client_id: String,
    pub facebook_app_id: String,
    pub facebook_client_token: String,
    pub apple_service_id: String,
    pub apple_team_id: String,
    pub apple_key_id: String,
}

/// Firebase/Google project descriptor values
#[derive(Debug, Clone, Default)]
pub struct GoogleServicesKeys {
    pub project_number: String,
    pub project_id: String,
    pub mobile_sdk_app_id: String,
    pub android_client_id: String,
    pub web_client_id: String,
    pub api_key: String,
    pub certificate_hash: String,
}

/// OAuth secrets for the backend
#[derive(Debug, Clone, Default)]
pub struct BackendKeys {
    pub google_client_id: String,
    pub google_client_secret: String,
    pub facebook_app_id: String,
    pub facebook_app_secret: String,
    pub apple_team_id: String,
    pub apple_key_id: String,
    pub apple_private_key: String,
}

/// iOS URL scheme values
#[derive(Debug, Clone, Default)]
pub struct IosKeys {
    pub google_reversed_client_id: String,
    pub facebook_app_id: String,
}

/// Android resource values
#[derive(Debug, Clone, Default)]
pub struct AndroidKeys {
    pub facebook_app_id: String,
}

/// Everything the operator enters during one configure run
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub flutter: FlutterKeys,
    pub google_services: GoogleServicesKeys,
    pub backend: BackendKeys,
    pub ios: IosKeys,
    pub android: AndroidKeys,
}

impl Credentials {
    /// Prompt for every value, section by section
    pub fn collect(prompter: &mut dyn Prompter, project: &ProjectConfig) -> Result<Self> {
        ui::step(1, "Flutter API keys");
        let flutter = FlutterKeys {
            google_client_id: prompter.ask("Google Client ID (Android)", None)?,
            google_web_client_id: prompter.ask("Google Web Client ID", None)?,
            facebook_app_id: prompter.ask("Facebook App ID", None)?,
            facebook_client_token: prompter.ask("Facebook Client Token", None)?,
            apple_service_id: prompter
                .ask("Apple Service ID", Some(project.apple_service_id.as_str()))?,
            apple_team_id: prompter.ask("Apple Team ID", None)?,
            apple_key_id: prompter.ask("Apple Key ID", None)?,
        };

        ui::step(2, "Google Services");
        let google_services = GoogleServicesKeys {
            project_number: prompter.ask("Google Project Number", None)?,
            project_id: prompter.ask("Google Project ID", None)?,
            mobile_sdk_app_id: prompter.ask("Google Mobile SDK App ID", None)?,
            android_client_id: prompter.ask("Google Android Client ID", None)?,
            web_client_id: prompter.ask("Google Web Client ID", None)?,
            api_key: prompter.ask("Google API Key", None)?,
            certificate_hash: prompter.ask("SHA-1 Certificate Hash", None)?,
        };

        ui::step(3, "Backend");
        let backend = BackendKeys {
            google_client_id: prompter.ask("Google Client ID (Backend)", None)?,
            google_client_secret: prompter.ask("Google Client Secret", None)?,
            facebook_app_id: prompter.ask("Facebook App ID (Backend)", None)?,
            facebook_app_secret: prompter.ask("Facebook App Secret", None)?,
            apple_team_id: prompter.ask("Apple Team ID (Backend)", None)?,
            apple_key_id: prompter.ask("Apple Key ID (Backend)", None)?,
            apple_private_key: prompter.ask("Apple Private Key (Backend)", None)?,
        };

        ui::step(4, "iOS URL schemes");
        let ios = IosKeys {
            google_reversed_client_id: prompter.ask("Google Reversed Client ID", None)?,
            facebook_app_id: prompter.ask("Facebook App ID (iOS)", None)?,
        };

        ui::step(5, "iOS entitlements");
        println!("Nothing to enter, Sign in with Apple is enabled by default.");

        ui::step(6, "Android strings");
        let android = AndroidKeys {
            facebook_app_id: prompter.ask("Facebook App ID (Android)", None)?,
        };

        Ok(Self {
            flutter,
            google_services,
            backend,
            ios,
            android,
        })
    }
}

/// Number of prompts `Credentials::collect` issues
#[cfg(test)]
pub(crate) const PROMPT_COUNT: usize = 24;
