//! Artifact templates
//!
//! Each renderer substitutes operator values into a fixed template, escaping
//! them for the target format.

use serde::Serialize;

use crate::common::Result;

use super::credentials::{AndroidKeys, BackendKeys, FlutterKeys, GoogleServicesKeys, IosKeys};

const GOOGLE_TOKEN_VALIDATION_URL: &str = "https://www.googleapis.com/oauth2/v1/userinfo";
const FACEBOOK_TOKEN_VALIDATION_URL: &str = "https://graph.facebook.com/me";
const APPLE_TOKEN_VALIDATION_URL: &str = "https://appleid.apple.com/auth/keys";

/// Android OAuth client type in google-services.json
const CLIENT_TYPE_ANDROID: u8 = 1;
/// Web OAuth client type in google-services.json
const CLIENT_TYPE_WEB: u8 = 3;

/// Render `lib/config/social_auth_config.dart`
pub fn social_auth_config(keys: &FlutterKeys) -> String {
    format!(
        r#"/// Social authentication configuration
class SocialAuthConfig {{
  // Google Sign-In Configuration
  static const String googleClientId = '{google_client_id}';
  static const String googleWebClientId = '{google_web_client_id}';

  // Facebook Configuration
  static const String facebookAppId = '{facebook_app_id}';
  static const String facebookClientToken = '{facebook_client_token}';

  // Apple Sign-In Configuration
  static const String appleServiceId = '{apple_service_id}';
  static const String appleTeamId = '{apple_team_id}';
  static const String appleKeyId = '{apple_key_id}';

  // Token validation URLs
  static const String googleTokenValidationUrl = '{GOOGLE_TOKEN_VALIDATION_URL}';
  static const String facebookTokenValidationUrl = '{FACEBOOK_TOKEN_VALIDATION_URL}';
  static const String appleTokenValidationUrl = '{APPLE_TOKEN_VALIDATION_URL}';

  // Scopes
  static const List<String> googleScopes = ['email', 'profile'];
  static const List<String> facebookPermissions = ['email', 'public_profile'];
  static const List<String> appleScopes = ['email', 'name'];
}}
"#,
        google_client_id = dart_escape(&keys.google_client_id),
        google_web_client_id = dart_escape(&keys.google_web_client_id),
        facebook_app_id = dart_escape(&keys.facebook_app_id),
        facebook_client_token = dart_escape(&keys.facebook_client_token),
        apple_service_id = dart_escape(&keys.apple_service_id),
        apple_team_id = dart_escape(&keys.apple_team_id),
        apple_key_id = dart_escape(&keys.apple_key_id),
    )
}

#[derive(Serialize)]
struct GoogleServices<'a> {
    project_info: ProjectInfo<'a>,
    client: Vec<Client<'a>>,
    configuration_version: &'a str,
}

#[derive(Serialize)]
struct ProjectInfo<'a> {
    project_number: &'a str,
    project_id: &'a str,
    storage_bucket: String,
}

#[derive(Serialize)]
struct Client<'a> {
    client_info: ClientInfo<'a>,
    oauth_client: Vec<OAuthClient<'a>>,
    api_key: Vec<ApiKey<'a>>,
    services: Services<'a>,
}

#[derive(Serialize)]
struct ClientInfo<'a> {
    mobilesdk_app_id: &'a str,
    android_client_info: AndroidClientInfo<'a>,
}

#[derive(Serialize)]
struct AndroidClientInfo<'a> {
    package_name: &'a str,
}

#[derive(Serialize)]
struct OAuthClient<'a> {
    client_id: &'a str,
    client_type: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    android_info: Option<AndroidInfo<'a>>,
}

#[derive(Serialize)]
struct AndroidInfo<'a> {
    package_name: &'a str,
    certificate_hash: &'a str,
}

#[derive(Serialize)]
struct ApiKey<'a> {
    current_key: &'a str,
}

#[derive(Serialize)]
struct Services<'a> {
    appinvite_service: AppInviteService<'a>,
}

#[derive(Serialize)]
struct AppInviteService<'a> {
    other_platform_oauth_client: Vec<OAuthClient<'a>>,
}

fn web_client(client_id: &str) -> OAuthClient<'_> {
    OAuthClient {
        client_id,
        client_type: CLIENT_TYPE_WEB,
        android_info: None,
    }
}

/// Render `android/app/google-services.json`
pub fn google_services(keys: &GoogleServicesKeys, package_name: &str) -> Result<String> {
    let descriptor = GoogleServices {
        project_info: ProjectInfo {
            project_number: &keys.project_number,
            project_id: &keys.project_id,
            storage_bucket: format!("{}.appspot.com", keys.project_id),
        },
        client: vec![Client {
            client_info: ClientInfo {
                mobilesdk_app_id: &keys.mobile_sdk_app_id,
                android_client_info: AndroidClientInfo { package_name },
            },
            oauth_client: vec![
                OAuthClient {
                    client_id: &keys.android_client_id,
                    client_type: CLIENT_TYPE_ANDROID,
                    android_info: Some(AndroidInfo {
                        package_name,
                        certificate_hash: &keys.certificate_hash,
                    }),
                },
                web_client(&keys.web_client_id),
            ],
            api_key: vec![ApiKey {
                current_key: &keys.api_key,
            }],
            services: Services {
                appinvite_service: AppInviteService {
                    other_platform_oauth_client: vec![web_client(&keys.web_client_id)],
                },
            },
        }],
        configuration_version: "1",
    };

    Ok(serde_json::to_string_pretty(&descriptor)?)
}

/// Render the backend `application-social.properties`
pub fn backend_properties(keys: &BackendKeys) -> String {
    format!(
        "# Social authentication configuration

# Google OAuth
google.client.id={}
google.client.secret={}

# Facebook OAuth
facebook.app.id={}
facebook.app.secret={}

# Apple OAuth
apple.team.id={}
apple.key.id={}
apple.private.key={}

# Keycloak social authentication
keycloak.social.auth.enabled=true
keycloak.social.providers=google,facebook,apple
",
        properties_escape(&keys.google_client_id),
        properties_escape(&keys.google_client_secret),
        properties_escape(&keys.facebook_app_id),
        properties_escape(&keys.facebook_app_secret),
        properties_escape(&keys.apple_team_id),
        properties_escape(&keys.apple_key_id),
        properties_escape(&keys.apple_private_key),
    )
}

/// Render `ios/Runner/Runner.entitlements`
pub fn entitlements() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>com.apple.developer.applesignin</key>
    <array>
        <string>Default</string>
    </array>
</dict>
</plist>
"#
}

/// Render `android/app/src/main/res/values/strings.xml`
pub fn android_strings(keys: &AndroidKeys) -> String {
    let app_id = xml_escape(&keys.facebook_app_id);
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<resources>
    <string name="facebook_app_id">{app_id}</string>
    <string name="fb_login_protocol_scheme">fb{app_id}</string>
</resources>
"#
    )
}

/// URL schemes the app must register, in Info.plist order
pub fn url_schemes(keys: &IosKeys) -> [String; 2] {
    [
        keys.google_reversed_client_id.clone(),
        format!("fb{}", keys.facebook_app_id),
    ]
}

fn url_types_block(keys: &IosKeys) -> String {
    let schemes: String = url_schemes(keys)
        .iter()
        .map(|scheme| format!("\t\t\t\t<string>{}</string>\n", xml_escape(scheme)))
        .collect();
    format!(
        "\t<key>CFBundleURLTypes</key>
\t<array>
\t\t<dict>
\t\t\t<key>CFBundleTypeRole</key>
\t\t\t<string>Editor</string>
\t\t\t<key>CFBundleURLSchemes</key>
\t\t\t<array>
{schemes}\t\t\t</array>
\t\t</dict>
\t</array>
"
    )
}

/// Render a fresh `ios/Runner/Info.plist` holding only the URL types
pub fn info_plist(keys: &IosKeys) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
{}</dict>
</plist>
"#,
        url_types_block(keys)
    )
}

/// Outcome of merging URL types into an existing Info.plist
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlistPatch {
    /// The new document content
    Patched(String),
    /// The plist already declares URL types and was left alone
    AlreadyConfigured,
    /// No closing top-level `</dict>` was found
    Unrecognized,
}

/// Insert the URL types block before the top-level closing `</dict>`
pub fn patch_info_plist(existing: &str, keys: &IosKeys) -> PlistPatch {
    if existing.contains("<key>CFBundleURLTypes</key>") {
        return PlistPatch::AlreadyConfigured;
    }

    let Some(plist_end) = existing.rfind("</plist>") else {
        return PlistPatch::Unrecognized;
    };
    let Some(dict_end) = existing[..plist_end].rfind("</dict>") else {
        return PlistPatch::Unrecognized;
    };

    let mut patched = String::with_capacity(existing.len() + 512);
    patched.push_str(&existing[..dict_end]);
    if !patched.ends_with('\n') {
        patched.push('\n');
    }
    patched.push_str(&url_types_block(keys));
    patched.push_str(&existing[dict_end..]);
    PlistPatch::Patched(patched)
}

fn dart_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

fn xml_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

// Values are read one line at a time, so this only guards embedded CR/LF.
fn properties_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}
