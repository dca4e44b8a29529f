use log::*;
use sparkd_common::{parse_boolean_flag, Secret};

pub const DEFAULT_FCM_API_URL: &str = "https://fcm.googleapis.com";

#[derive(Debug, Clone, Default)]
pub struct FcmConfig {
    /// The Firebase project that owns the registration tokens, e.g. "sparkd-prod"
    pub project_id: String,
    /// An OAuth2 bearer token with the `firebase.messaging` scope. Minting and refreshing it happens elsewhere.
    pub access_token: Secret<String>,
    /// Base URL of the FCM API. Only overridden in tests.
    pub api_url: String,
    /// When true, messages are validated by FCM but never delivered to devices.
    pub dry_run: bool,
}

impl FcmConfig {
    pub fn new_from_env_or_default() -> Self {
        let project_id = std::env::var("SPN_FCM_PROJECT_ID").unwrap_or_else(|_| {
            warn!("SPN_FCM_PROJECT_ID not set, using (probably useless) default");
            "sparkd-local".to_string()
        });
        let access_token = Secret::new(std::env::var("SPN_FCM_ACCESS_TOKEN").unwrap_or_else(|_| {
            warn!("SPN_FCM_ACCESS_TOKEN not set. Push delivery will be rejected by FCM.");
            String::default()
        }));
        let api_url = std::env::var("SPN_FCM_API_URL").unwrap_or_else(|_| DEFAULT_FCM_API_URL.to_string());
        let dry_run = parse_boolean_flag(std::env::var("SPN_FCM_DRY_RUN").ok(), false);
        if dry_run {
            info!("SPN_FCM_DRY_RUN is set. Messages will be validated, but not delivered.");
        }
        Self { project_id, access_token, api_url, dry_run }
    }
}
