//! Server configuration
//!
//! Everything is read from `SPN_*` environment variables. Invalid values are logged and replaced with the defaults
//! below, so the server always starts.
use std::env;

use chrono::Duration;
use fcm_tools::FcmConfig;
use log::*;
use sparkd_common::parse_env_or_default;
use sparkd_notifier_engine::{
    notifier_api::{cleanup_api::DEFAULT_NOTIFICATION_RETENTION, push_objects::DEFAULT_ANDROID_CHANNEL_ID},
    sqlite::db::db_url,
    DeliveryHints,
};

const DEFAULT_SPN_HOST: &str = "127.0.0.1";
const DEFAULT_SPN_PORT: u16 = 8370;
const DEFAULT_CLEANUP_INTERVAL: Duration = Duration::hours(24);
pub const DEFAULT_EVENT_BUFFER_SIZE: usize = 25;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Capacity of each event channel. Publishers wait when a channel is full.
    pub event_buffer_size: usize,
    /// How often the cleanup job runs
    pub cleanup_interval: Duration,
    /// Read notifications older than this are deleted by the cleanup job
    pub notification_retention: Duration,
    pub fcm_config: FcmConfig,
    /// The Android notification channel that the apps register for order updates
    pub android_channel_id: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SPN_HOST.to_string(),
            port: DEFAULT_SPN_PORT,
            database_url: String::default(),
            event_buffer_size: DEFAULT_EVENT_BUFFER_SIZE,
            cleanup_interval: DEFAULT_CLEANUP_INTERVAL,
            notification_retention: DEFAULT_NOTIFICATION_RETENTION,
            fcm_config: FcmConfig::default(),
            android_channel_id: DEFAULT_ANDROID_CHANNEL_ID.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("SPN_HOST").ok().unwrap_or_else(|| DEFAULT_SPN_HOST.into());
        let port = parse_env_or_default("SPN_PORT", DEFAULT_SPN_PORT);
        let database_url = db_url();
        let event_buffer_size = match parse_env_or_default("SPN_EVENT_BUFFER_SIZE", DEFAULT_EVENT_BUFFER_SIZE) {
            0 => {
                warn!("🪛️ SPN_EVENT_BUFFER_SIZE must be at least 1. Using {DEFAULT_EVENT_BUFFER_SIZE} instead.");
                DEFAULT_EVENT_BUFFER_SIZE
            },
            n => n,
        };
        let cleanup_interval = positive_duration(
            "SPN_CLEANUP_INTERVAL_HOURS",
            DEFAULT_CLEANUP_INTERVAL.num_hours(),
            Duration::try_hours,
            DEFAULT_CLEANUP_INTERVAL,
        );
        let notification_retention = positive_duration(
            "SPN_NOTIFICATION_RETENTION_DAYS",
            DEFAULT_NOTIFICATION_RETENTION.num_days(),
            Duration::try_days,
            DEFAULT_NOTIFICATION_RETENTION,
        );
        let fcm_config = FcmConfig::new_from_env_or_default();
        let android_channel_id = env::var("SPN_FCM_ANDROID_CHANNEL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ANDROID_CHANNEL_ID.to_string());
        Self {
            host,
            port,
            database_url,
            event_buffer_size,
            cleanup_interval,
            notification_retention,
            fcm_config,
            android_channel_id,
        }
    }

    /// The delivery settings attached to every push message.
    pub fn delivery_hints(&self) -> DeliveryHints {
        DeliveryHints::default().with_android_channel(self.android_channel_id.as_str())
    }
}

/// Reads a count of `unit`s from `name`. Values that are not positive, or too large to represent, give `fallback`.
fn positive_duration(name: &str, default: i64, unit: fn(i64) -> Option<Duration>, fallback: Duration) -> Duration {
    let value = parse_env_or_default(name, default);
    match unit(value) {
        Some(duration) if duration > Duration::zero() => duration,
        Some(_) => {
            warn!("🪛️ {name} must be greater than zero. Using the default, {default}, instead.");
            fallback
        },
        None => {
            warn!("🪛️ {name} is too large. Using the default, {default}, instead.");
            fallback
        },
    }
}
