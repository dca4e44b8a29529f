use serde::{Deserialize, Serialize};

use crate::db_types::{Notification, NotificationData};

pub const DEFAULT_ANDROID_CHANNEL_ID: &str = "sparkd_orders";
pub const DEFAULT_SOUND: &str = "default";
pub const DEFAULT_BADGE_COUNT: u32 = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryPriority {
    Normal,
    #[default]
    High,
}

/// Platform specific delivery settings. These are the same for every notification we send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryHints {
    /// Android delivery priority
    pub priority: DeliveryPriority,
    /// The Android notification channel the apps register for order updates
    pub android_channel_id: String,
    pub sound: String,
    /// Badge count shown on the iOS app icon
    pub badge: u32,
}

impl Default for DeliveryHints {
    fn default() -> Self {
        Self {
            priority: DeliveryPriority::High,
            android_channel_id: DEFAULT_ANDROID_CHANNEL_ID.to_string(),
            sound: DEFAULT_SOUND.to_string(),
            badge: DEFAULT_BADGE_COUNT,
        }
    }
}

impl DeliveryHints {
    pub fn with_android_channel<S: Into<String>>(mut self, channel_id: S) -> Self {
        self.android_channel_id = channel_id.into();
        self
    }
}

/// A provider-agnostic push message, addressed to a single device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushMessage {
    pub token: String,
    pub title: String,
    pub body: String,
    pub data: NotificationData,
    pub hints: DeliveryHints,
}

impl PushMessage {
    pub fn for_notification(token: &str, notification: &Notification, hints: DeliveryHints) -> Self {
        Self {
            token: token.to_string(),
            title: notification.title.clone(),
            body: notification.body.clone(),
            data: notification.data.clone(),
            hints,
        }
    }
}
