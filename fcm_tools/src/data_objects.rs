//! Request and response bodies for the `messages:send` endpoint.
//!
//! Only the subset of the FCM message resource that the notifier uses is modelled. Optional fields are skipped when
//! serializing so that FCM applies its own defaults.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FcmMessage {
    /// The registration token of the destination device
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<FcmNotification>,
    /// Arbitrary key/value pairs handed to the client app. FCM only accepts string values.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub data: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android: Option<AndroidConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apns: Option<ApnsConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FcmNotification {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AndroidMessagePriority {
    #[default]
    Normal,
    High,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AndroidConfig {
    pub priority: AndroidMessagePriority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<AndroidNotification>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AndroidNotification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApnsConfig {
    pub payload: ApnsPayload,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApnsPayload {
    pub aps: Aps,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct SendRequest<'a> {
    pub validate_only: bool,
    pub message: &'a FcmMessage,
}

/// The delivery receipt. `name` has the form `projects/{project_id}/messages/{message_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendResponse {
    pub name: String,
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn message_serializes_to_fcm_layout() {
        let message = FcmMessage {
            token: "device-token".into(),
            notification: Some(FcmNotification { title: "Order Cancelled".into(), body: "Bye".into() }),
            data: BTreeMap::from([("type".to_string(), "order_cancelled".to_string())]),
            android: Some(AndroidConfig {
                priority: AndroidMessagePriority::High,
                notification: Some(AndroidNotification {
                    channel_id: Some("sparkd_orders".into()),
                    sound: Some("default".into()),
                }),
            }),
            apns: Some(ApnsConfig {
                payload: ApnsPayload { aps: Aps { sound: Some("default".into()), badge: Some(1) } },
            }),
        };
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(
            value,
            json!({
                "token": "device-token",
                "notification": { "title": "Order Cancelled", "body": "Bye" },
                "data": { "type": "order_cancelled" },
                "android": { "priority": "high", "notification": { "channel_id": "sparkd_orders", "sound": "default" } },
                "apns": { "payload": { "aps": { "sound": "default", "badge": 1 } } }
            })
        );
    }

    #[test]
    fn empty_optional_fields_are_skipped() {
        let message = FcmMessage { token: "t".into(), ..Default::default() };
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value, json!({ "token": "t" }));
    }
}
