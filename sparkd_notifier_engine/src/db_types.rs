use std::{collections::BTreeMap, fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use thiserror::Error;

/// Routing metadata attached to a notification. Push services only carry string values, so that is all we store.
pub type NotificationData = BTreeMap<String, String>;

//--------------------------------------        OrderId        ---------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, Hash, Type, Serialize, Deserialize)]
#[sqlx(transparent)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl FromStr for OrderId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<String> for OrderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl OrderId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

//--------------------------------------   OrderStatusType     ---------------------------------------------------------
/// The order statuses that the notifier reacts to. Order management may use other statuses too; those parse as
/// errors and are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatusType {
    /// The Spark accepted the order and the SME now needs to pay.
    PendingPayment,
    /// Payment arrived and the Spark can start working.
    InProgress,
    /// The Spark delivered the work and the SME needs to review it.
    Delivered,
    /// The SME accepted the delivered work.
    Completed,
    /// Either party cancelled the order.
    Cancelled,
}

impl OrderStatusType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatusType::PendingPayment => "pendingPayment",
            OrderStatusType::InProgress => "inProgress",
            OrderStatusType::Delivered => "delivered",
            OrderStatusType::Completed => "completed",
            OrderStatusType::Cancelled => "cancelled",
        }
    }
}

impl Display for OrderStatusType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error)]
#[error("Unrecognised order status: {0}")]
pub struct ConversionError(String);

impl FromStr for OrderStatusType {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pendingPayment" => Ok(Self::PendingPayment),
            "inProgress" => Ok(Self::InProgress),
            "delivered" => Ok(Self::Delivered),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            s => Err(ConversionError(s.to_string())),
        }
    }
}

//--------------------------------------        Order       ---------------------------------------------------------
/// A snapshot of a marketplace order. Orders are owned by the order management system; the notifier only compares
/// snapshots.
///
/// The JSON field names follow the order documents written by the mobile apps.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub status: String,
    /// The buyer (small or medium enterprise) on the order
    #[serde(rename = "smeID", default)]
    pub sme_id: String,
    /// The freelancer working on the order
    #[serde(rename = "sparkID", default)]
    pub spark_id: String,
    #[serde(rename = "gigTitle", default)]
    pub gig_title: String,
}

impl Order {
    pub fn new<S: Into<String>>(status: S, sme_id: S, spark_id: S, gig_title: S) -> Self {
        Self { status: status.into(), sme_id: sme_id.into(), spark_id: spark_id.into(), gig_title: gig_title.into() }
    }

    /// The recognised status of the order, if it is one the notifier cares about.
    pub fn status_type(&self) -> Option<OrderStatusType> {
        self.status.parse().ok()
    }

    pub fn with_status<S: Into<String>>(mut self, status: S) -> Self {
        self.status = status.into();
        self
    }
}

//--------------------------------------        User       ---------------------------------------------------------
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(rename = "fcmToken", default)]
    pub fcm_token: Option<String>,
}

impl User {
    /// The device registration token, if the user has registered one. Blank tokens count as missing.
    pub fn push_token(&self) -> Option<&str> {
        self.fcm_token.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }
}

//--------------------------------------    Notification    ---------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub data: NotificationData,
    pub read: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Notification #{} for {}: {}", self.id, self.user_id, self.title)
    }
}

//--------------------------------------  NewNotification   ---------------------------------------------------------
/// A notification that has not been written yet. The store assigns the id and creation time, and marks it unread.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNotification {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub data: NotificationData,
}

impl NewNotification {
    pub fn new<S: Into<String>>(user_id: S, title: S, body: S) -> Self {
        Self { user_id: user_id.into(), title: title.into(), body: body.into(), data: NotificationData::new() }
    }

    pub fn with_data<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }
}
