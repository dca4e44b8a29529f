use thiserror::Error;

use crate::notifier_api::push_objects::PushMessage;

#[derive(Debug, Clone, Error)]
pub enum PushDeliveryError {
    #[error("The registration token is not valid: {0}")]
    InvalidToken(String),
    #[error("The push service rejected the message. Error {status}. {message}")]
    Rejected { status: u16, message: String },
    #[error("Could not reach the push service: {0}")]
    Transport(String),
}

/// A push delivery service (e.g. Firebase Cloud Messaging).
#[allow(async_fn_in_trait)]
pub trait PushDelivery {
    /// Submits the message and returns the service's delivery receipt.
    async fn send(&self, message: &PushMessage) -> Result<String, PushDeliveryError>;
}
