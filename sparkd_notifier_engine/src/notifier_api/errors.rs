use thiserror::Error;

use crate::traits::{NotifierStoreError, PushDeliveryError};

#[derive(Debug, Clone, Error)]
pub enum PushDispatchError {
    #[error("Could not look up the recipient. {0}")]
    StoreError(#[from] NotifierStoreError),
    #[error("Could not deliver the push message. {0}")]
    DeliveryError(#[from] PushDeliveryError),
}
