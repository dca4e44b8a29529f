mod api;
mod config;
mod error;

pub mod data_objects;

pub use api::FcmApi;
pub use config::FcmConfig;
pub use data_objects::{
    AndroidConfig,
    AndroidMessagePriority,
    AndroidNotification,
    ApnsConfig,
    ApnsPayload,
    Aps,
    FcmMessage,
    FcmNotification,
    SendResponse,
};
pub use error::FcmApiError;
