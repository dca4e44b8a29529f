use thiserror::Error;

#[derive(Debug, Error)]
pub enum FcmApiError {
    #[error("Could not initialize client: {0}")]
    Initialization(String),
    #[error("Invalid REST request: {0}")]
    RestRequestError(String),
    #[error("Invalid REST response: {0}")]
    RestResponseError(String),
    #[error("Could not deserialize JSON: {0}")]
    JsonError(String),
    #[error("Message was rejected. Error {status}. {message}")]
    QueryError { status: u16, message: String },
}

impl FcmApiError {
    /// FCM answers `404 UNREGISTERED` (or `400 INVALID_ARGUMENT` mentioning the token) when a registration token is no
    /// longer valid.
    pub fn is_invalid_token(&self) -> bool {
        match self {
            Self::QueryError { status: 404, .. } => true,
            Self::QueryError { status: 400, message } => message.contains("registration token"),
            _ => false,
        }
    }
}
