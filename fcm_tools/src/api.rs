use std::sync::Arc;

use log::*;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client,
};

use crate::{
    config::FcmConfig,
    data_objects::{SendRequest, SendResponse},
    FcmApiError,
    FcmMessage,
};

#[derive(Clone)]
pub struct FcmApi {
    config: FcmConfig,
    client: Arc<Client>,
}

impl FcmApi {
    pub fn new(config: FcmConfig) -> Result<Self, FcmApiError> {
        let mut headers = HeaderMap::with_capacity(2);
        let bearer = format!("Bearer {}", config.access_token.reveal());
        let mut val = HeaderValue::from_str(bearer.as_str()).map_err(|e| FcmApiError::Initialization(e.to_string()))?;
        val.set_sensitive(true);
        headers.insert(AUTHORIZATION, val);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let client =
            Client::builder().default_headers(headers).build().map_err(|e| FcmApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    pub fn url(&self) -> String {
        let base = self.config.api_url.trim_end_matches('/');
        format!("{base}/v1/projects/{}/messages:send", self.config.project_id)
    }

    /// Submits a single message. FCM either accepts it and returns a receipt, or rejects it with an HTTP error
    /// status. Nothing is retried here.
    pub async fn send(&self, message: &FcmMessage) -> Result<SendResponse, FcmApiError> {
        let url = self.url();
        let body = SendRequest { validate_only: self.config.dry_run, message };
        trace!("Sending FCM message to {url}");
        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| FcmApiError::RestRequestError(e.to_string()))?;
        if response.status().is_success() {
            trace!("FCM message accepted. {}", response.status());
            response.json::<SendResponse>().await.map_err(|e| FcmApiError::JsonError(e.to_string()))
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.map_err(|e| FcmApiError::RestResponseError(e.to_string()))?;
            debug!("FCM rejected the message with status {status}");
            Err(FcmApiError::QueryError { status, message })
        }
    }
}
