//! Native [`ChatService`] over reqwest.

use std::time::Duration;

use crate::api::{ChatReply, ChatRequest};
use crate::config::ChatConfig;
use crate::error::ServiceError;
use crate::service::ChatService;

pub struct HttpChatService {
    http: reqwest::Client,
    config: ChatConfig,
}

impl HttpChatService {
    /// # Errors
    ///
    /// Returns [`ServiceError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: ChatConfig) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }
}

#[async_trait::async_trait(?Send)]
impl ChatService for HttpChatService {
    async fn probe(&self) -> Result<u16, ServiceError> {
        let response = self
            .http
            .get(self.config.probe_url())
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::from_status(status.as_u16(), &body));
        }
        Ok(status.as_u16())
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ServiceError> {
        let response = self
            .http
            .post(self.config.chat_url())
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;
        if !status.is_success() {
            return Err(ServiceError::from_status(status.as_u16(), &text));
        }
        serde_json::from_str(&text).map_err(|e| ServiceError::Decode(e.to_string()))
    }
}

fn transport_error(err: reqwest::Error) -> ServiceError {
    if err.is_timeout() {
        return ServiceError::Transport("request timed out".to_owned());
    }
    ServiceError::Transport(err.to_string())
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
