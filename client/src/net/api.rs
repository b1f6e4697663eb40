//! Browser [`ChatService`] over `gloo-net`.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Host builds: stubs returning `ServiceError::Unavailable`, since these
//! calls are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as a `ServiceError` so the chat view can turn
//! it into a diagnostic line or an error bubble instead of panicking.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use plotchat::config::DEFAULT_API_URL;
use plotchat::{ChatConfig, ChatReply, ChatRequest, ChatService, ServiceError};

/// Endpoint baked in at build time through `PLOTCHAT_API_URL`.
pub fn browser_config() -> ChatConfig {
    config_for(option_env!("PLOTCHAT_API_URL"))
}

fn config_for(raw: Option<&str>) -> ChatConfig {
    let raw = raw.unwrap_or(DEFAULT_API_URL);
    ChatConfig::new(raw).unwrap_or_else(|err| {
        log::error!("{err}; falling back to {DEFAULT_API_URL}");
        ChatConfig::default()
    })
}

#[derive(Debug, Clone)]
pub struct GlooChatService {
    config: ChatConfig,
}

impl GlooChatService {
    pub fn new(config: ChatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }
}

#[async_trait::async_trait(?Send)]
impl ChatService for GlooChatService {
    async fn probe(&self) -> Result<u16, ServiceError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.config.probe_url())
                .send()
                .await
                .map_err(|e| ServiceError::Transport(e.to_string()))?;
            if !resp.ok() {
                let body = resp.text().await.unwrap_or_default();
                return Err(ServiceError::from_status(resp.status(), &body));
            }
            Ok(resp.status())
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ServiceError::Unavailable)
        }
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ServiceError> {
        #[cfg(feature = "csr")]
        {
            log::debug!("POST {}", self.config.chat_url());
            let resp = gloo_net::http::Request::post(&self.config.chat_url())
                .json(request)
                .map_err(|e| ServiceError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ServiceError::Transport(e.to_string()))?;
            let text = resp.text().await.map_err(|e| ServiceError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ServiceError::from_status(resp.status(), &text));
            }
            serde_json::from_str(&text).map_err(|e| ServiceError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ServiceError::Unavailable)
        }
    }
}
