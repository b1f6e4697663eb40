//! Seam between the chat view and the remote chat service.

use crate::api::{ChatReply, ChatRequest};
use crate::error::ServiceError;

/// The two calls the chat view makes. Enables mocking in tests.
///
/// Futures are not required to be `Send`: the browser runtime is
/// single-threaded and its fetch futures are `!Send`.
#[async_trait::async_trait(?Send)]
pub trait ChatService {
    /// `GET /`. Returns the HTTP status on a 2xx response.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] on a non-2xx status or transport failure.
    async fn probe(&self) -> Result<u16, ServiceError>;

    /// `POST /api/chat`.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] on a non-2xx status, transport failure, or
    /// a body that does not decode as a [`ChatReply`].
    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ServiceError>;
}
