//! Network access to the chat service.

pub mod api;
