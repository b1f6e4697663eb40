//! UI components for the chat page.

pub mod chat_view;
pub mod diagnostics_panel;
pub mod message_bubble;
pub mod plot_view;
