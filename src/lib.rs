//! # plotchat
//!
//! Core of the data chat client: message model, plot payload parsing, the
//! chat view state machine, and the service seam to the remote chat API.
//!
//! DESIGN
//! ======
//! State transitions are plain methods on [`state::ChatState`] so both the
//! Leptos UI (`client/`) and the terminal front end (`cli/`) drive the same
//! rules. Network access sits behind [`service::ChatService`]; the native
//! reqwest implementation lives in [`http`], the browser one in the UI crate.

pub mod api;
pub mod config;
pub mod error;
#[cfg(not(target_arch = "wasm32"))]
pub mod http;
pub mod message;
pub mod plot;
pub mod service;
pub mod session;
pub mod state;

pub use api::{ChatReply, ChatRequest};
pub use config::ChatConfig;
pub use error::ServiceError;
pub use message::{Message, Sender};
pub use plot::{PlotError, PlotPayload};
pub use service::ChatService;
pub use session::ChatSession;
pub use state::{ChatState, DiagnosticLog, PlotStatus, SettleOutcome};
