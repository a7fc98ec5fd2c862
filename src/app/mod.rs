//! Application layer.
//!
//! # Structure
//!
//! - `metrics.rs` - pure text-metric computation
//! - `clipboard.rs` - clipboard service trait and the poll state machine
//! - `controller.rs` - the editor controller owning the text buffer
//! - `state.rs` - widget-side coordinator driven by the message loop
//! - `error.rs`, `messages.rs`, `buffer_utils.rs` - supporting pieces

pub mod buffer_utils;
pub mod clipboard;
pub mod controller;
pub mod error;
pub mod messages;
pub mod metrics;
pub mod state;

// Re-exports for convenient external access
pub use buffer_utils::buffer_text_no_leak;
pub use clipboard::{ClipboardPoller, ClipboardRead, PollHandle, SystemClipboard};
pub use controller::{EditorController, TickOutcome};
pub use error::AppError;
pub use messages::Message;
pub use metrics::Metrics;
pub use state::AppState;
