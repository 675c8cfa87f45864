//! Boundary between a browser UI and a vector session.
//!
//! The UI sends [`messages::UiToSession`] values as JSON; [`dispatch`] applies
//! them to a [`SessionState`] and answers with a full re-render.

pub mod dispatch;
pub mod figure;
pub mod messages;
pub mod session_state;

#[cfg(target_arch = "wasm32")]
pub mod wasm_api;

pub use dispatch::dispatch;
pub use session_state::{BridgeError, SessionState};
