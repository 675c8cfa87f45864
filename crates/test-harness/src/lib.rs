//! Test harness for scripted vector-session workflows.
//!
//! Drives the real `vector_bridge::dispatch` path step by step and checks
//! the session after each step, with diagnostic failure messages.
//!
//! # Key Components
//!
//! - [`SessionDriver`] — Fluent API for scripting add/mark/delete/toggle sequences
//! - [`report`] — Structured text session descriptions
//! - [`helpers`] — Input formatting, clipping checks, listing summaries
//! - [`assertions`] — Rich assertion helpers with diagnostics

pub mod assertions;
pub mod helpers;
pub mod report;
pub mod workflow;

pub use helpers::HarnessError;
pub use report::SessionReport;
pub use workflow::SessionDriver;
