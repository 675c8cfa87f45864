//! SessionDriver — fluent API for scripting vector-session workflows in tests.
//!
//! Wraps `vector_bridge::dispatch()` to test the real dispatch path, not a
//! simulation. Entries can be addressed by name for readability.

use vector_bridge::messages::{SessionToUi, UiToSession};
use vector_bridge::SessionState;
use vector_scene::SceneConfig;
use vector_types::Scene;

use crate::assertions;
use crate::helpers::*;

/// A fluent driver for one session.
pub struct SessionDriver {
    pub state: SessionState,
    history: Vec<(String, String)>,
    last_response: Option<SessionToUi>,
    auto_check: bool,
}

impl SessionDriver {
    /// Create a driver over a fresh session with the default configuration.
    pub fn new() -> Self {
        Self::with_config(SceneConfig::default())
    }

    pub fn with_config(config: SceneConfig) -> Self {
        Self {
            state: SessionState::with_config(config),
            history: Vec::new(),
            last_response: None,
            auto_check: false,
        }
    }

    /// Enable auto-checking: after every accepted step, verify the listing
    /// and the scene agree with the collection.
    pub fn with_auto_check(mut self) -> Self {
        self.auto_check = true;
        self
    }

    // ── Adding ──────────────────────────────────────────────────────────

    /// Add a named vector from coordinate text. Returns its position.
    pub fn add(&mut self, name: &str, coordinates: &str) -> Result<usize, HarnessError> {
        self.send(
            format!("AddVector({name}, {coordinates})"),
            UiToSession::AddVector {
                name: Some(name.to_string()),
                coordinates: coordinates.to_string(),
            },
        )?;
        Ok(self.state.collection.len() - 1)
    }

    /// Add an unnamed vector. Returns its position.
    pub fn add_unnamed(&mut self, coordinates: &str) -> Result<usize, HarnessError> {
        self.send(
            format!("AddVector(-, {coordinates})"),
            UiToSession::AddVector {
                name: None,
                coordinates: coordinates.to_string(),
            },
        )?;
        Ok(self.state.collection.len() - 1)
    }

    /// Add a named vector from numbers.
    pub fn add_xyz(&mut self, name: &str, x: f64, y: f64, z: f64) -> Result<usize, HarnessError> {
        self.add(name, &triple(x, y, z))
    }

    /// Send input that must be rejected. Returns the user-facing message and
    /// checks that the collection did not change.
    pub fn add_rejected(&mut self, coordinates: &str) -> Result<String, HarnessError> {
        let before = self.state.collection.entries().to_vec();
        let response = vector_bridge::dispatch(
            &mut self.state,
            UiToSession::AddVector {
                name: None,
                coordinates: coordinates.to_string(),
            },
        );
        match response {
            SessionToUi::Error { message } => {
                self.history
                    .push((format!("AddVector(-, {coordinates})"), format!("Error: {message}")));
                if self.state.collection.entries() != before.as_slice() {
                    return Err(HarnessError::AssertionFailed {
                        detail: format!(
                            "rejected input {coordinates:?} changed the collection:\n{}",
                            listing_summary(&self.state)
                        ),
                    });
                }
                Ok(message)
            }
            other => {
                self.last_response = Some(other);
                Err(HarnessError::UnexpectedAccept {
                    input: coordinates.to_string(),
                })
            }
        }
    }

    // ── Deleting ────────────────────────────────────────────────────────

    /// Tick the delete toggle of the entry at `index`.
    pub fn mark(&mut self, index: usize) -> Result<&mut Self, HarnessError> {
        self.send(
            format!("MarkForDeletion({index})"),
            UiToSession::MarkForDeletion {
                index,
                marked: true,
            },
        )?;
        Ok(self)
    }

    /// Clear the delete toggle of the entry at `index`.
    pub fn unmark(&mut self, index: usize) -> Result<&mut Self, HarnessError> {
        self.send(
            format!("UnmarkForDeletion({index})"),
            UiToSession::MarkForDeletion {
                index,
                marked: false,
            },
        )?;
        Ok(self)
    }

    /// Tick the delete toggle of the first entry named `name`.
    pub fn mark_named(&mut self, name: &str) -> Result<&mut Self, HarnessError> {
        let index = self.index_of(name)?;
        self.mark(index)
    }

    pub fn apply_deletions(&mut self) -> Result<&mut Self, HarnessError> {
        self.send("ApplyDeletions".to_string(), UiToSession::ApplyDeletions)?;
        Ok(self)
    }

    pub fn delete(&mut self, indices: &[usize]) -> Result<&mut Self, HarnessError> {
        self.send(
            format!("DeleteVectors({indices:?})"),
            UiToSession::DeleteVectors {
                indices: indices.to_vec(),
            },
        )?;
        Ok(self)
    }

    // ── Mode ────────────────────────────────────────────────────────────

    pub fn sequential(&mut self, sequential: bool) -> Result<&mut Self, HarnessError> {
        self.send(
            format!("SetSequential({sequential})"),
            UiToSession::SetSequential { sequential },
        )?;
        Ok(self)
    }

    pub fn reset(&mut self) -> Result<&mut Self, HarnessError> {
        self.send("Reset".to_string(), UiToSession::Reset)?;
        Ok(self)
    }

    // ── Queries ─────────────────────────────────────────────────────────

    /// Names in collection order.
    pub fn names(&self) -> Vec<String> {
        self.state.collection.iter().map(|e| e.name.clone()).collect()
    }

    /// Position of the first entry named `name`.
    pub fn index_of(&self, name: &str) -> Result<usize, HarnessError> {
        self.state
            .collection
            .iter()
            .position(|e| e.name == name)
            .ok_or_else(|| HarnessError::VectorNotFound {
                name: name.to_string(),
            })
    }

    pub fn scene(&self) -> Scene {
        self.state.scene()
    }

    pub fn vector_count(&self) -> usize {
        self.state.collection.len()
    }

    /// The most recent response from the session.
    pub fn last_response(&self) -> Option<&SessionToUi> {
        self.last_response.as_ref()
    }

    /// (action, outcome) pairs for every step so far.
    pub fn history(&self) -> &[(String, String)] {
        &self.history
    }

    // ── Internal ────────────────────────────────────────────────────────

    fn send(&mut self, action: String, msg: UiToSession) -> Result<(), HarnessError> {
        let response = vector_bridge::dispatch(&mut self.state, msg);
        let error = match &response {
            SessionToUi::SceneUpdated { .. } => None,
            SessionToUi::Error { message } => Some(format!("{action}: {message}")),
        };
        self.last_response = Some(response);

        match error {
            None => {
                self.history.push((action, "SceneUpdated".to_string()));
                if self.auto_check {
                    assertions::assert_scene_consistent(&self.state)?;
                }
                Ok(())
            }
            Some(message) => {
                self.history.push((action, "Error".to_string()));
                Err(HarnessError::DispatchError { message })
            }
        }
    }
}

impl Default for SessionDriver {
    fn default() -> Self {
        Self::new()
    }
}
