use tracing::{debug, info};

use vector_scene::{build_scene, display_line, latex_line, SceneConfig, VectorCollection};
use vector_types::Scene;

use crate::messages::EntryView;

/// Hint displayed while the collection is empty.
pub const EMPTY_PLACEHOLDER: &str = "add vectors to visualize";

/// State owned by one interactive session.
///
/// Each session holds its own collection; nothing is shared between
/// sessions. Created at session start and dropped at session end.
pub struct SessionState {
    /// The vectors added so far.
    pub collection: VectorCollection,
    /// Whether vectors are drawn tip-to-tail.
    pub sequential: bool,
    /// Styling and viewing volume.
    pub config: SceneConfig,
}

impl SessionState {
    /// Create an empty session with the default scene configuration.
    pub fn new() -> Self {
        Self::with_config(SceneConfig::default())
    }

    pub fn with_config(config: SceneConfig) -> Self {
        debug!("session created");
        Self {
            collection: VectorCollection::new(),
            sequential: false,
            config,
        }
    }

    /// Parse and append a vector. On error the session is untouched.
    pub fn add_vector(&mut self, name: Option<&str>, coordinates: &str) -> Result<(), BridgeError> {
        self.collection.add_parsed(name, coordinates)?;
        Ok(())
    }

    /// Set or clear the delete toggle of the entry at `index`.
    pub fn mark_for_deletion(&mut self, index: usize, marked: bool) -> Result<(), BridgeError> {
        if self.collection.mark_for_deletion(index, marked) {
            Ok(())
        } else {
            Err(BridgeError::IndexOutOfRange {
                index,
                len: self.collection.len(),
            })
        }
    }

    pub fn set_sequential(&mut self, sequential: bool) {
        if self.sequential != sequential {
            info!(sequential, "sequential mode changed");
        }
        self.sequential = sequential;
    }

    /// Return to the state of a fresh session, keeping the configuration.
    pub fn reset(&mut self) {
        info!(discarded = self.collection.len(), "session reset");
        self.collection.clear();
        self.sequential = false;
    }

    /// Build the scene for the current state.
    pub fn scene(&self) -> Scene {
        build_scene(self.collection.entries(), self.sequential, &self.config)
    }

    /// The textual listing, one row per entry.
    pub fn entry_views(&self) -> Vec<EntryView> {
        self.collection
            .iter()
            .enumerate()
            .map(|(index, entry)| EntryView {
                index,
                name: entry.name.clone(),
                components: entry.components,
                display: display_line(entry),
                latex: latex_line(entry),
                marked: self.collection.is_marked(index),
            })
            .collect()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SessionState {
    fn drop(&mut self) {
        debug!(entries = self.collection.len(), "session closed");
    }
}

/// Errors from the session bridge.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BridgeError {
    #[error("{0}")]
    Coordinates(#[from] vector_scene::CoordinateError),

    #[error("no vector at position {index} (session has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}
