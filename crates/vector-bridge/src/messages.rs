use serde::{Deserialize, Serialize};

use vector_types::{Components, Scene};

/// Messages from the UI to a vector session.
/// Serialized as JSON, tagged by `"type"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiToSession {
    /// The "add" button: append a vector parsed from `coordinates`.
    AddVector {
        #[serde(default)]
        name: Option<String>,
        coordinates: String,
    },
    /// A per-entry "delete" checkbox changed.
    MarkForDeletion { index: usize, marked: bool },
    /// Remove every marked entry.
    ApplyDeletions,
    /// Remove the given positions in one pass.
    DeleteVectors { indices: Vec<usize> },
    /// The "sequential" checkbox changed.
    SetSequential { sequential: bool },
    /// Re-render without changing anything.
    Refresh,
    /// Empty the collection and turn sequential mode off.
    Reset,
}

/// One row of the textual listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryView {
    pub index: usize,
    pub name: String,
    pub components: Components,
    /// `"<name> = <x>î + <y>ĵ + <z>k̂"`.
    pub display: String,
    /// Same listing with LaTeX basis symbols.
    pub latex: String,
    /// State of the entry's delete toggle.
    pub marked: bool,
}

/// Messages from a vector session back to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionToUi {
    /// The session changed (or a refresh was requested); redraw everything.
    SceneUpdated {
        entries: Vec<EntryView>,
        scene: Scene,
        sequential: bool,
        /// Hint shown instead of the plot while there are no vectors.
        placeholder: Option<String>,
    },

    /// A non-fatal error. The session state is unchanged.
    Error { message: String },
}
