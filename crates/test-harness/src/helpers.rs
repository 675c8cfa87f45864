use vector_bridge::SessionState;
use vector_types::{Scene, SegmentKind};

/// Errors from harness operations and assertions.
#[derive(Debug, Clone, thiserror::Error)]
pub enum HarnessError {
    #[error("dispatch error: {message}")]
    DispatchError { message: String },

    #[error("expected rejection of {input:?}, but it was accepted")]
    UnexpectedAccept { input: String },

    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("no vector named {name}")]
    VectorNotFound { name: String },
}

// ── Input Formatting ────────────────────────────────────────────────────────

/// Coordinate text in the `(x,y,z)` form the UI sends.
pub fn triple(x: f64, y: f64, z: f64) -> String {
    format!("({x},{y},{z})")
}

// ── Scene Inspection ────────────────────────────────────────────────────────

/// Collection positions of vector segments with an endpoint outside the
/// viewing volume. Those segments render clipped.
pub fn clipped_vectors(scene: &Scene) -> Vec<usize> {
    scene
        .segments
        .iter()
        .filter_map(|s| match s.kind {
            SegmentKind::Vector { index }
                if !scene.layout.contains(s.start) || !scene.layout.contains(s.end) =>
            {
                Some(index)
            }
            _ => None,
        })
        .collect()
}

/// Component-wise comparison within `tol`.
pub fn approx_eq3(a: [f64; 3], b: [f64; 3], tol: f64) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= tol)
}

/// One line per entry, for failure diagnostics.
pub fn listing_summary(state: &SessionState) -> String {
    if state.collection.is_empty() {
        return "  (empty)".to_string();
    }
    state
        .entry_views()
        .iter()
        .map(|v| {
            let mark = if v.marked { " [DELETE]" } else { "" };
            format!("  [{}] {}{}", v.index, v.display, mark)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use vector_scene::{build_scene, SceneConfig};
    use vector_types::{Components, VectorEntry};

    #[test]
    fn triple_parses_back() {
        let text = triple(1.5, -2.0, 0.0);
        assert_eq!(
            vector_scene::parse_coordinates(&text).unwrap(),
            Components::new(1.5, -2.0, 0.0)
        );
    }

    #[test]
    fn clipping_only_reports_vectors() {
        let entries = [
            VectorEntry::new("in", Components::new(1.0, 1.0, 1.0)),
            VectorEntry::new("out", Components::new(0.0, 12.0, 0.0)),
        ];
        let scene = build_scene(&entries, false, &SceneConfig::default());
        assert_eq!(clipped_vectors(&scene), vec![1]);
    }
}
