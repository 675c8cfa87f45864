//! Rich assertion helpers with diagnostic output.
//!
//! Every failure includes expected vs actual and the current listing.

use vector_bridge::SessionState;
use vector_types::{Scene, SegmentKind};

use crate::helpers::{approx_eq3, listing_summary, HarnessError};

/// Assert the collection names, in order.
pub fn assert_names(state: &SessionState, expected: &[&str]) -> Result<(), HarnessError> {
    let actual: Vec<&str> = state.collection.iter().map(|e| e.name.as_str()).collect();
    if actual == expected {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "names mismatch: expected {:?}, got {:?}\nListing:\n{}",
                expected,
                actual,
                listing_summary(state),
            ),
        })
    }
}

/// Assert the `n`-th vector segment (not counting basis) spans `start..end`.
pub fn assert_vector_segment(
    scene: &Scene,
    n: usize,
    start: [f64; 3],
    end: [f64; 3],
    tol: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    let segment = scene
        .vector_segments()
        .nth(n)
        .ok_or_else(|| HarnessError::AssertionFailed {
            detail: format!(
                "[{}] no vector segment {} (scene has {})",
                ctx,
                n,
                scene.vector_segments().count(),
            ),
        })?;

    if approx_eq3(segment.start, start, tol) && approx_eq3(segment.end, end, tol) {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] segment {} \"{}\": expected {:?} -> {:?}, got {:?} -> {:?} (tol={})",
                ctx, n, segment.label, start, end, segment.start, segment.end, tol,
            ),
        })
    }
}

/// Assert the scene agrees with the collection: three basis segments first,
/// then one segment per entry with matching label and direction, contiguous
/// when the session is sequential.
pub fn assert_scene_consistent(state: &SessionState) -> Result<(), HarnessError> {
    let scene = state.scene();
    let fail = |detail: String| HarnessError::AssertionFailed {
        detail: format!("{}\nListing:\n{}", detail, listing_summary(state)),
    };

    let basis = scene.basis_segments().count();
    if basis != 3 || !scene.segments.iter().take(3).all(|s| s.is_basis()) {
        return Err(fail(format!(
            "expected 3 leading basis segments, found {basis}"
        )));
    }

    let vectors: Vec<_> = scene.vector_segments().collect();
    if vectors.len() != state.collection.len() {
        return Err(fail(format!(
            "expected {} vector segments, found {}",
            state.collection.len(),
            vectors.len(),
        )));
    }

    let mut previous_end = [0.0; 3];
    for (i, (segment, entry)) in vectors.iter().zip(state.collection.iter()).enumerate() {
        if segment.kind != (SegmentKind::Vector { index: i }) || segment.label != entry.name {
            return Err(fail(format!(
                "segment {} is {:?} \"{}\", expected entry \"{}\"",
                i, segment.kind, segment.label, entry.name,
            )));
        }
        let scale = segment
            .start
            .iter()
            .chain(segment.end.iter())
            .fold(1.0_f64, |m, v| m.max(v.abs()));
        if !approx_eq3(segment.direction(), entry.components.to_array(), 1e-9 * scale) {
            return Err(fail(format!(
                "segment {} direction {:?} != components {:?}",
                i,
                segment.direction(),
                entry.components.to_array(),
            )));
        }
        let expected_start = if state.sequential { previous_end } else { [0.0; 3] };
        if segment.start != expected_start {
            return Err(fail(format!(
                "segment {} starts at {:?}, expected {:?} (sequential={})",
                i, segment.start, expected_start, state.sequential,
            )));
        }
        previous_end = segment.end;
    }

    Ok(())
}

/// Assert the delete toggles currently set.
pub fn assert_marked(state: &SessionState, expected: &[usize]) -> Result<(), HarnessError> {
    let actual = state.collection.marked_indices();
    if actual == expected {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "marked mismatch: expected {:?}, got {:?}\nListing:\n{}",
                expected,
                actual,
                listing_summary(state),
            ),
        })
    }
}
