use nalgebra::Vector3;
use tracing::{debug, instrument};
use vector_types::{Axis, Components, Scene, Segment, SegmentKind, VectorEntry};

use crate::config::SceneConfig;

fn to_vector(c: Components) -> Vector3<f64> {
    Vector3::new(c.x(), c.y(), c.z())
}

fn to_array(v: &Vector3<f64>) -> [f64; 3] {
    [v.x, v.y, v.z]
}

fn basis_segment(axis: Axis, config: &SceneConfig) -> Segment {
    let color = config.basis_color(axis).clone();
    Segment {
        kind: SegmentKind::Basis { axis },
        label: config.basis_label(axis).to_string(),
        start: [0.0; 3],
        end: axis.unit(),
        line_color: color.clone(),
        line_width: config.line_width,
        marker_color: color,
        marker_size: config.marker_size,
    }
}

/// Build the primitives for one frame.
///
/// Emits the three basis segments, then one segment per entry in order. With
/// `sequential` each entry starts at the sum of all entries before it
/// (tip-to-tail); otherwise every entry starts at the origin.
///
/// Pure: the same inputs always give the same scene.
#[instrument(skip(entries, config), fields(count = entries.len()))]
pub fn build_scene(entries: &[VectorEntry], sequential: bool, config: &SceneConfig) -> Scene {
    let mut segments = Vec::with_capacity(Axis::ALL.len() + entries.len());
    segments.extend(Axis::ALL.iter().map(|&axis| basis_segment(axis, config)));

    let mut tip: Vector3<f64> = Vector3::zeros();
    for (index, entry) in entries.iter().enumerate() {
        let v = to_vector(entry.components);
        let start = if sequential { tip } else { Vector3::zeros() };
        let end = start + v;

        segments.push(Segment {
            kind: SegmentKind::Vector { index },
            label: entry.name.clone(),
            start: to_array(&start),
            end: to_array(&end),
            line_color: config.vector_line_color.clone(),
            line_width: config.line_width,
            marker_color: config.vector_marker_color.clone(),
            marker_size: config.marker_size,
        });
        tip += v;
    }

    debug!(segments = segments.len(), "scene built");
    Scene {
        segments,
        layout: config.layout(),
    }
}

/// Running tips of the chain: element `i` is the sum of entries `0..=i`.
pub fn chain_tips(entries: &[VectorEntry]) -> Vec<[f64; 3]> {
    entries
        .iter()
        .scan(Vector3::zeros(), |tip: &mut Vector3<f64>, entry| {
            *tip += to_vector(entry.components);
            Some(to_array(tip))
        })
        .collect()
}

/// Sum of every entry; the end of the last chained segment.
pub fn resultant(entries: &[VectorEntry]) -> Components {
    let sum: Vector3<f64> = entries.iter().map(|e| to_vector(e.components)).sum();
    Components::from(to_array(&sum))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, x: f64, y: f64, z: f64) -> VectorEntry {
        VectorEntry::new(name, Components::new(x, y, z))
    }

    #[test]
    fn empty_collection_still_has_basis() {
        let scene = build_scene(&[], false, &SceneConfig::default());
        assert_eq!(scene.segments.len(), 3);
        for (segment, axis) in scene.segments.iter().zip(Axis::ALL) {
            assert_eq!(segment.start, [0.0; 3]);
            assert_eq!(segment.end, axis.unit());
            assert_eq!(segment.kind, SegmentKind::Basis { axis });
        }
    }

    #[test]
    fn absolute_mode_starts_every_vector_at_origin() {
        let entries = [entry("a", 1.0, 0.0, 0.0), entry("b", 0.0, 1.0, 0.0)];
        let scene = build_scene(&entries, false, &SceneConfig::default());
        let second = &scene.segments[4];
        assert_eq!(second.start, [0.0, 0.0, 0.0]);
        assert_eq!(second.end, [0.0, 1.0, 0.0]);
        assert_eq!(second.label, "b");
    }

    #[test]
    fn sequential_mode_chains_tip_to_tail() {
        let entries = [entry("a", 1.0, 0.0, 0.0), entry("b", 0.0, 1.0, 0.0)];
        let scene = build_scene(&entries, true, &SceneConfig::default());
        let first = &scene.segments[3];
        let second = &scene.segments[4];
        assert_eq!(first.start, [0.0, 0.0, 0.0]);
        assert_eq!(first.end, [1.0, 0.0, 0.0]);
        assert_eq!(second.start, [1.0, 0.0, 0.0]);
        assert_eq!(second.end, [1.0, 1.0, 0.0]);
    }

    #[test]
    fn vector_segments_use_vector_style() {
        let cfg = SceneConfig::default();
        let scene = build_scene(&[entry("a", 1.0, 2.0, 3.0)], false, &cfg);
        let seg = scene.vector_segments().next().unwrap();
        assert_eq!(seg.kind, SegmentKind::Vector { index: 0 });
        assert_eq!(seg.line_color, cfg.vector_line_color);
        assert_eq!(seg.marker_color, cfg.vector_marker_color);
        assert_eq!(seg.line_width, 6.0);
        assert_eq!(seg.marker_size, 4.0);
    }

    #[test]
    fn chain_tips_and_resultant() {
        let entries = [
            entry("a", 1.0, 0.0, 0.0),
            entry("b", 0.0, 2.0, 0.0),
            entry("c", 0.0, 0.0, -3.0),
        ];
        assert_eq!(
            chain_tips(&entries),
            vec![[1.0, 0.0, 0.0], [1.0, 2.0, 0.0], [1.0, 2.0, -3.0]]
        );
        assert_eq!(resultant(&entries), Components::new(1.0, 2.0, -3.0));
        assert_eq!(resultant(&[]), Components::ZERO);
    }

    #[test]
    fn basis_segments_take_configured_labels() {
        let cfg = SceneConfig {
            basis_labels: Axis::ALL.map(|axis| axis.latex().to_string()),
            ..SceneConfig::default()
        };
        let scene = build_scene(&[], false, &cfg);
        let labels: Vec<&str> = scene.segments.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, [r"\hat i", r"\hat j", r"\hat k"]);

        let default = build_scene(&[], false, &SceneConfig::default());
        assert_eq!(default.segments[0].label, "î");
    }

    #[test]
    fn rebuild_is_idempotent() {
        let entries = [entry("a", 0.5, -1.0, 2.0), entry("b", 3.0, 3.0, 3.0)];
        let cfg = SceneConfig::default();
        assert_eq!(
            build_scene(&entries, true, &cfg),
            build_scene(&entries, true, &cfg)
        );
    }
}
