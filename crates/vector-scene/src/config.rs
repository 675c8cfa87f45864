//! Styling and viewing-volume configuration for scene building.

use serde::{Deserialize, Serialize};
use vector_types::{AspectMode, Axis, Color, Margin, SceneLayout};

/// Constants the geometry builder draws with.
///
/// Deserializes with every field optional, so a host can override a subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Every axis spans `[-axis_extent, axis_extent]`. No auto-fit.
    pub axis_extent: f64,
    /// Line and marker color of the x, y, z basis segments.
    pub basis_colors: [Color; 3],
    /// Labels of the x, y, z basis segments. Renderers that typeset can
    /// use the LaTeX forms from [`Axis::latex`].
    pub basis_labels: [String; 3],
    pub vector_line_color: Color,
    pub vector_marker_color: Color,
    pub line_width: f64,
    pub marker_size: f64,
    pub margin: Margin,
    /// Figure width in pixels.
    pub width: u32,
    /// Figure height in pixels.
    pub height: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            axis_extent: 10.0,
            basis_colors: [
                Color::named("red"),
                Color::named("green"),
                Color::named("blue"),
            ],
            basis_labels: Axis::ALL.map(|axis| axis.label().to_string()),
            vector_line_color: Color::named("gray"),
            vector_marker_color: Color::named("orange"),
            line_width: 6.0,
            marker_size: 4.0,
            margin: Margin::default(),
            width: 700,
            height: 700,
        }
    }
}

impl SceneConfig {
    /// Smaller figure with thinner strokes, for embedded panels.
    pub fn compact() -> Self {
        Self {
            line_width: 4.0,
            marker_size: 3.0,
            width: 420,
            height: 420,
            ..Self::default()
        }
    }

    pub fn basis_color(&self, axis: Axis) -> &Color {
        &self.basis_colors[axis.index()]
    }

    pub fn basis_label(&self, axis: Axis) -> &str {
        &self.basis_labels[axis.index()]
    }

    pub fn layout(&self) -> SceneLayout {
        let range = [-self.axis_extent, self.axis_extent];
        SceneLayout {
            x_range: range,
            y_range: range,
            z_range: range,
            aspect: AspectMode::Cube,
            margin: self.margin,
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_is_fixed_cube() {
        let layout = SceneConfig::default().layout();
        assert_eq!(layout.x_range, [-10.0, 10.0]);
        assert_eq!(layout.y_range, [-10.0, 10.0]);
        assert_eq!(layout.z_range, [-10.0, 10.0]);
        assert_eq!(layout.aspect, AspectMode::Cube);
        assert_eq!((layout.width, layout.height), (700, 700));
        assert_eq!(layout.margin, Margin::default());
    }

    #[test]
    fn basis_colors_are_distinct() {
        let cfg = SceneConfig::default();
        assert_ne!(cfg.basis_color(Axis::X), cfg.basis_color(Axis::Y));
        assert_ne!(cfg.basis_color(Axis::Y), cfg.basis_color(Axis::Z));
        assert_ne!(cfg.basis_color(Axis::X), cfg.basis_color(Axis::Z));
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let cfg: SceneConfig = serde_json::from_str(r#"{"width": 500}"#).unwrap();
        assert_eq!(cfg.width, 500);
        assert_eq!(cfg.height, 700);
        assert_eq!(cfg.axis_extent, 10.0);
    }

    #[test]
    fn default_basis_labels_are_unit_hats() {
        let cfg = SceneConfig::default();
        assert_eq!(cfg.basis_label(Axis::X), "î");
        assert_eq!(cfg.basis_label(Axis::Y), "ĵ");
        assert_eq!(cfg.basis_label(Axis::Z), "k̂");
    }

    #[test]
    fn basis_labels_override_from_json() {
        let cfg: SceneConfig =
            serde_json::from_str(r#"{"basis_labels": ["\\hat i", "\\hat j", "\\hat k"]}"#)
                .unwrap();
        for axis in Axis::ALL {
            assert_eq!(cfg.basis_label(axis), axis.latex());
        }
        assert_eq!(cfg.basis_colors, SceneConfig::default().basis_colors);
    }

    #[test]
    fn compact_keeps_viewing_volume() {
        let cfg = SceneConfig::compact();
        assert_eq!(cfg.axis_extent, SceneConfig::default().axis_extent);
        assert!(cfg.width < SceneConfig::default().width);
    }
}
