use serde::{Deserialize, Serialize};

/// A named CSS color, e.g. `"red"` or `"orange"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub String);

impl Color {
    pub fn named(name: &str) -> Self {
        Self(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One of the three orthonormal basis directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Unit vector along this axis.
    pub fn unit(self) -> [f64; 3] {
        let mut v = [0.0; 3];
        v[self.index()] = 1.0;
        v
    }

    /// Plain-text basis symbol.
    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "î",
            Axis::Y => "ĵ",
            Axis::Z => "k̂",
        }
    }

    /// LaTeX basis symbol, for renderers that typeset labels.
    pub fn latex(self) -> &'static str {
        match self {
            Axis::X => r"\hat i",
            Axis::Y => r"\hat j",
            Axis::Z => r"\hat k",
        }
    }
}

/// What a segment depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SegmentKind {
    /// A fixed unit basis axis.
    Basis { axis: Axis },
    /// The collection entry at `index`.
    Vector { index: usize },
}

/// A line segment with a marker at each endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub label: String,
    pub start: [f64; 3],
    pub end: [f64; 3],
    pub line_color: Color,
    pub line_width: f64,
    pub marker_color: Color,
    pub marker_size: f64,
}

impl Segment {
    /// `end - start`.
    pub fn direction(&self) -> [f64; 3] {
        [
            self.end[0] - self.start[0],
            self.end[1] - self.start[1],
            self.end[2] - self.start[2],
        ]
    }

    pub fn is_basis(&self) -> bool {
        matches!(self.kind, SegmentKind::Basis { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectMode {
    /// Equal scale on all three axes.
    Cube,
}

/// Figure margins in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub b: u32,
    pub t: u32,
}

/// Viewing volume and figure geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneLayout {
    pub x_range: [f64; 2],
    pub y_range: [f64; 2],
    pub z_range: [f64; 2],
    pub aspect: AspectMode,
    pub margin: Margin,
    pub width: u32,
    pub height: u32,
}

impl SceneLayout {
    /// Whether `point` lies inside the viewing volume (bounds inclusive).
    pub fn contains(&self, point: [f64; 3]) -> bool {
        let ranges = [self.x_range, self.y_range, self.z_range];
        point
            .iter()
            .zip(ranges.iter())
            .all(|(v, [min, max])| *v >= *min && *v <= *max)
    }
}

/// Everything a rendering surface needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Basis segments first (x, y, z), then one segment per entry in order.
    pub segments: Vec<Segment>,
    pub layout: SceneLayout,
}

impl Scene {
    pub fn basis_segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|s| s.is_basis())
    }

    pub fn vector_segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|s| !s.is_basis())
    }
}
