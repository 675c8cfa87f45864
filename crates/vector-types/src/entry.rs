use serde::{Deserialize, Serialize};

/// The (x, y, z) components of a vector.
///
/// Arity is fixed by the type: there is no way to hold two or four values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Components(pub [f64; 3]);

impl Components {
    pub const ZERO: Self = Self([0.0, 0.0, 0.0]);

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self([x, y, z])
    }

    pub fn x(&self) -> f64 {
        self.0[0]
    }

    pub fn y(&self) -> f64 {
        self.0[1]
    }

    pub fn z(&self) -> f64 {
        self.0[2]
    }

    pub fn to_array(&self) -> [f64; 3] {
        self.0
    }
}

impl From<[f64; 3]> for Components {
    fn from(arr: [f64; 3]) -> Self {
        Self(arr)
    }
}

impl From<(f64, f64, f64)> for Components {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

/// A named vector held in a session's collection.
///
/// Entries are never edited in place; the collection only appends and removes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorEntry {
    /// Display label. Not required to be unique.
    pub name: String,
    pub components: Components,
}

impl VectorEntry {
    pub fn new(name: impl Into<String>, components: Components) -> Self {
        Self {
            name: name.into(),
            components,
        }
    }
}
