use vector_types::Components;

/// Text pre-filled into the coordinate input of a fresh session.
pub const DEFAULT_COORDINATE_INPUT: &str = "(1,0,0)";

/// Why a coordinate string was rejected.
///
/// The `Display` text is what the user sees.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoordinateError {
    #[error("invalid format, use (x,y,z)")]
    InvalidFormat { token: String },

    #[error("enter exactly 3 coordinates")]
    WrongCount { found: usize },
}

/// Parse `(x,y,z)` or `x,y,z` into three components.
///
/// Leading and trailing parentheses are stripped, the rest is split on `,`
/// and every token is converted before the count is checked, so a
/// non-numeric token wins over a wrong count. `inf` and `nan` parse as
/// floats but are rejected as invalid: they cannot be drawn or sent as JSON.
pub fn parse_coordinates(raw: &str) -> Result<Components, CoordinateError> {
    let stripped = raw.trim_matches(['(', ')']);

    let values = stripped
        .split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| CoordinateError::InvalidFormat {
                    token: token.to_string(),
                })
        })
        .collect::<Result<Vec<f64>, _>>()?;

    let [x, y, z]: [f64; 3] = values
        .try_into()
        .map_err(|v: Vec<f64>| CoordinateError::WrongCount { found: v.len() })?;

    Ok(Components::new(x, y, z))
}
