use vector_types::{Axis, VectorEntry};

/// Render one component: integral values keep a trailing `.0`, others use
/// the shortest text that round-trips.
pub fn format_component(value: f64) -> String {
    format!("{value:?}")
}

fn join_terms(entry: &VectorEntry, symbol: fn(Axis) -> &'static str) -> String {
    let terms: Vec<String> = Axis::ALL
        .iter()
        .map(|&axis| {
            format!(
                "{}{}",
                format_component(entry.components.0[axis.index()]),
                symbol(axis)
            )
        })
        .collect();
    format!("{} = {}", entry.name, terms.join(" + "))
}

/// `"<name> = <x>î + <y>ĵ + <z>k̂"`.
pub fn display_line(entry: &VectorEntry) -> String {
    join_terms(entry, Axis::label)
}

/// Same listing with LaTeX basis symbols.
pub fn latex_line(entry: &VectorEntry) -> String {
    join_terms(entry, Axis::latex)
}
