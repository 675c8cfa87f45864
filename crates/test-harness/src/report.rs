//! Structured text session reports.
//!
//! Reports are plain text, not JSON, so a failing test can print the whole
//! session in a readable form.

use std::fmt;

use vector_scene::{chain_tips, display_line, resultant};

use crate::helpers::clipped_vectors;
use crate::workflow::SessionDriver;

/// A snapshot of one session.
pub struct SessionReport {
    pub lines: Vec<String>,
    pub marked: Vec<usize>,
    pub sequential: bool,
    /// End of the last chained segment, if any entries exist.
    pub resultant: Option<[f64; 3]>,
    /// Positions whose segment leaves the viewing volume.
    pub clipped: Vec<usize>,
    pub steps: Vec<(String, String)>,
}

impl SessionReport {
    pub fn from_driver(driver: &SessionDriver) -> Self {
        let state = &driver.state;
        let entries = state.collection.entries();
        Self {
            lines: entries.iter().map(display_line).collect(),
            marked: state.collection.marked_indices(),
            sequential: state.sequential,
            resultant: (!entries.is_empty()).then(|| resultant(entries).to_array()),
            clipped: clipped_vectors(&state.scene()),
            steps: driver.history().to_vec(),
        }
    }

    /// Format the report as text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Vector Session Report ===\n\n");

        out.push_str(&format!(
            "Vectors ({}, {} marked, sequential={}):\n",
            self.lines.len(),
            self.marked.len(),
            self.sequential,
        ));
        for (i, line) in self.lines.iter().enumerate() {
            let mark = if self.marked.contains(&i) { " [DELETE]" } else { "" };
            out.push_str(&format!("  [{}] {}{}\n", i, line, mark));
        }

        if let Some(r) = self.resultant {
            out.push_str(&format!("\nResultant: {:?}\n", r));
        }
        if !self.clipped.is_empty() {
            out.push_str(&format!(
                "Outside viewing volume: {:?}\n",
                self.clipped
            ));
        }

        if !self.steps.is_empty() {
            out.push_str("\nSteps:\n");
            for (action, outcome) in &self.steps {
                out.push_str(&format!("  {} -> {}\n", action, outcome));
            }
        }
        out
    }

    /// Running chain tips, useful alongside the report when debugging
    /// sequential layouts.
    pub fn tips(driver: &SessionDriver) -> Vec<[f64; 3]> {
        chain_tips(driver.state.collection.entries())
    }
}

impl fmt::Display for SessionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
