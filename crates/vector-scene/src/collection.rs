use std::collections::BTreeSet;

use tracing::{info, instrument, warn};
use vector_types::{Components, VectorEntry};

use crate::parse::{parse_coordinates, CoordinateError};

/// Name given to an unnamed entry appended to a collection of `len` entries.
///
/// Derived from the size at insertion time, so after a deletion a new entry
/// can repeat an existing name.
pub fn default_name(len: usize) -> String {
    format!("V{}", len + 1)
}

/// The ordered list of vectors owned by one session.
///
/// Append and remove are the only mutations. Order is display order and the
/// tip-to-tail chaining order.
#[derive(Debug, Clone, Default)]
pub struct VectorCollection {
    entries: Vec<VectorEntry>,
    /// Positions whose "delete" toggle is set.
    marked: BTreeSet<usize>,
}

impl VectorCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[VectorEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&VectorEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VectorEntry> {
        self.entries.iter()
    }

    /// Append an entry. An absent or empty name becomes `V<len+1>`.
    #[instrument(skip(self), fields(len = self.entries.len()))]
    pub fn add(&mut self, name: Option<&str>, components: Components) -> &VectorEntry {
        let name = match name {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => default_name(self.entries.len()),
        };
        info!(%name, components = ?components.to_array(), "adding vector");

        let index = self.entries.len();
        self.entries.push(VectorEntry::new(name, components));
        &self.entries[index]
    }

    /// Parse `raw` and append on success. On failure nothing changes.
    pub fn add_parsed(
        &mut self,
        name: Option<&str>,
        raw: &str,
    ) -> Result<&VectorEntry, CoordinateError> {
        let components = parse_coordinates(raw).inspect_err(|e| {
            warn!(raw, error = %e, "rejected coordinate input");
        })?;
        Ok(self.add(name, components))
    }

    /// Set or clear the delete toggle of the entry at `index`.
    ///
    /// Returns false, leaving marks untouched, when `index` is out of range.
    pub fn mark_for_deletion(&mut self, index: usize, marked: bool) -> bool {
        if index >= self.entries.len() {
            return false;
        }
        if marked {
            self.marked.insert(index);
        } else {
            self.marked.remove(&index);
        }
        true
    }

    pub fn is_marked(&self, index: usize) -> bool {
        self.marked.contains(&index)
    }

    /// Marked positions in ascending order.
    pub fn marked_indices(&self) -> Vec<usize> {
        self.marked.iter().copied().collect()
    }

    /// Remove every marked entry and clear all marks.
    pub fn apply_deletions(&mut self) -> Vec<VectorEntry> {
        let indices = self.marked_indices();
        self.remove(&indices)
    }

    /// Remove the entries at `indices`, highest position first so earlier
    /// removals never shift a later target.
    ///
    /// Duplicates collapse and stale positions (at or beyond the current
    /// length) are skipped. All marks are cleared, since positions shift.
    /// Returns the removed entries in ascending original order.
    #[instrument(skip(self), fields(len = self.entries.len()))]
    pub fn remove(&mut self, indices: &[usize]) -> Vec<VectorEntry> {
        let mut order = indices.to_vec();
        order.sort_unstable_by(|a, b| b.cmp(a));
        order.dedup();

        let mut removed = Vec::with_capacity(order.len());
        for index in order {
            if index >= self.entries.len() {
                warn!(index, len = self.entries.len(), "ignoring stale deletion index");
                continue;
            }
            removed.push(self.entries.remove(index));
        }
        self.marked.clear();

        if !removed.is_empty() {
            info!(count = removed.len(), remaining = self.entries.len(), "removed vectors");
        }
        removed.reverse();
        removed
    }

    /// Drop every entry and mark.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.marked.clear();
    }
}

impl<'a> IntoIterator for &'a VectorCollection {
    type Item = &'a VectorEntry;
    type IntoIter = std::slice::Iter<'a, VectorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
