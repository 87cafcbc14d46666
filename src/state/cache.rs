//! Ordered record cache backing the results table and positional selection.

use crate::state::types::{Recipe, SelectionError};

/// Records from the most recently applied successful fetch.
///
/// The cache is only ever replaced wholesale. Row `i` of the rendered table
/// is `records()[i]`; the renderer iterates this slice in order and never
/// sorts or filters it, which keeps positional selection correct.
#[derive(Clone, Debug, Default)]
pub struct ResultCache {
    records: Vec<Recipe>,
    generation: u64,
}

impl ResultCache {
    /// What: Replace the cache contents with a freshly fetched page.
    ///
    /// Inputs:
    /// - `generation`: Query id of the response that produced `records`
    /// - `records`: Records in server order
    ///
    /// Output:
    /// - None; previous contents are dropped.
    pub fn publish(&mut self, generation: u64, records: Vec<Recipe>) {
        self.records = records;
        self.generation = generation;
    }

    /// What: Look up the record rendered at row `index`.
    ///
    /// Inputs:
    /// - `index`: Zero-based row position in the rendered table
    ///
    /// Output:
    /// - The record at that position, or `SelectionError::IndexOutOfRange`.
    ///
    /// # Errors
    /// - Returns `IndexOutOfRange` when `index >= len()`.
    pub fn select_by_position(&self, index: usize) -> Result<&Recipe, SelectionError> {
        self.records
            .get(index)
            .ok_or(SelectionError::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
    }

    /// Records in render order.
    #[must_use]
    pub fn records(&self) -> &[Recipe] {
        &self.records
    }

    /// Query id of the response currently cached (0 before the first publish).
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of cached records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` when nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
