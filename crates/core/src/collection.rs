// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use quiniela_domain::{DomainError, MatchRecord};

/// An ordered collection of match records.
///
/// Insertion order is the display order and the export order. Records are
/// not checked here; each [`MatchRecord`] validates its own fields, and the
/// same pair of teams may appear any number of times.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchCollection {
    records: Vec<MatchRecord>,
}

impl MatchCollection {
    /// Creates a new empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Appends a record at the end.
    pub fn push(&mut self, record: MatchRecord) {
        self.records.push(record);
    }

    /// Removes the first record equal to `record` by value.
    ///
    /// Records carry no identity, so with `[A, B, A]` the leading `A` is the
    /// one removed, leaving `[B, A]`. Use [`remove_at`](Self::remove_at) to
    /// remove a specific position.
    ///
    /// Returns the removed record, or `None` if no record matched.
    pub fn remove_record(&mut self, record: &MatchRecord) -> Option<MatchRecord> {
        let position: usize = self.records.iter().position(|r| r == record)?;
        Some(self.records.remove(position))
    }

    /// Removes and returns the record at `index`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::IndexOutOfRange` if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<MatchRecord, CoreError> {
        self.check_index(index)?;
        Ok(self.records.remove(index))
    }

    /// Returns the record at `index`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::IndexOutOfRange` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&MatchRecord, CoreError> {
        self.check_index(index)?;
        Ok(&self.records[index])
    }

    /// Returns the number of records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the collection holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Removes every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Iterates over the records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, MatchRecord> {
        self.records.iter()
    }

    /// Returns the display line of every record, in order.
    #[must_use]
    pub fn display_lines(&self) -> Vec<String> {
        self.records
            .iter()
            .map(MatchRecord::to_display_string)
            .collect()
    }

    /// Returns the points line of every record, in order.
    #[must_use]
    pub fn points_lines(&self) -> Vec<String> {
        self.records
            .iter()
            .map(MatchRecord::to_points_string)
            .collect()
    }

    /// Returns the pseudo-CSV line of every record, in order.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ExportAborted` for the first record that is not
    /// closed. No lines are returned in that case.
    pub fn csv_lines(&self) -> Result<Vec<String>, CoreError> {
        self.records
            .iter()
            .enumerate()
            .map(|(position, record)| {
                record
                    .to_csv_line()
                    .map_err(|reason: DomainError| CoreError::ExportAborted { position, reason })
            })
            .collect()
    }

    const fn check_index(&self, index: usize) -> Result<(), CoreError> {
        if index >= self.records.len() {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(())
    }
}

impl FromIterator<MatchRecord> for MatchCollection {
    fn from_iter<I: IntoIterator<Item = MatchRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MatchCollection {
    type Item = &'a MatchRecord;
    type IntoIter = std::slice::Iter<'a, MatchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
