// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::StorageError;
use crate::store::LineStore;

/// A line store held in memory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MemoryStore {
    lines: Vec<String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Creates a store pre-filled with `lines`.
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the stored lines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl LineStore for MemoryStore {
    fn describe(&self) -> String {
        String::from("memory")
    }

    fn read_lines(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.lines.clone())
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<(), StorageError> {
        self.lines = lines.to_vec();
        Ok(())
    }
}
