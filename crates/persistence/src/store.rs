// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::StorageError;

/// A named resource holding a sequence of text lines.
///
/// Implementations acquire whatever handle they need inside each call and
/// release it before returning, on success and on failure alike.
pub trait LineStore {
    /// Returns a human-readable name for the resource, used in messages.
    fn describe(&self) -> String;

    /// Reads every line, without terminators.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the resource is missing or unreadable.
    fn read_lines(&self) -> Result<Vec<String>, StorageError>;

    /// Replaces the resource content with `lines`.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the resource cannot be written. A failed
    /// write must leave the previous content in place.
    fn write_lines(&mut self, lines: &[String]) -> Result<(), StorageError>;
}
