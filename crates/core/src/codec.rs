// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversion between a [`MatchCollection`] and pseudo-CSV lines.
//!
//! Each line holds one record as `HOME#AWAY#CODE`. There is no header row and
//! no escaping. Both directions are all-or-nothing: export produces either
//! every line or none, and import either decodes every line into a new
//! collection or reports the first failing line.

use crate::collection::MatchCollection;
use crate::error::CoreError;
use quiniela_domain::MatchRecord;

/// The result of a successful import.
///
/// The caller replaces its current collection with `new_collection`; the
/// codec never merges into an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportResult {
    /// The decoded records, in input order.
    pub new_collection: MatchCollection,
}

impl ImportResult {
    /// Returns whether the input held no lines at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.new_collection.is_empty()
    }
}

/// Encodes every record of `collection` as a pseudo-CSV line.
///
/// An empty collection yields an empty vector, which callers should treat as
/// "nothing to export" rather than as an error.
///
/// # Errors
///
/// Returns `CoreError::ExportAborted` if any record is not closed. No lines
/// are produced in that case, so nothing partial can be persisted.
pub fn export(collection: &MatchCollection) -> Result<Vec<String>, CoreError> {
    collection.csv_lines()
}

/// Decodes pseudo-CSV lines into a brand-new collection.
///
/// Every line is parsed independently with [`MatchRecord::from_csv_line`].
/// The first failure discards everything decoded so far.
///
/// # Arguments
///
/// * `lines` - The lines to decode, without terminators
///
/// # Errors
///
/// Returns `CoreError::ImportFailed` with the 1-based number of the first line
/// that fails to decode.
pub fn import<I, S>(lines: I) -> Result<ImportResult, CoreError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let new_collection: MatchCollection = lines
        .into_iter()
        .enumerate()
        .map(|(idx, line)| {
            MatchRecord::from_csv_line(line.as_ref()).map_err(|reason| CoreError::ImportFailed {
                line_number: idx + 1,
                reason,
            })
        })
        .collect::<Result<MatchCollection, CoreError>>()?;

    Ok(ImportResult { new_collection })
}
