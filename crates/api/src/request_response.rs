// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API response data transfer objects.

use quiniela_domain::{MatchRecord, Outcome};
use serde::Serialize;

/// API response for a successful record creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateRecordResponse {
    /// Position of the new record (0-based).
    pub index: usize,
    /// The record's display line.
    pub display: String,
}

/// Outcome of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExportResponse {
    /// The collection was empty; the store was not touched.
    NothingToExport,
    /// Every record was written.
    Exported {
        /// Number of records written.
        count: usize,
    },
}

/// Outcome of an import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ImportResponse {
    /// The store held no lines; the current collection was kept.
    NothingToImport,
    /// The current collection was replaced.
    Imported {
        /// Number of records now held.
        count: usize,
    },
}

/// A read-only snapshot of one stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordView {
    /// Position in the collection (0-based).
    pub index: usize,
    /// The home team, if the record is closed.
    pub home: Option<String>,
    /// The away team, if the record is closed.
    pub away: Option<String>,
    /// The outcome, if the record is closed.
    pub outcome: Option<Outcome>,
    /// Whether all three fields are set.
    pub closed: bool,
    /// The record's display line.
    pub display: String,
}

impl RecordView {
    /// Builds a view of `record` at position `index`.
    #[must_use]
    pub fn new(index: usize, record: &MatchRecord) -> Self {
        Self {
            index,
            home: record.home().ok().map(String::from),
            away: record.away().ok().map(String::from),
            outcome: record.outcome().ok(),
            closed: record.is_closed(),
            display: record.to_display_string(),
        }
    }
}
