// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use quiniela_domain::DomainError;

/// Errors raised by collection operations and the import/export codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A position outside `0..len` was requested.
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The collection length at the time of the request.
        len: usize,
    },
    /// Export stopped because a record is not closed. Nothing was produced.
    ExportAborted {
        /// Position of the first incomplete record.
        position: usize,
        /// Why the record could not be serialized.
        reason: DomainError,
    },
    /// Import stopped at the first line that failed to decode. Nothing was kept.
    ImportFailed {
        /// The failing line, 1-based.
        line_number: usize,
        /// The decode error, tagged with the line content.
        reason: DomainError,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "Index {index} out of range for {len} records")
            }
            Self::ExportAborted { position, reason } => {
                write!(f, "Export aborted at record {position}: {reason}")
            }
            Self::ImportFailed {
                line_number,
                reason,
            } => write!(f, "Import failed at line {line_number}: {reason}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
