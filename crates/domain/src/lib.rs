// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod outcome;
mod record;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::{DomainError, ErrorKind};
pub use outcome::{Outcome, UNSET_GLYPH};
pub use record::{FIELD_COUNT, MatchRecord, NAMES_COLUMN_WIDTH, RecordState, SEPARATOR};
pub use validation::{
    MAX_NAME_LENGTH, MIN_NAME_LENGTH, validate_distinct_teams, validate_not_empty,
    validate_team_name,
};
