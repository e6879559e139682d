// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::record::SEPARATOR;

/// Shortest accepted team name, in characters.
pub const MIN_NAME_LENGTH: usize = 5;

/// Longest accepted team name, in characters.
pub const MAX_NAME_LENGTH: usize = 20;

/// Characters a name cannot hold without breaking its stored line.
const FORBIDDEN_NAME_CHARS: [char; 3] = [SEPARATOR, '\n', '\r'];

/// Validates that a field value was actually provided.
///
/// # Errors
///
/// Returns `DomainError::EmptyField` if `text` is empty.
pub const fn validate_not_empty(text: &str) -> Result<(), DomainError> {
    if text.is_empty() {
        return Err(DomainError::EmptyField);
    }
    Ok(())
}

/// Validates a team name and returns its stored, upper-cased form.
///
/// Length is counted in characters of the upper-cased form, which may be
/// longer than the input (`ß` becomes `SS`), and must lie in
/// [`MIN_NAME_LENGTH`]..=[`MAX_NAME_LENGTH`]. Length errors carry the name
/// as entered.
///
/// # Arguments
///
/// * `name` - The name as entered
///
/// # Returns
///
/// * `Ok(String)` with the upper-cased name
/// * `Err(DomainError)` if the name is rejected
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty
/// - The name contains a line break or the field separator
/// - The upper-cased name has fewer than 5 characters
/// - The upper-cased name has more than 20 characters
pub fn validate_team_name(name: &str) -> Result<String, DomainError> {
    validate_not_empty(name)?;

    if let Some(character) = name.chars().find(|c| FORBIDDEN_NAME_CHARS.contains(c)) {
        return Err(DomainError::ForbiddenCharacter {
            name: name.to_string(),
            character,
        });
    }

    let stored: String = name.to_uppercase();
    let length: usize = stored.chars().count();
    if length < MIN_NAME_LENGTH {
        return Err(DomainError::NameTooShort {
            name: name.to_string(),
            length,
        });
    }
    if length > MAX_NAME_LENGTH {
        return Err(DomainError::NameTooLong {
            name: name.to_string(),
            length,
        });
    }

    Ok(stored)
}

/// Validates that the away team differs from the home team.
///
/// Both names are expected in their stored, upper-cased form, which makes the
/// comparison case-insensitive.
///
/// # Errors
///
/// Returns `DomainError::DuplicateTeam` if both names are equal.
pub fn validate_distinct_teams(home: &str, away: &str) -> Result<(), DomainError> {
    if home == away {
        return Err(DomainError::DuplicateTeam {
            name: away.to_string(),
        });
    }
    Ok(())
}
