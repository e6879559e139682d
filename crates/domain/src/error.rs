// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Broad classification of a [`DomainError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A field value was rejected (empty, wrong length, duplicate, bad outcome).
    Validation,
    /// The operation is not allowed in the record's current state.
    State,
    /// A pseudo-CSV line does not have the expected shape.
    Format,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation => write!(f, "validation"),
            Self::State => write!(f, "state"),
            Self::Format => write!(f, "format"),
        }
    }
}

/// Errors that can occur while building or reading a match record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The field text was empty.
    EmptyField,
    /// A team name is shorter than the minimum length.
    NameTooShort {
        /// The rejected name, as given.
        name: String,
        /// Length in characters of its upper-cased form.
        length: usize,
    },
    /// A team name is longer than the maximum length.
    NameTooLong {
        /// The rejected name, as given.
        name: String,
        /// Length in characters of its upper-cased form.
        length: usize,
    },
    /// A team name holds a line break or the field separator.
    ForbiddenCharacter {
        /// The rejected name, as given.
        name: String,
        /// The first offending character.
        character: char,
    },
    /// The away team matches the home team, ignoring case.
    DuplicateTeam {
        /// The repeated name, upper-cased.
        name: String,
    },
    /// The outcome token is not one of `1`, `X` or `2`.
    InvalidOutcome(String),
    /// A field was set on a record that already holds all three fields.
    AlreadyComplete,
    /// A closed-only accessor was called on a record still being filled.
    IncompleteRecord {
        /// How many fields had been filled.
        fields_filled: u8,
    },
    /// A pseudo-CSV line has fewer than three fields.
    MalformedLine {
        /// The offending line.
        line: String,
        /// How many fields were found.
        fields: usize,
    },
    /// A pseudo-CSV line had the right shape but one of its fields was rejected.
    InvalidLine {
        /// The offending line.
        line: String,
        /// The underlying field error.
        reason: Box<Self>,
    },
}

impl DomainError {
    /// Returns the classification of this error.
    ///
    /// Line-tagged errors report the kind of the field error they wrap.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyField
            | Self::NameTooShort { .. }
            | Self::NameTooLong { .. }
            | Self::ForbiddenCharacter { .. }
            | Self::DuplicateTeam { .. }
            | Self::InvalidOutcome(_) => ErrorKind::Validation,
            Self::AlreadyComplete | Self::IncompleteRecord { .. } => ErrorKind::State,
            Self::MalformedLine { .. } => ErrorKind::Format,
            Self::InvalidLine { reason, .. } => reason.kind(),
        }
    }

    /// Returns the pseudo-CSV line this error was raised for, if any.
    #[must_use]
    pub fn line(&self) -> Option<&str> {
        match self {
            Self::MalformedLine { line, .. } | Self::InvalidLine { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Wraps a field error with the line it came from.
    pub(crate) fn in_line(self, line: &str) -> Self {
        Self::InvalidLine {
            line: line.to_string(),
            reason: Box::new(self),
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField => write!(f, "Empty field"),
            Self::NameTooShort { name, length } => {
                write!(f, "Name too short: '{name}' has {length} characters")
            }
            Self::NameTooLong { name, length } => {
                write!(f, "Name too long: '{name}' has {length} characters")
            }
            Self::ForbiddenCharacter { name, character } => {
                write!(f, "Forbidden character {character:?} in name {name:?}")
            }
            Self::DuplicateTeam { name } => write!(f, "Duplicate team: '{name}'"),
            Self::InvalidOutcome(token) => write!(f, "Invalid outcome: '{token}'"),
            Self::AlreadyComplete => write!(f, "Match record already complete"),
            Self::IncompleteRecord { fields_filled } => {
                write!(f, "Incomplete match record: {fields_filled} of 3 fields set")
            }
            Self::MalformedLine { line, fields } => {
                write!(f, "Malformed line '{line}': expected 3 fields, found {fields}")
            }
            Self::InvalidLine { line, reason } => write!(f, "Invalid line '{line}': {reason}"),
        }
    }
}

impl std::error::Error for DomainError {}
