// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use quiniela::CoreError;
use quiniela_domain::DomainError;
use quiniela_persistence::StorageError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// The operation is not valid for the record's current state.
    InvalidState {
        /// A human-readable description of the problem.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// Export was refused because a record is incomplete. Nothing was written.
    ExportFailed {
        /// Position of the offending record (0-based).
        position: usize,
        /// A human-readable description of the error.
        message: String,
    },
    /// Import was refused. The current collection is unchanged.
    ImportFailed {
        /// The first failing line (1-based).
        line_number: usize,
        /// The content of that line, when known.
        line: Option<String>,
        /// A human-readable description of the error.
        message: String,
    },
    /// The backing store could not be read or written.
    Storage {
        /// The store being accessed.
        resource: String,
        /// A human-readable description of the error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidState { message } => write!(f, "Invalid state: {message}"),
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::ExportFailed { position, message } => {
                write!(f, "Export failed at record {}: {message}", position + 1)
            }
            Self::ImportFailed {
                line_number,
                message,
                ..
            } => {
                write!(f, "Import failed at line {line_number}: {message}")
            }
            Self::Storage { resource, message } => {
                write!(f, "Storage error on '{resource}': {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { path } => Self::ResourceNotFound {
                resource_type: String::from("Store"),
                message: format!("'{path}' does not exist"),
            },
            StorageError::Io { .. } => Self::Storage {
                resource: err.path().to_string(),
                message: err.to_string(),
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::EmptyField => ApiError::InvalidInput {
            field: String::from("field"),
            message: String::from("A value is required"),
        },
        DomainError::NameTooShort { name, length } => ApiError::InvalidInput {
            field: String::from("team"),
            message: format!("Team name '{name}' is too short ({length} characters, minimum 5)"),
        },
        DomainError::NameTooLong { name, length } => ApiError::InvalidInput {
            field: String::from("team"),
            message: format!("Team name '{name}' is too long ({length} characters, maximum 20)"),
        },
        DomainError::ForbiddenCharacter { name, character } => ApiError::InvalidInput {
            field: String::from("team"),
            message: format!("Team name {name:?} cannot contain {character:?}"),
        },
        DomainError::DuplicateTeam { name } => ApiError::DomainRuleViolation {
            rule: String::from("distinct_teams"),
            message: format!("Team '{name}' cannot play against itself"),
        },
        DomainError::InvalidOutcome(token) => ApiError::InvalidInput {
            field: String::from("outcome"),
            message: format!("'{token}' is not one of 1, X or 2"),
        },
        err @ (DomainError::AlreadyComplete | DomainError::IncompleteRecord { .. }) => {
            ApiError::InvalidState {
                message: err.to_string(),
            }
        }
        err @ (DomainError::MalformedLine { .. } | DomainError::InvalidLine { .. }) => {
            ApiError::InvalidInput {
                field: String::from("line"),
                message: err.to_string(),
            }
        }
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::IndexOutOfRange { index, len } => ApiError::ResourceNotFound {
            resource_type: String::from("Match record"),
            message: format!("No record at position {} ({len} stored)", index + 1),
        },
        CoreError::ExportAborted { position, reason } => ApiError::ExportFailed {
            position,
            message: reason.to_string(),
        },
        CoreError::ImportFailed {
            line_number,
            reason,
        } => ApiError::ImportFailed {
            line_number,
            line: reason.line().map(String::from),
            message: reason.to_string(),
        },
    }
}
