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
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Controller layer for the Quiniela 1X2 tracker.
//!
//! [`Quiniela`] owns the live collection and exposes the operations a view
//! needs: create, list, delete, export, import and reset. Lower-layer errors
//! are translated into [`ApiError`] before they leave this crate.

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::Quiniela;
pub use request_response::{CreateRecordResponse, ExportResponse, ImportResponse, RecordView};

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
