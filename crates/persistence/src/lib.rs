// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage adapters for the Quiniela 1X2 tracker.
//!
//! Records are persisted as plain text lines. This crate knows nothing about
//! their content; it only moves whole line sequences to and from a backing
//! resource.
//!
//! ## Backends
//!
//! - [`FileStore`] — a text file. Writes go to a `.tmp` sibling first and are
//!   renamed into place, so a failed export never truncates the store.
//! - [`MemoryStore`] — a `Vec<String>`, for tests and embedding.

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
mod file;
mod memory;
mod store;

#[cfg(test)]
mod tests;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::LineStore;
