// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur while reading or writing a line store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing resource does not exist.
    #[error("Store not found: {path}")]
    NotFound {
        /// The resource that was looked up.
        path: String,
    },

    /// The backing resource could not be read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The resource being accessed.
        path: String,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    /// Returns the resource this error refers to.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::NotFound { path } | Self::Io { path, .. } => path,
        }
    }
}
