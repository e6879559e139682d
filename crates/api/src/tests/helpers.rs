// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use quiniela_persistence::{LineStore, StorageError};

use crate::Quiniela;

/// A controller holding three closed records.
pub fn create_test_quiniela() -> Quiniela {
    let mut quiniela: Quiniela = Quiniela::new();
    quiniela
        .create_record("Real Betis", "Sevilla FC", "1")
        .unwrap();
    quiniela
        .create_record("Valencia CF", "Villarreal CF", "x")
        .unwrap();
    quiniela
        .create_record("Getafe CF", "Rayo Vallecano", "2")
        .unwrap();
    quiniela
}

/// A store whose every read and write fails with an I/O error.
pub struct BrokenStore;

impl BrokenStore {
    fn failure() -> StorageError {
        StorageError::Io {
            path: String::from("broken"),
            source: std::io::Error::other("disk unplugged"),
        }
    }
}

impl LineStore for BrokenStore {
    fn describe(&self) -> String {
        String::from("broken")
    }

    fn read_lines(&self) -> Result<Vec<String>, StorageError> {
        Err(Self::failure())
    }

    fn write_lines(&mut self, _lines: &[String]) -> Result<(), StorageError> {
        Err(Self::failure())
    }
}
