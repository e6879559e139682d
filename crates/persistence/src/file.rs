// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::StorageError;
use crate::store::LineStore;
use std::ffi::OsString;
use std::fs::{File, create_dir_all, remove_file, rename};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A line store backed by a text file.
///
/// Lines are written with a `\n` terminator. Reads accept `\n` and `\r\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store for the file at `path`. The file is not touched.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns whether the backing file currently exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Path of the scratch file a write goes through before replacing the store.
    #[must_use]
    pub fn temp_path(&self) -> PathBuf {
        let mut name: OsString = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.describe(),
            source,
        }
    }

    fn write_temp(&self, temp_path: &Path, lines: &[String]) -> std::io::Result<()> {
        let mut writer: BufWriter<File> = BufWriter::new(File::create(temp_path)?);
        for line in lines {
            writeln!(writer, "{line}")?;
        }
        writer.flush()?;
        writer.get_ref().sync_all()
    }
}

impl LineStore for FileStore {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_lines(&self) -> Result<Vec<String>, StorageError> {
        let file: File = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(StorageError::NotFound {
                    path: self.describe(),
                });
            }
            Err(err) => return Err(self.io_error(err)),
        };

        let lines: Vec<String> = BufReader::new(file)
            .lines()
            .collect::<Result<Vec<String>, std::io::Error>>()
            .map_err(|err| self.io_error(err))?;

        debug!(path = %self.path.display(), lines = lines.len(), "Read store");
        Ok(lines)
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }

        // Write to a scratch file, then rename over the store.
        let temp_path: PathBuf = self.temp_path();
        if let Err(err) = self.write_temp(&temp_path, lines) {
            let _ = remove_file(&temp_path);
            return Err(self.io_error(err));
        }
        if let Err(err) = rename(&temp_path, &self.path) {
            let _ = remove_file(&temp_path);
            return Err(self.io_error(err));
        }

        debug!(path = %self.path.display(), lines = lines.len(), "Wrote store");
        Ok(())
    }
}
