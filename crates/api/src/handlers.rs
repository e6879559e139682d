// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Controller operations over the live match collection.

use quiniela::{ImportResult, MatchCollection, export, import};
use quiniela_domain::MatchRecord;
use quiniela_persistence::LineStore;
use tracing::{info, warn};

use crate::ApiResult;
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{CreateRecordResponse, ExportResponse, ImportResponse, RecordView};

/// The controller owning the single live [`MatchCollection`].
///
/// Every mutation goes through this type. Import builds a new collection and
/// swaps it in only once every line has been decoded, so a failed import or
/// a failed read never changes what is held.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Quiniela {
    collection: MatchCollection,
}

impl Quiniela {
    /// Creates a controller with an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            collection: MatchCollection::new(),
        }
    }

    /// Creates a controller holding `collection`.
    #[must_use]
    pub const fn with_collection(collection: MatchCollection) -> Self {
        Self { collection }
    }

    /// Returns the live collection.
    #[must_use]
    pub const fn collection(&self) -> &MatchCollection {
        &self.collection
    }

    /// Returns the number of stored records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.collection.len()
    }

    /// Returns whether no records are stored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// Builds a closed record from its three fields and appends it.
    ///
    /// # Arguments
    ///
    /// * `home` - The home team name
    /// * `away` - The away team name
    /// * `outcome` - The outcome token (`1`, `X` or `2`, any case)
    ///
    /// # Returns
    ///
    /// The new record's index and display line.
    ///
    /// # Errors
    ///
    /// Returns an error if any field is rejected. Nothing is appended.
    pub fn create_record(
        &mut self,
        home: &str,
        away: &str,
        outcome: &str,
    ) -> ApiResult<CreateRecordResponse> {
        let record: MatchRecord =
            MatchRecord::from_fields(home, away, outcome).map_err(translate_domain_error)?;
        let display: String = record.to_display_string();
        let index: usize = self.append(record);

        Ok(CreateRecordResponse { index, display })
    }

    /// Appends a record that was filled field by field.
    ///
    /// # Returns
    ///
    /// The new record's index.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidState` if the record is not closed.
    pub fn add_record(&mut self, record: MatchRecord) -> ApiResult<usize> {
        record.require_closed().map_err(translate_domain_error)?;
        Ok(self.append(record))
    }

    fn append(&mut self, record: MatchRecord) -> usize {
        info!(record = %record, "Adding match record");
        self.collection.push(record);
        self.collection.len() - 1
    }

    /// Returns the record at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ResourceNotFound` if `index` is out of range.
    pub fn get(&self, index: usize) -> ApiResult<&MatchRecord> {
        self.collection.get(index).map_err(translate_core_error)
    }

    /// Returns the display line of every record, in order.
    #[must_use]
    pub fn list_display(&self) -> Vec<String> {
        self.collection.display_lines()
    }

    /// Returns the points line of every record, in order.
    #[must_use]
    pub fn list_points(&self) -> Vec<String> {
        self.collection.points_lines()
    }

    /// Returns a snapshot of every record, in order.
    #[must_use]
    pub fn records(&self) -> Vec<RecordView> {
        self.collection
            .iter()
            .enumerate()
            .map(|(index, record)| RecordView::new(index, record))
            .collect()
    }

    /// Removes and returns the record at `index` (0-based).
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ResourceNotFound` if `index` is out of range.
    pub fn delete_at(&mut self, index: usize) -> ApiResult<MatchRecord> {
        let removed: MatchRecord = self
            .collection
            .remove_at(index)
            .map_err(translate_core_error)?;
        info!(index, record = %removed, "Removed match record");
        Ok(removed)
    }

    /// Writes every record to `store`, one pseudo-CSV line each.
    ///
    /// An empty collection is reported as
    /// [`ExportResponse::NothingToExport`] and the store is not touched.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any record is not closed (`ExportFailed`); nothing is written
    /// - The store cannot be written (`Storage`)
    pub fn export_to<S: LineStore + ?Sized>(&self, store: &mut S) -> ApiResult<ExportResponse> {
        let lines: Vec<String> = export(&self.collection).map_err(|err| {
            warn!(store = %store.describe(), error = %err, "Export aborted");
            translate_core_error(err)
        })?;

        if lines.is_empty() {
            warn!(store = %store.describe(), "Nothing to export");
            return Ok(ExportResponse::NothingToExport);
        }

        store.write_lines(&lines).map_err(ApiError::from)?;
        info!(store = %store.describe(), count = lines.len(), "Exported match records");

        Ok(ExportResponse::Exported { count: lines.len() })
    }

    /// Replaces the collection with the records read from `store`.
    ///
    /// Every line is decoded before anything changes. An empty store is
    /// reported as [`ImportResponse::NothingToImport`] and the current
    /// collection is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The store cannot be read (`ResourceNotFound` or `Storage`)
    /// - A line cannot be decoded (`ImportFailed`, naming the first failing
    ///   line)
    ///
    /// The current collection is unchanged in every error case.
    pub fn import_from<S: LineStore + ?Sized>(&mut self, store: &S) -> ApiResult<ImportResponse> {
        let lines: Vec<String> = store.read_lines().map_err(ApiError::from)?;

        let result: ImportResult = import(&lines).map_err(|err| {
            warn!(store = %store.describe(), error = %err, "Import rejected");
            translate_core_error(err)
        })?;

        if result.is_empty() {
            warn!(store = %store.describe(), "Nothing to import");
            return Ok(ImportResponse::NothingToImport);
        }

        self.collection = result.new_collection;
        info!(
            store = %store.describe(),
            count = self.collection.len(),
            "Imported match records"
        );

        Ok(ImportResponse::Imported {
            count: self.collection.len(),
        })
    }

    /// Removes every record.
    pub fn reset(&mut self) {
        info!(count = self.collection.len(), "Clearing match records");
        self.collection.clear();
    }
}
