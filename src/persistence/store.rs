//! ProgressStore: the one record in client-side storage
//!
//! Every mutation reads the whole record, changes it, and writes the whole
//! record back. Reads never fail loudly: a missing, unreadable or corrupt
//! record is reported as absence.

use serde_json::Value;

use super::migration::{MigrationOutcome, migrate_document};
use super::record::{DomainProgress, DomainProgressUpdate, ProgressRecord};
use crate::catalog::DomainId;
use crate::consts::STORAGE_KEY;
use crate::platform::{Clock, KeyValueStore, StorageFailure};
use crate::settings::{SettingKey, Settings};

/// Why a store operation did not take effect
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the storage backend failed
    #[error("storage unavailable: {0}")]
    Unavailable(#[from] StorageFailure),
    /// No (readable) record is stored yet
    #[error("no progress record stored")]
    MissingRecord,
    /// The record has no entry for this domain
    #[error("no progress entry for domain {0}")]
    UnknownDomain(DomainId),
    /// Page numbers start at 1
    #[error("invalid page number {0}")]
    InvalidPage(u32),
}

/// Versioned progress record over an injected storage backend and clock
pub struct ProgressStore<S, C> {
    storage: S,
    clock: C,
    key: String,
}

impl<S: KeyValueStore, C: Clock> ProgressStore<S, C> {
    pub fn new(storage: S, clock: C) -> Self {
        Self::with_key(storage, clock, STORAGE_KEY)
    }

    pub fn with_key(storage: S, clock: C, key: &str) -> Self {
        Self {
            storage,
            clock,
            key: key.to_string(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Whether anything is stored under the record key
    pub fn exists(&self) -> bool {
        matches!(self.storage.get_item(&self.key), Ok(Some(_)))
    }

    /// Create the default record if none exists, then migrate. A failed read
    /// is returned as an error so an unreachable record is never overwritten.
    pub fn init(&self) -> Result<MigrationOutcome, StoreError> {
        match self.storage.get_item(&self.key)? {
            None => {
                log::info!("No progress record found, writing defaults");
                self.write_defaults()?;
            }
            Some(raw) if serde_json::from_str::<Value>(&raw).is_err() => {
                log::warn!("Stored progress record is not valid JSON, resetting");
                self.write_defaults()?;
            }
            Some(_) => {}
        }
        self.migrate()
    }

    /// Relabel an outdated record with the current schema version
    pub fn migrate(&self) -> Result<MigrationOutcome, StoreError> {
        let Some(mut doc) = self.read_document() else {
            return Ok(MigrationOutcome::NoRecord);
        };
        let outcome = migrate_document(&mut doc);
        if let MigrationOutcome::Relabeled { from } = &outcome {
            log::info!(
                "Migrating progress record from version {} to {}",
                from,
                crate::consts::SCHEMA_VERSION
            );
            self.write_json(&doc.to_string())?;
        }
        Ok(outcome)
    }

    /// The whole record, if one is stored and readable
    pub fn record(&self) -> Option<ProgressRecord> {
        match self.load() {
            Ok(record) => Some(record),
            Err(StoreError::Unavailable(e)) => {
                log::warn!("Error reading progress record: {}", e);
                None
            }
            Err(_) => None,
        }
    }

    pub fn get_domain_progress(&self, domain: DomainId) -> Option<DomainProgress> {
        self.record()?.domain(domain).cloned()
    }

    /// Merge `update` into an existing domain entry
    pub fn update_domain_progress(
        &self,
        domain: DomainId,
        update: DomainProgressUpdate,
    ) -> Result<(), StoreError> {
        self.modify(|record| {
            let progress = record
                .domain_mut(domain)
                .ok_or(StoreError::UnknownDomain(domain))?;
            progress.apply(update);
            Ok(())
        })
    }

    /// Add `page` to the domain's completed set and make it the current page.
    /// Does not create a record when none exists.
    pub fn mark_page_completed(&self, domain: DomainId, page: u32) -> Result<(), StoreError> {
        if page == 0 {
            return Err(StoreError::InvalidPage(page));
        }
        let now = self.clock.now();
        self.modify(|record| {
            let progress = record
                .domain_mut(domain)
                .ok_or(StoreError::UnknownDomain(domain))?;
            progress.mark_completed(page, now);
            Ok(())
        })?;
        log::debug!("Marked domain {} page {} completed", domain, page);
        Ok(())
    }

    pub fn get_setting(&self, key: SettingKey) -> Option<bool> {
        self.record()?.settings.map(|s| s.get(key))
    }

    pub fn set_setting(&self, key: SettingKey, value: bool) -> Result<(), StoreError> {
        self.modify(|record| {
            record
                .settings
                .get_or_insert_with(Settings::default)
                .set(key, value);
            Ok(())
        })
    }

    /// Reset: drop the stored record and write fresh defaults
    pub fn clear(&self) -> Result<(), StoreError> {
        self.storage.remove_item(&self.key)?;
        log::info!("Progress record cleared");
        self.write_defaults()
    }

    fn write_defaults(&self) -> Result<(), StoreError> {
        let record = ProgressRecord::new_default(self.clock.now());
        self.write(&record)
    }

    fn modify<F>(&self, change: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut ProgressRecord) -> Result<(), StoreError>,
    {
        let mut record = self.load()?;
        change(&mut record)?;
        self.write(&record)
    }

    /// Read failures surface as `Unavailable`; absent or unreadable text as `MissingRecord`
    fn load(&self) -> Result<ProgressRecord, StoreError> {
        let raw = self
            .storage
            .get_item(&self.key)?
            .ok_or(StoreError::MissingRecord)?;
        let doc: Value = serde_json::from_str(&raw).map_err(|e| {
            log::warn!("Error parsing progress record: {}", e);
            StoreError::MissingRecord
        })?;
        serde_json::from_value(doc).map_err(|e| {
            log::warn!("Progress record has unexpected shape: {}", e);
            StoreError::MissingRecord
        })
    }

    fn read_document(&self) -> Option<Value> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(raw) => raw?,
            Err(e) => {
                log::warn!("Error reading progress record: {}", e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(doc) => Some(doc),
            Err(e) => {
                log::warn!("Error parsing progress record: {}", e);
                None
            }
        }
    }

    fn write(&self, record: &ProgressRecord) -> Result<(), StoreError> {
        let json = serde_json::to_string(record)
            .map_err(|e| StorageFailure(format!("encode failed: {}", e)))?;
        self.write_json(&json)
    }

    fn write_json(&self, json: &str) -> Result<(), StoreError> {
        self.storage.set_item(&self.key, json).map_err(|e| {
            log::warn!("Error writing progress record: {}", e);
            StoreError::from(e)
        })
    }
}
