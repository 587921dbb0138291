//! Progress persistence
//!
//! Features:
//! - Versioned JSON record under a single LocalStorage key
//! - Version relabel migration on the raw document
//! - Corruption tolerated on read (reported as absence)
//! - Reset back to defaults

pub mod migration;
pub mod record;
pub mod store;

pub use migration::{MigrationOutcome, migrate_document};
pub use record::{DomainProgress, DomainProgressUpdate, ProgressRecord};
pub use store::{ProgressStore, StoreError};
