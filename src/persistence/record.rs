//! Progress record schema
//!
//! The JSON shape is shared with the site's pages, so field names follow the
//! stored document exactly (`current_page`, `last_visited`, `session_start`).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::catalog::{DOMAINS, DomainId};
use crate::consts::SCHEMA_VERSION;
use crate::settings::Settings;

/// Completion state of one domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainProgress {
    /// Completed page numbers, ascending, no duplicates
    #[serde(default, deserialize_with = "completed_set")]
    pub completed: Vec<u32>,
    /// Last page visited
    #[serde(default = "first_page", deserialize_with = "page_or_first")]
    pub current_page: u32,
    /// When a page was last completed (`null` until the first one)
    #[serde(default, with = "iso_millis")]
    pub last_visited: Option<DateTime<Utc>>,
}

fn first_page() -> u32 {
    1
}

/// Other writers may store `null` or an unordered list
fn completed_set<'de, D>(deserializer: D) -> Result<Vec<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut pages = Option::<Vec<u32>>::deserialize(deserializer)?.unwrap_or_default();
    pages.sort_unstable();
    pages.dedup();
    Ok(pages)
}

fn page_or_first<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(1))
}

/// ISO-8601 with exactly three fractional digits, as `Date.toISOString()` writes
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(at) => serializer.serialize_some(&at.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<DateTime<Utc>>::deserialize(deserializer)
    }
}

impl Default for DomainProgress {
    fn default() -> Self {
        Self {
            completed: Vec::new(),
            current_page: 1,
            last_visited: None,
        }
    }
}

impl DomainProgress {
    /// Record a visit to `page` at `at`. Re-visiting keeps a single entry.
    pub fn mark_completed(&mut self, page: u32, at: DateTime<Utc>) {
        if let Err(pos) = self.completed.binary_search(&page) {
            self.completed.insert(pos, page);
        }
        self.current_page = page;
        self.last_visited = Some(at);
    }

    /// Merge the fields present in `update`
    pub fn apply(&mut self, update: DomainProgressUpdate) {
        if let Some(mut completed) = update.completed {
            completed.sort_unstable();
            completed.dedup();
            self.completed = completed;
        }
        if let Some(page) = update.current_page {
            self.current_page = page;
        }
        if let Some(last_visited) = update.last_visited {
            self.last_visited = last_visited;
        }
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn is_completed(&self, page: u32) -> bool {
        self.completed.binary_search(&page).is_ok()
    }
}

/// Partial update for a `DomainProgress`; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomainProgressUpdate {
    pub completed: Option<Vec<u32>>,
    pub current_page: Option<u32>,
    /// `Some(None)` resets the timestamp to `null`
    pub last_visited: Option<Option<DateTime<Utc>>>,
}

/// The single persisted document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub version: String,
    /// Keyed by `domain{n}`
    pub progress: BTreeMap<String, DomainProgress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "iso_millis")]
    pub session_start: Option<DateTime<Utc>>,

    /// Fields written by other versions of the site
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProgressRecord {
    /// Fresh record: every catalog domain pre-seeded, default settings
    pub fn new_default(now: DateTime<Utc>) -> Self {
        let progress = DOMAINS
            .iter()
            .map(|d| (d.id.key(), DomainProgress::default()))
            .collect();
        Self {
            version: SCHEMA_VERSION.to_string(),
            progress,
            settings: Some(Settings::default()),
            session_start: Some(now),
            extra: Map::new(),
        }
    }

    pub fn domain(&self, domain: DomainId) -> Option<&DomainProgress> {
        self.progress.get(&domain.key())
    }

    pub fn domain_mut(&mut self, domain: DomainId) -> Option<&mut DomainProgress> {
        self.progress.get_mut(&domain.key())
    }
}
