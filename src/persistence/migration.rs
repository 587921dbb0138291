//! Schema version migration
//!
//! Works on the raw JSON document so that nothing but the version tag is
//! rewritten. Any future change to the record layout goes here, gated on the
//! stored version.

use serde_json::Value;

use crate::consts::SCHEMA_VERSION;

/// Result of a migration pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// Nothing stored (or not a JSON object)
    NoRecord,
    /// Already at the current version
    Current,
    /// Version tag rewritten; `from` is the previous tag as JSON text
    Relabeled { from: String },
}

/// Bring `doc` up to `SCHEMA_VERSION` in place
pub fn migrate_document(doc: &mut Value) -> MigrationOutcome {
    let Some(obj) = doc.as_object_mut() else {
        return MigrationOutcome::NoRecord;
    };

    let from = match obj.get("version") {
        Some(Value::String(v)) if v == SCHEMA_VERSION => return MigrationOutcome::Current,
        Some(other) => other.to_string(),
        None => "null".to_string(),
    };

    obj.insert(
        "version".to_string(),
        Value::String(SCHEMA_VERSION.to_string()),
    );
    MigrationOutcome::Relabeled { from }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_current_version_untouched() {
        let mut doc = json!({"version": SCHEMA_VERSION, "progress": {}});
        let before = doc.clone();
        assert_eq!(migrate_document(&mut doc), MigrationOutcome::Current);
        assert_eq!(doc, before);
    }

    #[test]
    fn test_old_version_relabeled_only() {
        let mut doc = json!({
            "version": "0.9",
            "progress": {"domain1": {"completed": [2, 4], "current_page": 4, "last_visited": "2024-01-01T00:00:00.000Z"}},
            "settings": {"audio_enabled": false},
            "session_start": "2023-12-31T00:00:00.000Z"
        });
        let mut expected = doc.clone();
        expected["version"] = json!(SCHEMA_VERSION);

        assert_eq!(
            migrate_document(&mut doc),
            MigrationOutcome::Relabeled {
                from: "\"0.9\"".to_string()
            }
        );
        assert_eq!(doc, expected);
    }

    #[test]
    fn test_missing_or_non_string_version() {
        let mut doc = json!({"progress": {}});
        assert_eq!(
            migrate_document(&mut doc),
            MigrationOutcome::Relabeled {
                from: "null".to_string()
            }
        );
        assert_eq!(doc["version"], SCHEMA_VERSION);

        let mut doc = json!({"version": 1});
        assert!(matches!(
            migrate_document(&mut doc),
            MigrationOutcome::Relabeled { .. }
        ));
    }

    #[test]
    fn test_non_object_document() {
        let mut doc = json!([1, 2, 3]);
        assert_eq!(migrate_document(&mut doc), MigrationOutcome::NoRecord);
        assert_eq!(doc, json!([1, 2, 3]));
    }
}
