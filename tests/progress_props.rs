//! Property tests for the progress record

use arcade_pd::catalog::DomainId;
use arcade_pd::consts::{SCHEMA_VERSION, STORAGE_KEY};
use arcade_pd::platform::{ManualClock, MemoryStorage};
use arcade_pd::{ProgressPresenter, ProgressStore};
use chrono::DateTime;
use proptest::prelude::*;
use serde_json::{Value, json};

fn fresh_store() -> ProgressStore<MemoryStorage, ManualClock> {
    let clock = ManualClock::new(DateTime::from_timestamp(1_700_000_000, 0).unwrap());
    let store = ProgressStore::new(MemoryStorage::new(), clock);
    store.init().unwrap();
    store
}

proptest! {
    #[test]
    fn completed_is_sorted_distinct(pages in prop::collection::vec(1u32..60, 0..40)) {
        let store = fresh_store();
        for &page in &pages {
            store.mark_page_completed(DomainId(2), page).unwrap();
        }

        let mut expected = pages.clone();
        expected.sort_unstable();
        expected.dedup();

        let progress = store.get_domain_progress(DomainId(2)).unwrap();
        prop_assert_eq!(&progress.completed, &expected);
        if let Some(&last) = pages.last() {
            prop_assert_eq!(progress.current_page, last);
        } else {
            prop_assert_eq!(progress.current_page, 1);
        }
    }

    #[test]
    fn percentage_matches_completed_share(
        pages in prop::collection::btree_set(1u32..=38, 0..38),
    ) {
        let store = fresh_store();
        for &page in &pages {
            store.mark_page_completed(DomainId(1), page).unwrap();
        }
        let presenter = ProgressPresenter::new(&store);
        let expected = (pages.len() as f64 / 38.0 * 100.0).round() as u32;
        prop_assert_eq!(presenter.calculate_progress(DomainId(1), 38), expected);
        prop_assert!(presenter.calculate_progress(DomainId(1), 38) <= 100);
    }

    #[test]
    fn migration_only_touches_version(
        old_version in "[0-9]\\.[0-9]",
        completed in prop::collection::btree_set(1u32..40, 0..10),
        current_page in 1u32..40,
        audio in any::<bool>(),
        extra in "[a-z]{1,8}",
    ) {
        prop_assume!(old_version != SCHEMA_VERSION);

        let completed: Vec<u32> = completed.into_iter().collect();
        let original = json!({
            "version": old_version,
            "progress": {
                "domain1": {"completed": completed, "current_page": current_page, "last_visited": null}
            },
            "settings": {"audio_enabled": audio, "custom": extra},
            "session_start": "2024-05-05T05:05:05.005Z"
        });

        let store = ProgressStore::new(
            MemoryStorage::new(),
            ManualClock::new(DateTime::from_timestamp(0, 0).unwrap()),
        );
        store.storage().put_raw(STORAGE_KEY, &original.to_string());
        store.migrate().unwrap();

        let stored: Value = serde_json::from_str(&store.storage().raw(STORAGE_KEY).unwrap()).unwrap();
        let mut expected = original.clone();
        expected["version"] = json!(SCHEMA_VERSION);
        prop_assert_eq!(stored, expected);
    }
}
