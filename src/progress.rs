//! Progress figures for the lobby cabinets and content pages

use crate::catalog::DomainId;
use crate::persistence::ProgressStore;
use crate::platform::{Clock, KeyValueStore};

/// Rounded percentage of `part` out of `total`. An empty total counts as 0%.
pub fn percentage(part: usize, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round() as u32
}

/// Numbers shown on one lobby cabinet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CabinetSummary {
    pub domain: DomainId,
    pub completed: usize,
    pub total_pages: u32,
    pub percent: u32,
}

/// Read-only view over a `ProgressStore`
pub struct ProgressPresenter<'a, S, C> {
    store: &'a ProgressStore<S, C>,
}

impl<'a, S: KeyValueStore, C: Clock> ProgressPresenter<'a, S, C> {
    pub fn new(store: &'a ProgressStore<S, C>) -> Self {
        Self { store }
    }

    /// Share of the domain's pages completed, 0 when nothing is recorded
    pub fn calculate_progress(&self, domain: DomainId, total_pages: u32) -> u32 {
        percentage(self.completed_count(domain), total_pages)
    }

    pub fn completed_count(&self, domain: DomainId) -> usize {
        self.store
            .get_domain_progress(domain)
            .map(|p| p.completed_count())
            .unwrap_or(0)
    }

    /// Position of `page` within the domain, as shown on a content page
    pub fn page_progress(&self, page: u32, total_pages: u32) -> u32 {
        percentage(page as usize, total_pages)
    }

    pub fn cabinet_summary(&self, domain: DomainId, total_pages: u32) -> CabinetSummary {
        let completed = self.completed_count(domain);
        CabinetSummary {
            domain,
            completed,
            total_pages,
            percent: percentage(completed, total_pages),
        }
    }

    /// Page to resume a domain at: the last page visited, else page 1
    pub fn resume_page(&self, domain: DomainId) -> u32 {
        self.store
            .get_domain_progress(domain)
            .map(|p| p.current_page)
            .filter(|&page| page >= 1)
            .unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{ManualClock, MemoryStorage};
    use chrono::DateTime;

    fn store() -> ProgressStore<MemoryStorage, ManualClock> {
        let clock = ManualClock::new(DateTime::from_timestamp(0, 0).unwrap());
        ProgressStore::new(MemoryStorage::new(), clock)
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(2, 10), 20);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(5, 0), 0);
    }

    #[test]
    fn test_calculate_progress() {
        let store = store();
        store.init().unwrap();
        store.mark_page_completed(DomainId(1), 2).unwrap();
        store.mark_page_completed(DomainId(1), 5).unwrap();

        let presenter = ProgressPresenter::new(&store);
        assert_eq!(presenter.calculate_progress(DomainId(1), 10), 20);
        assert_eq!(presenter.completed_count(DomainId(1)), 2);
        assert_eq!(presenter.calculate_progress(DomainId(1), 0), 0);
        assert_eq!(presenter.calculate_progress(DomainId(2), 10), 0);
    }

    #[test]
    fn test_no_record_reads_zero() {
        let store = store();
        let presenter = ProgressPresenter::new(&store);
        assert_eq!(presenter.calculate_progress(DomainId(1), 38), 0);
        assert_eq!(presenter.completed_count(DomainId(1)), 0);
        assert_eq!(presenter.resume_page(DomainId(1)), 1);
    }

    #[test]
    fn test_cabinet_summary_and_resume() {
        let store = store();
        store.init().unwrap();
        for page in [1, 2, 3, 7] {
            store.mark_page_completed(DomainId(3), page).unwrap();
        }

        let presenter = ProgressPresenter::new(&store);
        let summary = presenter.cabinet_summary(DomainId(3), 27);
        assert_eq!(summary.completed, 4);
        assert_eq!(summary.percent, 15);
        assert_eq!(presenter.resume_page(DomainId(3)), 7);
        assert_eq!(presenter.page_progress(7, 27), 26);
    }
}
