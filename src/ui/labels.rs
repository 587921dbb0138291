//! Text and style values written into progress widgets

use crate::progress::CabinetSummary;

/// Cabinet card counter, e.g. `3 / 38`
pub fn cabinet_text(summary: &CabinetSummary) -> String {
    format!("{} / {}", summary.completed, summary.total_pages)
}

/// Content page counter, e.g. `4 / 27 pages completed`
pub fn page_text(page: u32, total_pages: u32) -> String {
    format!("{} / {} pages completed", page, total_pages)
}

/// CSS width for a progress fill bar
pub fn fill_width(percent: u32) -> String {
    format!("{}%", percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DomainId;

    #[test]
    fn test_labels() {
        let summary = CabinetSummary {
            domain: DomainId(1),
            completed: 3,
            total_pages: 38,
            percent: 8,
        };
        assert_eq!(cabinet_text(&summary), "3 / 38");
        assert_eq!(fill_width(summary.percent), "8%");
        assert_eq!(page_text(4, 27), "4 / 27 pages completed");
    }
}
