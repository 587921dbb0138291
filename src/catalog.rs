//! Domain catalog and page routing
//!
//! The four content tracks are fixed at build time. Page routes are only valid
//! for a known domain and a page inside `1..=total_pages`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a content domain (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DomainId(pub u32);

impl DomainId {
    /// Key used for this domain inside the progress record
    pub fn key(&self) -> String {
        format!("domain{}", self.0)
    }

    /// Parse a record key back into an id
    pub fn from_key(key: &str) -> Option<Self> {
        key.strip_prefix("domain")?.parse().ok().map(DomainId)
    }

    /// Catalog entry for this domain, if it is one of the known tracks
    pub fn info(&self) -> Option<&'static DomainInfo> {
        DOMAINS.iter().find(|d| d.id == *self)
    }
}

impl fmt::Display for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Static description of one domain (one lobby cabinet)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainInfo {
    pub id: DomainId,
    pub title: &'static str,
    pub total_pages: u32,
    /// Standards covered by the track
    pub standards: &'static [&'static str],
}

pub const DOMAINS: [DomainInfo; 4] = [
    DomainInfo {
        id: DomainId(1),
        title: "Game Design Fundamentals",
        total_pages: 38,
        standards: &["1.1", "1.2", "1.3"],
    },
    DomainInfo {
        id: DomainId(2),
        title: "Programming for Games",
        total_pages: 39,
        standards: &["2.1", "2.2", "2.3"],
    },
    DomainInfo {
        id: DomainId(3),
        title: "Creative Assets and User Experience",
        total_pages: 27,
        standards: &["3.1", "3.2"],
    },
    DomainInfo {
        id: DomainId(4),
        title: "Industry and Career Connections",
        total_pages: 30,
        standards: &["4.1", "4.2"],
    },
];

/// Why a page route could not be resolved
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("domain {0} not found")]
    UnknownDomain(DomainId),
    #[error("page {page} not found in domain {domain} ({total} pages)")]
    PageOutOfRange { domain: DomainId, page: u32, total: u32 },
}

/// Everything a content page needs to drive progress and navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    pub domain_num: DomainId,
    pub page_num: u32,
    pub total_pages: u32,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PageData {
    /// Build page data from a known total, deriving the neighbour flags
    pub fn new(domain: DomainId, page: u32, total_pages: u32) -> Self {
        Self {
            domain_num: domain,
            page_num: page,
            total_pages,
            has_prev: page > 1,
            has_next: page < total_pages,
        }
    }
}

/// Resolve `/domain/{domain}/page/{page}` against the catalog
pub fn resolve_page(domain: DomainId, page: u32) -> Result<PageData, RouteError> {
    let info = domain.info().ok_or(RouteError::UnknownDomain(domain))?;
    if page < 1 || page > info.total_pages {
        return Err(RouteError::PageOutOfRange {
            domain,
            page,
            total: info.total_pages,
        });
    }
    Ok(PageData::new(domain, page, info.total_pages))
}
