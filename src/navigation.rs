//! Page locators and keyboard navigation
//!
//! Pure functions: nothing here touches `window.location`. The app glue turns
//! a `NavIntent` into an actual navigation.

use crate::catalog::{DomainId, PageData};
use crate::consts::BASE_PATH;
use crate::platform::NavKey;

/// Result of a key press on a content page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavIntent {
    /// Where to go
    pub url: String,
    /// Whether the browser's default handling of the key must be suppressed
    pub prevent_default: bool,
}

/// URL builder for the site's routes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    base_path: String,
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new(BASE_PATH)
    }
}

impl Navigation {
    pub fn new(base_path: &str) -> Self {
        Self {
            base_path: base_path.trim_end_matches('/').to_string(),
        }
    }

    pub fn domain_url(&self, domain: DomainId, page: u32) -> String {
        format!("{}/domain/{}/page/{}", self.base_path, domain, page)
    }

    /// First page of a domain
    pub fn domain_start_url(&self, domain: DomainId) -> String {
        self.domain_url(domain, 1)
    }

    pub fn lobby_url(&self) -> String {
        format!("{}/", self.base_path)
    }

    pub fn next_page(&self, domain: DomainId, current: u32, total_pages: u32) -> Option<String> {
        (current < total_pages).then(|| self.domain_url(domain, current + 1))
    }

    pub fn prev_page(&self, domain: DomainId, current: u32) -> Option<String> {
        (current > 1).then(|| self.domain_url(domain, current - 1))
    }

    /// Map a key press on a content page to a navigation
    pub fn key_intent(&self, key: NavKey, page: &PageData) -> Option<NavIntent> {
        let url = match key {
            NavKey::ArrowLeft if page.has_prev => self.prev_page(page.domain_num, page.page_num)?,
            NavKey::ArrowRight if page.has_next => {
                self.next_page(page.domain_num, page.page_num, page.total_pages)?
            }
            NavKey::Escape => self.lobby_url(),
            _ => return None,
        };
        Some(NavIntent {
            url,
            prevent_default: true,
        })
    }

    /// Same as `key_intent` but from a raw `KeyboardEvent.key` string
    pub fn key_name_intent(&self, key: &str, page: &PageData) -> Option<NavIntent> {
        NavKey::from_key(key).and_then(|k| self.key_intent(k, page))
    }
}
