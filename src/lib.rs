//! Arcade PD - arcade-style front end for the Game Dev PD learning site
//!
//! Core modules:
//! - `persistence`: Versioned progress record in client-side storage
//! - `anim`: Coin-drop animation state machine
//! - `navigation`: Page locators and keyboard navigation intents
//! - `progress`: Progress percentages and counts for display
//! - `catalog`: The fixed set of domains and page routing
//! - `platform`: Storage/clock/input collaborators (browser or in-memory)
//! - `ui`: Timed banner and widget labels
//! - `renderer`: Canvas 2D drawing of the coin (WASM only)

pub mod anim;
pub mod catalog;
pub mod navigation;
pub mod persistence;
pub mod platform;
pub mod progress;
pub mod renderer;
pub mod settings;
pub mod tuning;
pub mod ui;

pub use catalog::{DomainId, DomainInfo, PageData};
pub use navigation::{NavIntent, Navigation};
pub use persistence::{DomainProgress, ProgressRecord, ProgressStore, StoreError};
pub use progress::ProgressPresenter;
pub use settings::{SettingKey, Settings};

/// Site configuration constants
pub mod consts {
    /// LocalStorage key holding the progress record
    pub const STORAGE_KEY: &str = "gamedev_pd_data";
    /// Current progress record schema version
    pub const SCHEMA_VERSION: &str = "1.0";

    /// URL prefix the site is mounted under
    pub const BASE_PATH: &str = "/gamedev-pd";

    /// How long the first-visit banner stays fully visible (ms)
    pub const BANNER_VISIBLE_MS: f64 = 5000.0;
    /// Banner fade-out duration (ms)
    pub const BANNER_FADE_MS: f64 = 500.0;
}
