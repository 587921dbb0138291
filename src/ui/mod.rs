//! Lobby and page widgets
//!
//! Pure state and text; the DOM is updated by the app entry point.

pub mod banner;
pub mod labels;

pub use banner::{Banner, BannerPhase};
