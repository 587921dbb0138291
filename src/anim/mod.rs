//! Coin-drop animation
//!
//! Played when a cabinet is clicked: a gold coin falls from above the screen,
//! spinning and accelerating, overshoots the center slightly, then the
//! overlay is hidden and the caller's completion runs.

pub mod coin;
pub mod machine;
pub mod surface;

pub use coin::CoinDropState;
pub use machine::{CoinDropAnimation, Completion, Phase, PlayOutcome, Schedule};
pub use surface::{CoinSurface, RecordingSurface, SurfaceOp};
