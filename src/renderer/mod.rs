//! Canvas 2D rendering
//!
//! - `shapes`: the coin as a stack of circle layers (platform independent)
//! - `canvas`: `CoinSurface` over an `HtmlCanvasElement` (WASM only)

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use shapes::{CircleLayer, coin_layers};
