//! Data-driven animation tuning
//!
//! Units are canvas pixels and animation frames; one frame is one display
//! refresh.

use serde::{Deserialize, Serialize};

/// Coin-drop animation parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoinTuning {
    /// Starting height (negative is above the visible area)
    pub start_y: f64,
    /// Coin diameter
    pub size: f64,
    /// Velocity gained per frame
    pub gravity: f64,
    /// Degrees of spin per frame
    pub spin_per_frame: f64,
    /// How far past the center the coin falls before stopping
    pub overshoot: f64,
    /// Pause between the last frame and hiding the canvas (ms)
    pub settle_ms: f64,
}

impl Default for CoinTuning {
    fn default() -> Self {
        Self {
            start_y: -100.0,
            size: 60.0,
            gravity: 0.8,
            spin_per_frame: 15.0,
            overshoot: 50.0,
            settle_ms: 300.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_tuning_uses_defaults() {
        let tuning: CoinTuning = serde_json::from_str(r#"{"gravity": 2.0}"#).unwrap();
        assert_eq!(tuning.gravity, 2.0);
        assert_eq!(tuning.size, 60.0);
        assert_eq!(tuning.settle_ms, 300.0);
    }
}
