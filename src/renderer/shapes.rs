//! Shape generation for the coin

/// Gold rim color
pub const COIN_GOLD: &str = "#FFD700";
/// Outline around the outer disc
pub const COIN_RIM: &str = "#DAA520";
/// Darker inner disc
pub const COIN_INNER: &str = "#B8860B";

/// Glow radius around the coin
pub const GLOW_BLUR: f64 = 20.0;

/// One circle drawn centered on the coin, in draw order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleLayer {
    pub radius: f64,
    pub fill: Option<&'static str>,
    /// Stroke color and line width
    pub stroke: Option<(&'static str, f64)>,
    /// Shadow blur for a glow effect (0 = none)
    pub glow: f64,
}

/// Layers making up a coin of diameter `size`: gold disc with rim, darker
/// inner disc, then a glowing outline
pub fn coin_layers(size: f64) -> [CircleLayer; 3] {
    [
        CircleLayer {
            radius: size / 2.0,
            fill: Some(COIN_GOLD),
            stroke: Some((COIN_RIM, 3.0)),
            glow: 0.0,
        },
        CircleLayer {
            radius: size / 3.0,
            fill: Some(COIN_INNER),
            stroke: None,
            glow: 0.0,
        },
        CircleLayer {
            radius: size / 2.0,
            fill: None,
            stroke: Some((COIN_GOLD, 2.0)),
            glow: GLOW_BLUR,
        },
    ]
}
