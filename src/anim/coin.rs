//! Coin physics for the drop animation

use crate::tuning::CoinTuning;

/// One coin in flight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoinDropState {
    pub x: f64,
    pub y: f64,
    pub target_y: f64,
    pub size: f64,
    /// Degrees
    pub rotation: f64,
    pub velocity: f64,
    pub gravity: f64,
}

impl CoinDropState {
    /// Coin centered horizontally, above the top edge, aimed at the middle
    pub fn new(width: f64, height: f64, tuning: &CoinTuning) -> Self {
        Self {
            x: width / 2.0,
            y: tuning.start_y,
            target_y: height / 2.0,
            size: tuning.size,
            rotation: 0.0,
            velocity: 0.0,
            gravity: tuning.gravity,
        }
    }

    /// Advance one frame
    pub fn step(&mut self, spin_per_frame: f64) {
        self.velocity += self.gravity;
        self.y += self.velocity;
        self.rotation += spin_per_frame;
    }

    /// Still above the stopping line (target plus overshoot)
    pub fn is_falling(&self, overshoot: f64) -> bool {
        self.y < self.target_y + overshoot
    }

    pub fn rotation_radians(&self) -> f64 {
        self.rotation.to_radians()
    }
}
