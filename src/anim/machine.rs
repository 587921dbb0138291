//! Coin-drop animation state machine
//!
//! Idle -> Running -> Settling -> Idle. The machine never schedules anything
//! itself: every entry point returns the `Schedule` the driver must arrange
//! (an animation frame, a one-shot timer, or nothing), and the driver feeds
//! the current time back in through `advance`.

use super::coin::CoinDropState;
use super::surface::CoinSurface;
use crate::tuning::CoinTuning;

/// Invoked once when a run has finished and the surface is hidden
pub type Completion = Box<dyn FnOnce()>;

/// Observable state of the animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    /// Coin has landed; waiting out the settle delay
    Settling,
}

/// What the driver should arrange next
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Schedule {
    /// Call `advance` on the next display refresh
    Frame,
    /// Call `advance` after `delay_ms`
    Timer { delay_ms: f64 },
    /// Nothing pending
    Idle,
}

/// Result of `play`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayOutcome {
    Started(Schedule),
    /// A run was already in flight; the request and its callback were dropped
    AlreadyRunning,
}

enum State {
    Idle,
    Running(CoinDropState),
    Settling { deadline_ms: f64 },
}

pub struct CoinDropAnimation<S> {
    surface: S,
    tuning: CoinTuning,
    state: State,
    on_complete: Option<Completion>,
}

impl<S: CoinSurface> CoinDropAnimation<S> {
    pub fn new(surface: S, tuning: CoinTuning) -> Self {
        Self {
            surface,
            tuning,
            state: State::Idle,
            on_complete: None,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            State::Idle => Phase::Idle,
            State::Running(_) => Phase::Running,
            State::Settling { .. } => Phase::Settling,
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase() != Phase::Idle
    }

    /// Coin currently in flight
    pub fn coin(&self) -> Option<&CoinDropState> {
        match &self.state {
            State::Running(coin) => Some(coin),
            _ => None,
        }
    }

    /// Start a run and render its first frame right away
    pub fn play(&mut self, now_ms: f64, on_complete: Option<Completion>) -> PlayOutcome {
        if self.is_active() {
            log::debug!("Coin drop already in flight, ignoring play");
            return PlayOutcome::AlreadyRunning;
        }

        let (width, height) = self.surface.size();
        self.surface.show();
        self.state = State::Running(CoinDropState::new(width, height, &self.tuning));
        self.on_complete = on_complete;
        log::debug!("Coin drop started ({}x{})", width, height);

        PlayOutcome::Started(self.frame(now_ms))
    }

    /// Handle a frame tick or timer expiry
    pub fn advance(&mut self, now_ms: f64) -> Schedule {
        match self.state {
            State::Idle => Schedule::Idle,
            State::Running(_) => self.frame(now_ms),
            State::Settling { deadline_ms } if now_ms >= deadline_ms => {
                self.finish();
                Schedule::Idle
            }
            State::Settling { deadline_ms } => Schedule::Timer {
                delay_ms: deadline_ms - now_ms,
            },
        }
    }

    /// Keep the surface matched to the viewport, whatever the phase
    pub fn resize(&mut self, width: f64, height: f64) {
        self.surface.resize(width, height);
    }

    fn frame(&mut self, now_ms: f64) -> Schedule {
        let State::Running(coin) = &mut self.state else {
            return Schedule::Idle;
        };

        coin.step(self.tuning.spin_per_frame);
        self.surface.clear();
        self.surface.draw_coin(coin);

        if coin.is_falling(self.tuning.overshoot) {
            return Schedule::Frame;
        }

        self.state = State::Settling {
            deadline_ms: now_ms + self.tuning.settle_ms,
        };
        Schedule::Timer {
            delay_ms: self.tuning.settle_ms,
        }
    }

    fn finish(&mut self) {
        self.surface.clear();
        self.surface.hide();
        self.state = State::Idle;
        log::debug!("Coin drop finished");
        if let Some(on_complete) = self.on_complete.take() {
            on_complete();
        }
    }
}
