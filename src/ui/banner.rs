//! First-visit welcome banner
//!
//! Hidden -> Visible -> Fading -> Hidden, each step on a deadline. Like the
//! coin animation, the banner only reports when it next needs waking up.

use crate::consts::{BANNER_FADE_MS, BANNER_VISIBLE_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerPhase {
    /// `display: none`
    Hidden,
    /// Shown at full opacity
    Visible,
    /// Opacity 0, still laid out while the CSS transition runs
    Fading,
}

#[derive(Debug, Clone)]
pub struct Banner {
    phase: BannerPhase,
    deadline_ms: f64,
    visible_ms: f64,
    fade_ms: f64,
}

impl Default for Banner {
    fn default() -> Self {
        Self::new(BANNER_VISIBLE_MS, BANNER_FADE_MS)
    }
}

impl Banner {
    pub fn new(visible_ms: f64, fade_ms: f64) -> Self {
        Self {
            phase: BannerPhase::Hidden,
            deadline_ms: 0.0,
            visible_ms,
            fade_ms,
        }
    }

    pub fn phase(&self) -> BannerPhase {
        self.phase
    }

    /// Show the banner; returns the delay until the next `advance`
    pub fn show(&mut self, now_ms: f64) -> f64 {
        self.phase = BannerPhase::Visible;
        self.deadline_ms = now_ms + self.visible_ms;
        self.visible_ms
    }

    /// Move past any expired deadline. Returns the delay until the next
    /// transition, or `None` once hidden.
    pub fn advance(&mut self, now_ms: f64) -> Option<f64> {
        match self.phase {
            BannerPhase::Hidden => return None,
            _ if now_ms < self.deadline_ms => return Some(self.deadline_ms - now_ms),
            BannerPhase::Visible => {
                self.phase = BannerPhase::Fading;
                self.deadline_ms += self.fade_ms;
            }
            BannerPhase::Fading => {
                self.phase = BannerPhase::Hidden;
                return None;
            }
        }
        Some((self.deadline_ms - now_ms).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_timeline() {
        let mut banner = Banner::default();
        assert_eq!(banner.phase(), BannerPhase::Hidden);
        assert_eq!(banner.advance(0.0), None);

        assert_eq!(banner.show(1000.0), 5000.0);
        assert_eq!(banner.phase(), BannerPhase::Visible);

        assert_eq!(banner.advance(3000.0), Some(3000.0));
        assert_eq!(banner.phase(), BannerPhase::Visible);

        assert_eq!(banner.advance(6000.0), Some(500.0));
        assert_eq!(banner.phase(), BannerPhase::Fading);

        assert_eq!(banner.advance(6500.0), None);
        assert_eq!(banner.phase(), BannerPhase::Hidden);
    }

    #[test]
    fn test_late_wakeup() {
        let mut banner = Banner::new(100.0, 50.0);
        banner.show(0.0);
        // Woken well after both deadlines: fades first, then hides
        assert_eq!(banner.advance(1000.0), Some(0.0));
        assert_eq!(banner.phase(), BannerPhase::Fading);
        assert_eq!(banner.advance(1000.0), None);
        assert_eq!(banner.phase(), BannerPhase::Hidden);
    }
}
