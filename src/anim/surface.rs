//! Drawing surface the coin animation renders onto

use std::cell::RefCell;
use std::rc::Rc;

use super::coin::CoinDropState;

/// Full-viewport overlay the coin is drawn on
pub trait CoinSurface {
    /// Current drawing size (width, height)
    fn size(&self) -> (f64, f64);
    /// Match the viewport
    fn resize(&mut self, width: f64, height: f64);
    fn show(&mut self);
    fn hide(&mut self);
    fn clear(&mut self);
    fn draw_coin(&mut self, coin: &CoinDropState);
}

/// Operation performed on a `RecordingSurface`
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Resize { width: f64, height: f64 },
    Show,
    Hide,
    Clear,
    Draw { y: f64, rotation: f64 },
}

/// Surface that records what was done to it, for native runs and tests
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    visible: bool,
    ops: Rc<RefCell<Vec<SurfaceOp>>>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            visible: false,
            ops: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Shared handle to the operation log
    pub fn ops(&self) -> Rc<RefCell<Vec<SurfaceOp>>> {
        self.ops.clone()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn draw_count(&self) -> usize {
        self.ops
            .borrow()
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Draw { .. }))
            .count()
    }

    fn record(&self, op: SurfaceOp) {
        self.ops.borrow_mut().push(op);
    }
}

impl CoinSurface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.record(SurfaceOp::Resize { width, height });
    }

    fn show(&mut self) {
        self.visible = true;
        self.record(SurfaceOp::Show);
    }

    fn hide(&mut self) {
        self.visible = false;
        self.record(SurfaceOp::Hide);
    }

    fn clear(&mut self) {
        self.record(SurfaceOp::Clear);
    }

    fn draw_coin(&mut self, coin: &CoinDropState) {
        self.record(SurfaceOp::Draw {
            y: coin.y,
            rotation: coin.rotation,
        });
    }
}
