//! Ease-out motion of the painted offset toward the column's translate.
//!
//! While a drag is tracked the painted offset follows the pointer exactly.
//! Otherwise each frame covers a fixed fraction of the remaining distance,
//! which is what makes snaps and external value changes slide into place.

use crate::constants;

/// Sub-pixel distance at which the glide settles.
const SETTLE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Glide {
    current: f64,
    target: f64,
}

impl Glide {
    pub(crate) fn new(at: f64) -> Self {
        Self {
            current: at,
            target: at,
        }
    }

    /// Move immediately, no animation.
    pub(crate) fn jump(&mut self, to: f64) {
        self.current = to;
        self.target = to;
    }

    pub(crate) fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Advance one frame. Returns whether more frames are needed.
    pub(crate) fn tick(&mut self) -> bool {
        self.current += (self.target - self.current) * constants::GLIDE_SPEED;
        if (self.target - self.current).abs() < SETTLE {
            self.current = self.target;
        }
        self.is_animating()
    }

    pub(crate) fn current(&self) -> f64 {
        self.current
    }

    pub(crate) fn is_animating(&self) -> bool {
        self.current != self.target
    }
}
