//! Sizing, timing, and styling constants for the picker.

use std::time::Duration;

use floem::peniko::Color;

/// Default height of one option row
pub const ITEM_HEIGHT: f64 = 36.0;

/// Default height of the visible scroll window (6 rows)
pub const HEIGHT: f64 = 216.0;

/// Exponent applied to the overshoot distance past either end
pub const RUBBER_BAND_EXPONENT: f64 = 0.8;

/// Idle time after the last wheel event before the column snaps
pub const WHEEL_IDLE: Duration = Duration::from_millis(250);

/// Animation frame interval for the snap glide
pub const FRAME: Duration = Duration::from_millis(16);

/// Fraction of the remaining distance covered per glide frame
pub const GLIDE_SPEED: f64 = 0.3;

/// Height of the title row above each column
pub const TITLE_HEIGHT: f32 = 24.0;

/// Title font size
pub const TITLE_FONT: f32 = 12.0;

/// Row label font size
pub const ITEM_FONT: f32 = 16.0;

/// Horizontal gap between columns
pub const GAP: f32 = 4.0;

/// Padding around the whole picker
pub const PADDING: f32 = 8.0;

pub const BACKGROUND: Color = Color::rgb8(242, 242, 242);
pub const ITEM_COLOR: Color = Color::rgb8(153, 153, 153);
pub const SELECTED_COLOR: Color = Color::rgb8(34, 34, 34);
pub const TITLE_COLOR: Color = Color::rgb8(120, 120, 120);
pub const HIGHLIGHT_BORDER: Color = Color::rgba8(0, 0, 0, 40);
