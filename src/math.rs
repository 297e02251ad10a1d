//! Offset math for a single wheel column.
//!
//! A column lays its rows out top to bottom starting at `translate`, so row
//! `i` occupies `translate + i * item_height .. translate + (i + 1) * item_height`
//! in the column's local coordinates. All functions are pure.

use crate::constants;

/// Scroll bounds of a column.
///
/// `max` centres the first row on the middle line, `min` centres the last.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

/// Offset that centres row `index` in a window of `column_height`.
pub(crate) fn translate_for_index(index: usize, item_height: f64, column_height: f64) -> f64 {
    column_height / 2.0 - item_height / 2.0 - index as f64 * item_height
}

/// Bounds for `count` rows. Only meaningful for `count >= 1`.
pub(crate) fn bounds(count: usize, item_height: f64, column_height: f64) -> Bounds {
    Bounds {
        min: column_height / 2.0 - item_height * count as f64 + item_height / 2.0,
        max: column_height / 2.0 - item_height / 2.0,
    }
}

/// Apply sub-linear resistance to the part of `raw` that lies past `bounds`.
pub(crate) fn rubber_band(raw: f64, bounds: Bounds) -> f64 {
    if raw < bounds.min {
        bounds.min - (bounds.min - raw).powf(constants::RUBBER_BAND_EXPONENT)
    } else if raw > bounds.max {
        bounds.max + (raw - bounds.max).powf(constants::RUBBER_BAND_EXPONENT)
    } else {
        raw
    }
}

/// Hard clamp used by wheel scrolling (no rubber band).
pub(crate) fn clamp_translate(translate: f64, bounds: Bounds) -> f64 {
    translate.max(bounds.min).min(bounds.max)
}

/// Index of the row a released column settles on.
///
/// Overshooting the top selects the first row and overshooting the bottom
/// selects the last. Inside the bounds the row boundary at or below the
/// offset wins, i.e. `-floor((translate - max) / item_height)`.
pub(crate) fn snap_index(translate: f64, bounds: Bounds, item_height: f64, count: usize) -> usize {
    let last = count.saturating_sub(1);
    if translate > bounds.max {
        0
    } else if translate < bounds.min {
        last
    } else {
        let steps = ((bounds.max - translate) / item_height).ceil();
        (steps.max(0.0) as usize).min(last)
    }
}

/// Row under local `y` for a column scrolled to `translate`.
pub(crate) fn row_at(y: f64, translate: f64, item_height: f64, count: usize) -> Option<usize> {
    if item_height <= 0.0 {
        return None;
    }
    let row = ((y - translate) / item_height).floor();
    if row < 0.0 || row >= count as f64 {
        None
    } else {
        Some(row as usize)
    }
}
