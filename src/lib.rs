//! # floem-wheel
//!
//! A multi-column wheel value picker (think date or time selector) for
//! [Floem](https://github.com/lapce/floem).
//!
//! Each named group renders as one column that can be dragged, scrolled with
//! the mouse wheel, or clicked. When a gesture ends the column snaps to the
//! nearest row and reports the value through a single change callback.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_wheel::{wheel_picker, OptionGroup, PickerConfig};
//!
//! let meridiem = RwSignal::new("AM");
//! let config = PickerConfig::new()
//!     .group(
//!         "meridiem",
//!         OptionGroup::from_options("", vec!["AM", "PM"], meridiem.read_only()),
//!     )
//!     .unwrap();
//! // Use `wheel_picker(config, move |_, v| meridiem.set(v))` in your Floem view tree.
//! ```
//!
//! The interaction logic is also usable headless through [`ColumnState`].

mod column;
mod constants;
mod controller;
mod error;
mod glide;
mod group;
mod math;
mod picker;
mod schedule;
mod wheel_column;

pub use column::{ColumnEffect, ColumnEvent, ColumnLayout, ColumnState};
pub use error::PickerError;
pub use group::{OptionGroup, PickerConfig};
pub use math::Bounds;
pub use picker::wheel_picker;

/// Default row height.
pub const DEFAULT_ITEM_HEIGHT: f64 = constants::ITEM_HEIGHT;

/// Default visible window height.
pub const DEFAULT_HEIGHT: f64 = constants::HEIGHT;
