//! Gesture state machine for one wheel column.
//!
//! [`ColumnState::apply`] is a pure transition `(state, event) -> (state, effect)`.
//! The view feeds it pointer, wheel, and timer events and carries out the
//! returned [`ColumnEffect`]; nothing here touches Floem, so every gesture
//! can be replayed in a unit test.

use crate::math::{self, Bounds};

/// Shared sizing of a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnLayout {
    pub item_height: f64,
    pub column_height: f64,
}

/// Input to [`ColumnState::apply`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnEvent {
    /// New props: the bound value's index (if any), option count, and sizing.
    Reconcile {
        selected: Option<usize>,
        count: usize,
        layout: ColumnLayout,
    },
    /// Stop an in-flight animation at the offset currently on screen.
    Hold { translate: f64 },
    Press { y: f64 },
    Move { y: f64 },
    Release { y: f64 },
    Cancel,
    /// A row was clicked directly.
    Click { index: usize },
    Wheel { delta_y: f64 },
    /// The idle timer armed for wheel burst `generation` fired.
    WheelIdle { generation: u64 },
    /// Settle on the nearest row and commit it.
    Snap,
}

/// Work the owner of a [`ColumnState`] has to do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnEffect {
    /// Report `options[index]` through the change callback.
    Select(usize),
    /// Run [`ColumnEvent::Snap`] on the next scheduling turn.
    DeferSnap,
    /// Deliver [`ColumnEvent::WheelIdle`] with `generation` after the wheel idle delay.
    ArmWheelTimer { generation: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnState {
    layout: ColumnLayout,
    count: usize,
    selected: Option<usize>,
    pressed: bool,
    is_moving: bool,
    start_touch_y: f64,
    start_scroller_translate: f64,
    scroller_translate: f64,
    bounds: Bounds,
    wheel_generation: u64,
    wheel_pending: bool,
}

impl ColumnState {
    /// Build the state for a freshly mounted column.
    ///
    /// Returns the recovery selection as well when `selected` is `None`.
    pub fn new(
        selected: Option<usize>,
        count: usize,
        layout: ColumnLayout,
    ) -> (Self, Option<ColumnEffect>) {
        let empty = Self {
            layout,
            count: 0,
            selected: None,
            pressed: false,
            is_moving: false,
            start_touch_y: 0.0,
            start_scroller_translate: 0.0,
            scroller_translate: 0.0,
            bounds: Bounds { min: 0.0, max: 0.0 },
            wheel_generation: 0,
            wheel_pending: false,
        };
        empty.apply(ColumnEvent::Reconcile {
            selected,
            count,
            layout,
        })
    }

    pub fn scroller_translate(&self) -> f64 {
        self.scroller_translate
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// True while a drag is being tracked; incoming props are ignored meanwhile.
    pub fn is_moving(&self) -> bool {
        self.is_moving
    }

    /// True between a press and its release or cancel.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn layout(&self) -> ColumnLayout {
        self.layout
    }

    #[must_use]
    pub fn apply(self, event: ColumnEvent) -> (Self, Option<ColumnEffect>) {
        match event {
            ColumnEvent::Reconcile {
                selected,
                count,
                layout,
            } => self.reconcile(selected, count, layout),
            ColumnEvent::Hold { translate } => {
                if self.is_moving {
                    return (self, None);
                }
                (
                    Self {
                        scroller_translate: translate,
                        ..self
                    },
                    None,
                )
            }
            ColumnEvent::Press { y } => (
                Self {
                    pressed: true,
                    start_touch_y: y,
                    start_scroller_translate: self.scroller_translate,
                    ..self
                },
                None,
            ),
            ColumnEvent::Move { y } => (self.drag(y), None),
            ColumnEvent::Release { y } => self.release(y),
            ColumnEvent::Cancel => {
                if !self.is_moving {
                    return (self.clear_gesture(), None);
                }
                let restored = Self {
                    scroller_translate: self.start_scroller_translate,
                    ..self
                };
                (restored.clear_gesture(), None)
            }
            ColumnEvent::Click { index } => self.click(index),
            ColumnEvent::Wheel { delta_y } => self.wheel(delta_y),
            ColumnEvent::WheelIdle { generation } => {
                if !self.wheel_pending || generation != self.wheel_generation {
                    return (self, None);
                }
                let idle = Self {
                    wheel_pending: false,
                    ..self
                };
                idle.apply(ColumnEvent::Snap)
            }
            ColumnEvent::Snap => self.snap(),
        }
    }

    fn reconcile(
        self,
        selected: Option<usize>,
        count: usize,
        layout: ColumnLayout,
    ) -> (Self, Option<ColumnEffect>) {
        if self.is_moving {
            return (self, None);
        }
        let ColumnLayout {
            item_height,
            column_height,
        } = layout;
        let base = Self {
            layout,
            count,
            selected,
            ..self
        };
        if count == 0 {
            let centre = math::translate_for_index(0, item_height, column_height);
            let next = Self {
                scroller_translate: centre,
                bounds: Bounds {
                    min: centre,
                    max: centre,
                },
                selected: None,
                ..base
            };
            return (next, None);
        }
        let (index, effect) = match selected.filter(|&i| i < count) {
            Some(i) => (i, None),
            None => (0, Some(ColumnEffect::Select(0))),
        };
        let next = Self {
            scroller_translate: math::translate_for_index(index, item_height, column_height),
            bounds: math::bounds(count, item_height, column_height),
            ..base
        };
        (next, effect)
    }

    fn drag(self, y: f64) -> Self {
        if !self.pressed {
            return self;
        }
        if !self.is_moving {
            return Self {
                is_moving: true,
                ..self
            };
        }
        let raw = self.start_scroller_translate + y - self.start_touch_y;
        Self {
            scroller_translate: math::rubber_band(raw, self.bounds),
            ..self
        }
    }

    fn release(self, y: f64) -> (Self, Option<ColumnEffect>) {
        if self.is_moving {
            return (self.clear_gesture(), Some(ColumnEffect::DeferSnap));
        }
        if !self.pressed {
            return (self, None);
        }
        let cleared = self.clear_gesture();
        match math::row_at(
            y,
            self.scroller_translate,
            self.layout.item_height,
            self.count,
        ) {
            Some(index) => cleared.click(index),
            None => (cleared, None),
        }
    }

    fn click(self, index: usize) -> (Self, Option<ColumnEffect>) {
        if index >= self.count || self.selected == Some(index) {
            return (self, None);
        }
        (self, Some(ColumnEffect::Select(index)))
    }

    fn wheel(self, delta_y: f64) -> (Self, Option<ColumnEffect>) {
        if self.count == 0 {
            return (self, None);
        }
        let generation = self.wheel_generation.wrapping_add(1);
        let next = Self {
            scroller_translate: math::clamp_translate(
                self.scroller_translate + delta_y.round(),
                self.bounds,
            ),
            wheel_generation: generation,
            wheel_pending: true,
            ..self
        };
        (next, Some(ColumnEffect::ArmWheelTimer { generation }))
    }

    fn snap(self) -> (Self, Option<ColumnEffect>) {
        if self.is_moving || self.count == 0 {
            return (self, None);
        }
        let index = math::snap_index(
            self.scroller_translate,
            self.bounds,
            self.layout.item_height,
            self.count,
        );
        (self, Some(ColumnEffect::Select(index)))
    }

    fn clear_gesture(self) -> Self {
        Self {
            pressed: false,
            is_moving: false,
            start_touch_y: 0.0,
            start_scroller_translate: 0.0,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(item_height: f64, column_height: f64) -> ColumnLayout {
        ColumnLayout {
            item_height,
            column_height,
        }
    }

    fn column(selected: usize, count: usize) -> ColumnState {
        let (state, effect) = ColumnState::new(Some(selected), count, layout(36.0, 216.0));
        assert_eq!(effect, None);
        state
    }

    fn run(state: ColumnState, events: &[ColumnEvent]) -> (ColumnState, Vec<ColumnEffect>) {
        let mut effects = Vec::new();
        let mut state = state;
        for &event in events {
            let (next, effect) = state.apply(event);
            state = next;
            effects.extend(effect);
        }
        (state, effects)
    }

    #[test]
    fn am_pm_drag_selects_pm() {
        let (state, effect) = ColumnState::new(Some(0), 2, layout(36.0, 72.0));
        assert_eq!(effect, None);
        assert_eq!(state.scroller_translate(), 18.0);
        assert_eq!(state.bounds(), Bounds { min: -18.0, max: 18.0 });

        let (state, effects) = run(
            state,
            &[
                ColumnEvent::Press { y: 100.0 },
                ColumnEvent::Move { y: 99.0 },
                ColumnEvent::Move { y: 64.0 },
                ColumnEvent::Release { y: 64.0 },
            ],
        );
        assert_eq!(effects, vec![ColumnEffect::DeferSnap]);
        assert!(!state.is_moving());

        let (_, effect) = state.apply(ColumnEvent::Snap);
        assert_eq!(effect, Some(ColumnEffect::Select(1)));
    }

    #[test]
    fn first_move_only_marks_the_gesture() {
        let start = column(2, 5);
        let (state, _) = run(
            start,
            &[ColumnEvent::Press { y: 50.0 }, ColumnEvent::Move { y: 10.0 }],
        );
        assert!(state.is_moving());
        assert_eq!(state.scroller_translate(), start.scroller_translate());

        let (state, _) = state.apply(ColumnEvent::Move { y: 30.0 });
        assert_eq!(state.scroller_translate(), start.scroller_translate() - 20.0);
    }

    #[test]
    fn hover_moves_without_press_are_ignored() {
        let start = column(1, 3);
        let (state, effects) = run(
            start,
            &[ColumnEvent::Move { y: 10.0 }, ColumnEvent::Move { y: 90.0 }],
        );
        assert_eq!(state, start);
        assert!(effects.is_empty());
    }

    #[test]
    fn drag_past_top_rubber_bands() {
        let start = column(0, 5);
        let max = start.bounds().max;
        let (state, _) = run(
            start,
            &[
                ColumnEvent::Press { y: 0.0 },
                ColumnEvent::Move { y: 1.0 },
                ColumnEvent::Move { y: 100.0 },
            ],
        );
        let expected = max + 100f64.powf(0.8);
        assert!((state.scroller_translate() - expected).abs() < 1e-9);
        assert!(state.scroller_translate() < max + 100.0);
    }

    #[test]
    fn overshoot_release_snaps_to_ends() {
        let start = column(2, 5);
        let (state, _) = run(
            start,
            &[
                ColumnEvent::Press { y: 0.0 },
                ColumnEvent::Move { y: 1.0 },
                ColumnEvent::Move { y: 1000.0 },
                ColumnEvent::Release { y: 1000.0 },
            ],
        );
        assert_eq!(state.apply(ColumnEvent::Snap).1, Some(ColumnEffect::Select(0)));

        let (state, _) = run(
            start,
            &[
                ColumnEvent::Press { y: 1000.0 },
                ColumnEvent::Move { y: 999.0 },
                ColumnEvent::Move { y: 0.0 },
                ColumnEvent::Release { y: 0.0 },
            ],
        );
        assert_eq!(state.apply(ColumnEvent::Snap).1, Some(ColumnEffect::Select(4)));
    }

    #[test]
    fn cancel_restores_start_translate_silently() {
        let start = column(1, 4);
        let t0 = start.scroller_translate();
        let (state, effects) = run(
            start,
            &[
                ColumnEvent::Press { y: 40.0 },
                ColumnEvent::Move { y: 41.0 },
                ColumnEvent::Move { y: 10.0 },
            ],
        );
        assert_ne!(state.scroller_translate(), t0);

        let (state, effect) = state.apply(ColumnEvent::Cancel);
        assert_eq!(state.scroller_translate(), t0);
        assert!(!state.is_moving());
        assert!(!state.is_pressed());
        assert!(effects.is_empty());
        assert_eq!(effect, None);
    }

    #[test]
    fn release_without_move_is_a_click_on_the_row_underneath() {
        let start = column(0, 5);
        let t = start.scroller_translate();
        let y = t + 36.0 * 2.0 + 5.0;
        let (state, effects) = run(
            start,
            &[ColumnEvent::Press { y }, ColumnEvent::Release { y }],
        );
        assert_eq!(effects, vec![ColumnEffect::Select(2)]);
        assert!(!state.is_pressed());
    }

    #[test]
    fn click_bypasses_the_offset() {
        let start = column(0, 5);
        let (_, effect) = start.apply(ColumnEvent::Click { index: 2 });
        assert_eq!(effect, Some(ColumnEffect::Select(2)));

        let (_, effect) = start.apply(ColumnEvent::Click { index: 0 });
        assert_eq!(effect, None);
    }

    #[test]
    fn missing_value_recovers_to_first_option() {
        let (state, effect) = ColumnState::new(None, 3, layout(36.0, 216.0));
        assert_eq!(effect, Some(ColumnEffect::Select(0)));
        assert_eq!(state.scroller_translate(), 216.0 / 2.0 - 18.0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn reconcile_is_ignored_mid_drag() {
        let start = column(0, 5);
        let (moving, _) = run(
            start,
            &[ColumnEvent::Press { y: 0.0 }, ColumnEvent::Move { y: 1.0 }],
        );
        let (after, effect) = moving.apply(ColumnEvent::Reconcile {
            selected: Some(4),
            count: 5,
            layout: layout(36.0, 216.0),
        });
        assert_eq!(after, moving);
        assert_eq!(effect, None);
    }

    #[test]
    fn reconcile_follows_new_props() {
        let start = column(0, 5);
        let (state, effect) = start.apply(ColumnEvent::Reconcile {
            selected: Some(3),
            count: 10,
            layout: layout(40.0, 200.0),
        });
        assert_eq!(effect, None);
        assert_eq!(state.scroller_translate(), 100.0 - 20.0 - 120.0);
        assert_eq!(state.bounds(), Bounds { min: 100.0 - 400.0 + 20.0, max: 80.0 });
        assert_eq!(state.count(), 10);
    }

    #[test]
    fn wheel_clamps_and_rearms() {
        let start = column(0, 5);
        let (state, effects) = run(
            start,
            &[
                ColumnEvent::Wheel { delta_y: 50.0 },
                ColumnEvent::Wheel { delta_y: -40.4 },
                ColumnEvent::Wheel { delta_y: -10.0 },
            ],
        );
        assert_eq!(state.scroller_translate(), start.bounds().max - 50.0);
        assert_eq!(
            effects,
            vec![
                ColumnEffect::ArmWheelTimer { generation: 1 },
                ColumnEffect::ArmWheelTimer { generation: 2 },
                ColumnEffect::ArmWheelTimer { generation: 3 },
            ]
        );

        // Timers from earlier in the burst are stale.
        let (state, effect) = state.apply(ColumnEvent::WheelIdle { generation: 2 });
        assert_eq!(effect, None);
        let (state, effect) = state.apply(ColumnEvent::WheelIdle { generation: 3 });
        assert_eq!(effect, Some(ColumnEffect::Select(2)));

        // Already settled.
        let (_, effect) = state.apply(ColumnEvent::WheelIdle { generation: 3 });
        assert_eq!(effect, None);
    }

    #[test]
    fn hold_pins_the_offset_until_a_drag_starts() {
        let start = column(0, 5);
        let (held, _) = start.apply(ColumnEvent::Hold { translate: 40.0 });
        assert_eq!(held.scroller_translate(), 40.0);

        let (state, _) = run(
            held,
            &[
                ColumnEvent::Press { y: 0.0 },
                ColumnEvent::Move { y: 1.0 },
                ColumnEvent::Move { y: 5.0 },
            ],
        );
        assert_eq!(state.scroller_translate(), 45.0);

        let (state, _) = state.apply(ColumnEvent::Hold { translate: -100.0 });
        assert_eq!(state.scroller_translate(), 45.0);
    }

    #[test]
    fn empty_group_never_selects() {
        let (state, effect) = ColumnState::new(None, 0, layout(36.0, 216.0));
        assert_eq!(effect, None);
        let (_, effects) = run(
            state,
            &[
                ColumnEvent::Wheel { delta_y: 10.0 },
                ColumnEvent::Snap,
                ColumnEvent::Click { index: 0 },
            ],
        );
        assert!(effects.is_empty());
    }
}
