//! Runs a [`ColumnState`] against real options, callbacks, and a scheduler.
//!
//! Deferred work re-enters the controller through its inbox. Every task it
//! schedules holds only a weak handle to the controller's liveness token, so
//! once the controller is dropped its pending snaps and timers do nothing.

use std::fmt;
use std::rc::{Rc, Weak};

use log::{debug, trace, warn};

use crate::column::{ColumnEffect, ColumnEvent, ColumnLayout, ColumnState};
use crate::constants;
use crate::error::PickerError;
use crate::glide::Glide;
use crate::schedule::Scheduler;

/// Message delivered to a column, either directly or from deferred work.
#[derive(Debug, Clone)]
pub(crate) enum ColumnMessage<T> {
    Event(ColumnEvent),
    /// The consumer's value changed.
    Value(T),
    /// Animation frame.
    Tick,
}

pub(crate) type Inbox<T> = Rc<dyn Fn(ColumnMessage<T>)>;
pub(crate) type OnChange<T> = Rc<dyn Fn(&str, T)>;

pub(crate) struct ColumnController<T: 'static> {
    name: String,
    options: Vec<T>,
    value: T,
    state: ColumnState,
    glide: Glide,
    tick_pending: bool,
    scheduler: Rc<dyn Scheduler>,
    inbox: Inbox<T>,
    on_change: OnChange<T>,
    alive: Rc<()>,
}

impl<T: Clone + PartialEq + fmt::Debug + 'static> ColumnController<T> {
    pub(crate) fn new(
        name: String,
        options: Vec<T>,
        value: T,
        layout: ColumnLayout,
        scheduler: Rc<dyn Scheduler>,
        inbox: Inbox<T>,
        on_change: OnChange<T>,
    ) -> Self {
        let selected = locate(&name, &options, &value);
        let (state, effect) = ColumnState::new(selected, options.len(), layout);
        let mut controller = Self {
            name,
            options,
            value,
            glide: Glide::new(state.scroller_translate()),
            state,
            tick_pending: false,
            scheduler,
            inbox,
            on_change,
            alive: Rc::new(()),
        };
        if let Some(effect) = effect {
            controller.run(effect);
        }
        controller
    }

    pub(crate) fn state(&self) -> &ColumnState {
        &self.state
    }

    pub(crate) fn options(&self) -> &[T] {
        &self.options
    }

    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    /// Offset to paint at: the live translate mid-drag, the glide otherwise.
    pub(crate) fn painted_translate(&self) -> f64 {
        if self.state.is_moving() {
            self.state.scroller_translate()
        } else {
            self.glide.current()
        }
    }

    pub(crate) fn receive(&mut self, message: ColumnMessage<T>) {
        match message {
            ColumnMessage::Event(event) => self.handle(event),
            ColumnMessage::Value(value) => {
                self.value = value;
                self.reconcile();
            }
            ColumnMessage::Tick => {
                self.tick_pending = false;
                if self.state.is_moving() {
                    return;
                }
                if self.glide.tick() {
                    self.schedule_tick();
                }
            }
        }
    }

    pub(crate) fn handle(&mut self, event: ColumnEvent) {
        trace!("{}: {:?}", self.name, event);
        if matches!(event, ColumnEvent::Press { .. }) && self.glide.is_animating() {
            // Gestures start from what is on screen, not from the glide target.
            self.handle_quiet(ColumnEvent::Hold {
                translate: self.glide.current(),
            });
        }
        let (state, effect) = self.state.apply(event);
        self.state = state;
        let recentre = match event {
            ColumnEvent::Snap | ColumnEvent::WheelIdle { .. } => {
                matches!(effect, Some(ColumnEffect::Select(_)))
            }
            ColumnEvent::Release { .. } => effect != Some(ColumnEffect::DeferSnap),
            ColumnEvent::Cancel => true,
            _ => false,
        };
        if let Some(effect) = effect {
            self.run(effect);
        }
        if recentre {
            // Recentre on whatever the consumer holds now, even if unchanged.
            self.reconcile();
        } else {
            self.follow();
        }
    }

    fn reconcile(&mut self) {
        let selected = locate(&self.name, &self.options, &self.value);
        let layout = self.state.layout();
        self.handle_quiet(ColumnEvent::Reconcile {
            selected,
            count: self.options.len(),
            layout,
        });
    }

    fn handle_quiet(&mut self, event: ColumnEvent) {
        let (state, effect) = self.state.apply(event);
        self.state = state;
        if let Some(effect) = effect {
            self.run(effect);
        }
        self.follow();
    }

    fn run(&mut self, effect: ColumnEffect) {
        match effect {
            ColumnEffect::Select(index) => {
                let Some(option) = self.options.get(index).cloned() else {
                    return;
                };
                debug!("{}: selecting {:?} (row {})", self.name, option, index);
                (self.on_change)(&self.name, option);
            }
            ColumnEffect::DeferSnap => {
                let task = self.deliver(ColumnMessage::Event(ColumnEvent::Snap));
                self.scheduler.defer(task);
            }
            ColumnEffect::ArmWheelTimer { generation } => {
                let task = self.deliver(ColumnMessage::Event(ColumnEvent::WheelIdle { generation }));
                self.scheduler.after(constants::WHEEL_IDLE, task);
            }
        }
    }

    /// Keep the glide in step with the state's translate.
    fn follow(&mut self) {
        let translate = self.state.scroller_translate();
        if self.state.is_moving() {
            self.glide.jump(translate);
            return;
        }
        self.glide.set_target(translate);
        if self.glide.is_animating() {
            self.schedule_tick();
        }
    }

    fn schedule_tick(&mut self) {
        if self.tick_pending {
            return;
        }
        self.tick_pending = true;
        let task = self.deliver(ColumnMessage::Tick);
        self.scheduler.after(constants::FRAME, task);
    }

    /// Task that posts `message` to the inbox if this controller still exists.
    fn deliver(&self, message: ColumnMessage<T>) -> Box<dyn FnOnce()> {
        let token: Weak<()> = Rc::downgrade(&self.alive);
        let inbox = self.inbox.clone();
        Box::new(move || {
            if token.upgrade().is_some() {
                inbox(message);
            }
        })
    }
}

fn locate<T: PartialEq + fmt::Debug>(name: &str, options: &[T], value: &T) -> Option<usize> {
    if options.is_empty() {
        warn!(
            "{}",
            PickerError::EmptyGroup {
                group: name.to_string()
            }
        );
        return None;
    }
    let found = options.iter().position(|o| o == value);
    if found.is_none() {
        warn!(
            "{}",
            PickerError::ValueNotFound {
                group: name.to_string(),
                value: format!("{value:?}"),
            }
        );
    }
    found
}
