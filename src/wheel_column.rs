//! Scrolling wheel column.
//!
//! Paints one fixed-height row per option, offset vertically by the
//! controller's translate. Pointer presses, drags, releases and wheel
//! scrolling are turned into [`ColumnEvent`]s; timers, consumer value
//! changes, and window focus loss arrive as state updates on the view id.

use std::fmt;
use std::rc::Rc;

use floem::kurbo::{Point, Rect};
use floem::reactive::{create_effect, ReadSignal, SignalGet};
use floem::text::{Attrs, AttrsList, TextLayout, Weight};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventListener, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::column::{ColumnEvent, ColumnLayout};
use crate::constants;
use crate::controller::{ColumnController, ColumnMessage, Inbox, OnChange};
use crate::schedule::FloemScheduler;

pub(crate) struct WheelColumn<T: 'static> {
    id: ViewId,
    controller: ColumnController<T>,
    texts: Vec<String>,
    size: floem::taffy::prelude::Size<f32>,
}

/// Creates a column bound to `value`; selections are reported via `on_change`.
pub(crate) fn wheel_column<T: Clone + PartialEq + fmt::Debug + 'static>(
    name: String,
    options: Vec<T>,
    texts: Vec<String>,
    value: ReadSignal<T>,
    layout: ColumnLayout,
    on_change: OnChange<T>,
) -> WheelColumn<T> {
    let id = ViewId::new();

    // The first run only subscribes; the controller reads the initial value itself.
    create_effect(move |prev: Option<()>| {
        let v = value.get();
        if prev.is_some() {
            id.update_state(ColumnMessage::Value(v));
        }
    });

    let inbox: Inbox<T> = Rc::new(move |message: ColumnMessage<T>| {
        id.update_state(message);
    });

    let controller = ColumnController::new(
        name,
        options,
        value.get_untracked(),
        layout,
        Rc::new(FloemScheduler),
        inbox,
        on_change,
    );

    WheelColumn {
        id,
        controller,
        texts,
        size: Default::default(),
    }
    .style(move |s| {
        s.height(layout.column_height as f32)
            .width_full()
            .cursor(floem::style::CursorStyle::Pointer)
    })
    // An interrupted drag is discarded.
    .on_event_cont(EventListener::WindowLostFocus, move |_| {
        id.update_state(ColumnMessage::<T>::Event(ColumnEvent::Cancel));
    })
}

impl<T: Clone + PartialEq + fmt::Debug + 'static> WheelColumn<T> {
    fn dispatch(&mut self, event: ColumnEvent) -> EventPropagation {
        self.controller.handle(event);
        self.id.request_paint();
        EventPropagation::Stop
    }

    fn row_layout(text: &str, selected: bool) -> TextLayout {
        let (color, weight) = if selected {
            (constants::SELECTED_COLOR, Weight::MEDIUM)
        } else {
            (constants::ITEM_COLOR, Weight::NORMAL)
        };
        let attrs = Attrs::new()
            .color(color)
            .weight(weight)
            .font_size(constants::ITEM_FONT);
        let mut layout = TextLayout::new();
        layout.set_text(text, AttrsList::new(attrs));
        layout
    }
}

impl<T: Clone + PartialEq + fmt::Debug + 'static> View for WheelColumn<T> {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(message) = state.downcast::<ColumnMessage<T>>() {
            self.controller.receive(*message);
            self.id.request_paint();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.dispatch(ColumnEvent::Press { y: e.pos.y })
            }
            Event::PointerMove(e) => {
                if self.controller.state().is_pressed() {
                    self.dispatch(ColumnEvent::Move { y: e.pos.y })
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(e) => {
                if self.controller.state().is_pressed() {
                    self.dispatch(ColumnEvent::Release { y: e.pos.y })
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerWheel(e) => self.dispatch(ColumnEvent::Wheel { delta_y: e.delta.y }),
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }

        cx.save();
        cx.clip(&Rect::new(0.0, 0.0, w, h));

        let translate = self.controller.painted_translate();
        let item_height = self.controller.state().layout().item_height;
        let value = self.controller.value();
        for (i, (option, text)) in self
            .controller
            .options()
            .iter()
            .zip(&self.texts)
            .enumerate()
        {
            let top = translate + i as f64 * item_height;
            // Skip rows scrolled out of the window
            if top + item_height < 0.0 || top > h {
                continue;
            }
            let layout = Self::row_layout(text, option == value);
            let size = layout.size();
            let origin = Point::new(
                (w - size.width) / 2.0,
                top + (item_height - size.height) / 2.0,
            );
            cx.draw_text(&layout, origin);
        }

        cx.restore();
    }
}
