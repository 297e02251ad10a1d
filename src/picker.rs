//! Multi-column picker: a titled wheel column per group and a centre highlight.

use std::fmt;
use std::rc::Rc;

use floem::prelude::*;

use crate::column::ColumnLayout;
use crate::constants;
use crate::controller::OnChange;
use crate::group::PickerConfig;
use crate::wheel_column::wheel_column;

/// Creates the picker view.
///
/// One column is rendered per group, left to right in the order the groups
/// were added. `on_change(name, value)` fires whenever a column settles on a
/// new value (drag, wheel, or click). The consumer is expected to write the
/// value back into that group's signal; the column then recentres on it.
pub fn wheel_picker<T>(config: PickerConfig<T>, on_change: impl Fn(&str, T) + 'static) -> impl IntoView
where
    T: Clone + PartialEq + fmt::Debug + 'static,
{
    let PickerConfig {
        groups,
        item_height,
        height,
    } = config;
    let on_change: OnChange<T> = Rc::new(on_change);
    let layout = ColumnLayout {
        item_height,
        column_height: height,
    };

    let columns = groups.into_iter().map(move |(name, group)| {
        let (title, options, texts, value) = group.into_parts();
        v_stack((
            container(label(move || title.clone())).style(|s| {
                s.height(constants::TITLE_HEIGHT)
                    .width_full()
                    .items_center()
                    .justify_center()
                    .font_size(constants::TITLE_FONT)
                    .color(constants::TITLE_COLOR)
            }),
            wheel_column(name, options, texts, value, layout, on_change.clone()),
        ))
        .style(|s| s.flex_grow(1.0))
    });

    // Pointer events go to the last child under the pointer, so the band is
    // laid out first and the columns on top of it.
    let band_top = constants::TITLE_HEIGHT + (height / 2.0 - item_height / 2.0) as f32;
    let highlight = empty().style(move |s| {
        s.absolute()
            .inset_top(band_top)
            .inset_left(0.0)
            .width_full()
            .height(item_height as f32)
            .border_top(1.0)
            .border_bottom(1.0)
            .border_color(constants::HIGHLIGHT_BORDER)
    });

    container(
        stack((
            highlight,
            h_stack_from_iter(columns).style(|s| s.gap(constants::GAP).width_full()),
        ))
        .style(move |s| s.width_full().height(constants::TITLE_HEIGHT + height as f32)),
    )
    .style(|s| {
        s.padding(constants::PADDING)
            .background(constants::BACKGROUND)
    })
}
