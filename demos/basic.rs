//! Standalone demo: opens a window with a time picker.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_wheel::{wheel_picker, OptionGroup, PickerConfig, PickerError};

fn main() -> Result<(), PickerError> {
    env_logger::init();

    let hour = RwSignal::new(10u32);
    let minute = RwSignal::new(30u32);
    let meridiem = RwSignal::new(0u32);

    let hours: Vec<u32> = (1..=12).collect();
    let minutes: Vec<u32> = (0..60).collect();
    let minute_texts = minutes.iter().map(|m| format!("{m:02}")).collect();

    let config = PickerConfig::new()
        .group("hour", OptionGroup::from_options("Hour", hours, hour.read_only()))?
        .group(
            "minute",
            OptionGroup::new("Minute", minutes, minute_texts, minute.read_only()),
        )?
        .group(
            "meridiem",
            OptionGroup::new(
                "",
                vec![0, 1],
                vec!["AM".to_string(), "PM".to_string()],
                meridiem.read_only(),
            ),
        )?;

    floem::Application::new()
        .window(
            move |_| {
                wheel_picker(config, move |name, value| {
                    log::info!("{name} -> {value}");
                    match name {
                        "hour" => hour.set(value),
                        "minute" => minute.set(value),
                        _ => meridiem.set(value),
                    }
                })
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((320.0, 280.0))
                    .title("floem-wheel"),
            ),
        )
        .run();
    Ok(())
}
