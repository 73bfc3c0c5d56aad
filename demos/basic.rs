//! Standalone demo: opens a window with the channel picker.
//!
//! `RUST_LOG=debug cargo run --example basic` shows the session log.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_channel_picker::{channel_picker, ColorSpace, PickerConfig, Rgba};

fn main() {
    env_logger::init();

    let space = match std::env::args().nth(1).as_deref() {
        Some("rgb") | Some("rgba") => ColorSpace::Rgba,
        _ => ColorSpace::Hsba,
    };
    let seed = Rgba::from_hex("3B82F6").unwrap_or_default();

    floem::Application::new()
        .window(
            move |_| {
                channel_picker(
                    seed,
                    PickerConfig::with_space(space),
                    |picked| {
                        log::info!("Picked {}", picked);
                        floem::quit_app()
                    },
                    floem::quit_app,
                )
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((320.0, 300.0))
                    .title("floem-channel-picker"),
            ),
        )
        .run();
}
