//! Numeric readouts and the copy button next to the sliders.

use floem::event::EventPropagation;
use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};

use crate::constants;

fn display(normalized: f64, scale: f64) -> String {
    format!("{}", (normalized * scale).round() as i64)
}

fn is_enter(event: &floem::event::Event) -> bool {
    match event {
        floem::event::Event::KeyDown(ke) => {
            ke.key.logical_key == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
        }
        _ => false,
    }
}

/// An editable number showing a 0.0–1.0 channel on a 0–`scale` range
/// (0–255 for RGB, 0–360 for hue, 0–100 for the rest).
///
/// Typed values are committed on Enter or focus loss and clamped.
pub(crate) fn number_input(signal: RwSignal<f64>, scale: f64) -> impl IntoView {
    let text = RwSignal::new(display(signal.get_untracked(), scale));

    // Slider → text
    create_effect(move |_| {
        let expected = display(signal.get(), scale);
        if text.get_untracked() != expected {
            text.set(expected);
        }
    });

    let on_commit = move || {
        let raw = text.get_untracked();
        match raw.trim().parse::<f64>() {
            Ok(num) if num.is_finite() => {
                let clamped = num.clamp(0.0, scale).round();
                if display(signal.get_untracked(), scale) != display(clamped / scale, scale) {
                    signal.set(clamped / scale);
                }
                let formatted = format!("{}", clamped as i64);
                if raw != formatted {
                    text.set(formatted);
                }
            }
            _ => {
                let formatted = display(signal.get_untracked(), scale);
                if raw != formatted {
                    log::trace!("Rejected channel input {:?}", raw);
                    text.set(formatted);
                }
            }
        }
    };
    let on_commit_clone = on_commit;

    text_input(text)
        .style(|s| {
            s.width(constants::INPUT_WIDTH)
                .padding(2.0)
                .font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .background(Color::WHITE)
                .border(1.0)
                .border_color(Color::rgb8(200, 200, 200))
                .border_radius(3.0)
        })
        .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
            on_commit();
        })
        .on_event(floem::event::EventListener::KeyDown, move |e| {
            if is_enter(e) {
                on_commit_clone();
                return EventPropagation::Stop;
            }
            EventPropagation::Continue
        })
}

pub(crate) fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::rgb8(r, g, b)
}

/// Icon tint: accent while held, gray otherwise.
fn icon_rgb(pressed: bool) -> (u8, u8, u8) {
    if pressed {
        constants::ACCENT_RGB
    } else {
        constants::ICON_RGB
    }
}

/// Copies the result of `get_text` to the clipboard on release.
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            s.font_size(constants::ICON_FONT)
                .font_family("lucide".to_string())
                .color(rgb(icon_rgb(pressed.get())))
        }),
    )
    .style(|s| {
        s.size(constants::ICON_BUTTON_SIZE, constants::ICON_BUTTON_SIZE)
            .items_center()
            .justify_center()
            .border_radius(constants::ICON_BUTTON_SIZE / 2.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(rgb(constants::HOVER_RGB)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        copy_to_clipboard(&get_text());
    })
}

fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(text) {
                log::warn!("Failed to copy color to clipboard: {}", e);
            }
        }
        Err(e) => log::warn!("Clipboard unavailable: {}", e),
    }
}
