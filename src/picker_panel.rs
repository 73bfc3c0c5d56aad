//! Picker panel: original and live swatches, three channel rows plus alpha,
//! hex readout, and Cancel / Done.

use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};

use crate::channel_slider::channel_slider;
use crate::color::{Channel, ColorSpace, Rgba};
use crate::config::PickerConfig;
use crate::constants;
use crate::inputs::{copy_button, number_input, rgb};
use crate::session::{PickerSession, PickerUpdate};

fn swatch(color: impl Fn() -> Rgba + 'static) -> impl IntoView {
    empty().style(move |st| {
        let c = color();
        st.flex_grow(1.0)
            .height(36.0)
            .border_radius(constants::SWATCH_RADIUS)
            .border(1.0)
            .border_color(Color::rgb8(180, 180, 180))
            .background(Color::rgba(c.red(), c.green(), c.blue(), c.alpha()))
    })
}

fn text_button(text: &'static str, on_click: impl Fn() + 'static) -> impl IntoView {
    label(move || text)
        .style(|s| {
            s.font_size(constants::LABEL_FONT)
                .padding_horiz(10.0)
                .padding_top(4.0)
                .padding_bottom(4.0)
                .border_radius(4.0)
                .color(rgb(constants::ACCENT_RGB))
                .cursor(floem::style::CursorStyle::Pointer)
                .hover(|s| s.background(rgb(constants::HOVER_RGB)))
        })
        .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
            on_click();
        })
}

fn channel_row(
    channel: Channel,
    space: ColorSpace,
    value: RwSignal<f64>,
    frame: RwSignal<PickerUpdate>,
    track_height: f32,
) -> impl IntoView {
    let name = channel.label(space);
    h_stack((
        label(move || name).style(|s| {
            s.width(constants::LABEL_WIDTH)
                .font_size(constants::LABEL_FONT)
                .color(Color::rgb8(90, 90, 90))
        }),
        channel_slider(
            channel,
            value,
            move || frame.get().tracks[channel.index()].clone(),
            move || frame.get().preview,
            track_height,
        ),
        number_input(value, channel.display_scale(space)),
    ))
    .style(|s| s.items_center().gap(constants::GAP))
}

/// Creates the picker panel.
///
/// The panel opens a [`PickerSession`] on `seed`. Done commits it and hands
/// the color to `on_done`; Cancel drops it and calls `on_cancel`. Either
/// button ends the session, so later clicks do nothing.
pub(crate) fn picker_panel(
    seed: Rgba,
    config: PickerConfig,
    on_done: impl Fn(Rgba) + 'static,
    on_cancel: impl Fn() + 'static,
) -> impl IntoView {
    let mut config = config;
    config.validate_and_clamp();
    let space = config.space;

    let opened = PickerSession::open(seed, &config);
    let values = Channel::ALL.map(|channel| RwSignal::new(opened.channel(channel)));
    let frame = RwSignal::new(opened.snapshot());
    let session = RwSignal::new(Some(opened));

    // Slider → session → preview and tracks
    for channel in Channel::ALL {
        let value = values[channel.index()];
        create_effect(move |_| {
            let v = value.get();
            let mut next = None;
            session.update(|s| {
                if let Some(s) = s.as_mut() {
                    next = Some(s.set_channel(channel, v));
                }
            });
            if let Some(next) = next {
                if next != frame.get_untracked() {
                    frame.set(next);
                }
            }
        });
    }

    let finish = move || {
        let mut taken = None;
        session.update(|s| taken = s.take());
        taken
    };

    let track_height = config.track_height;
    v_stack((
        h_stack((
            text_button("Cancel", move || {
                if let Some(s) = finish() {
                    s.cancel();
                    on_cancel();
                }
            }),
            empty().style(|s| s.flex_grow(1.0)),
            text_button("Done", move || {
                if let Some(s) = finish() {
                    on_done(s.commit());
                }
            }),
        ))
        .style(|s| s.items_center()),
        // Original | live
        h_stack((swatch(move || seed), swatch(move || frame.get().preview)))
            .style(|s| s.gap(constants::GAP)),
        channel_row(Channel::First, space, values[0], frame, track_height),
        channel_row(Channel::Second, space, values[1], frame, track_height),
        channel_row(Channel::Third, space, values[2], frame, track_height),
        channel_row(Channel::Alpha, space, values[3], frame, track_height),
        h_stack((
            label(move || format!("#{}", frame.get().preview.to_hex())).style(|s| {
                s.font_size(constants::INPUT_FONT)
                    .font_family("monospace".to_string())
                    .color(rgb(constants::ICON_RGB))
            }),
            copy_button(move || frame.get().preview.to_hex()),
        ))
        .style(|st| st.gap(constants::GAP).items_center().justify_center()),
    ))
    .style(|st| {
        st.gap(constants::GAP)
            .padding(constants::PADDING)
            .size_full()
            .background(Color::rgb8(242, 242, 242))
    })
}
