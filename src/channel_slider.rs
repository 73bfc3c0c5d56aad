//! Channel slider (0.0–1.0).
//!
//! The track is rasterized from the channel's gradient stops rather than
//! drawn as a renderer gradient, so many-stop hue tracks render the same on
//! every backend. The alpha track is composited over a checkerboard.

use std::sync::Arc;

use floem::kurbo::{Circle, Rect, Stroke};
use floem::peniko::{self, Blob, Color};

use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::color::{Channel, Rgba};
use crate::constants;
use crate::gradient::{self, GradientStop};

enum SliderUpdate {
    Value(f64),
    Track(Vec<GradientStop>),
    Tint(Rgba),
}

pub(crate) struct ChannelSlider {
    id: ViewId,
    held: bool,
    value: f64,
    checkered: bool,
    stops: Vec<GradientStop>,
    tint: Rgba,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Option<Box<dyn Fn(f64)>>,
    /// Cached track image.
    track_img: Option<peniko::Image>,
    track_hash: Vec<u8>,
    cached_stops: Vec<GradientStop>,
    cached_dims: (u32, u32),
}

/// Creates a horizontal slider for one picker channel.
///
/// - `value`: 0.0 (left) to 1.0 (right).
/// - `track`: current gradient stops for this channel.
/// - `tint`: live picker color, used to fill the thumb.
pub(crate) fn channel_slider(
    channel: Channel,
    value: RwSignal<f64>,
    track: impl Fn() -> Vec<GradientStop> + 'static,
    tint: impl Fn() -> Rgba + 'static,
    height: f32,
) -> ChannelSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        let v = value.get();
        id.update_state(SliderUpdate::Value(v));
    });

    create_effect(move |_| {
        id.update_state(SliderUpdate::Track(track()));
    });

    create_effect(move |_| {
        id.update_state(SliderUpdate::Tint(tint()));
    });

    ChannelSlider {
        id,
        held: false,
        value: value.get_untracked(),
        checkered: channel == Channel::Alpha,
        stops: Vec::new(),
        tint: Rgba::default(),
        size: Default::default(),
        on_change: Some(Box::new(move |v| {
            value.set(v);
        })),
        track_img: None,
        track_hash: Vec::new(),
        cached_stops: Vec::new(),
        cached_dims: (0, 0),
    }
    .style(move |s| {
        s.height(height.max(2.0 * constants::THUMB_RADIUS as f32))
            .flex_grow(1.0)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl ChannelSlider {
    fn update_from_pointer(&mut self, x: f64) {
        let w = self.size.width as f64;
        let r = constants::THUMB_RADIUS;
        let usable = w - 2.0 * r;
        if usable > 0.0 {
            self.value = ((x - r) / usable).clamp(0.0, 1.0);
        }
    }

    fn emit(&self) {
        if let Some(cb) = &self.on_change {
            cb(self.value);
        }
    }

    /// Track rect, inset so the thumb never leaves the widget.
    fn track_rect(&self) -> Rect {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        let r = constants::THUMB_RADIUS;
        let track_h = (h - 4.0).max(2.0);
        let y0 = (h - track_h) / 2.0;
        Rect::new(r, y0, (w - r).max(r), y0 + track_h)
    }

    fn ensure_track_image(&mut self, rect: Rect, scale: f64) {
        let s = scale.max(1.0);
        let pw = (rect.width() * s).round() as u32;
        let ph = (rect.height() * s).round() as u32;
        if pw == 0 || ph == 0 {
            return;
        }

        let dims = (pw, ph);
        if self.cached_dims == dims && self.cached_stops == self.stops {
            return;
        }

        let checker = self
            .checkered
            .then(|| ((constants::CHECKER_CELL as f64) * s).round() as u32);
        let pixels = gradient::rasterize_track(&self.stops, pw, ph, checker);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, pw, ph);

        self.track_hash = blob.id().to_le_bytes().to_vec();
        self.track_img = Some(img);
        self.cached_stops = self.stops.clone();
        self.cached_dims = dims;
    }
}

impl View for ChannelSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<SliderUpdate>() {
            match *update {
                SliderUpdate::Value(v) => self.value = v,
                SliderUpdate::Track(stops) => self.stops = stops,
                SliderUpdate::Tint(tint) => self.tint = tint,
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos.x);
                self.emit();
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.update_from_pointer(e.pos.x);
                    self.emit();
                    self.id.request_layout();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) | Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
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
        let rect = self.track_rect();
        let rrect = rect.to_rounded_rect(rect.height() / 2.0);

        cx.save();
        cx.clip(&rrect);
        let scale = cx.scale();
        self.ensure_track_image(rect, scale);
        if let Some(ref img) = self.track_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.track_hash,
                },
                rect,
            );
        }
        cx.restore();

        // Track outline
        cx.stroke(&rrect, Color::rgba8(0, 0, 0, 40), &Stroke::new(0.5));

        // Thumb, filled with the live color
        let radius = constants::THUMB_RADIUS;
        let thumb_x = radius + self.value * (w - 2.0 * radius);
        let center = (thumb_x, h / 2.0);
        let tint = self.tint;
        cx.fill(
            &Circle::new(center, radius - 1.5),
            Color::rgba(tint.red(), tint.green(), tint.blue(), tint.alpha()),
            0.0,
        );
        cx.stroke(
            &Circle::new(center, radius),
            Color::rgba8(0, 0, 0, 80),
            &Stroke::new(1.0),
        );
        cx.stroke(
            &Circle::new(center, radius - 1.5),
            Color::WHITE,
            &Stroke::new(2.0),
        );
    }
}
