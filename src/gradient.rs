//! Slider track gradients.
//!
//! Each primary slider shows how the result color changes as its own channel
//! sweeps 0.0 → 1.0 while the other two primaries stay where they are. Any
//! channel that enters the RGB result linearly only needs its two endpoints;
//! hue goes through the piecewise sector function and is sampled at
//! [`GradientSampler::hue_stops`] evenly spaced positions instead.

use crate::color::{Channel, Color, ColorSpace, Rgba};
use crate::constants;
use crate::math;
use crate::model::ColorModel;


/// A resolved color at a position along a track (0.0 left, 1.0 right).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub position: f64,
    pub color: Rgba,
}

/// Produces the color stops painted behind each slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientSampler {
    hue_stops: usize,
    track_alpha: f64,
}

impl Default for GradientSampler {
    fn default() -> Self {
        Self {
            hue_stops: constants::DEFAULT_HUE_STOPS,
            track_alpha: 1.0,
        }
    }
}

impl GradientSampler {
    /// A sampler emitting `hue_stops` stops for hue tracks. Values below 2
    /// cannot describe a gradient and are raised to 2.
    pub fn new(hue_stops: usize) -> Self {
        let hue_stops = if hue_stops < 2 {
            log::warn!("Invalid hue_stops {}, raising to 2", hue_stops);
            2
        } else {
            hue_stops
        };
        Self {
            hue_stops,
            ..Self::default()
        }
    }

    /// Opacity of the primary tracks (1.0 unless a host wants tinted tracks).
    pub fn with_track_alpha(self, alpha: f64) -> Self {
        Self {
            track_alpha: math::clamp_unit(alpha),
            ..self
        }
    }

    pub fn hue_stops(&self) -> usize {
        self.hue_stops
    }

    /// Stops for `channel` sweeping 0.0 → 1.0 in `space`, with the other two
    /// primaries fixed at `fixed_a` and `fixed_b` (in slider order).
    ///
    /// The alpha channel ignores the fixed values and always gets
    /// [`GradientSampler::alpha_ramp`].
    pub fn sample(
        &self,
        space: ColorSpace,
        channel: Channel,
        fixed_a: f64,
        fixed_b: f64,
    ) -> Vec<GradientStop> {
        let Some((other_a, other_b)) = channel.others() else {
            return Self::alpha_ramp();
        };
        let count = match (space, channel) {
            (ColorSpace::Hsba, Channel::First) => self.hue_stops.max(2),
            _ => 2,
        };

        let mut channels = [0.0, 0.0, 0.0, self.track_alpha];
        channels[other_a.index()] = fixed_a;
        channels[other_b.index()] = fixed_b;

        (0..count)
            .map(|i| {
                let position = i as f64 / (count - 1) as f64;
                channels[channel.index()] = position;
                GradientStop {
                    position,
                    color: Color::new(space, channels).to_rgba(),
                }
            })
            .collect()
    }

    /// Track for `channel` using the model's current values for the others.
    pub fn sample_model(&self, model: &ColorModel, channel: Channel) -> Vec<GradientStop> {
        match channel.others() {
            Some((a, b)) => self.sample(
                model.space(),
                channel,
                model.channel(a),
                model.channel(b),
            ),
            None => Self::alpha_ramp(),
        }
    }

    /// Tracks for all four sliders, indexed like [`Channel::index`].
    pub fn sample_all(&self, model: &ColorModel) -> [Vec<GradientStop>; 4] {
        Channel::ALL.map(|channel| self.sample_model(model, channel))
    }

    /// Transparent black to opaque black, whatever the color space.
    pub fn alpha_ramp() -> Vec<GradientStop> {
        vec![
            GradientStop {
                position: 0.0,
                color: Rgba::TRANSPARENT,
            },
            GradientStop {
                position: 1.0,
                color: Rgba::BLACK,
            },
        ]
    }
}

/// Piecewise-linear color of `stops` at `t` (0.0–1.0).
///
/// Positions outside the stop range take the nearest end color. An empty
/// list is fully transparent.
pub fn color_at(stops: &[GradientStop], t: f64) -> Rgba {
    let t = math::clamp_unit(t);
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Rgba::TRANSPARENT,
    };
    if t <= first.position {
        return first.color;
    }
    if t >= last.position {
        return last.color;
    }
    for pair in stops.windows(2) {
        let (lo, hi) = (&pair[0], &pair[1]);
        if t <= hi.position {
            let span = hi.position - lo.position;
            if span <= 0.0 {
                return hi.color;
            }
            return lo.color.lerp(&hi.color, (t - lo.position) / span);
        }
    }
    last.color
}

/// Rasterize a horizontal track to an RGBA8 buffer, left = 0.0, right = 1.0.
///
/// With `checker_cell` the stops are composited over a light/dark
/// checkerboard of that cell size, so translucent tracks read as such.
pub fn rasterize_track(
    stops: &[GradientStop],
    width: u32,
    height: u32,
    checker_cell: Option<u32>,
) -> Vec<u8> {
    let mut buf = vec![0u8; buffer_len(width, height)];
    for px in 0..width {
        let t = px as f64 / (width.saturating_sub(1)).max(1) as f64;
        let color = color_at(stops, t);
        for py in 0..height {
            let pixel = match checker_cell {
                Some(cell) => {
                    let cell = cell.max(1);
                    let dark = (px / cell + py / cell) % 2 == 1;
                    let bg = if dark {
                        constants::CHECKER_DARK
                    } else {
                        constants::CHECKER_LIGHT
                    };
                    composite_over(color, bg)
                }
                None => color.to_rgba8(),
            };
            let offset = pixel_offset(px, py, width);
            buf[offset..offset + 4].copy_from_slice(&pixel);
        }
    }
    buf
}

/// Bytes in an RGBA8 buffer, computed in `usize` so large tracks can't wrap.
fn buffer_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}

fn pixel_offset(px: u32, py: u32, width: u32) -> usize {
    (py as usize * width as usize + px as usize) * 4
}

/// Source-over of `color` onto an opaque gray `bg`.
fn composite_over(color: Rgba, bg: u8) -> [u8; 4] {
    let bg = bg as f64 / 255.0;
    let a = color.alpha();
    let mix = |c: f64| ((c * a + bg * (1.0 - a)) * 255.0 + 0.5) as u8;
    [mix(color.red()), mix(color.green()), mix(color.blue()), 255]
}
