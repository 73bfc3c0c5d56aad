//! The color held by one picker session.

use crate::color::{Channel, Color, ColorSpace, Rgba};

#[cfg(test)]
mod tests;

/// Current color of a picker, one value per slider in the active space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorModel {
    color: Color,
}

impl ColorModel {
    /// Decompose `seed` into `space`. Never fails; components are clamped.
    pub fn new(seed: Rgba, space: ColorSpace) -> Self {
        Self {
            color: Color::from_rgba(seed, space),
        }
    }

    pub fn space(&self) -> ColorSpace {
        self.color.space()
    }

    /// Update one slider value. The other three channels are left alone.
    pub fn set_channel(&mut self, channel: Channel, value: f64) {
        self.color.set_channel(channel, value);
    }

    pub fn channel(&self, channel: Channel) -> f64 {
        self.color.channel(channel)
    }

    pub fn current_color(&self) -> Color {
        self.color
    }

    /// The resolved absolute color, whatever the active space.
    pub fn as_rgba(&self) -> Rgba {
        self.color.to_rgba()
    }

    /// Hue, saturation, brightness and alpha of the resolved color.
    ///
    /// Unlike [`ColorModel::channel`] this reflects what is actually shown,
    /// so hue reads 0.0 whenever saturation or brightness is 0.0.
    pub fn hsba(&self) -> (f64, f64, f64, f64) {
        let rgba = self.as_rgba();
        let (h, s, b) = rgba.to_hsb();
        (h, s, b, rgba.alpha())
    }

    pub fn channel_labels(&self) -> [&'static str; 3] {
        self.space().channel_labels()
    }

    pub fn hex(&self) -> String {
        self.as_rgba().to_hex()
    }
}
