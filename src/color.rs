//! Color types shared by the model, the gradient sampler and the views.
//!
//! [`Rgba`] is the plain color handed in and out of a picker session.
//! [`Color`] is the same color expressed in the session's [`ColorSpace`],
//! one value per slider.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;
use crate::math;


/// Which three-channel interpretation the picker sliders use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorSpace {
    Rgba,
    #[default]
    Hsba,
}

impl ColorSpace {
    pub fn name(self) -> &'static str {
        match self {
            ColorSpace::Rgba => "RGBA",
            ColorSpace::Hsba => "HSBA",
        }
    }

    /// Display labels for the three primary sliders.
    pub fn channel_labels(self) -> [&'static str; 3] {
        match self {
            ColorSpace::Rgba => ["Red", "Green", "Blue"],
            ColorSpace::Hsba => ["Hue", "Saturation", "Brightness"],
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the four picker sliders: three primaries plus alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    First,
    Second,
    Third,
    Alpha,
}

impl Channel {
    pub const PRIMARIES: [Channel; 3] = [Channel::First, Channel::Second, Channel::Third];
    pub const ALL: [Channel; 4] = [
        Channel::First,
        Channel::Second,
        Channel::Third,
        Channel::Alpha,
    ];

    pub fn index(self) -> usize {
        match self {
            Channel::First => 0,
            Channel::Second => 1,
            Channel::Third => 2,
            Channel::Alpha => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The two primaries held fixed while this one sweeps, in slider order.
    ///
    /// Alpha has no gradient partners and returns `None`.
    pub fn others(self) -> Option<(Channel, Channel)> {
        match self {
            Channel::First => Some((Channel::Second, Channel::Third)),
            Channel::Second => Some((Channel::First, Channel::Third)),
            Channel::Third => Some((Channel::First, Channel::Second)),
            Channel::Alpha => None,
        }
    }

    /// Upper bound of the numeric readout for this slider.
    pub fn display_scale(self, space: ColorSpace) -> f64 {
        match (space, self) {
            (_, Channel::Alpha) => 100.0,
            (ColorSpace::Rgba, _) => 255.0,
            (ColorSpace::Hsba, Channel::First) => 360.0,
            (ColorSpace::Hsba, _) => 100.0,
        }
    }

    pub fn label(self, space: ColorSpace) -> &'static str {
        match self {
            Channel::Alpha => "Alpha",
            primary => space.channel_labels()[primary.index()],
        }
    }
}

/// RGBA color with components in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawRgba"))]
pub struct Rgba {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl Default for Rgba {
    fn default() -> Self {
        Self {
            r: 0.5,
            g: 0.5,
            b: 0.5,
            a: 1.0,
        }
    }
}

impl Rgba {
    pub const BLACK: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Create from f64 RGBA. Out-of-range components are clamped.
    pub fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: math::clamp_unit(r),
            g: math::clamp_unit(g),
            b: math::clamp_unit(b),
            a: math::clamp_unit(a),
        }
    }

    /// Create from 0–255 RGB values with full opacity.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Create from HSB values (all 0.0–1.0).
    pub fn from_hsb(h: f64, s: f64, b: f64, a: f64) -> Self {
        let (r, g, bl) = math::hsb_to_rgb(h, s, b);
        Self::from_rgba(r, g, bl, a)
    }

    pub fn red(&self) -> f64 {
        self.r
    }
    pub fn green(&self) -> f64 {
        self.g
    }
    pub fn blue(&self) -> f64 {
        self.b
    }
    pub fn alpha(&self) -> f64 {
        self.a
    }

    pub fn hue(&self) -> f64 {
        self.to_hsb().0
    }
    pub fn saturation(&self) -> f64 {
        self.to_hsb().1
    }
    pub fn brightness(&self) -> f64 {
        self.to_hsb().2
    }

    /// Convert to HSB (all 0.0–1.0). Returns (h, s, b).
    pub fn to_hsb(&self) -> (f64, f64, f64) {
        math::rgb_to_hsb(self.r, self.g, self.b)
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: math::clamp_unit(a),
            ..self
        }
    }

    /// Component-wise interpolation towards `other`.
    pub fn lerp(&self, other: &Rgba, t: f64) -> Rgba {
        let t = math::clamp_unit(t);
        Rgba {
            r: math::lerp(self.r, other.r, t),
            g: math::lerp(self.g, other.g, t),
            b: math::lerp(self.b, other.b, t),
            a: math::lerp(self.a, other.a, t),
        }
    }

    /// Convert to 0–255 RGB tuple.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        (
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        )
    }

    /// Convert to 0–255 RGBA bytes, in pixel order.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let (r, g, b) = self.to_rgb();
        [r, g, b, (self.a * 255.0).round() as u8]
    }

    /// Parse a hex string (with or without `#`, 3, 6, or 8 digits).
    ///
    /// 8 digits are read as RRGGBBAA; 3 and 6 digits are fully opaque.
    pub fn from_hex(hex: &str) -> Result<Self, ParseColorError> {
        let stripped = hex.trim().trim_start_matches('#');
        if let Some(bad) = stripped.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(bad));
        }
        let byte = |range: std::ops::Range<usize>| -> Result<u8, ParseColorError> {
            let digits = &stripped[range];
            u8::from_str_radix(digits, 16)
                .map_err(|_| ParseColorError::InvalidDigit(digits.chars().next().unwrap_or('?')))
        };
        match stripped.len() {
            3 => Ok(Self::from_rgb(
                byte(0..1)? * 17,
                byte(1..2)? * 17,
                byte(2..3)? * 17,
            )),
            6 => Ok(Self::from_rgb(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
            8 => Ok(Self::from_rgb(byte(0..2)?, byte(2..4)?, byte(4..6)?)
                .with_alpha(byte(6..8)? as f64 / 255.0)),
            len => Err(ParseColorError::InvalidLength(len)),
        }
    }

    /// Format as uppercase hex (no `#` prefix).
    ///
    /// 6 digits (RRGGBB) when fully opaque, 8 digits (RRGGBBAA) otherwise.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }
}

/// Wire form of [`Rgba`]; loaded values are clamped on the way in.
/// A missing alpha means fully opaque.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRgba {
    r: f64,
    g: f64,
    b: f64,
    #[serde(default = "opaque")]
    a: f64,
}

#[cfg(feature = "serde")]
fn opaque() -> f64 {
    1.0
}

#[cfg(feature = "serde")]
impl From<RawRgba> for Rgba {
    fn from(raw: RawRgba) -> Self {
        Rgba::from_rgba(raw.r, raw.g, raw.b, raw.a)
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

/// A color expressed in one [`ColorSpace`]: three primaries plus alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawColor"))]
pub struct Color {
    space: ColorSpace,
    channels: [f64; 4],
}

impl Color {
    /// Build from raw channel values, clamping each to 0.0–1.0.
    pub fn new(space: ColorSpace, channels: [f64; 4]) -> Self {
        Self {
            space,
            channels: channels.map(math::clamp_unit),
        }
    }

    /// Decompose a plain RGBA color into `space`.
    pub fn from_rgba(seed: Rgba, space: ColorSpace) -> Self {
        let channels = match space {
            ColorSpace::Rgba => [seed.r, seed.g, seed.b, seed.a],
            ColorSpace::Hsba => {
                let (h, s, b) = seed.to_hsb();
                [h, s, b, seed.a]
            }
        };
        Self::new(space, channels)
    }

    pub fn space(&self) -> ColorSpace {
        self.space
    }

    pub fn channel(&self, channel: Channel) -> f64 {
        self.channels[channel.index()]
    }

    pub fn channels(&self) -> [f64; 4] {
        self.channels
    }

    pub(crate) fn set_channel(&mut self, channel: Channel, value: f64) {
        self.channels[channel.index()] = math::clamp_unit(value);
    }

    /// Resolve to absolute RGBA, converting from HSB when needed.
    pub fn to_rgba(&self) -> Rgba {
        let [c0, c1, c2, a] = self.channels;
        match self.space {
            ColorSpace::Rgba => Rgba::from_rgba(c0, c1, c2, a),
            ColorSpace::Hsba => Rgba::from_hsb(c0, c1, c2, a),
        }
    }
}

/// Wire form of [`Color`]; channels are clamped on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawColor {
    space: ColorSpace,
    channels: [f64; 4],
}

#[cfg(feature = "serde")]
impl From<RawColor> for Color {
    fn from(raw: RawColor) -> Self {
        Color::new(raw.space, raw.channels)
    }
}
