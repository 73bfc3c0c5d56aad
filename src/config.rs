//! Picker configuration.
//!
//! Hosts usually build this in code; with the `serde` feature it can also be
//! embedded in the host's own settings file. Call
//! [`PickerConfig::validate_and_clamp`] after loading untrusted values.

use crate::color::ColorSpace;
use crate::constants;
use crate::gradient::GradientSampler;

/// Settings for one picker session.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PickerConfig {
    /// Which channels the sliders edit
    pub space: ColorSpace,

    /// Stops used to draw the hue track (valid range: 2 - 256)
    pub hue_stops: usize,

    /// Track height in logical pixels (valid range: 4.0 - 48.0)
    pub track_height: f32,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            space: ColorSpace::default(),
            hue_stops: constants::DEFAULT_HUE_STOPS,
            track_height: constants::DEFAULT_TRACK_HEIGHT,
        }
    }
}

impl PickerConfig {
    pub fn with_space(space: ColorSpace) -> Self {
        Self {
            space,
            ..Self::default()
        }
    }

    /// Clamp out-of-range values to the nearest valid one, logging a warning
    /// for each.
    pub fn validate_and_clamp(&mut self) {
        if !(2..=256).contains(&self.hue_stops) {
            log::warn!(
                "Invalid hue_stops {}, clamping to 2-256 range",
                self.hue_stops
            );
            self.hue_stops = self.hue_stops.clamp(2, 256);
        }

        if !(4.0..=48.0).contains(&self.track_height) {
            log::warn!(
                "Invalid track_height {:.1}, clamping to 4.0-48.0 range",
                self.track_height
            );
            self.track_height = if self.track_height.is_nan() {
                constants::DEFAULT_TRACK_HEIGHT
            } else {
                self.track_height.clamp(4.0, 48.0)
            };
        }
    }

    pub fn sampler(&self) -> GradientSampler {
        GradientSampler::new(self.hue_stops)
    }
}
