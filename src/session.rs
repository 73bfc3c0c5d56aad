//! One open → edit → commit/cancel cycle of the picker.
//!
//! A session owns its [`ColorModel`]; `commit` and `cancel` consume it, so
//! a result leaves the session at most once and never after a cancel.

use crate::color::{Channel, ColorSpace, Rgba};
use crate::config::PickerConfig;
use crate::gradient::{GradientSampler, GradientStop};
use crate::model::ColorModel;

#[cfg(test)]
mod tests;

/// What the host needs to redraw after any change.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerUpdate {
    /// Live color for the preview swatch and slider thumbs
    pub preview: Rgba,
    /// Track stops, indexed like [`Channel::index`]
    pub tracks: [Vec<GradientStop>; 4],
}

#[derive(Debug, Clone)]
pub struct PickerSession {
    original: Rgba,
    model: ColorModel,
    sampler: GradientSampler,
}

impl PickerSession {
    /// Start editing `seed` with the channels of `config.space`.
    pub fn open(seed: Rgba, config: &PickerConfig) -> Self {
        log::debug!("Opening {} picker on #{}", config.space, seed.to_hex());
        Self {
            original: seed,
            model: ColorModel::new(seed, config.space),
            sampler: config.sampler(),
        }
    }

    pub fn space(&self) -> ColorSpace {
        self.model.space()
    }

    pub fn model(&self) -> &ColorModel {
        &self.model
    }

    /// The color the session was opened with.
    pub fn original(&self) -> Rgba {
        self.original
    }

    pub fn preview(&self) -> Rgba {
        self.model.as_rgba()
    }

    pub fn channel(&self, channel: Channel) -> f64 {
        self.model.channel(channel)
    }

    /// Current preview and tracks, as shown right after opening.
    pub fn snapshot(&self) -> PickerUpdate {
        PickerUpdate {
            preview: self.preview(),
            tracks: self.sampler.sample_all(&self.model),
        }
    }

    /// Move one slider and return everything that needs repainting.
    pub fn set_channel(&mut self, channel: Channel, value: f64) -> PickerUpdate {
        self.model.set_channel(channel, value);
        log::trace!(
            "{} set to {:.3}",
            channel.label(self.space()),
            self.model.channel(channel)
        );
        self.snapshot()
    }

    /// Finish the session, handing back the chosen color.
    pub fn commit(self) -> Rgba {
        let picked = self.preview();
        log::debug!("Picker committed #{}", picked.to_hex());
        picked
    }

    /// Finish the session without a result.
    pub fn cancel(self) {
        log::debug!("Picker cancelled, keeping #{}", self.original.to_hex());
    }
}
