//! # floem-channel-picker
//!
//! A slide-out channel color picker for [Floem](https://github.com/lapce/floem).
//!
//! Four sliders edit a color in either RGBA or HSBA; every track shows the
//! color the slider would produce, the live result is previewed next to the
//! original, and the edit is either committed or cancelled.
//!
//! The color model and gradient sampling are plain Rust and build without
//! Floem (`default-features = false`); the `view` feature adds the panel.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem_channel_picker::{channel_picker, ColorSpace, PickerConfig, Rgba};
//!
//! let seed = Rgba::from_hex("3B82F6").unwrap();
//! let panel = channel_picker(
//!     seed,
//!     PickerConfig::with_space(ColorSpace::Hsba),
//!     |picked| println!("picked {picked}"),
//!     || println!("cancelled"),
//! );
//! // Place `panel` in your Floem view tree.
//! # let _ = panel;
//! ```

mod color;
mod config;
mod constants;
mod error;
mod gradient;
mod math;
mod model;
mod session;

#[cfg(feature = "view")]
mod channel_slider;
#[cfg(feature = "view")]
mod inputs;
#[cfg(feature = "view")]
mod picker_panel;

pub use color::{Channel, Color, ColorSpace, Rgba};
pub use config::PickerConfig;
pub use constants::DEFAULT_HUE_STOPS;
pub use error::ParseColorError;
pub use gradient::{color_at, rasterize_track, GradientSampler, GradientStop};
pub use model::ColorModel;
pub use session::{PickerSession, PickerUpdate};

#[cfg(feature = "view")]
use std::sync::Once;

#[cfg(feature = "view")]
use floem::prelude::*;
#[cfg(feature = "view")]
use floem::text::FONT_SYSTEM;

#[cfg(feature = "view")]
static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the picker panel for `seed`.
///
/// `on_done` receives the chosen color once, when the user taps Done.
/// `on_cancel` runs instead when the user taps Cancel; the seed is left
/// untouched either way.
#[cfg(feature = "view")]
pub fn channel_picker(
    seed: Rgba,
    config: PickerConfig,
    on_done: impl Fn(Rgba) + 'static,
    on_cancel: impl Fn() + 'static,
) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    picker_panel::picker_panel(seed, config, on_done, on_cancel)
}
