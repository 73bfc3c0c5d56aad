//! Sampling, sizing, color, and styling constants for the picker.

/// Stops emitted for a hue track
pub const DEFAULT_HUE_STOPS: usize = 21;

/// Slider track height
pub const DEFAULT_TRACK_HEIGHT: f32 = 10.0;

/// Checkerboard gray levels behind translucent tracks
pub const CHECKER_LIGHT: u8 = 255;
pub const CHECKER_DARK: u8 = 204;

/// Checkerboard cell size in physical pixels
#[cfg(feature = "view")]
pub const CHECKER_CELL: u32 = 5;

/// Thumb radius on sliders
#[cfg(feature = "view")]
pub const THUMB_RADIUS: f64 = 7.0;

/// Corner radius for the color swatches
#[cfg(feature = "view")]
pub const SWATCH_RADIUS: f32 = 10.0;

/// Gap between picker elements
#[cfg(feature = "view")]
pub const GAP: f32 = 8.0;

/// Padding around the whole picker
#[cfg(feature = "view")]
pub const PADDING: f32 = 12.0;

/// Channel label column width
#[cfg(feature = "view")]
pub const LABEL_WIDTH: f32 = 72.0;

/// Input field width
#[cfg(feature = "view")]
pub const INPUT_WIDTH: f32 = 32.0;

/// Input font size
#[cfg(feature = "view")]
pub const INPUT_FONT: f32 = 11.0;

/// Label font size
#[cfg(feature = "view")]
pub const LABEL_FONT: f32 = 12.0;

/// Copy button side length
#[cfg(feature = "view")]
pub const ICON_BUTTON_SIZE: f32 = 22.0;

/// Lucide glyph size inside icon buttons
#[cfg(feature = "view")]
pub const ICON_FONT: f32 = 13.0;

/// Icon and secondary text gray
#[cfg(feature = "view")]
pub const ICON_RGB: (u8, u8, u8) = (120, 120, 120);

/// Hover background shared by the panel's buttons
#[cfg(feature = "view")]
pub const HOVER_RGB: (u8, u8, u8) = (230, 230, 230);

/// Accent used for Cancel / Done and pressed icons
#[cfg(feature = "view")]
pub const ACCENT_RGB: (u8, u8, u8) = (0, 122, 255);
