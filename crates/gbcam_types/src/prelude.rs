//! Prelude module for `gbcam_types`.
//!
//! This module provides a convenient way to import commonly used types, functions, and constants.
//!
//! # Examples
//!
//! ```
//! use gbcam_types::prelude::*;
//!
//! let grid = PixelGrid::blank();
//! let inverted = Effect::Invert.apply(&grid);
//! let rgba = inverted.apply_palette(&Palette::gray_ramp());
//! assert_eq!(rgba.len(), PIXEL_COUNT * BYTES_PER_PIXEL);
//! ```

#[doc(inline)]
pub use crate::{
	// Errors
	Error,
	GridError,
	PaletteError,

	// Effects
	effect::{Effect, MirrorDirection, ZoomMode, apply_effect, apply_effects},

	// Grid
	grid::{Dimensions, HEIGHT, MAX_TONE, PIXEL_COUNT, PixelGrid, TONE_COUNT, WIDTH},

	// Palettes
	palette::{BYTES_PER_PIXEL, Color, OPAQUE, Palette, apply_palette},
	pipeline::Pipeline,
	registry::{BUILTIN_PALETTES, PaletteRegistry},
};
