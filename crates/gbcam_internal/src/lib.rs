//! This module is separated into its own crate to enable simple dynamic linking for `gbcam-rs`, and should not be used directly.

/// `use gbcam_rs::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export gbcam_types for convenience
pub use gbcam_types;

// Re-export commonly used types at crate root
pub use gbcam_types::{
	Error, GridError, PaletteError,
	effect::{Effect, apply_effect, apply_effects},
	grid::{Dimensions, HEIGHT, PixelGrid, WIDTH},
	palette::{Color, Palette, apply_palette},
	pipeline::Pipeline,
	registry::PaletteRegistry,
};
