//! Effect engine for indexed pixel grids.
//!
//! Effects are pure transforms from one grid to another of the same geometry.
//! They never look at colors, only at tones, so no new tone values are ever
//! introduced.
//!
//! # Vocabulary
//!
//! | Name | Effect |
//! |---|---|
//! | `invert` | tone `v` becomes `3 - v` |
//! | `mirror-rtl` | right half reflected onto the left half |
//! | `mirror-ltr` | left half reflected onto the right half |
//! | `mirror-btt` | bottom half reflected onto the top half |
//! | `mirror-ttb` | top half reflected onto the bottom half |
//! | `zoom` | central quarter magnified 2× in both axes |
//! | `zoom-v` | central half-height band stretched 2× vertically |
//! | `zoom-h` | central half-width band stretched 2× horizontally |
//! | `tile` | half-size copy repeated in a 2×2 arrangement |
//!
//! Names are matched exactly. Any other name leaves the grid unchanged.
//!
//! # Examples
//!
//! ```
//! use gbcam_types::effect::{Effect, apply_effect};
//! use gbcam_types::grid::PixelGrid;
//!
//! let grid = PixelGrid::filled(1).unwrap();
//! assert_eq!(apply_effect(&grid, "invert"), PixelGrid::filled(2).unwrap());
//! assert_eq!(apply_effect(&grid, "sepia"), grid);
//! assert_eq!(Effect::from_name("zoom-v").map(Effect::name), Some("zoom-v"));
//! ```

mod mirror;
mod tile;
mod zoom;

use std::fmt;

use log::debug;

use crate::error::GridError;
use crate::grid::{Dimensions, MAX_TONE, PixelGrid};

/// Half of the grid that gets overwritten by a mirror effect, and from where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MirrorDirection {
	/// Right half copied onto the left half (`rtl`)
	RightToLeft,
	/// Left half copied onto the right half (`ltr`)
	LeftToRight,
	/// Bottom half copied onto the top half (`btt`)
	BottomToTop,
	/// Top half copied onto the bottom half (`ttb`)
	TopToBottom,
}

/// Axis selection for the zoom effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoomMode {
	/// Central quarter magnified in both axes
	Center,
	/// Central band magnified along the vertical axis only
	Vertical,
	/// Central band magnified along the horizontal axis only
	Horizontal,
}

/// A recognized effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
	/// Tonal inversion
	Invert,
	/// Half-grid reflection
	Mirror(MirrorDirection),
	/// Nearest-neighbor 2× magnification of a central region
	Zoom(ZoomMode),
	/// Half-size 2×2 tiling
	Tile,
}

impl Effect {
	/// Every effect, in vocabulary order
	pub const ALL: [Effect; 9] = [
		Effect::Invert,
		Effect::Mirror(MirrorDirection::RightToLeft),
		Effect::Mirror(MirrorDirection::LeftToRight),
		Effect::Mirror(MirrorDirection::BottomToTop),
		Effect::Mirror(MirrorDirection::TopToBottom),
		Effect::Zoom(ZoomMode::Center),
		Effect::Zoom(ZoomMode::Vertical),
		Effect::Zoom(ZoomMode::Horizontal),
		Effect::Tile,
	];

	/// Looks up an effect by its exact, case-sensitive name.
	pub fn from_name(name: &str) -> Option<Self> {
		let effect = match name {
			"invert" => Effect::Invert,
			"mirror-rtl" => Effect::Mirror(MirrorDirection::RightToLeft),
			"mirror-ltr" => Effect::Mirror(MirrorDirection::LeftToRight),
			"mirror-btt" => Effect::Mirror(MirrorDirection::BottomToTop),
			"mirror-ttb" => Effect::Mirror(MirrorDirection::TopToBottom),
			"zoom" => Effect::Zoom(ZoomMode::Center),
			"zoom-v" => Effect::Zoom(ZoomMode::Vertical),
			"zoom-h" => Effect::Zoom(ZoomMode::Horizontal),
			"tile" => Effect::Tile,
			_ => return None,
		};
		Some(effect)
	}

	/// Returns the vocabulary name of the effect.
	pub const fn name(self) -> &'static str {
		match self {
			Effect::Invert => "invert",
			Effect::Mirror(MirrorDirection::RightToLeft) => "mirror-rtl",
			Effect::Mirror(MirrorDirection::LeftToRight) => "mirror-ltr",
			Effect::Mirror(MirrorDirection::BottomToTop) => "mirror-btt",
			Effect::Mirror(MirrorDirection::TopToBottom) => "mirror-ttb",
			Effect::Zoom(ZoomMode::Center) => "zoom",
			Effect::Zoom(ZoomMode::Vertical) => "zoom-v",
			Effect::Zoom(ZoomMode::Horizontal) => "zoom-h",
			Effect::Tile => "tile",
		}
	}

	/// Applies the effect to a camera grid.
	pub fn apply(self, grid: &PixelGrid) -> PixelGrid {
		PixelGrid::from_kernel(self.run(grid.as_slice(), grid.dimensions()))
	}

	/// Applies the effect to raw row-major tones of any even-sized geometry.
	///
	/// The input is validated first: a wrong length or an out-of-range tone is
	/// rejected rather than transformed.
	pub fn transform(self, pixels: &[u8], dims: Dimensions) -> Result<Vec<u8>, GridError> {
		dims.validate(pixels)?;
		Ok(self.run(pixels, dims))
	}

	fn run(self, pixels: &[u8], dims: Dimensions) -> Vec<u8> {
		match self {
			Effect::Invert => invert(pixels),
			Effect::Mirror(direction) => mirror::mirror(pixels, dims, direction),
			Effect::Zoom(mode) => zoom::zoom(pixels, dims, mode),
			Effect::Tile => tile::tile(pixels, dims),
		}
	}
}

impl fmt::Display for Effect {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Applies the effect named `name` to `grid`.
///
/// Unrecognized names are not an error: the result is an unchanged copy of
/// the input.
pub fn apply_effect(grid: &PixelGrid, name: &str) -> PixelGrid {
	match Effect::from_name(name) {
		Some(effect) => effect.apply(grid),
		None => {
			debug!("Unrecognized effect {name:?}, leaving grid unchanged");
			grid.clone()
		}
	}
}

/// Applies a sequence of named effects, left to right.
pub fn apply_effects<'a, I>(grid: &PixelGrid, names: I) -> PixelGrid
where
	I: IntoIterator<Item = &'a str>,
{
	names.into_iter().fold(grid.clone(), |current, name| apply_effect(&current, name))
}

fn invert(pixels: &[u8]) -> Vec<u8> {
	pixels.iter().map(|&tone| MAX_TONE - tone).collect()
}

/// Builds a new grid where each output pixel is copied from the source
/// coordinate returned by `source_of(x, y)`.
fn remap<F>(pixels: &[u8], dims: Dimensions, source_of: F) -> Vec<u8>
where
	F: Fn(usize, usize) -> (usize, usize),
{
	(0..dims.pixel_count())
		.map(|i| {
			let (x, y) = dims.coords(i);
			let (sx, sy) = source_of(x, y);
			pixels[dims.idx(sx, sy)]
		})
		.collect()
}
