//! Indexed pixel grid model.
//!
//! Camera images are 128×112 grids of 2-bit palette indices ("tones") stored in
//! row-major order. Every transform in this crate consumes and produces grids of
//! this exact shape; [`Dimensions`] carries the geometry so that kernels never
//! hard-code it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::effect;
use crate::error::GridError;
use crate::palette::{self, Palette};

/// Width of a camera image in pixels
pub const WIDTH: usize = 128;

/// Height of a camera image in pixels
pub const HEIGHT: usize = 112;

/// Number of pixels in a camera image (128 × 112)
pub const PIXEL_COUNT: usize = WIDTH * HEIGHT;

/// Number of distinct tones a pixel can take
pub const TONE_COUNT: usize = 4;

/// Highest valid tone value
pub const MAX_TONE: u8 = (TONE_COUNT - 1) as u8;

/// Grid geometry shared by all transform kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
	width: usize,
	height: usize,
}

impl Dimensions {
	/// Geometry of a camera image (128×112)
	pub const CAMERA: Self = Self {
		width: WIDTH,
		height: HEIGHT,
	};

	/// Creates a geometry with the given extents.
	///
	/// Both extents must be even and non-zero so that every grid splits into
	/// two halves without a center row or column. The pixel count must fit in
	/// a `usize`.
	pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
		if width == 0
			|| height == 0
			|| !width.is_multiple_of(2)
			|| !height.is_multiple_of(2)
			|| width.checked_mul(height).is_none()
		{
			return Err(GridError::InvalidDimensions {
				width,
				height,
			});
		}

		Ok(Self {
			width,
			height,
		})
	}

	/// Returns the width in pixels.
	#[inline]
	pub const fn width(&self) -> usize {
		self.width
	}

	/// Returns the height in pixels.
	#[inline]
	pub const fn height(&self) -> usize {
		self.height
	}

	/// Returns half the width.
	#[inline]
	pub const fn half_width(&self) -> usize {
		self.width / 2
	}

	/// Returns half the height.
	#[inline]
	pub const fn half_height(&self) -> usize {
		self.height / 2
	}

	/// Returns the total number of pixels.
	#[inline]
	pub const fn pixel_count(&self) -> usize {
		self.width * self.height
	}

	/// Maps a coordinate to its row-major index.
	///
	/// Coordinates outside the grid are a programming error.
	#[inline]
	pub fn idx(&self, x: usize, y: usize) -> usize {
		debug_assert!(x < self.width && y < self.height, "({x}, {y}) outside {}", self);
		y * self.width + x
	}

	/// Maps a row-major index back to its `(x, y)` coordinate.
	#[inline]
	pub fn coords(&self, index: usize) -> (usize, usize) {
		debug_assert!(index < self.pixel_count(), "index {index} outside {}", self);
		(index % self.width, index / self.width)
	}

	/// Checks that `pixels` holds a complete grid of valid tones for this geometry.
	pub fn validate(&self, pixels: &[u8]) -> Result<(), GridError> {
		if pixels.len() != self.pixel_count() {
			return Err(GridError::InvalidLength {
				expected: self.pixel_count(),
				actual: pixels.len(),
			});
		}
		validate_tones(pixels)
	}
}

impl Default for Dimensions {
	fn default() -> Self {
		Self::CAMERA
	}
}

impl fmt::Display for Dimensions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}×{}", self.width, self.height)
	}
}

/// Checks that every value in `pixels` is a valid tone.
///
/// Reports the first offending pixel. Values are never clamped.
pub fn validate_tones(pixels: &[u8]) -> Result<(), GridError> {
	match pixels.iter().position(|&tone| tone > MAX_TONE) {
		Some(index) => Err(GridError::ToneOutOfRange {
			index,
			value: pixels[index],
		}),
		None => Ok(()),
	}
}

/// A validated 128×112 grid of tones.
///
/// Grids are immutable: every effect returns a new grid.
///
/// # Examples
///
/// ```
/// use gbcam_types::grid::{PixelGrid, WIDTH};
///
/// let grid = PixelGrid::from_fn(|x, _| (x * 4 / WIDTH) as u8).unwrap();
/// assert_eq!(grid.get(0, 0), Some(0));
/// assert_eq!(grid.get(127, 111), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct PixelGrid {
	pixels: Vec<u8>,
}

impl PixelGrid {
	/// Geometry of every `PixelGrid`
	pub const DIMENSIONS: Dimensions = Dimensions::CAMERA;

	/// Creates a grid from row-major tones, validating length and range.
	pub fn new(pixels: Vec<u8>) -> Result<Self, GridError> {
		Self::DIMENSIONS.validate(&pixels)?;
		Ok(Self {
			pixels,
		})
	}

	/// Creates a grid by copying row-major tones from a slice.
	pub fn from_slice(pixels: &[u8]) -> Result<Self, GridError> {
		Self::new(pixels.to_vec())
	}

	/// Creates a grid with every pixel set to tone 0.
	pub fn blank() -> Self {
		Self {
			pixels: vec![0; PIXEL_COUNT],
		}
	}

	/// Creates a grid with every pixel set to `tone`.
	pub fn filled(tone: u8) -> Result<Self, GridError> {
		Self::new(vec![tone; PIXEL_COUNT])
	}

	/// Creates a grid by evaluating `f(x, y)` for every pixel.
	pub fn from_fn<F>(mut f: F) -> Result<Self, GridError>
	where
		F: FnMut(usize, usize) -> u8,
	{
		let dims = Self::DIMENSIONS;
		let pixels = (0..dims.pixel_count())
			.map(|i| {
				let (x, y) = dims.coords(i);
				f(x, y)
			})
			.collect();
		Self::new(pixels)
	}

	/// Wraps pixels produced by a kernel from an already validated grid.
	pub(crate) fn from_kernel(pixels: Vec<u8>) -> Self {
		debug_assert!(Self::DIMENSIONS.validate(&pixels).is_ok());
		Self {
			pixels,
		}
	}

	/// Returns the grid geometry.
	#[inline]
	pub fn dimensions(&self) -> Dimensions {
		Self::DIMENSIONS
	}

	/// Gets the tone at `(x, y)`, or `None` if the coordinate is outside the grid.
	pub fn get(&self, x: usize, y: usize) -> Option<u8> {
		if x >= WIDTH || y >= HEIGHT {
			return None;
		}
		Some(self.pixels[Self::DIMENSIONS.idx(x, y)])
	}

	/// Returns the tones in row-major order.
	#[inline]
	pub fn as_slice(&self) -> &[u8] {
		&self.pixels
	}

	/// Consumes the grid, returning the row-major tones.
	pub fn into_vec(self) -> Vec<u8> {
		self.pixels
	}

	/// Returns an iterator over the rows of the grid.
	pub fn rows(&self) -> std::slice::ChunksExact<'_, u8> {
		self.pixels.chunks_exact(WIDTH)
	}

	/// Counts how many pixels use each tone.
	pub fn tone_histogram(&self) -> [usize; TONE_COUNT] {
		let mut histogram = [0; TONE_COUNT];
		for &tone in &self.pixels {
			histogram[tone as usize] += 1;
		}
		histogram
	}

	/// Applies the effect named `name`, returning the input unchanged for unknown names.
	///
	/// See [`effect::apply_effect`].
	pub fn apply_effect(&self, name: &str) -> PixelGrid {
		effect::apply_effect(self, name)
	}

	/// Maps every tone through `palette`, returning `WIDTH * HEIGHT * 4` RGBA bytes.
	pub fn apply_palette(&self, palette: &Palette) -> Vec<u8> {
		palette::map_tones(&self.pixels, palette)
	}

	/// Renders the grid as text, one character per pixel and one line per row.
	///
	/// # Arguments
	///
	/// * `char_map` - Function to map tones to characters
	pub fn to_ascii_art<F>(&self, char_map: F) -> String
	where
		F: Fn(u8) -> char,
	{
		let mut result = String::with_capacity((WIDTH + 1) * HEIGHT);

		for row in self.rows() {
			for &tone in row {
				result.push(char_map(tone));
			}
			result.push('\n');
		}

		result
	}

	/// Renders the grid as text with a default character mapping.
	///
	/// Uses ' ', '.', '+' and '#' for tones 0 to 3.
	pub fn to_ascii_art_default(&self) -> String {
		const CHARS: [char; TONE_COUNT] = [' ', '.', '+', '#'];
		self.to_ascii_art(|tone| CHARS[tone as usize])
	}
}

impl Default for PixelGrid {
	fn default() -> Self {
		Self::blank()
	}
}

impl TryFrom<Vec<u8>> for PixelGrid {
	type Error = GridError;

	fn try_from(pixels: Vec<u8>) -> Result<Self, Self::Error> {
		Self::new(pixels)
	}
}

impl From<PixelGrid> for Vec<u8> {
	fn from(grid: PixelGrid) -> Self {
		grid.pixels
	}
}

impl AsRef<[u8]> for PixelGrid {
	fn as_ref(&self) -> &[u8] {
		&self.pixels
	}
}

impl std::ops::Index<(usize, usize)> for PixelGrid {
	type Output = u8;

	fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
		&self.pixels[Self::DIMENSIONS.idx(x, y)]
	}
}

impl fmt::Display for PixelGrid {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let [t0, t1, t2, t3] = self.tone_histogram();
		write!(f, "{} grid (tones: {t0}/{t1}/{t2}/{t3})", Self::DIMENSIONS)
	}
}
