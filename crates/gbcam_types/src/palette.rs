//! Four-tone palettes and tone-to-RGBA mapping.
//!
//! Palette mapping is the only place where color enters the pipeline: effects
//! work on tones, and [`apply_palette`] turns tones into a renderable RGBA
//! buffer.

use std::fmt;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::{GridError, PaletteError};
use crate::grid::{TONE_COUNT, validate_tones};

/// Alpha value written for every mapped pixel
pub const OPAQUE: u8 = 255;

/// Number of bytes per mapped pixel (R, G, B, A)
pub const BYTES_PER_PIXEL: usize = 4;

/// RGB color entry of a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawColor")]
pub struct Color {
	/// Red component (0-255)
	pub r: u8,
	/// Green component (0-255)
	pub g: u8,
	/// Blue component (0-255)
	pub b: u8,
}

impl Color {
	/// Creates a new RGB color.
	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self {
			r,
			g,
			b,
		}
	}

	/// Creates a new grayscale color.
	pub const fn gray(value: u8) -> Self {
		Self::new(value, value, value)
	}

	/// Returns the color as opaque RGBA bytes.
	pub const fn to_rgba(self) -> [u8; BYTES_PER_PIXEL] {
		[self.r, self.g, self.b, OPAQUE]
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
	}
}

/// Unchecked color as found in registry documents.
#[derive(Debug, Deserialize)]
struct RawColor {
	r: i64,
	g: i64,
	b: i64,
}

impl TryFrom<RawColor> for Color {
	type Error = PaletteError;

	fn try_from(raw: RawColor) -> Result<Self, Self::Error> {
		let component = |channel: char, value: i64| {
			u8::try_from(value).map_err(|_| PaletteError::ComponentOutOfRange {
				channel,
				value,
			})
		};

		Ok(Self::new(component('r', raw.r)?, component('g', raw.g)?, component('b', raw.b)?))
	}
}

/// A palette of exactly four colors, indexed by tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Palette {
	colors: [Color; TONE_COUNT],
}

impl Palette {
	/// Creates a palette from four colors, tone 0 first.
	pub const fn new(colors: [Color; TONE_COUNT]) -> Self {
		Self {
			colors,
		}
	}

	/// Creates a palette from a slice that must hold exactly four colors.
	pub fn from_colors(colors: &[Color]) -> Result<Self, PaletteError> {
		let colors: [Color; TONE_COUNT] =
			colors.try_into().map_err(|_| PaletteError::WrongEntryCount {
				expected: TONE_COUNT,
				actual: colors.len(),
			})?;
		Ok(Self::new(colors))
	}

	/// Creates an evenly spaced grayscale palette from black (tone 0) to white (tone 3).
	pub const fn gray_ramp() -> Self {
		Self::new([Color::gray(0), Color::gray(85), Color::gray(170), Color::gray(255)])
	}

	/// Gets the color for `tone`, or `None` if the tone is out of range.
	#[inline]
	pub fn get(&self, tone: u8) -> Option<Color> {
		self.colors.get(tone as usize).copied()
	}

	/// Returns the four colors.
	#[inline]
	pub fn colors(&self) -> &[Color; TONE_COUNT] {
		&self.colors
	}

	/// Returns an iterator over the colors, tone 0 first.
	pub fn iter(&self) -> impl Iterator<Item = &Color> {
		self.colors.iter()
	}
}

impl TryFrom<Vec<Color>> for Palette {
	type Error = PaletteError;

	fn try_from(colors: Vec<Color>) -> Result<Self, Self::Error> {
		Self::from_colors(&colors)
	}
}

impl From<Palette> for Vec<Color> {
	fn from(palette: Palette) -> Self {
		palette.colors.to_vec()
	}
}

impl std::ops::Index<u8> for Palette {
	type Output = Color;

	fn index(&self, tone: u8) -> &Self::Output {
		&self.colors[tone as usize]
	}
}

impl fmt::Display for Palette {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let [c0, c1, c2, c3] = &self.colors;
		write!(f, "[{c0}, {c1}, {c2}, {c3}]")
	}
}

/// Maps tones to RGBA bytes through `palette`.
///
/// The output holds `indices.len() * 4` bytes: the palette color of each tone
/// followed by an opaque alpha. Any length is accepted, including an empty
/// slice. Out-of-range tones are rejected before anything is written.
///
/// # Examples
///
/// ```
/// use gbcam_types::palette::{Palette, apply_palette};
///
/// let rgba = apply_palette(&[0, 3], &Palette::gray_ramp()).unwrap();
/// assert_eq!(rgba, [0, 0, 0, 255, 255, 255, 255, 255]);
/// ```
pub fn apply_palette(indices: &[u8], palette: &Palette) -> Result<Vec<u8>, GridError> {
	validate_tones(indices)?;
	Ok(map_tones(indices, palette))
}

/// Maps already validated tones to RGBA bytes.
pub(crate) fn map_tones(indices: &[u8], palette: &Palette) -> Vec<u8> {
	let mut rgba_data = Vec::with_capacity(indices.len() * BYTES_PER_PIXEL);

	for &tone in indices {
		rgba_data.extend_from_slice(&palette[tone].to_rgba());
	}

	trace!(
		"Mapped {} pixels to {} RGBA bytes with palette {}",
		indices.len(),
		rgba_data.len(),
		palette
	);
	rgba_data
}
