//! Error types for grid validation, palette handling and the pipeline.

use thiserror::Error;

/// Errors raised when an indexed pixel grid violates its invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
	/// Pixel count does not match the grid geometry
	#[error("Invalid grid length: expected {expected} pixels, got {actual} pixels")]
	InvalidLength {
		/// Expected number of pixels
		expected: usize,
		/// Actual number of pixels
		actual: usize,
	},

	/// A pixel holds a value outside the four-tone range
	#[error("Tone out of range at pixel {index}: {value} (valid tones are 0-3)")]
	ToneOutOfRange {
		/// Position of the offending pixel in row-major order
		index: usize,
		/// Offending value
		value: u8,
	},

	/// Grid extents are zero or odd
	#[error("Invalid grid dimensions {width}x{height}: both extents must be even and non-zero")]
	InvalidDimensions {
		/// Requested width
		width: usize,
		/// Requested height
		height: usize,
	},
}

/// Errors that can occur when building, loading or resolving palettes
#[derive(Debug, Error)]
pub enum PaletteError {
	/// A palette did not hold exactly four colors
	#[error("Invalid palette: expected {expected} colors, got {actual}")]
	WrongEntryCount {
		/// Expected number of colors
		expected: usize,
		/// Actual number of colors
		actual: usize,
	},

	/// A color component does not fit in 8 bits
	#[error("Color component {channel} out of range: {value} (valid range is 0-255)")]
	ComponentOutOfRange {
		/// Channel name (`r`, `g` or `b`)
		channel: char,
		/// Offending value
		value: i64,
	},

	/// No palette is registered under the requested identifier
	#[error("Unknown palette: {0:?}")]
	UnknownPalette(String),

	/// Rendering was requested without selecting a palette
	#[error("No palette selected")]
	NoPaletteSelected,

	/// Malformed palette registry document
	#[error(transparent)]
	Json(#[from] serde_json::Error),

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

/// Unified error type for operations that touch both grids and palettes
#[derive(Debug, Error)]
pub enum Error {
	/// Grid validation error
	#[error(transparent)]
	Grid(#[from] GridError),

	/// Palette error
	#[error(transparent)]
	Palette(#[from] PaletteError),
}
