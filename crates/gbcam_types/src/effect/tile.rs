//! Half-size 2×2 tiling.

use super::remap;
use crate::grid::Dimensions;

/// Subsamples every second pixel in each axis and repeats the half-size image
/// twice across and twice down.
pub(super) fn tile(pixels: &[u8], dims: Dimensions) -> Vec<u8> {
	let (tile_width, tile_height) = (dims.half_width(), dims.half_height());
	remap(pixels, dims, |x, y| ((x % tile_width) * 2, (y % tile_height) * 2))
}
