//! Nearest-neighbor 2× magnification of a centered region.

use super::{ZoomMode, remap};
use crate::grid::Dimensions;

/// Magnifies a centered region to fill the whole grid.
///
/// | Mode | Source region (128×112 grid) | Block |
/// |---|---|---|
/// | `Center` | 64×56 at (32, 28) | 2×2 |
/// | `Vertical` | 128×56 at (0, 28) | 1 wide, 2 tall |
/// | `Horizontal` | 64×112 at (32, 0) | 2 wide, 1 tall |
pub(super) fn zoom(pixels: &[u8], dims: Dimensions, mode: ZoomMode) -> Vec<u8> {
	let start_x = (dims.width() - dims.half_width()) / 2;
	let start_y = (dims.height() - dims.half_height()) / 2;

	match mode {
		ZoomMode::Center => remap(pixels, dims, |x, y| (start_x + x / 2, start_y + y / 2)),
		ZoomMode::Vertical => remap(pixels, dims, |x, y| (x, start_y + y / 2)),
		ZoomMode::Horizontal => remap(pixels, dims, |x, y| (start_x + x / 2, y)),
	}
}
