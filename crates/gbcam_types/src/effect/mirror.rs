//! Half-grid reflection.

use super::MirrorDirection;
use crate::grid::Dimensions;

/// Reflects one half of the grid onto the other.
///
/// The result starts as a copy of the input and only the destination half is
/// overwritten, so the source half is carried over verbatim.
pub(super) fn mirror(pixels: &[u8], dims: Dimensions, direction: MirrorDirection) -> Vec<u8> {
	let mut mirrored = pixels.to_vec();
	let (width, height) = (dims.width(), dims.height());

	match direction {
		MirrorDirection::RightToLeft | MirrorDirection::LeftToRight => {
			for y in 0..height {
				for x in 0..dims.half_width() {
					let left = dims.idx(x, y);
					let right = dims.idx(width - 1 - x, y);
					let (src, dst) = if direction == MirrorDirection::RightToLeft {
						(right, left)
					} else {
						(left, right)
					};
					mirrored[dst] = pixels[src];
				}
			}
		}
		MirrorDirection::BottomToTop | MirrorDirection::TopToBottom => {
			for y in 0..dims.half_height() {
				for x in 0..width {
					let top = dims.idx(x, y);
					let bottom = dims.idx(x, height - 1 - y);
					let (src, dst) = if direction == MirrorDirection::BottomToTop {
						(bottom, top)
					} else {
						(top, bottom)
					};
					mirrored[dst] = pixels[src];
				}
			}
		}
	}

	mirrored
}
