//! Integration tests for `gbcam-rs`

mod config;
mod effects;
mod palette;

use gbcam_rs::prelude::*;

/// Camera grid with a distinct tone in each quadrant and a diagonal stripe.
pub(crate) fn quadrant_grid() -> PixelGrid {
	PixelGrid::from_fn(|x, y| {
		if x == y {
			return 3;
		}
		match (x < WIDTH / 2, y < HEIGHT / 2) {
			(true, true) => 0,
			(false, true) => 1,
			(true, false) => 2,
			(false, false) => 3,
		}
	})
	.unwrap()
}
