//! Effect engine through the public API

use gbcam_rs::prelude::*;

use crate::quadrant_grid;

#[test_log::test]
fn every_effect_preserves_grid_invariants() {
	let grid = quadrant_grid();
	for effect in Effect::ALL {
		let out = apply_effect(&grid, effect.name());
		assert_eq!(out.as_slice().len(), PIXEL_COUNT, "{effect}");
		assert!(out.as_slice().iter().all(|&tone| tone <= MAX_TONE), "{effect}");
	}
}

#[test_log::test]
fn unknown_effect_falls_back_to_identity() {
	let grid = quadrant_grid();
	assert_eq!(apply_effect(&grid, "unknown-token"), grid);
	assert_eq!(grid.apply_effect("mirror-up"), grid);
}

#[test_log::test]
fn mirror_quadrants() {
	let grid = quadrant_grid();

	// Left half takes the right half's tones
	let rtl = apply_effect(&grid, "mirror-rtl");
	assert_eq!(rtl[(10, 100)], 3);
	assert_eq!(rtl[(10, 5)], 1);

	// Bottom half takes the top half's tones
	let ttb = apply_effect(&grid, "mirror-ttb");
	assert_eq!(ttb[(10, 100)], 0);
	assert_eq!(ttb[(100, 100)], 1);
}

#[test_log::test]
fn zoom_center_fills_from_central_region() {
	// Only the central 64x56 window is tone 2; zooming must fill the whole grid with it
	let grid = PixelGrid::from_fn(|x, y| {
		if (32..96).contains(&x) && (28..84).contains(&y) {
			2
		} else {
			1
		}
	})
	.unwrap();

	assert_eq!(apply_effect(&grid, "zoom"), PixelGrid::filled(2).unwrap());
	assert_ne!(apply_effect(&grid, "zoom-v"), PixelGrid::filled(2).unwrap());
	assert_ne!(apply_effect(&grid, "zoom-h"), PixelGrid::filled(2).unwrap());
}

#[test_log::test]
fn tile_repeats_quarter_image() {
	let tiled = apply_effect(&quadrant_grid(), "tile");
	for (x, y) in [(0, 0), (64, 0), (0, 56), (64, 56)] {
		assert_eq!(tiled[(x + 40, y + 10)], 1);
		assert_eq!(tiled[(x + 10, y + 40)], 2);
	}
}

#[test_log::test]
fn chained_effects_match_manual_application() {
	let grid = quadrant_grid();
	let names = ["zoom-h", "mirror-btt", "invert", "tile"];
	let manual = names
		.iter()
		.fold(grid.clone(), |g, name| Effect::from_name(name).unwrap().apply(&g));
	assert_eq!(apply_effects(&grid, names), manual);
}
