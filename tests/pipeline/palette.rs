//! Palette mapping and registry lookups

use gbcam_rs::prelude::*;

use crate::quadrant_grid;

fn test_palette() -> Palette {
	Palette::new([Color::gray(0), Color::gray(85), Color::gray(170), Color::gray(255)])
}

#[test_log::test]
fn maps_reference_sequence() {
	let rgba = apply_palette(&[0, 1, 2, 3, 3, 2, 1, 0], &test_palette()).unwrap();
	let expected: Vec<u8> = [0u8, 85, 170, 255, 255, 170, 85, 0]
		.iter()
		.flat_map(|&v| [v, v, v, 255])
		.collect();
	assert_eq!(rgba, expected);
}

#[test_log::test]
fn empty_input_yields_empty_buffer() {
	assert_eq!(apply_palette(&[], &test_palette()).unwrap(), Vec::<u8>::new());
}

#[test_log::test]
fn full_grid_is_opaque() {
	let rgba = quadrant_grid().apply_palette(&test_palette());
	assert_eq!(rgba.len(), PIXEL_COUNT * BYTES_PER_PIXEL);
	assert!(rgba.chunks_exact(4).all(|pixel| pixel[3] == OPAQUE));
}

#[test_log::test]
fn registry_lookup_by_id() {
	let registry = PaletteRegistry::builtin();
	let grid = quadrant_grid();

	for id in registry.ids() {
		let palette = registry.get(id).unwrap();
		let rgba = registry.apply_palette(grid.as_slice(), id).unwrap();
		assert_eq!(rgba, grid.apply_palette(palette));
	}

	assert!(matches!(
		registry.apply_palette(grid.as_slice(), "missing"),
		Err(Error::Palette(PaletteError::UnknownPalette(_)))
	));
}

#[test_log::test]
fn pipeline_renders_effects_then_palette() {
	let registry = PaletteRegistry::builtin();
	let grid = quadrant_grid();
	let pipeline = Pipeline::new().with_effects(["tile", "invert"]).with_palette("classic");

	let rgba = pipeline.render(&grid, &registry).unwrap();
	let transformed = apply_effects(&grid, ["tile", "invert"]);
	let expected = transformed.apply_palette(registry.get("classic").unwrap());
	assert_eq!(rgba, expected);
}
