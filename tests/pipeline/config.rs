//! Configuration-driven pipelines

use gbcam_rs::config::PipelineConfig;
use gbcam_rs::prelude::*;

use crate::quadrant_grid;

#[test_log::test]
fn config_with_custom_palettes_file() {
	let dir = std::env::temp_dir().join(format!("gbcam-config-{}", std::process::id()));
	std::fs::create_dir_all(&dir).unwrap();

	let palettes_path = dir.join("palettes.json");
	std::fs::write(
		&palettes_path,
		r#"{
			"sunset": [
				{ "r": 255, "g": 236, "b": 214 },
				{ "r": 255, "g": 170, "b": 94 },
				{ "r": 208, "g": 129, "b": 89 },
				{ "r": 84, "g": 78, "b": 104 }
			]
		}"#,
	)
	.unwrap();

	let config_path = dir.join("pipeline.toml");
	std::fs::write(
		&config_path,
		format!(
			"effects = [\"mirror-ltr\"]\npalette = \"sunset\"\npalettes_file = {:?}\n",
			palettes_path.display().to_string()
		),
	)
	.unwrap();

	let config = PipelineConfig::load(&config_path).unwrap();
	let registry = config.registry().unwrap();
	assert!(registry.contains("sunset"));
	assert!(registry.contains("dmg"));

	let grid = quadrant_grid();
	let rgba = config.pipeline().render(&grid, &registry).unwrap();
	assert_eq!(rgba.len(), PIXEL_COUNT * 4);
	// (0, 0) sits on the tone-3 diagonal in the untouched left half
	assert_eq!(&rgba[..4], &[84, 78, 104, 255]);

	std::fs::remove_dir_all(&dir).unwrap();
}
