//! Camera effects CLI utility
//!
//! A command-line tool for applying effects and palettes to 128×112 four-tone
//! camera grids stored as JSON arrays of 14336 tones.
//!
//! # Features
//!
//! - **effects**: List the recognized effect names
//! - **palettes**: List the available palettes
//! - **pattern**: Write a synthetic grid as JSON
//! - **apply**: Run effects and a palette over a grid, writing raw RGBA bytes
//!
//! # Usage
//!
//! ```bash
//! # Generate a test grid
//! cargo run --example camfx pattern --kind checker grid.json
//!
//! # Zoom, invert and map through the "dmg" palette
//! cargo run --example camfx apply grid.json -e zoom -e invert -p dmg -o out.rgba --preview
//!
//! # Use a pipeline configuration file
//! cargo run --example camfx apply grid.json --config pipeline.toml -o out.rgba
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gbcam_rs::config::PipelineConfig;
use gbcam_rs::prelude::*;
use log::info;

#[derive(Parser)]
#[command(name = "camfx")]
#[command(author = "gbcam-rs project")]
#[command(version = "1.0")]
#[command(about = "Camera image utility - apply effects and palettes to four-tone grids", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// List recognized effect names
	Effects,

	/// List available palettes
	Palettes {
		/// Extra palettes (JSON registry document)
		#[arg(long, value_name = "PALETTES_JSON", env = "GBCAM_PALETTES_FILE")]
		palettes: Option<PathBuf>,
	},

	/// Write a synthetic grid as JSON
	Pattern {
		/// Output JSON file path
		#[arg(value_name = "OUTPUT_JSON")]
		output: PathBuf,

		/// Pattern to generate
		#[arg(short, long, value_enum, default_value_t = PatternKind::Gradient)]
		kind: PatternKind,
	},

	/// Apply effects and a palette to a grid
	Apply {
		/// Input grid (JSON array of tones)
		#[arg(value_name = "INPUT_JSON")]
		input: PathBuf,

		/// Pipeline configuration file (TOML)
		#[arg(short, long, value_name = "CONFIG_TOML")]
		config: Option<PathBuf>,

		/// Effect to apply; repeat to chain effects
		#[arg(short, long = "effect", value_name = "EFFECT")]
		effects: Vec<String>,

		/// Palette identifier
		#[arg(short, long)]
		palette: Option<String>,

		/// Extra palettes (JSON registry document)
		#[arg(long, value_name = "PALETTES_JSON")]
		palettes: Option<PathBuf>,

		/// Output file for raw RGBA bytes
		#[arg(short, long, value_name = "OUTPUT_RGBA")]
		output: Option<PathBuf>,

		/// Print an ASCII preview of the transformed grid
		#[arg(long)]
		preview: bool,
	},
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PatternKind {
	/// Four vertical bands, one per tone
	Gradient,
	/// 8×8 checkerboard
	Checker,
	/// Concentric rings around the center
	Rings,
}

fn generate_pattern(kind: PatternKind) -> Result<PixelGrid> {
	let grid = match kind {
		PatternKind::Gradient => PixelGrid::from_fn(|x, _| (x * TONE_COUNT / WIDTH) as u8),
		PatternKind::Checker => {
			PixelGrid::from_fn(|x, y| if (x / 8 + y / 8) % 2 == 0 { 0 } else { MAX_TONE })
		}
		PatternKind::Rings => PixelGrid::from_fn(|x, y| {
			let dx = x.abs_diff(WIDTH / 2);
			let dy = y.abs_diff(HEIGHT / 2);
			((dx.max(dy) / 6) % TONE_COUNT) as u8
		}),
	}?;
	Ok(grid)
}

fn load_grid(path: &Path) -> Result<PixelGrid> {
	let data = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
	let grid = serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
	Ok(grid)
}

/// Handle effects command
fn handle_effects() {
	for effect in Effect::ALL {
		println!("{effect}");
	}
}

/// Handle palettes command
fn handle_palettes(palettes: Option<PathBuf>) -> Result<()> {
	let settings = PipelineConfig {
		palettes_file: palettes,
		..Default::default()
	};
	let registry = settings.registry()?;
	info!("{} palettes available", registry.len());
	for (id, palette) in registry.iter() {
		println!("{id:<16} {palette}");
	}
	Ok(())
}

/// Handle pattern command
fn handle_pattern(output: PathBuf, kind: PatternKind) -> Result<()> {
	let grid = generate_pattern(kind)?;
	fs::write(&output, serde_json::to_string(&grid)?)
		.with_context(|| format!("writing {}", output.display()))?;
	info!("Wrote {kind:?} pattern to {}", output.display());
	Ok(())
}

/// Handle apply command
fn handle_apply(
	input: PathBuf,
	config: Option<PathBuf>,
	effects: Vec<String>,
	palette: Option<String>,
	palettes: Option<PathBuf>,
	output: Option<PathBuf>,
	preview: bool,
) -> Result<()> {
	// Command-line values take precedence over the configuration file
	let mut settings = match &config {
		Some(path) => PipelineConfig::load(path)
			.with_context(|| format!("loading configuration {}", path.display()))?,
		None => PipelineConfig::default(),
	};
	if !effects.is_empty() {
		settings.effects = effects;
	}
	if palette.is_some() {
		settings.palette = palette;
	}
	if palettes.is_some() {
		settings.palettes_file = palettes;
	}

	let grid = load_grid(&input)?;
	info!("Loaded {grid} from {}", input.display());

	let pipeline = settings.pipeline();
	let transformed = pipeline.transform(&grid);
	if preview {
		print!("{}", transformed.to_ascii_art_default());
	}

	let Some(id) = pipeline.palette() else {
		info!("No palette selected, skipping RGBA output");
		return Ok(());
	};

	let registry = settings.registry()?;
	let rgba = transformed.apply_palette(registry.get(id)?);

	match output {
		Some(path) => {
			fs::write(&path, &rgba).with_context(|| format!("writing {}", path.display()))?;
			info!("Wrote {} RGBA bytes ({}) to {}", rgba.len(), grid.dimensions(), path.display());
		}
		None => info!("Rendered {} RGBA bytes with palette {id:?}", rgba.len()),
	}

	Ok(())
}

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();

	match cli.command {
		Commands::Effects => handle_effects(),
		Commands::Palettes {
			palettes,
		} => handle_palettes(palettes)?,
		Commands::Pattern {
			output,
			kind,
		} => handle_pattern(output, kind)?,
		Commands::Apply {
			input,
			config,
			effects,
			palette,
			palettes,
			output,
			preview,
		} => handle_apply(input, config, effects, palette, palettes, output, preview)?,
	}

	Ok(())
}
