//! Pipeline configuration.
//!
//! A pipeline is described by a TOML file, optionally overridden by
//! environment variables with the `GBCAM_` prefix:
//!
//! ```toml
//! effects = ["zoom", "invert"]
//! palette = "dmg"
//! palettes_file = "palettes.json"
//! ```
//!
//! `GBCAM_PALETTE=pocket` replaces the palette and `GBCAM_EFFECTS=tile,invert`
//! replaces the effect list.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use gbcam_internal::{PaletteError, PaletteRegistry, Pipeline};

/// Prefix of environment variables read by [`PipelineConfig::load`]
pub const ENV_PREFIX: &str = "GBCAM";

/// Errors that can occur while loading a pipeline configuration
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Configuration source could not be read or deserialized
	#[error(transparent)]
	Source(#[from] config::ConfigError),

	/// Palettes file could not be loaded
	#[error(transparent)]
	Registry(#[from] PaletteError),
}

/// Effect chain, palette selection and extra palettes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
	/// Effect names, applied in order
	pub effects: Vec<String>,
	/// Palette identifier used for rendering
	pub palette: Option<String>,
	/// JSON palette registry merged over the built-in palettes
	pub palettes_file: Option<PathBuf>,
}

impl PipelineConfig {
	/// Loads a configuration file, layered with `GBCAM_*` environment variables.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
		Self::load_layered(path.as_ref(), environment())
	}

	fn load_layered(path: &Path, environment: Environment) -> Result<Self, ConfigError> {
		debug!("Loading pipeline configuration from {}", path.display());
		let settings = Config::builder()
			.add_source(File::from(path).format(FileFormat::Toml))
			.add_source(environment)
			.build()?;
		Ok(settings.try_deserialize()?)
	}

	/// Parses a configuration from TOML text, without environment overrides.
	pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
		let settings = Config::builder().add_source(File::from_str(toml, FileFormat::Toml)).build()?;
		Ok(settings.try_deserialize()?)
	}

	/// Builds the palette registry: built-in palettes, then the palettes file if any.
	pub fn registry(&self) -> Result<PaletteRegistry, ConfigError> {
		let mut registry = PaletteRegistry::builtin();
		if let Some(path) = &self.palettes_file {
			registry.merge(PaletteRegistry::from_file(path)?);
		}
		Ok(registry)
	}

	/// Builds the pipeline described by this configuration.
	pub fn pipeline(&self) -> Pipeline {
		let pipeline = Pipeline::new().with_effects(self.effects.iter().cloned());
		match &self.palette {
			Some(id) => pipeline.with_palette(id.clone()),
			None => pipeline,
		}
	}
}

fn environment() -> Environment {
	Environment::with_prefix(ENV_PREFIX)
		.try_parsing(true)
		.list_separator(",")
		.with_list_parse_key("effects")
}
