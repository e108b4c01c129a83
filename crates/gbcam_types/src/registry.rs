//! Named palette registry.
//!
//! The registry maps palette identifiers to four-tone palettes. Registry
//! documents are JSON objects keyed by identifier:
//!
//! ```json
//! {
//!     "sunset": [
//!         { "r": 255, "g": 236, "b": 214 },
//!         { "r": 255, "g": 170, "b": 94 },
//!         { "r": 208, "g": 129, "b": 89 },
//!         { "r": 84, "g": 78, "b": 104 }
//!     ]
//! }
//! ```

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, PaletteError};
use crate::palette::{self, Color, Palette};

/// Palettes bundled with [`PaletteRegistry::builtin`], tone 0 being the lightest shade
pub const BUILTIN_PALETTES: [(&str, Palette); 4] = [
	(
		"grayscale",
		Palette::new([Color::gray(255), Color::gray(170), Color::gray(85), Color::gray(0)]),
	),
	(
		"dmg",
		Palette::new([
			Color::new(155, 188, 15),
			Color::new(139, 172, 15),
			Color::new(48, 98, 48),
			Color::new(15, 56, 15),
		]),
	),
	(
		"pocket",
		Palette::new([
			Color::new(196, 207, 161),
			Color::new(139, 149, 109),
			Color::new(77, 83, 60),
			Color::new(31, 31, 31),
		]),
	),
	(
		"classic",
		Palette::new([
			Color::new(224, 248, 208),
			Color::new(136, 192, 112),
			Color::new(52, 104, 86),
			Color::new(8, 24, 32),
		]),
	),
];

/// Palettes keyed by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaletteRegistry {
	palettes: BTreeMap<String, Palette>,
}

impl PaletteRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a registry holding the [`BUILTIN_PALETTES`].
	pub fn builtin() -> Self {
		let palettes =
			BUILTIN_PALETTES.iter().map(|(id, palette)| ((*id).to_owned(), *palette)).collect();
		Self {
			palettes,
		}
	}

	/// Parses a registry document.
	pub fn from_json_str(json: &str) -> Result<Self, PaletteError> {
		let registry: Self = serde_json::from_str(json)?;
		debug!("Loaded {} palettes", registry.len());
		Ok(registry)
	}

	/// Reads a registry document from a reader.
	pub fn from_reader<R: Read>(reader: R) -> Result<Self, PaletteError> {
		let registry: Self = serde_json::from_reader(reader)?;
		debug!("Loaded {} palettes", registry.len());
		Ok(registry)
	}

	/// Reads a registry document from a file.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PaletteError> {
		let file = std::fs::File::open(path.as_ref())?;
		debug!("Reading palettes from {}", path.as_ref().display());
		Self::from_reader(std::io::BufReader::new(file))
	}

	/// Registers `palette` under `id`, returning the palette it replaced.
	pub fn insert(&mut self, id: impl Into<String>, palette: Palette) -> Option<Palette> {
		self.palettes.insert(id.into(), palette)
	}

	/// Adds every palette of `other`, replacing palettes with the same identifier.
	pub fn merge(&mut self, other: PaletteRegistry) {
		self.palettes.extend(other.palettes);
	}

	/// Looks up a palette. Unknown identifiers are an error, never a fallback.
	pub fn get(&self, id: &str) -> Result<&Palette, PaletteError> {
		self.palettes.get(id).ok_or_else(|| PaletteError::UnknownPalette(id.to_owned()))
	}

	/// Returns `true` if a palette is registered under `id`.
	pub fn contains(&self, id: &str) -> bool {
		self.palettes.contains_key(id)
	}

	/// Returns the registered identifiers in sorted order.
	pub fn ids(&self) -> impl Iterator<Item = &str> {
		self.palettes.keys().map(String::as_str)
	}

	/// Returns an iterator over `(id, palette)` pairs in identifier order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Palette)> {
		self.palettes.iter().map(|(id, palette)| (id.as_str(), palette))
	}

	/// Returns the number of registered palettes.
	pub fn len(&self) -> usize {
		self.palettes.len()
	}

	/// Returns `true` if no palette is registered.
	pub fn is_empty(&self) -> bool {
		self.palettes.is_empty()
	}

	/// Resolves `id` and maps `indices` through it.
	///
	/// See [`palette::apply_palette`].
	pub fn apply_palette(&self, indices: &[u8], id: &str) -> Result<Vec<u8>, Error> {
		let palette = self.get(id)?;
		Ok(palette::apply_palette(indices, palette)?)
	}
}
