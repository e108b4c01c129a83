//! Effect chain followed by palette mapping.

use log::warn;

use crate::effect::Effect;
use crate::error::{Error, PaletteError};
use crate::grid::PixelGrid;
use crate::registry::PaletteRegistry;

/// An ordered list of effect names and an optional palette selection.
///
/// # Examples
///
/// ```
/// use gbcam_types::prelude::*;
///
/// let pipeline = Pipeline::new().with_effect("zoom").with_effect("invert").with_palette("dmg");
/// let rgba = pipeline.render(&PixelGrid::blank(), &PaletteRegistry::builtin()).unwrap();
/// assert_eq!(rgba.len(), PIXEL_COUNT * 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
	effects: Vec<String>,
	palette: Option<String>,
}

impl Pipeline {
	/// Creates an empty pipeline: no effects and no palette.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends an effect name.
	pub fn with_effect(mut self, name: impl Into<String>) -> Self {
		self.effects.push(name.into());
		self
	}

	/// Appends several effect names.
	pub fn with_effects<I, S>(mut self, names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.effects.extend(names.into_iter().map(Into::into));
		self
	}

	/// Selects the palette used by [`Pipeline::render`].
	pub fn with_palette(mut self, id: impl Into<String>) -> Self {
		self.palette = Some(id.into());
		self
	}

	/// Returns the configured effect names.
	pub fn effects(&self) -> &[String] {
		&self.effects
	}

	/// Returns the selected palette identifier.
	pub fn palette(&self) -> Option<&str> {
		self.palette.as_deref()
	}

	/// Returns the configured names that are not recognized effects.
	///
	/// Such names are kept in the chain and behave as identity steps.
	pub fn unknown_effects(&self) -> Vec<&str> {
		self.effects
			.iter()
			.map(String::as_str)
			.filter(|name| Effect::from_name(name).is_none())
			.collect()
	}

	/// Runs the effect chain.
	///
	/// Unknown steps leave the grid unchanged, exactly like
	/// [`apply_effects`](crate::effect::apply_effects), and are reported once each.
	pub fn transform(&self, grid: &PixelGrid) -> PixelGrid {
		self.effects.iter().fold(grid.clone(), |current, name| match Effect::from_name(name) {
			Some(effect) => effect.apply(&current),
			None => {
				warn!("Pipeline step {name:?} is not a known effect and will be skipped");
				current
			}
		})
	}

	/// Runs the effect chain and maps the result through the selected palette.
	///
	/// The palette is resolved before any effect runs.
	pub fn render(&self, grid: &PixelGrid, registry: &PaletteRegistry) -> Result<Vec<u8>, Error> {
		let id = self.palette().ok_or(PaletteError::NoPaletteSelected)?;
		let palette = registry.get(id)?;
		Ok(self.transform(grid).apply_palette(palette))
	}
}
