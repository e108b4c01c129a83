//! This crate provides the core data types and transforms for the `gbcam-rs` project.
//!
//! # Components
//!
//! - **Grid**: validated 128×112 grids of 2-bit tones and their geometry
//! - **Effect**: pure transforms between grids (invert, mirror, zoom, tile)
//! - **Palette**: four-color palettes and tone-to-RGBA mapping
//! - **Registry**: palettes looked up by identifier
//! - **Pipeline**: an effect chain followed by palette mapping
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```
//! use gbcam_types::prelude::*;
//!
//! let grid = PixelGrid::from_fn(|x, y| ((x + y) % 4) as u8).unwrap();
//! let mirrored = apply_effect(&grid, "mirror-ltr");
//!
//! let registry = PaletteRegistry::builtin();
//! let rgba = registry.apply_palette(mirrored.as_slice(), "pocket").unwrap();
//! assert_eq!(rgba.len(), WIDTH * HEIGHT * 4);
//! ```
//!
//! Or use explicit paths:
//!
//! ```
//! use gbcam_types::effect::Effect;
//! use gbcam_types::grid::PixelGrid;
//!
//! let tiled = Effect::Tile.apply(&PixelGrid::blank());
//! # assert_eq!(tiled, PixelGrid::blank());
//! ```

pub mod effect;
pub mod grid;
pub mod palette;
pub mod pipeline;
pub mod registry;

mod error;

pub use error::{Error, GridError, PaletteError};

/// `use gbcam_types::prelude::*;` to import commonly used items.
pub mod prelude;
