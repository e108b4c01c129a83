#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `gbcam-rs` transforms 128×112 four-tone camera images.
//!
//! Images are grids of palette indices. Effects (invert, mirror, zoom, tile)
//! rearrange indices; a palette then turns them into an RGBA buffer.
//!
//! ```
//! use gbcam_rs::prelude::*;
//!
//! let grid = PixelGrid::from_fn(|x, _| (x % 4) as u8).unwrap();
//! let rgba = Pipeline::new()
//!     .with_effect("mirror-rtl")
//!     .with_palette("dmg")
//!     .render(&grid, &PaletteRegistry::builtin())
//!     .unwrap();
//! assert_eq!(rgba.len(), WIDTH * HEIGHT * 4);
//! ```

pub use gbcam_internal::*;

pub mod config;

#[cfg(all(feature = "dynamic_linking", not(target_family = "wasm")))]
#[allow(unused_imports)]
use gbcam_dylib;
