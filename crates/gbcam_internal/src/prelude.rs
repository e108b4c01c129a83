//! Prelude module for `gbcam_internal`.
//!
//! This module provides a convenient way to import commonly used types and functions.
//!
//! # Examples
//!
//! ```rust
//! use gbcam_internal::prelude::*;
//!
//! // Now you can use all common types directly
//! let grid = PixelGrid::blank();
//! let zoomed = apply_effect(&grid, "zoom-h");
//!
//! // Resolve a palette and render
//! let registry = PaletteRegistry::builtin();
//! let rgba = registry.apply_palette(zoomed.as_slice(), "grayscale").unwrap();
//! assert_eq!(rgba.len(), PIXEL_COUNT * 4);
//! ```

// Re-export everything from gbcam_types::prelude
#[doc(inline)]
pub use gbcam_types::prelude::*;

// Re-export the entire gbcam_types module for advanced usage
#[doc(inline)]
pub use gbcam_types;
