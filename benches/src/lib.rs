//! Benchmark helper utilities for gbcam-rs
//!
//! This module provides generators for synthetic camera grids used by the
//! benchmark suite. Each pattern stresses the transforms differently: flat
//! grids are the best case for branch prediction, noise is the worst.

use gbcam_types::grid::{HEIGHT, PixelGrid, TONE_COUNT, WIDTH};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Synthetic grid patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
	/// Every pixel set to tone 0
	Flat,
	/// Four vertical bands, one per tone
	Gradient,
	/// 8×8 checkerboard of tones 0 and 3
	Checker,
	/// Seeded uniform noise
	Noise(u64),
}

impl Pattern {
	/// Patterns exercised by every benchmark
	pub const ALL: [Pattern; 4] =
		[Pattern::Flat, Pattern::Gradient, Pattern::Checker, Pattern::Noise(0x6263)];

	/// Short label used as benchmark parameter
	pub fn label(&self) -> &'static str {
		match self {
			Pattern::Flat => "flat",
			Pattern::Gradient => "gradient",
			Pattern::Checker => "checker",
			Pattern::Noise(_) => "noise",
		}
	}
}

/// Generates a camera grid with the given pattern.
pub fn generate_test_grid(pattern: Pattern) -> PixelGrid {
	let pixels: Vec<u8> = match pattern {
		Pattern::Flat => vec![0; WIDTH * HEIGHT],
		Pattern::Gradient => {
			(0..WIDTH * HEIGHT).map(|i| ((i % WIDTH) * TONE_COUNT / WIDTH) as u8).collect()
		}
		Pattern::Checker => (0..WIDTH * HEIGHT)
			.map(|i| {
				let (x, y) = (i % WIDTH, i / WIDTH);
				if (x / 8 + y / 8) % 2 == 0 { 0 } else { 3 }
			})
			.collect(),
		Pattern::Noise(seed) => {
			let mut rng = SmallRng::seed_from_u64(seed);
			(0..WIDTH * HEIGHT).map(|_| rng.random_range(0..TONE_COUNT as u8)).collect()
		}
	};

	PixelGrid::new(pixels).expect("generated tones are always in range")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_patterns_are_valid_grids() {
		for pattern in Pattern::ALL {
			let grid = generate_test_grid(pattern);
			assert_eq!(grid.as_slice().len(), WIDTH * HEIGHT, "{}", pattern.label());
		}
	}

	#[test]
	fn test_gradient_bands() {
		let grid = generate_test_grid(Pattern::Gradient);
		assert_eq!(grid.get(0, 0), Some(0));
		assert_eq!(grid.get(WIDTH - 1, 0), Some(3));
		assert_eq!(grid.tone_histogram(), [WIDTH * HEIGHT / 4; 4]);
	}

	#[test]
	fn test_noise_is_deterministic() {
		assert_eq!(generate_test_grid(Pattern::Noise(7)), generate_test_grid(Pattern::Noise(7)));
	}
}
