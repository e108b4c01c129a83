//! Benchmark suite for the effect engine and palette mapping
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml
//!
//! For flamegraph profiling:
//! cargo bench --manifest-path benches/Cargo.toml -- --profile-time=5

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use gbcam_benches::{Pattern, generate_test_grid};
use gbcam_types::effect::{Effect, apply_effect, apply_effects};
use gbcam_types::grid::PIXEL_COUNT;
use gbcam_types::registry::PaletteRegistry;
use std::hint::black_box;

/// Benchmark each effect over every synthetic pattern
fn bench_effects(c: &mut Criterion) {
	let mut group = c.benchmark_group("effect");
	group.throughput(Throughput::Elements(PIXEL_COUNT as u64));

	for effect in Effect::ALL {
		for pattern in Pattern::ALL {
			let grid = generate_test_grid(pattern);
			group.bench_with_input(
				BenchmarkId::new(effect.name(), pattern.label()),
				&grid,
				|b, grid| {
					b.iter(|| black_box(effect.apply(black_box(grid))));
				},
			);
		}
	}

	group.finish();
}

/// Benchmark name dispatch, including the identity fallback
fn bench_dispatch(c: &mut Criterion) {
	let mut group = c.benchmark_group("dispatch");
	let grid = generate_test_grid(Pattern::Noise(1));

	for name in ["invert", "zoom", "unknown-token"] {
		group.bench_with_input(BenchmarkId::from_parameter(name), &grid, |b, grid| {
			b.iter(|| black_box(apply_effect(black_box(grid), black_box(name))));
		});
	}

	group.bench_function("chain", |b| {
		let chain = ["zoom", "mirror-ltr", "invert", "tile"];
		b.iter(|| black_box(apply_effects(black_box(&grid), chain)));
	});

	group.finish();
}

/// Benchmark palette mapping to RGBA
fn bench_palette(c: &mut Criterion) {
	let mut group = c.benchmark_group("palette");
	group.throughput(Throughput::Elements(PIXEL_COUNT as u64));

	let registry = PaletteRegistry::builtin();
	let grid = generate_test_grid(Pattern::Noise(2));

	for (id, palette) in registry.iter() {
		group.bench_with_input(BenchmarkId::new("map", id), palette, |b, palette| {
			b.iter(|| black_box(grid.apply_palette(black_box(palette))));
		});
	}

	group.bench_function("lookup_and_map", |b| {
		b.iter(|| black_box(registry.apply_palette(black_box(grid.as_slice()), "dmg")));
	});

	group.finish();
}

criterion_group!(benches, bench_effects, bench_dispatch, bench_palette);
criterion_main!(benches);
