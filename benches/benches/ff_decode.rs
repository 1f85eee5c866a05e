//! Benchmark suite for `.ff` container decoding
//!
//! This benchmark measures directory decoding, record lookups and packed
//! image parsing on synthetic containers.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mqdb_benches::{generate_test_ff_data, generate_test_images_data};
use mqdb_types::file::{
	ff::{File, Options},
	pimg,
};
use std::hint::black_box;

/// Benchmark container construction with growing name lists
fn bench_open(c: &mut Criterion) {
	let mut group = c.benchmark_group("ff_open");

	for count in [16u32, 256, 4096] {
		let data = generate_test_ff_data(count, 64, None);

		group.throughput(Throughput::Elements(count as u64));
		group.bench_with_input(BenchmarkId::new("from_bytes", count), &data, |b, data| {
			b.iter(|| {
				let result = File::from_bytes_with(black_box(data), Options::metadata_only());
				black_box(result)
			});
		});
	}

	group.finish();
}

/// Benchmark payload reads by name
fn bench_record_lookup(c: &mut Criterion) {
	let mut group = c.benchmark_group("ff_record");

	let data = generate_test_ff_data(4096, 4096, None);
	let Ok(ff) = File::from_bytes(&data) else {
		eprintln!("Warning: Could not decode synthetic container");
		return;
	};

	group.throughput(Throughput::Bytes(4096));
	group.bench_function("record_data_by_name", |b| {
		let mut buffer = Vec::with_capacity(4096);
		b.iter(|| {
			let result = ff.record_data_by_name(black_box("RECORD02048.BIN"), &mut buffer);
			black_box(result)
		});
	});

	group.bench_function("find_by_name_miss", |b| {
		b.iter(|| black_box(ff.find_by_name(black_box("MISSING.BIN"))));
	});

	group.finish();
}

/// Benchmark `-IMAGES.OPT` parsing
fn bench_packed_images(c: &mut Criterion) {
	let mut group = c.benchmark_group("ff_packed_images");

	for (images, frames) in [(64u32, 1u32), (16, 8)] {
		let blob = generate_test_images_data(images, frames);

		group.throughput(Throughput::Bytes(blob.len() as u64));
		group.bench_with_input(
			BenchmarkId::new("parse", format!("{}x{}", images, frames)),
			&blob,
			|b, blob| {
				b.iter(|| black_box(pimg::parse_packed_images(black_box(blob), false)));
			},
		);
	}

	// Full container with images, the default open path
	let data = generate_test_ff_data(256, 64, Some(&generate_test_images_data(64, 4)));
	group.bench_function("from_bytes_with_images", |b| {
		b.iter(|| black_box(File::from_bytes(black_box(&data))));
	});

	group.finish();
}

criterion_group!(benches, bench_open, bench_record_lookup, bench_packed_images);

criterion_main!(benches);
