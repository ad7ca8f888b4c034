//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Benchmarks for palette quantization

use ansiterm_palette::{
    BASIC_RANGE, Color, FULL_RANGE, QuantizationCache, Quantizer, SgrPalette, nearest_index,
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn sample_colors(count: usize) -> Vec<Color> {
    (0..count)
        .map(|i| {
            let i = i as u32;
            Color::rgb(
                (i.wrapping_mul(37) % 256) as u8,
                (i.wrapping_mul(91) % 256) as u8,
                (i.wrapping_mul(173) % 256) as u8,
            )
        })
        .collect()
}

// Benchmark cold lookups, every color scans the palette
fn bench_nearest_cold(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_cold");

    for size in [16, 256, 4096].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let colors = sample_colors(size);
            b.iter(|| {
                let mut cache = QuantizationCache::new();
                for color in &colors {
                    black_box(nearest_index(black_box(*color), FULL_RANGE, &mut cache));
                }
            });
        });
    }
    group.finish();
}

// Benchmark warm lookups, every color is already memoized
fn bench_nearest_warm(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_warm");

    for size in [16, 256, 4096].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let colors = sample_colors(size);
            let mut cache = QuantizationCache::new();
            for color in &colors {
                nearest_index(*color, FULL_RANGE, &mut cache);
            }
            b.iter(|| {
                for color in &colors {
                    black_box(nearest_index(black_box(*color), FULL_RANGE, &mut cache));
                }
            });
        });
    }
    group.finish();
}

// Benchmark the basic 16-color scan
fn bench_nearest_basic(c: &mut Criterion) {
    let colors = sample_colors(256);
    c.bench_function("nearest_basic_cold", |b| {
        b.iter(|| {
            let mut cache = QuantizationCache::new();
            for color in &colors {
                black_box(nearest_index(black_box(*color), BASIC_RANGE, &mut cache));
            }
        });
    });
}

// Benchmark the derived 4-bit SGR conversion
fn bench_to_4bit_sgr(c: &mut Criterion) {
    let colors = sample_colors(256);
    c.bench_function("to_4bit_sgr", |b| {
        let mut quantizer = Quantizer::new();
        b.iter(|| {
            for color in &colors {
                black_box(quantizer.to_4bit_sgr(black_box(*color), SgrPalette::Foreground));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_nearest_cold,
    bench_nearest_warm,
    bench_nearest_basic,
    bench_to_4bit_sgr
);
criterion_main!(benches);
