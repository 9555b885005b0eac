//! Codec benchmarks
//!
//! Reading and writing of sketches made of many polylines and circles.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dxf_sketch::io::dxf::writer::format_general;
use dxf_sketch::{DxfWriter, Geometry, Point, Sketch};
use std::io::Cursor;

/// Sketch with `count` polygons and circles laid out on a grid
fn grid_sketch(count: usize) -> Sketch {
    let mut sketch = Sketch::new();
    for i in 0..count {
        let x = (i % 100) as f64 * 3.0;
        let y = (i / 100) as f64 * 3.0;
        sketch.group([x, y], |group| {
            group
                .push(Geometry::polygon([[0.0, 0.0], [2.0, 0.0], [2.0, 1.0], [1.0, 2.0], [0.0, 1.0]]))
                .push(Geometry::circle(Point::new(1.0, 1.0), 0.5));
        });
    }
    sketch
}

fn bench_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("write");

    for count in [100, 1000, 10000] {
        let sketch = grid_sketch(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &sketch, |b, sketch| {
            b.iter(|| DxfWriter::new(black_box(sketch)).write_to_string())
        });
    }

    group.finish();
}

fn bench_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("read");

    for count in [100, 1000, 10000] {
        let text = DxfWriter::new(&grid_sketch(count))
            .write_to_string()
            .expect("write failed");
        group.bench_with_input(BenchmarkId::from_parameter(count), &text, |b, text| {
            b.iter(|| dxf_sketch::read(Cursor::new(black_box(text).clone().into_bytes())))
        });
    }

    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let values: Vec<f64> = (0..1000).map(|i| (i as f64).sqrt() * 25.4).collect();
    c.bench_function("format_general", |b| {
        b.iter(|| {
            for v in &values {
                black_box(format_general(*v, Some(6)));
            }
        })
    });
}

criterion_group!(benches, bench_write, bench_read, bench_format);
criterion_main!(benches);
