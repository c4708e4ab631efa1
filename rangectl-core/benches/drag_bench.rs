//! Criterion benchmarks for range control hot paths.
//!
//! Benchmarks:
//! 1. Full drag session (press, N moves, release) on each channel
//! 2. Attribute delivery with numeric parsing
//! 3. Display formatting

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use rangectl_core::normalize::DisplayRange;
use rangectl_core::{
    AttributeName, Attributes, ControlConfig, HostElement, PressTarget, RangeControl, ShadowTree,
    TrackGeometry,
};

fn mounted() -> RangeControl<ShadowTree> {
    let mut control = RangeControl::new(
        ControlConfig::dual(),
        ShadowTree::new(TrackGeometry::new(12.0, 640.0)),
    );
    control.subscribe(|e| {
        black_box(e);
    });
    control.mount(&Attributes::new().with("unit", "%"));
    control
}

fn bench_drag_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_session");
    for moves in [10usize, 100, 1_000] {
        for (name, target) in [("fill", PressTarget::Track), ("handle", PressTarget::Handle)] {
            group.bench_with_input(BenchmarkId::new(name, moves), &moves, |b, &moves| {
                let mut control = mounted();
                b.iter(|| {
                    control.pointer_down(20.0, target);
                    for i in 0..moves {
                        control.pointer_move(black_box(12.0 + (i % 640) as f64));
                    }
                    control.pointer_up();
                });
            });
        }
    }
    group.finish();
}

fn bench_attributes(c: &mut Criterion) {
    let mut control = mounted();
    let values = ["0.1", "0.25", "0.5", "0.75", "junk", "12px"];
    c.bench_function("attribute_changed/value", |b| {
        b.iter(|| {
            for v in values {
                control.attribute_changed(AttributeName::Value, Some(black_box(v)));
            }
        });
    });
}

fn bench_format(c: &mut Criterion) {
    let range = DisplayRange::new(-20.0, 40.0);
    c.bench_function("display_format", |b| {
        b.iter(|| range.format(black_box(0.3337), "°C"));
    });
}

criterion_group!(benches, bench_drag_session, bench_attributes, bench_format);
criterion_main!(benches);
