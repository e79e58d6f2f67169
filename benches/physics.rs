//! Benchmarks for lanyard rope simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use lanyard::*;

fn bench_idle_frames(c: &mut Criterion) {
    c.bench_function("rope_8_joints_64_passes_60_frames", |b| {
        b.iter(|| {
            let mut sim: Simulation<f32> =
                Simulation::with_defaults(Viewport::new(1280.0, 720.0), InputModality::Mouse).unwrap();
            for _ in 0..60 {
                sim.tick();
            }
            sim.projection()
        });
    });
}

fn bench_drag_and_fling(c: &mut Criterion) {
    c.bench_function("rope_drag_30_frames_fling_30_frames", |b| {
        b.iter(|| {
            let mut sim: Simulation<f32> =
                Simulation::with_defaults(Viewport::new(800.0, 600.0), InputModality::Touch).unwrap();
            let grab = sim.chain().end().position;
            sim.on_pointer_down(grab, 1);
            for i in 0..30 {
                sim.on_pointer_move(grab + Vec2::new(i as f32 * 6.0, -(i as f32) * 2.0), 1);
                sim.tick();
            }
            sim.on_pointer_up(1);
            for _ in 0..30 {
                sim.tick();
            }
            sim.projection()
        });
    });
}

fn bench_long_rope(c: &mut Criterion) {
    c.bench_function("rope_64_joints_64_passes_60_frames", |b| {
        b.iter(|| {
            let config = ChainConfig::new().with_joint_count(64);
            let mut sim: Simulation<f32> = Simulation::new(
                config,
                AnchorLayout::default(),
                Viewport::new(1280.0, 720.0),
                InputModality::Mouse,
            )
            .unwrap();
            for _ in 0..60 {
                sim.tick();
            }
            sim.projection()
        });
    });
}

criterion_group!(benches, bench_idle_frames, bench_drag_and_fling, bench_long_rope);
criterion_main!(benches);
