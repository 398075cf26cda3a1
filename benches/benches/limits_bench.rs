//! # Limits Benchmarks
//!
//! Measures the real-time path: per-handle enforcement and whole-registry
//! enforcement per control tick. All operations are O(1) per handle.
//!
//! Run: `cargo bench --bench limits_bench`

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sil_limits::{
    AnyLimitsHandle, EffortJointSaturationHandle, EffortJointSoftLimitsHandle, EnforceLimits, JointAccessor,
    JointLimits, JointState, MixedJointLimitsInterface, PositionJointSoftLimitsHandle,
    SoftJointLimits, VelocityJointSaturationHandle, saturate,
};

const TICK: Duration = Duration::from_millis(1);

fn limits() -> JointLimits {
    JointLimits::velocity(2.0).with_position(-1.0, 1.0).with_effort(10.0)
}

fn soft() -> SoftJointLimits {
    SoftJointLimits::new(10.0, 5.0, -0.9, 0.9)
}

/// Benchmark saturation primitive
fn bench_saturate(c: &mut Criterion) {
    c.bench_function("saturate", |b| {
        b.iter(|| black_box(saturate(black_box(3.0), black_box(-1.0), black_box(1.0))))
    });
}

/// Benchmark single handle enforcement
fn bench_handles(c: &mut Criterion) {
    let mut group = c.benchmark_group("handle_enforce");
    let joint = JointState::with_state("joint", 0.85, 0.5);

    let mut position = PositionJointSoftLimitsHandle::new(&joint, limits(), soft()).unwrap();
    group.bench_function("position_soft", |b| {
        b.iter(|| {
            joint.set_command(black_box(5.0));
            position.enforce_limits(black_box(TICK));
        })
    });

    let mut effort = EffortJointSoftLimitsHandle::new(&joint, limits(), soft()).unwrap();
    group.bench_function("effort_soft", |b| {
        b.iter(|| {
            joint.set_command(black_box(50.0));
            effort.enforce_limits(black_box(TICK));
        })
    });

    let mut effort_sat = EffortJointSaturationHandle::new(&joint, limits()).unwrap();
    group.bench_function("effort_saturation", |b| {
        b.iter(|| {
            joint.set_command(black_box(50.0));
            effort_sat.enforce_limits(black_box(TICK));
        })
    });

    let mut velocity = VelocityJointSaturationHandle::new(&joint, limits()).unwrap();
    group.bench_function("velocity_saturation", |b| {
        b.iter(|| {
            joint.set_command(black_box(5.0));
            velocity.enforce_limits(black_box(TICK));
        })
    });

    group.finish();
}

/// Benchmark registry enforcement per tick
fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_enforce");

    for count in [6usize, 32, 128] {
        let joints: Vec<JointState> = (0..count)
            .map(|i| JointState::with_state(&format!("joint-{i:03}"), 0.5, 0.1))
            .collect();

        let mut interface = MixedJointLimitsInterface::new();
        for (i, joint) in joints.iter().enumerate() {
            let handle: AnyLimitsHandle<&JointState> = match i % 3 {
                0 => PositionJointSoftLimitsHandle::new(joint, limits(), soft()).unwrap().into(),
                1 => EffortJointSoftLimitsHandle::new(joint, limits(), soft()).unwrap().into(),
                _ => VelocityJointSaturationHandle::new(joint, limits()).unwrap().into(),
            };
            interface.insert(handle).unwrap();
        }

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                for joint in &joints {
                    joint.set_command(5.0);
                }
                interface.enforce_limits(black_box(TICK));
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_saturate, bench_handles, bench_registry);
criterion_main!(benches);
