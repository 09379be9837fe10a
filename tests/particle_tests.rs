// Host-side tests for the confetti simulation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod particles {
    include!("../src/core/particles.rs");
}

use constants::*;
use glam::Vec2;
use particles::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::PI;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn in_range(v: f32, lo: f32, hi: f32) -> bool {
    v >= lo && v < hi
}

#[test]
fn initialize_respects_count_and_ranges() {
    let surface = SurfaceSize::new(800.0, 600.0);
    for count in [0usize, 1, 7, 150, 1000] {
        let particles = initialize(count, surface, &mut rng(count as u64));
        assert_eq!(particles.len(), count);
        for p in &particles {
            assert!(in_range(p.pos.x, 0.0, 800.0), "x out of range: {}", p.pos.x);
            assert!(in_range(p.pos.y, 0.0, 600.0), "y out of range: {}", p.pos.y);
            assert!(in_range(p.size, 4.0, 10.0), "size out of range: {}", p.size);
            assert!(in_range(p.rotation, 0.0, PI), "rotation out of range: {}", p.rotation);
            assert!(in_range(p.vel.x, -1.0, 1.0), "vx out of range: {}", p.vel.x);
            assert!(in_range(p.vel.y, 1.0, 4.0), "vy out of range: {}", p.vel.y);
            assert!(in_range(p.spin, -0.05, 0.05), "spin out of range: {}", p.spin);
        }
    }
}

#[test]
fn initialize_on_empty_surface_does_not_panic() {
    let particles = initialize(10, SurfaceSize::new(0.0, 0.0), &mut rng(3));
    assert_eq!(particles.len(), 10);
    assert!(particles.iter().all(|p| p.pos == Vec2::ZERO));
}

#[test]
fn step_integrates_by_fixed_velocity() {
    let surface = SurfaceSize::new(800.0, 600.0);
    let mut p = Particle {
        pos: Vec2::new(100.0, 100.0),
        size: 5.0,
        rotation: 0.5,
        vel: Vec2::new(-0.5, 2.0),
        spin: 0.01,
    };
    let recycled = p.step(&mut rng(1), surface);
    assert!(!recycled);
    assert_eq!(p.pos, Vec2::new(99.5, 102.0));
    assert!((p.rotation - 0.51).abs() < 1e-6);
}

#[test]
fn particle_past_bottom_is_recycled_on_that_frame() {
    let surface = SurfaceSize::new(800.0, 600.0);
    let mut p = Particle {
        pos: Vec2::new(400.0, 599.0),
        size: 5.0,
        rotation: 0.0,
        vel: Vec2::new(0.0, 3.0),
        spin: 0.0,
    };
    let recycled = p.step(&mut rng(2), surface);
    assert!(recycled);
    assert_eq!(p.pos.y, RECYCLE_Y);
    assert!(in_range(p.pos.x, 0.0, 800.0));
}

#[test]
fn particle_exactly_at_bottom_is_kept() {
    let surface = SurfaceSize::new(800.0, 600.0);
    let mut p = Particle {
        pos: Vec2::new(10.0, 598.0),
        size: 5.0,
        rotation: 0.0,
        vel: Vec2::new(0.0, 2.0),
        spin: 0.0,
    };
    assert!(!p.step(&mut rng(2), surface));
    assert_eq!(p.pos.y, 600.0);
}

#[test]
fn y_stays_within_bounds_over_many_frames() {
    let surface = SurfaceSize::new(320.0, 240.0);
    let mut field = ConfettiField::with_rng(150, surface, rng(42));
    let mut ops = Vec::new();
    let mut recycled_total = 0;
    for _ in 0..2000 {
        recycled_total += field.step(surface);
        for p in &field.particles {
            assert!(
                p.pos.y >= RECYCLE_Y && p.pos.y <= surface.height,
                "y escaped bounds: {}",
                p.pos.y
            );
        }
    }
    assert!(recycled_total > 0, "expected particles to wrap");
    field.advance_frame(surface, &mut ops);
    assert_eq!(ops.len(), 151);
}

#[test]
fn shrinking_surface_recycles_on_next_frame() {
    let big = SurfaceSize::new(800.0, 600.0);
    let small = SurfaceSize::new(400.0, 100.0);
    let mut field = ConfettiField::with_rng(200, big, rng(9));
    field.step(small);
    for p in &field.particles {
        assert!(p.pos.y <= small.height);
    }
}

#[test]
fn advance_frame_clears_then_draws_every_particle() {
    let surface = SurfaceSize::new(640.0, 480.0);
    let mut field = ConfettiField::with_rng(25, surface, rng(5));
    let mut ops = Vec::new();
    field.advance_frame(surface, &mut ops);
    assert_eq!(
        ops[0],
        DrawOp::Clear {
            width: 640.0,
            height: 480.0
        }
    );
    assert_eq!(ops.len(), 26);
    for (op, p) in ops[1..].iter().zip(&field.particles) {
        match op {
            DrawOp::Confetti {
                center,
                rotation,
                size,
                aspect,
                color,
            } => {
                assert_eq!(*center, p.pos);
                assert_eq!(*rotation, p.rotation);
                assert_eq!(*size, p.size);
                assert_eq!(*aspect, CONFETTI_ASPECT);
                assert!((color.hue - p.hue()).abs() < 1e-4);
                assert_eq!(color.saturation, 100.0);
                assert_eq!(color.lightness, 60.0);
            }
            other => panic!("unexpected op {other:?}"),
        }
    }
}

#[test]
fn hue_wraps_into_degrees() {
    let p = Particle {
        pos: Vec2::new(300.0, 100.0),
        size: 5.0,
        rotation: 0.0,
        vel: Vec2::ZERO,
        spin: 0.0,
    };
    assert!((p.hue() - 40.0).abs() < 1e-4);
    let above = Particle {
        pos: Vec2::new(0.0, -10.0),
        ..p
    };
    assert!((above.hue() - 350.0).abs() < 1e-4);
}

#[test]
fn hsl_css_formatting() {
    let c = Hsl {
        hue: 120.0,
        saturation: 100.0,
        lightness: 60.0,
    };
    assert_eq!(c.css(), "hsl(120.0,100%,60%)");
}

#[test]
fn burst_emits_nine_hundred_sparks_in_three_groups() {
    let mut out = Vec::new();
    burst(&mut rng(11), Vec2::new(0.0, 0.0), &mut out);
    assert_eq!(out.len(), 900);

    for group in 0..3 {
        let slice = &out[group * 300..(group + 1) * 300];
        let first = slice[0].0;
        assert_eq!(first, group as f64 * 500.0);
        for (i, (delay, _)) in slice.iter().enumerate() {
            assert_eq!(*delay, first + i as f64 * 3.0);
        }
    }

    let draws: usize = out
        .iter()
        .flat_map(|(_, s)| s.draw_ops())
        .filter(|op| matches!(op, DrawOp::Confetti { .. }))
        .count();
    assert_eq!(draws, 900);
}

#[test]
fn burst_sparks_land_near_origin() {
    let origin = Vec2::new(400.0, 300.0);
    let mut out = Vec::new();
    burst(&mut rng(12), origin, &mut out);
    for (_, s) in &out {
        assert!((s.center.x - origin.x).abs() <= 200.01);
        assert!((s.center.y - origin.y).abs() <= 150.01);
        assert!(in_range(s.size, 2.0, 6.0));
        assert!(in_range(s.hue, 0.0, 360.0));
        if let Some(g) = s.glint {
            assert!((g.x - s.center.x).abs() <= 10.001);
            assert!((g.y - s.center.y).abs() <= 10.001);
        }
    }
}

#[test]
fn glint_chance_is_roughly_thirty_percent() {
    let mut out = Vec::new();
    let mut r = rng(13);
    for _ in 0..10 {
        burst(&mut r, Vec2::ZERO, &mut out);
    }
    let glints = out.iter().filter(|(_, s)| s.glint.is_some()).count();
    let ratio = glints as f64 / out.len() as f64;
    assert!(
        (0.25..0.35).contains(&ratio),
        "glint ratio {ratio} far from {GLINT_CHANCE}"
    );
}

#[test]
fn spark_with_glint_draws_a_white_dot() {
    let spark = Spark {
        center: Vec2::new(5.0, 5.0),
        rotation: 1.0,
        size: 3.0,
        hue: 200.0,
        glint: Some(Vec2::new(8.0, 2.0)),
    };
    let ops = spark.draw_ops();
    assert_eq!(ops.len(), 2);
    assert_eq!(
        ops[1],
        DrawOp::Sparkle {
            center: Vec2::new(8.0, 2.0),
            radius: GLINT_RADIUS
        }
    );
    let plain = Spark {
        glint: None,
        ..spark
    };
    assert_eq!(plain.draw_ops().len(), 1);
}

#[test]
fn same_seed_gives_same_field() {
    let surface = SurfaceSize::new(800.0, 600.0);
    let a = ConfettiField::with_rng(50, surface, rng(77));
    let b = ConfettiField::with_rng(50, surface, rng(77));
    assert_eq!(a.particles, b.particles);
}
