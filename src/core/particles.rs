use super::constants::*;
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;
use std::f32::consts::PI;

/// Pixel dimensions of the drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// CSS `hsl()` colour. Hue in degrees, saturation and lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    pub fn css(&self) -> String {
        format!(
            "hsl({:.1},{:.0}%,{:.0}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// One canvas instruction produced by the simulation.
///
/// The browser shell replays these on a `CanvasRenderingContext2d`; keeping
/// them as data lets the field run and be inspected without a canvas.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Clear the whole surface.
    Clear { width: f32, height: f32 },
    /// A rotated rectangle of `size` x `size * aspect` whose top-left corner
    /// sits at `(-size/2, -size/2)` in the rotated frame centred on `center`.
    Confetti {
        center: Vec2,
        rotation: f32,
        size: f32,
        aspect: f32,
        color: Hsl,
    },
    /// A small white dot.
    Sparkle { center: Vec2, radius: f32 },
}

#[inline]
fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    lo + (hi - lo) * rng.gen::<f32>()
}

/// A single piece of ambient confetti.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub size: f32,
    pub rotation: f32,
    pub vel: Vec2,
    pub spin: f32,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, surface: SurfaceSize) -> Self {
        Self {
            pos: Vec2::new(
                uniform(rng, 0.0, surface.width),
                uniform(rng, 0.0, surface.height),
            ),
            size: uniform(rng, PARTICLE_SIZE_MIN, PARTICLE_SIZE_MAX),
            rotation: uniform(rng, 0.0, PI),
            vel: Vec2::new(
                uniform(rng, -PARTICLE_VX_MAX, PARTICLE_VX_MAX),
                uniform(rng, PARTICLE_VY_MIN, PARTICLE_VY_MAX),
            ),
            spin: uniform(rng, -PARTICLE_SPIN_MAX, PARTICLE_SPIN_MAX),
        }
    }

    /// Hue follows the particle across the screen.
    #[inline]
    pub fn hue(&self) -> f32 {
        (self.pos.x + self.pos.y).rem_euclid(360.0)
    }

    /// One fixed integration step. Returns true when the particle fell past
    /// the bottom edge and was recycled to the top.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R, surface: SurfaceSize) -> bool {
        self.pos += self.vel;
        self.rotation += self.spin;
        if self.pos.y > surface.height {
            self.pos.y = RECYCLE_Y;
            self.pos.x = uniform(rng, 0.0, surface.width);
            return true;
        }
        false
    }

    pub fn draw_op(&self) -> DrawOp {
        DrawOp::Confetti {
            center: self.pos,
            rotation: self.rotation,
            size: self.size,
            aspect: CONFETTI_ASPECT,
            color: Hsl {
                hue: self.hue(),
                saturation: CONFETTI_SATURATION,
                lightness: CONFETTI_LIGHTNESS,
            },
        }
    }
}

/// Build `count` particles scattered over `surface`.
pub fn initialize<R: Rng + ?Sized>(
    count: usize,
    surface: SurfaceSize,
    rng: &mut R,
) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(&mut *rng, surface)).collect()
}

/// A short-lived burst piece, drawn exactly once when its task fires.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spark {
    pub center: Vec2,
    pub rotation: f32,
    pub size: f32,
    pub hue: f32,
    pub glint: Option<Vec2>,
}

impl Spark {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, origin: Vec2) -> Self {
        let center = Vec2::new(
            origin.x + (rng.gen::<f32>() - 0.5) * BURST_SPREAD_X,
            origin.y + (rng.gen::<f32>() - 0.5) * BURST_SPREAD_Y,
        );
        let rotation = uniform(rng, 0.0, 2.0 * PI);
        let size = uniform(rng, SPARK_SIZE_MIN, SPARK_SIZE_MAX);
        let hue = uniform(rng, 0.0, 360.0);
        let glint = rng.gen_bool(GLINT_CHANCE).then(|| {
            center
                + Vec2::new(
                    uniform(rng, -GLINT_JITTER, GLINT_JITTER),
                    uniform(rng, -GLINT_JITTER, GLINT_JITTER),
                )
        });
        Self {
            center,
            rotation,
            size,
            hue,
            glint,
        }
    }

    pub fn draw_ops(&self) -> SmallVec<[DrawOp; 2]> {
        let mut ops = SmallVec::new();
        ops.push(DrawOp::Confetti {
            center: self.center,
            rotation: self.rotation,
            size: self.size,
            aspect: SPARK_ASPECT,
            color: Hsl {
                hue: self.hue,
                saturation: SPARK_SATURATION,
                lightness: SPARK_LIGHTNESS,
            },
        });
        if let Some(at) = self.glint {
            ops.push(DrawOp::Sparkle {
                center: at,
                radius: GLINT_RADIUS,
            });
        }
        ops
    }
}

/// Generate one celebratory burst around `origin`.
///
/// Appends `BURST_GROUPS * BURST_SPARKS_PER_GROUP` `(delay_ms, spark)` pairs.
/// Groups start `BURST_GROUP_SPACING_MS` apart and sparks within a group are
/// staggered by `BURST_SPARK_SPACING_MS`.
pub fn burst<R: Rng + ?Sized>(rng: &mut R, origin: Vec2, out: &mut Vec<(f64, Spark)>) {
    out.reserve(BURST_GROUPS * BURST_SPARKS_PER_GROUP);
    for group in 0..BURST_GROUPS {
        let group_delay = group as f64 * BURST_GROUP_SPACING_MS;
        for i in 0..BURST_SPARKS_PER_GROUP {
            let delay = group_delay + i as f64 * BURST_SPARK_SPACING_MS;
            out.push((delay, Spark::random(rng, origin)));
        }
    }
}

/// The ambient background: a fixed pool of recycled particles.
pub struct ConfettiField {
    pub particles: Vec<Particle>,
    rng: StdRng,
}

impl ConfettiField {
    pub fn with_rng(count: usize, surface: SurfaceSize, mut rng: StdRng) -> Self {
        let particles = initialize(count, surface, &mut rng);
        Self { particles, rng }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Integrate every particle by one step and recycle those that fell off.
    /// Returns how many were recycled.
    pub fn step(&mut self, surface: SurfaceSize) -> usize {
        let rng = &mut self.rng;
        self.particles
            .iter_mut()
            .map(|p| p.step(&mut *rng, surface))
            .filter(|recycled| *recycled)
            .count()
    }

    /// Emit a full redraw of the field: one clear, then one piece per particle.
    pub fn draw(&self, surface: SurfaceSize, out: &mut Vec<DrawOp>) {
        out.push(DrawOp::Clear {
            width: surface.width,
            height: surface.height,
        });
        out.extend(self.particles.iter().map(Particle::draw_op));
    }

    /// Step, then redraw. Called once per animation frame.
    pub fn advance_frame(&mut self, surface: SurfaceSize, out: &mut Vec<DrawOp>) {
        self.step(surface);
        self.draw(surface, out);
    }

    /// Burst using the field's own random source.
    pub fn burst(&mut self, origin: Vec2, out: &mut Vec<(f64, Spark)>) {
        burst(&mut self.rng, origin, out);
    }
}
