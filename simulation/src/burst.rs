use std::f64::consts::TAU;

use rand::Rng;

use crate::{Color, Particle, ParticleParams};

/// Point on the parametric heart curve at `t`, relative to the heart's centre.
///
/// The curve is flipped vertically so that it stands upright in a y-down pixel space.
pub fn heart_point(t: f64, size: f64) -> (f64, f64) {
    let x = 16.0 * t.sin().powi(3);
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();

    (size * x, -size * y)
}

/// Emits paired particles whose initial directions trace a heart outline.
///
/// The outline itself is never drawn. Each pair holds a primary, which falls, followed by its
/// reflection, which rises at a fraction of the speed along the vertically mirrored direction.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct HeartBurst {
    pub pair_count: usize,
    /// Half-width of the uniform angular perturbation, in radians.
    pub jitter: f64,
    pub speed_min: f64,
    pub speed_max: f64,
    /// Reflection speed as a fraction of its primary's speed.
    pub reflection_speed: f64,
    pub color: Color,
    pub particle: ParticleParams,
}

impl Default for HeartBurst {
    fn default() -> Self {
        HeartBurst {
            pair_count: 300,
            jitter: 0.4,
            speed_min: 2.0,
            speed_max: 6.0,
            reflection_speed: 0.5,
            color: Color::HOT_PINK,
            particle: ParticleParams::default(),
        }
    }
}

impl HeartBurst {
    /// Unperturbed launch direction of pair `index`, in radians.
    pub fn direction(&self, index: usize, size: f64) -> f64 {
        let t = index as f64 * (TAU / self.pair_count as f64);
        let (x, y) = heart_point(t, size);

        y.atan2(x)
    }

    /// Appends `2 * pair_count` particles launched from `origin` to `particles`.
    pub fn emit_into<R: Rng>(
        &self,
        origin: (f64, f64),
        size: f64,
        rng: &mut R,
        particles: &mut Vec<Particle>,
    ) {
        particles.reserve(self.pair_count * 2);

        for index in 0..self.pair_count {
            let angle = self.direction(index, size) + self.sample_jitter(rng);
            let speed = self.sample_speed(rng);

            particles.push(Particle::new(
                origin,
                self.color,
                speed,
                angle,
                false,
                &self.particle,
            ));
            particles.push(Particle::new(
                origin,
                self.color,
                speed * self.reflection_speed,
                -angle,
                true,
                &self.particle,
            ));
        }
    }

    pub fn emit<R: Rng>(&self, origin: (f64, f64), size: f64, rng: &mut R) -> Vec<Particle> {
        let mut particles = Vec::new();
        self.emit_into(origin, size, rng, &mut particles);
        particles
    }

    fn sample_jitter<R: Rng>(&self, rng: &mut R) -> f64 {
        if self.jitter > 0.0 {
            rng.gen_range(-self.jitter..=self.jitter)
        } else {
            0.0
        }
    }

    fn sample_speed<R: Rng>(&self, rng: &mut R) -> f64 {
        if self.speed_max > self.speed_min {
            rng.gen_range(self.speed_min..self.speed_max)
        } else {
            self.speed_min
        }
    }
}
