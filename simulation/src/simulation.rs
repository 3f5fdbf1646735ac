use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

use crate::{Color, ConfigError, HeartBurst, HeartConfig, Particle, Surface};

/// Sinusoidal size modulation driven by the frame counter.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Breathing {
    pub amplitude: f64,
    pub rate: f64,
}

impl Default for Breathing {
    fn default() -> Self {
        Breathing {
            amplitude: 0.2,
            rate: 0.05,
        }
    }
}

impl Breathing {
    /// `1 + amplitude * sin(frame * rate)`.
    ///
    /// The frame is converted to `f64`, so past 2^53 frames the phase loses precision.
    pub fn scale(&self, frame: u64) -> f64 {
        1.0 + self.amplitude * (frame as f64 * self.rate).sin()
    }
}

/// Owns the live particles and drives both the pulse and the per-frame loop.
///
/// The origin is fixed at construction. Resizing the surface later changes where the trail
/// overlay reaches but never moves the bursts.
pub struct Simulation {
    particles: Vec<Particle>,
    frame: u64,
    origin: (f64, f64),
    base_size: f64,
    breathing: Breathing,
    burst: HeartBurst,
    trail: (Color, f64),
    rng: ChaCha8Rng,
}

impl Simulation {
    pub fn new(
        config: &HeartConfig,
        origin: (f64, f64),
        seed: u64,
    ) -> Result<Simulation, ConfigError> {
        config.validate()?;

        Ok(Simulation {
            particles: Vec::with_capacity(config.pair_count * 2),
            frame: 0,
            origin,
            base_size: config.base_size,
            breathing: config.breathing(),
            burst: config.heart_burst(),
            trail: (config.trail_color, config.trail_alpha),
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Heart size for the next pulse at the current frame.
    pub fn current_size(&self) -> f64 {
        self.base_size * self.breathing.scale(self.frame)
    }

    /// Discards every live particle and emits a fresh heart burst at the breathing size.
    pub fn pulse(&mut self) {
        let size = self.current_size();

        self.particles.clear();
        self.burst
            .emit_into(self.origin, size, &mut self.rng, &mut self.particles);
    }

    /// Renders one frame: paints the trail overlay, then ticks and draws every particle, then
    /// culls those that have faded out during this frame.
    ///
    /// A failing draw call does not stop the frame. Every particle still ages and the cull still
    /// runs; the first error is returned afterwards.
    pub fn animate<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        self.frame += 1;

        let (color, alpha) = self.trail;
        let mut result = surface.fill(color, alpha);

        for particle in self.particles.iter_mut() {
            particle.tick();

            let drawn = particle.draw(surface);
            if result.is_ok() {
                result = drawn;
            }
        }

        self.particles.retain(|particle| !particle.is_expired());

        result
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn origin(&self) -> (f64, f64) {
        self.origin
    }
}
