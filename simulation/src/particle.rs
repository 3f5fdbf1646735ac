use crate::{Color, Surface};

/// Physics and appearance constants shared by every [`Particle`] of a simulation.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct ParticleParams {
    pub radius: f64,
    /// Multiplier applied to both velocity components every tick, in `(0, 1]`.
    pub friction: f64,
    /// Magnitude of the vertical acceleration. Primaries fall with `+gravity`, reflections rise with `-gravity`.
    pub gravity: f64,
    /// Opacity lost per tick.
    pub decay: f64,
    /// A particle at or below this opacity is expired.
    pub expiry_threshold: f64,
}

impl Default for ParticleParams {
    fn default() -> Self {
        ParticleParams {
            radius: 1.5,
            friction: 0.99,
            gravity: 0.05,
            decay: 0.005,
            expiry_threshold: 0.01,
        }
    }
}

/// A fading point mass launched from a burst origin.
#[derive(PartialEq, Clone, Debug)]
pub struct Particle {
    pub position: (f64, f64),
    velocity: (f64, f64),
    pub radius: f64,
    pub color: Color,
    friction: f64,
    gravity: f64,
    pub alpha: f64,
    decay: f64,
    expiry_threshold: f64,
    reflected: bool,
}

impl Particle {
    /// Launches a particle from `position` at `speed` pixels per tick along `angle` radians.
    pub fn new(
        position: (f64, f64),
        color: Color,
        speed: f64,
        angle: f64,
        reflected: bool,
        params: &ParticleParams,
    ) -> Particle {
        Particle {
            position,
            velocity: (speed * angle.cos(), speed * angle.sin()),
            radius: params.radius,
            color,
            friction: params.friction,
            gravity: if reflected {
                -params.gravity
            } else {
                params.gravity
            },
            alpha: 1.0,
            decay: params.decay,
            expiry_threshold: params.expiry_threshold,
            reflected,
        }
    }

    /// Advances one frame: friction first, then gravity, then integration, then fading.
    pub fn tick(&mut self) {
        self.velocity.0 *= self.friction;
        self.velocity.1 *= self.friction;
        self.velocity.1 += self.gravity;
        self.position.0 += self.velocity.0;
        self.position.1 += self.velocity.1;
        self.alpha -= self.decay;
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.fill_circle(
            self.position.0,
            self.position.1,
            self.radius,
            self.color,
            self.alpha.clamp(0.0, 1.0),
        )
    }

    pub fn is_expired(&self) -> bool {
        self.alpha <= self.expiry_threshold
    }

    pub fn is_reflected(&self) -> bool {
        self.reflected
    }

    pub fn velocity(&self) -> (f64, f64) {
        self.velocity
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    pub fn speed(&self) -> f64 {
        self.velocity.0.hypot(self.velocity.1)
    }

    /// Direction of travel in radians, in `(-π, π]`.
    pub fn heading(&self) -> f64 {
        self.velocity.1.atan2(self.velocity.0)
    }
}
