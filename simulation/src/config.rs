use serde::{Deserialize, Serialize};

use crate::{Breathing, Color, HeartBurst, ParticleParams};

#[derive(Debug, PartialEq)]
pub struct ConfigError(pub String);

/// Everything tunable about the animation. Missing fields take the reference defaults, so a host
/// may supply only what it wants to change.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct HeartConfig {
    /// DOM id of the canvas to draw on.
    pub canvas_id: String,
    /// Fixed seed for the burst RNG. Without one every run differs.
    pub seed: Option<u64>,
    pub color: Color,
    pub pair_count: usize,
    pub base_size: f64,
    pub pulse_interval_ms: u32,
    pub breathing_amplitude: f64,
    /// Radians of breathing phase per rendered frame.
    pub breathing_rate: f64,
    pub jitter: f64,
    pub speed_min: f64,
    pub speed_max: f64,
    pub reflection_speed: f64,
    /// How far above the surface centre bursts originate, leaving room for the reflections.
    pub origin_offset: f64,
    pub trail_color: Color,
    pub trail_alpha: f64,
    pub radius: f64,
    pub friction: f64,
    pub gravity: f64,
    pub decay: f64,
    pub expiry_threshold: f64,
}

impl Default for HeartConfig {
    fn default() -> Self {
        let particle = ParticleParams::default();
        let burst = HeartBurst::default();
        let breathing = Breathing::default();

        HeartConfig {
            canvas_id: "fireworksCanvas".to_string(),
            seed: None,
            color: burst.color,
            pair_count: burst.pair_count,
            base_size: 12.0,
            pulse_interval_ms: 1500,
            breathing_amplitude: breathing.amplitude,
            breathing_rate: breathing.rate,
            jitter: burst.jitter,
            speed_min: burst.speed_min,
            speed_max: burst.speed_max,
            reflection_speed: burst.reflection_speed,
            origin_offset: 100.0,
            trail_color: Color::BLACK,
            trail_alpha: 0.05,
            radius: particle.radius,
            friction: particle.friction,
            gravity: particle.gravity,
            decay: particle.decay,
            expiry_threshold: particle.expiry_threshold,
        }
    }
}

impl HeartConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn check(ok: bool, message: &str) -> Result<(), ConfigError> {
            if ok {
                Ok(())
            } else {
                Err(ConfigError(message.to_string()))
            }
        }

        let finite = [
            self.base_size,
            self.breathing_amplitude,
            self.breathing_rate,
            self.jitter,
            self.speed_min,
            self.speed_max,
            self.reflection_speed,
            self.origin_offset,
            self.trail_alpha,
            self.radius,
            self.friction,
            self.gravity,
            self.decay,
            self.expiry_threshold,
        ];

        check(
            finite.iter().all(|value| value.is_finite()),
            "all numeric settings must be finite",
        )?;
        check(self.pair_count > 0, "pair count must be at least 1")?;
        check(self.base_size > 0.0, "base size must be positive")?;
        check(
            self.pulse_interval_ms > 0 && self.pulse_interval_ms <= i32::MAX as u32,
            "pulse interval must be between 1 and i32::MAX milliseconds",
        )?;
        check(self.jitter >= 0.0, "jitter must not be negative")?;
        check(
            self.speed_min >= 0.0 && self.speed_min <= self.speed_max,
            "speed range must satisfy 0 <= min <= max",
        )?;
        check(
            (0.0..=1.0).contains(&self.trail_alpha),
            "trail alpha must lie in [0, 1]",
        )?;
        check(self.radius > 0.0, "radius must be positive")?;
        check(
            self.friction > 0.0 && self.friction <= 1.0,
            "friction must lie in (0, 1]",
        )?;
        check(self.decay > 0.0, "decay must be positive")?;
        check(
            (0.0..1.0).contains(&self.expiry_threshold),
            "expiry threshold must lie in [0, 1)",
        )?;

        Ok(())
    }

    pub fn particle_params(&self) -> ParticleParams {
        ParticleParams {
            radius: self.radius,
            friction: self.friction,
            gravity: self.gravity,
            decay: self.decay,
            expiry_threshold: self.expiry_threshold,
        }
    }

    pub fn heart_burst(&self) -> HeartBurst {
        HeartBurst {
            pair_count: self.pair_count,
            jitter: self.jitter,
            speed_min: self.speed_min,
            speed_max: self.speed_max,
            reflection_speed: self.reflection_speed,
            color: self.color,
            particle: self.particle_params(),
        }
    }

    pub fn breathing(&self) -> Breathing {
        Breathing {
            amplitude: self.breathing_amplitude,
            rate: self.breathing_rate,
        }
    }

    /// Burst origin for a surface of the given size: horizontally centred, raised by `origin_offset`.
    pub fn origin(&self, width: f64, height: f64) -> (f64, f64) {
        (width / 2.0, height / 2.0 - self.origin_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert_eq!(HeartConfig::default().validate(), Ok(()));
    }

    #[test]
    fn reference_constants() {
        let config = HeartConfig::default();

        assert_eq!(config.canvas_id, "fireworksCanvas");
        assert_eq!(config.color, Color(255, 105, 180));
        assert_eq!(config.pair_count, 300);
        assert_eq!(config.base_size, 12.0);
        assert_eq!(config.pulse_interval_ms, 1500);
        assert_eq!(config.trail_alpha, 0.05);
        assert_eq!(config.particle_params(), ParticleParams::default());
        assert_eq!(config.heart_burst(), HeartBurst::default());
        assert_eq!(config.breathing(), Breathing::default());
    }

    #[test]
    fn origin_sits_above_centre() {
        assert_eq!(HeartConfig::default().origin(800.0, 600.0), (400.0, 200.0));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: HeartConfig =
            serde_json::from_str(r#"{ "pairCount": 50, "seed": 9, "color": [255, 0, 0] }"#)
                .unwrap();

        assert_eq!(config.pair_count, 50);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.color, Color(255, 0, 0));
        assert_eq!(config.base_size, 12.0);
        assert_eq!(config.canvas_id, "fireworksCanvas");
    }

    #[test]
    fn rejects_bad_settings() {
        let bad = [
            HeartConfig {
                pair_count: 0,
                ..Default::default()
            },
            HeartConfig {
                pulse_interval_ms: 0,
                ..Default::default()
            },
            HeartConfig {
                speed_min: 7.0,
                ..Default::default()
            },
            HeartConfig {
                jitter: -0.1,
                ..Default::default()
            },
            HeartConfig {
                friction: 1.5,
                ..Default::default()
            },
            HeartConfig {
                decay: 0.0,
                ..Default::default()
            },
            HeartConfig {
                base_size: f64::NAN,
                ..Default::default()
            },
            HeartConfig {
                trail_alpha: 2.0,
                ..Default::default()
            },
        ];

        for config in bad {
            assert!(config.validate().is_err(), "{:?} should be rejected", config);
        }
    }
}
