use std::f64::consts::TAU;

use simulation::{heart_point, Color, HeartConfig, Simulation, Surface};

const EPSILON: f64 = 1e-9;

/// Counts draw calls and tracks the last overlay size.
#[derive(Default)]
struct CountingSurface {
    width: f64,
    height: f64,
    rects: usize,
    circles: usize,
    last_rect: Option<(f64, f64)>,
}

impl Surface for CountingSurface {
    type Error = String;

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn fill_rect(
        &mut self,
        _: f64,
        _: f64,
        width: f64,
        height: f64,
        _: Color,
        _: f64,
    ) -> Result<(), String> {
        self.rects += 1;
        self.last_rect = Some((width, height));
        Ok(())
    }

    fn fill_circle(
        &mut self,
        _: f64,
        _: f64,
        _: f64,
        _: Color,
        alpha: f64,
    ) -> Result<(), String> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(format!("alpha out of range: {alpha}"));
        }

        self.circles += 1;
        Ok(())
    }
}

fn angle_between(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(TAU);
    d.min(TAU - d)
}

#[test]
fn first_pulse_matches_reference_burst() {
    let config = HeartConfig {
        jitter: 0.0,
        ..Default::default()
    };
    let origin = config.origin(800.0, 600.0);
    assert_eq!(origin, (400.0, 200.0));

    let mut simulation = Simulation::new(&config, origin, 2024).unwrap();
    assert_eq!(simulation.frame(), 0);
    assert_eq!(simulation.current_size(), 12.0);

    simulation.pulse();

    let particles = simulation.particles();
    assert_eq!(particles.len(), 600);
    assert_eq!(particles.iter().filter(|p| !p.is_reflected()).count(), 300);
    assert_eq!(particles.iter().filter(|p| p.is_reflected()).count(), 300);

    for (i, pair) in particles.chunks(2).enumerate() {
        let (primary, reflection) = (&pair[0], &pair[1]);
        let (hx, hy) = heart_point(i as f64 * TAU / 300.0, 12.0);
        let target = (origin.0 + hx, origin.1 + hy);
        let expected = (target.1 - origin.1).atan2(target.0 - origin.0);

        assert!(!primary.is_reflected());
        assert!(reflection.is_reflected());
        assert_eq!(primary.position, origin);
        assert_eq!(reflection.position, origin);
        assert!(angle_between(primary.heading(), expected) < 1e-6);
        assert!(angle_between(reflection.heading(), -expected) < 1e-6);
        assert!((reflection.speed() - 0.5 * primary.speed()).abs() < EPSILON);
        assert!(primary.speed() >= 2.0 - EPSILON && primary.speed() < 6.0 + EPSILON);
        assert_eq!(primary.gravity(), 0.05);
        assert_eq!(reflection.gravity(), -0.05);
    }
}

#[test]
fn primaries_fall_and_reflections_rise_on_average() {
    let config = HeartConfig::default();
    let mut simulation = Simulation::new(&config, (400.0, 200.0), 7).unwrap();
    let mut surface = CountingSurface {
        width: 800.0,
        height: 600.0,
        ..Default::default()
    };

    simulation.pulse();
    for _ in 0..120 {
        simulation.animate(&mut surface).unwrap();
    }

    let mean_y = |reflected: bool| {
        let ys: Vec<f64> = simulation
            .particles()
            .iter()
            .filter(|p| p.is_reflected() == reflected)
            .map(|p| p.position.1)
            .collect();
        ys.iter().sum::<f64>() / ys.len() as f64
    };

    assert!(mean_y(false) > 200.0);
    assert!(mean_y(true) < 200.0);
}

#[test]
fn bursts_fade_out_between_pulses_left_running() {
    let config = HeartConfig::default();
    let mut simulation = Simulation::new(&config, (400.0, 200.0), 99).unwrap();
    let mut surface = CountingSurface {
        width: 800.0,
        height: 600.0,
        ..Default::default()
    };

    simulation.pulse();
    for _ in 0..250 {
        simulation.animate(&mut surface).unwrap();
    }

    assert!(simulation.particles().is_empty());
    assert_eq!(surface.rects, 250);
    assert_eq!(surface.last_rect, Some((800.0, 600.0)));
    assert_eq!(surface.circles % 600, 0);
}

#[test]
fn pulses_on_a_90_frame_cadence() {
    let config = HeartConfig::default();
    let mut simulation = Simulation::new(&config, (400.0, 200.0), 5).unwrap();
    let mut surface = CountingSurface {
        width: 800.0,
        height: 600.0,
        ..Default::default()
    };

    // 1500 ms at 60 Hz
    simulation.pulse();
    for frame in 1..=900u64 {
        simulation.animate(&mut surface).unwrap();

        if frame % 90 == 0 {
            simulation.pulse();
            assert_eq!(simulation.particles().len(), 600);
            assert!(simulation.particles().iter().all(|p| p.alpha == 1.0));
        } else {
            assert_eq!(simulation.particles().len(), 600);
        }
    }

    assert_eq!(simulation.frame(), 900);
    assert_eq!(surface.rects, 900);
}
