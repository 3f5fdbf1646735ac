use simulation::{ConfigError, HeartConfig, Simulation, Surface};
use wasm_bindgen::JsValue;

use crate::canvas::{CanvasSurface, SurfaceError};

/// Errors concerning the [`App`].
#[derive(Debug)]
pub struct AppError(pub String);

impl From<ConfigError> for AppError {
    fn from(config_error: ConfigError) -> Self {
        AppError(format!("ConfigError: {0}", config_error.0))
    }
}

impl From<SurfaceError> for AppError {
    fn from(surface_error: SurfaceError) -> Self {
        AppError(format!("SurfaceError: {0}", surface_error.0))
    }
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        AppError(format!("{:?}", value))
    }
}

impl From<AppError> for JsValue {
    fn from(app_error: AppError) -> Self {
        js_sys::Error::new(&app_error.0).into()
    }
}

/// The running animation: one simulation drawing onto one canvas.
pub struct App {
    simulation: Simulation,
    surface: CanvasSurface,
}

impl App {
    /// Acquires and sizes the canvas, then fixes the burst origin from that initial size.
    /// The configuration is validated by [`Simulation::new`].
    pub fn new(config: &HeartConfig) -> Result<App, AppError> {
        let surface = CanvasSurface::acquire(&config.canvas_id)?;
        surface.fit_to_window()?;

        let origin = config.origin(surface.width(), surface.height());
        let seed = config.seed.unwrap_or_else(random_seed);
        let simulation = Simulation::new(config, origin, seed)?;

        log!(
            "heartburst: {}x{} canvas `#{}`, origin {:?}, seed {}",
            surface.width(),
            surface.height(),
            config.canvas_id,
            origin,
            seed
        );

        Ok(App {
            simulation,
            surface,
        })
    }

    pub fn pulse(&mut self) {
        self.simulation.pulse();
    }

    pub fn animate(&mut self) -> Result<(), JsValue> {
        self.simulation.animate(&mut self.surface)
    }

    /// Follows the viewport. The burst origin deliberately stays where it was.
    pub fn resize(&mut self) -> Result<(), JsValue> {
        self.surface.fit_to_window()
    }

    pub fn frame(&self) -> u64 {
        self.simulation.frame()
    }
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}
