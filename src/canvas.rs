use std::f64::consts::TAU;

use simulation::{Color, Surface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::{document, window};

/// Failure to obtain a drawable canvas at startup.
#[derive(Debug)]
pub struct SurfaceError(pub String);

impl From<SurfaceError> for JsValue {
    fn from(surface_error: SurfaceError) -> Self {
        js_sys::Error::new(&format!("SurfaceError: {0}", surface_error.0)).into()
    }
}

/// A `<canvas>` element and its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn acquire(canvas_id: &str) -> Result<CanvasSurface, SurfaceError> {
        let canvas = document()?
            .get_element_by_id(canvas_id)
            .ok_or_else(|| SurfaceError(format!("no element with id `{canvas_id}`")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| SurfaceError(format!("`#{canvas_id}` is not a canvas")))?;

        let context = canvas
            .get_context("2d")
            .map_err(|_| SurfaceError("2d context request threw".to_string()))?
            .ok_or_else(|| SurfaceError("2d context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError("2d context has an unexpected type".to_string()))?;

        Ok(CanvasSurface { canvas, context })
    }

    /// Sizes the canvas to the window's inner size, which also clears it.
    pub fn fit_to_window(&self) -> Result<(), JsValue> {
        let window = window()?;
        let width = window.inner_width()?.as_f64().unwrap_or_default();
        let height = window.inner_height()?.as_f64().unwrap_or_default();

        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);

        Ok(())
    }
}

impl Surface for CanvasSurface {
    type Error = JsValue;

    fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    fn fill_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
        alpha: f64,
    ) -> Result<(), JsValue> {
        self.context.save();
        self.context.set_global_alpha(alpha);
        self.context.set_fill_style(&color.to_css().into());
        self.context.fill_rect(x, y, width, height);
        self.context.restore();

        Ok(())
    }

    fn fill_circle(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        color: Color,
        alpha: f64,
    ) -> Result<(), JsValue> {
        self.context.save();
        self.context.set_global_alpha(alpha);
        self.context.begin_path();
        self.context.arc(x, y, radius, 0.0, TAU)?;
        self.context.set_fill_style(&color.to_css().into());
        self.context.fill();
        self.context.restore();

        Ok(())
    }
}
