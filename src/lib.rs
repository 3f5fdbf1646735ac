// `println!`-style logging to the browser console.
macro_rules! log {
    ( $( $t:tt )* ) => {
        web_sys::console::log_1(&format!( $( $t )* ).into())
    }
}

macro_rules! warn {
    ( $( $t:tt )* ) => {
        web_sys::console::warn_1(&format!( $( $t )* ).into())
    }
}

mod app;
mod callbacks;
mod canvas;

use std::{cell::RefCell, rc::Rc};

use app::App;
use canvas::SurfaceError;
use simulation::HeartConfig;
use wasm_bindgen::{prelude::*, JsCast};

fn window() -> Result<web_sys::Window, SurfaceError> {
    web_sys::window().ok_or_else(|| SurfaceError("no global `window` exists".to_string()))
}

fn document() -> Result<web_sys::Document, SurfaceError> {
    window()?
        .document()
        .ok_or_else(|| SurfaceError("should have a document on window".to_string()))
}

fn request_animation_frame(f: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    Ok(window()?.request_animation_frame(f.as_ref().unchecked_ref())?)
}

/// Starts the animation on the canvas named by `config`.
///
/// `config` is a partial [`HeartConfig`] object; `undefined` or `null` selects every default.
/// Fails without scheduling anything if the configuration is invalid or no canvas can be drawn on.
#[wasm_bindgen]
pub fn run(config: JsValue) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config: HeartConfig = if config.is_undefined() || config.is_null() {
        HeartConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)?
    };

    let app = App::new(&config)?;
    let app = Rc::new(RefCell::new(app));

    // The first burst must not wait for the first interval.
    callbacks::on_pulse(&app);

    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut()>::new(move || callbacks::on_pulse(&app));
        window()?.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            config.pulse_interval_ms as i32,
        )?;
        closure.forget();
    }

    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_: JsValue| callbacks::on_resize(&app));
        window()?.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    {
        let app = app.clone();

        *g.borrow_mut() = Some(Closure::new(move || {
            callbacks::on_frame(&app);

            if let Some(frame) = f.borrow().as_ref() {
                if let Err(err) = request_animation_frame(frame) {
                    warn!("could not schedule the next frame: {:?}", err);
                }
            }
        }));
    }

    if let Some(frame) = g.borrow().as_ref() {
        request_animation_frame(frame)?;
    }

    log!(
        "heartburst: {} pairs every {} ms",
        config.pair_count,
        config.pulse_interval_ms
    );

    Ok(())
}
