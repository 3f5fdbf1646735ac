use std::{cell::RefCell, rc::Rc};

use crate::app::App;

pub fn on_pulse(app: &Rc<RefCell<App>>) {
    app.borrow_mut().pulse();
}

pub fn on_frame(app: &Rc<RefCell<App>>) {
    let mut app = app.borrow_mut();

    if let Err(err) = app.animate() {
        warn!("frame {} failed: {:?}", app.frame(), err);
    }
}

pub fn on_resize(app: &Rc<RefCell<App>>) {
    if let Err(err) = app.borrow_mut().resize() {
        warn!("resize failed: {:?}", err);
    }
}
