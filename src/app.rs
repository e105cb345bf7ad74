use std::cell::RefCell;
use std::rc::{Rc, Weak};

use stopwatch_core::StopwatchController;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlButtonElement;

use crate::browser::{AnimationFrameScheduler, BrowserClock};
use crate::config::WidgetConfig;
use crate::dom::DomView;
use crate::error::SetupError;

pub type BrowserStopwatch = StopwatchController<BrowserClock, AnimationFrameScheduler, DomView>;

/// Locates the widget's elements, renders the initial state and wires both
/// buttons. Either everything is wired or nothing is. The click handlers keep
/// the controller alive for the rest of the page session.
pub fn mount(config: &WidgetConfig) -> Result<(), SetupError> {
    let window = web_sys::window().ok_or(SetupError::MissingWindow)?;
    let document = window.document().ok_or(SetupError::MissingDocument)?;
    let view = DomView::locate(&document, config)?;
    let start_stop = view.start_stop_button().clone();
    let lap_reset = view.lap_reset_button().clone();

    let controller = Rc::new_cyclic(|weak: &Weak<RefCell<BrowserStopwatch>>| {
        let weak = weak.clone();
        let scheduler = AnimationFrameScheduler::new(window, move |fired| {
            if let Some(controller) = weak.upgrade() {
                with_controller(&controller, |c| c.tick(fired));
            }
        });
        RefCell::new(StopwatchController::new(BrowserClock, scheduler, view))
    });

    let on_primary = click_handler(&controller, |c| c.toggle());
    let on_secondary = click_handler(&controller, |c| c.lap_or_reset());

    listen(&start_stop, &on_primary)?;
    if let Err(e) = listen(&lap_reset, &on_secondary) {
        start_stop
            .remove_event_listener_with_callback("click", on_primary.as_ref().unchecked_ref())
            .ok();
        return Err(e);
    }

    // Handlers live for the page session.
    on_primary.forget();
    on_secondary.forget();

    log::info!("stopwatch mounted on #{}", config.display_id);
    Ok(())
}

fn with_controller(controller: &RefCell<BrowserStopwatch>, f: impl FnOnce(&mut BrowserStopwatch)) {
    match controller.try_borrow_mut() {
        Ok(mut c) => f(&mut c),
        Err(_) => log::warn!("stopwatch busy, event dropped"),
    }
}

fn click_handler(
    controller: &Rc<RefCell<BrowserStopwatch>>,
    action: fn(&mut BrowserStopwatch),
) -> Closure<dyn FnMut()> {
    let controller = Rc::clone(controller);
    Closure::<dyn FnMut()>::new(move || with_controller(&controller, action))
}

fn listen(button: &HtmlButtonElement, handler: &Closure<dyn FnMut()>) -> Result<(), SetupError> {
    button
        .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        .map_err(|e| SetupError::Host(format!("{:?}", e)))
}
