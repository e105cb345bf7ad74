//! Browser stopwatch widget.
//!
//! The state machine lives in `stopwatch_core`; this crate binds it to the
//! DOM, `Date.now()` and `requestAnimationFrame`.

mod config;
mod error;
mod logging;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(target_arch = "wasm32")]
mod dom;

pub use config::WidgetConfig;
pub use error::SetupError;
pub use logging::LoggingConfig;
pub use stopwatch_core::{format_time, ButtonFace, ButtonId, StopwatchController};

#[cfg(target_arch = "wasm32")]
pub use app::{mount, BrowserStopwatch};
#[cfg(target_arch = "wasm32")]
pub use browser::{AnimationFrameScheduler, BrowserClock};
#[cfg(target_arch = "wasm32")]
pub use dom::DomView;
#[cfg(target_arch = "wasm32")]
pub use logging::init_logging;

#[cfg(target_arch = "wasm32")]
mod entry {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::prelude::wasm_bindgen;
    use wasm_bindgen::JsCast;

    use crate::{init_logging, mount, WidgetConfig};

    fn mount_default() {
        let config = WidgetConfig::default();
        init_logging(config.logging.clone());
        if let Err(e) = mount(&config) {
            log::error!("{}", e);
        }
    }

    /// Mounts the default widget once the document has been parsed.
    #[wasm_bindgen(start)]
    pub fn start() {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            mount_default();
            return;
        };
        if document.ready_state() != "loading" {
            mount_default();
            return;
        }
        let on_ready = Closure::<dyn FnMut()>::once(mount_default);
        if document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
            .is_ok()
        {
            on_ready.forget();
        } else {
            mount_default();
        }
    }
}
