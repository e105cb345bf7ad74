use stopwatch_core::{ButtonFace, ButtonId, View};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement};

use crate::config::WidgetConfig;
use crate::error::SetupError;

/// `View` that writes straight into the page's elements.
pub struct DomView {
    document: Document,
    display: Element,
    start_stop: HtmlButtonElement,
    lap_reset: HtmlButtonElement,
    laps_list: Element,
    start_class: String,
    stop_class: String,
    lap_label_class: String,
}

impl DomView {
    /// Looks up every element the widget needs. Fails on the first one missing.
    pub fn locate(document: &Document, config: &WidgetConfig) -> Result<Self, SetupError> {
        let [display, start_stop, lap_reset, laps_list] = config.element_ids();

        Ok(Self {
            document: document.clone(),
            display: find(document, display)?,
            start_stop: find_button(document, start_stop)?,
            lap_reset: find_button(document, lap_reset)?,
            laps_list: find(document, laps_list)?,
            start_class: config.start_class.clone(),
            stop_class: config.stop_class.clone(),
            lap_label_class: config.lap_label_class.clone(),
        })
    }

    pub fn start_stop_button(&self) -> &HtmlButtonElement {
        &self.start_stop
    }

    pub fn lap_reset_button(&self) -> &HtmlButtonElement {
        &self.lap_reset
    }

    fn button(&self, button: ButtonId) -> &HtmlButtonElement {
        match button {
            ButtonId::Primary => &self.start_stop,
            ButtonId::Secondary => &self.lap_reset,
        }
    }

    fn build_lap_row(&self, label: &str, time: &str) -> Result<Element, wasm_bindgen::JsValue> {
        let row = self.document.create_element("li")?;
        let label_span = self.document.create_element("span")?;
        label_span.set_class_name(&self.lap_label_class);
        label_span.set_text_content(Some(label));
        let time_span = self.document.create_element("span")?;
        time_span.set_text_content(Some(time));
        row.append_child(&label_span)?;
        row.append_child(&time_span)?;
        Ok(row)
    }
}

fn find(document: &Document, (role, id): (&'static str, &str)) -> Result<Element, SetupError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SetupError::MissingElement {
            role,
            id: id.to_string(),
        })
}

fn find_button(
    document: &Document,
    (role, id): (&'static str, &str),
) -> Result<HtmlButtonElement, SetupError> {
    find(document, (role, id))?
        .dyn_into::<HtmlButtonElement>()
        .map_err(|_| SetupError::NotAButton {
            role,
            id: id.to_string(),
        })
}

impl View for DomView {
    fn set_display_text(&mut self, text: &str) {
        self.display.set_text_content(Some(text));
    }

    fn set_button_label(&mut self, button: ButtonId, face: ButtonFace) {
        let element = self.button(button);
        element.set_text_content(Some(face.label()));
        element.set_attribute("aria-label", face.aria_label()).ok();

        let (remove, add) = match face {
            ButtonFace::Start => (&self.stop_class, &self.start_class),
            ButtonFace::Stop => (&self.start_class, &self.stop_class),
            ButtonFace::Lap | ButtonFace::Reset => return,
        };
        let classes = element.class_list();
        classes.remove_1(remove).ok();
        classes.add_1(add).ok();
    }

    fn set_button_enabled(&mut self, button: ButtonId, enabled: bool) {
        self.button(button).set_disabled(!enabled);
    }

    fn prepend_lap_row(&mut self, label: &str, time: &str) {
        match self.build_lap_row(label, time) {
            Ok(row) => {
                self.laps_list.prepend_with_node_1(&row).ok();
            }
            Err(e) => log::warn!("could not render {}: {:?}", label, e),
        }
    }

    fn clear_lap_rows(&mut self) {
        self.laps_list.set_text_content(None);
    }
}
