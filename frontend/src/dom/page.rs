use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::behaviors::effects::parallax_position;
use crate::behaviors::sections::{body_mode_class, parse_css_px, smooth_scroll_target};
use crate::config::PageConfig;
use crate::dom::observer::query_all;

fn html_element_by_id(id: &str) -> Option<HtmlElement> {
    window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

fn body() -> Option<HtmlElement> {
    window()?.document()?.body()
}

/// Value of the `--navbar-height` custom property on the root element.
pub fn navbar_height() -> f64 {
    let Some(window) = window() else {
        return 0.0;
    };
    let Some(root) = window.document().and_then(|d| d.document_element()) else {
        return 0.0;
    };
    match window.get_computed_style(&root) {
        Ok(Some(style)) => style
            .get_property_value("--navbar-height")
            .map(|value| parse_css_px(&value))
            .unwrap_or(0.0),
        _ => 0.0,
    }
}

pub fn set_body_mode(section_id: &str) {
    if let Some(body) = body() {
        body.set_class_name(&body_mode_class(section_id));
    }
}

/// Smoothly scrolls to a section, leaving room for the navbar. Returns false if the section is missing.
pub fn scroll_to_section(section_id: &str, config: &PageConfig) -> bool {
    let Some(window) = window() else {
        return false;
    };
    let Some(section) = html_element_by_id(section_id) else {
        return false;
    };
    let nav_height = html_element_by_id("mainNav")
        .map(|nav| nav.offset_height() as f64)
        .unwrap_or(0.0);

    let options = ScrollToOptions::new();
    options.set_top(smooth_scroll_target(
        section.offset_top() as f64,
        nav_height,
        config.smooth_scroll_gap_px,
    ));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

/// Blocks body scrolling while a smooth scroll settles.
pub fn lock_scroll_for(ms: u32) {
    let Some(body) = body() else {
        return;
    };
    let _ = body.style().set_property("overflow", "hidden");
    Timeout::new(ms, move || {
        let _ = body.style().set_property("overflow", "");
    })
    .forget();
}

pub fn apply_parallax(speed: f64) {
    let Some(scroll_y) = window().and_then(|w| w.scroll_y().ok()) else {
        return;
    };
    let position = parallax_position(scroll_y, speed);
    for element in query_all(".section-bg") {
        if let Ok(element) = element.dyn_into::<HtmlElement>() {
            let _ = element.style().set_property("background-position", &position);
        }
    }
}
