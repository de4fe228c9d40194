use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Math;
use web_sys::{window, Element, HtmlImageElement};

use crate::behaviors::effects::{section_image_url, ConfettiBurst, ConfettiStep, IMAGE_SECTIONS};
use crate::config::PageConfig;

pub fn random() -> f64 {
    Math::random()
}

/// Drops a burst of confetti over the page. Every piece removes itself when its lifetime is up.
pub fn launch_confetti(config: &PageConfig) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };

    let mut rng = random;
    let burst = ConfettiBurst::generate(config, &mut rng);
    let elements: Vec<Element> = match burst
        .pieces
        .iter()
        .map(|_| document.create_element("div"))
        .collect::<Result<_, _>>()
    {
        Ok(elements) => elements,
        Err(e) => {
            log::warn!("Could not create confetti: {:?}", e);
            return;
        }
    };

    for (delay, idx, step) in burst.timeline() {
        let element = elements[idx].clone();
        let piece = burst.pieces[idx].clone();
        match step {
            ConfettiStep::Spawn => {
                let _ = element.set_attribute("style", &piece.initial_style());
                let _ = body.append_child(&element);
            }
            ConfettiStep::Fall => {
                Timeout::new(delay, move || {
                    let _ = element.set_attribute("style", &piece.falling_style());
                })
                .forget();
            }
            ConfettiStep::Remove => {
                Timeout::new(delay, move || element.remove()).forget();
            }
        }
    }
}

/// Loads each section's background image and falls back to the plain style when it is missing.
pub fn check_section_images() {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    for section_id in IMAGE_SECTIONS {
        let Some(section) = document.get_element_by_id(section_id) else {
            continue;
        };
        let Ok(img) = HtmlImageElement::new() else {
            continue;
        };

        let loaded = {
            let section = section.clone();
            Closure::once_into_js(move || {
                let _ = section.class_list().remove_1("no-image");
            })
        };
        let failed = Closure::once_into_js(move || {
            gloo_console::warn!(format!("Image {}.jpg not found, using fallback", section_id));
            let _ = section.class_list().add_1("no-image");
        });

        img.set_onload(Some(loaded.unchecked_ref()));
        img.set_onerror(Some(failed.unchecked_ref()));
        img.set_src(&section_image_url(section_id));
    }
}
