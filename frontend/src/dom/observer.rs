use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::behaviors::reveal::{RevealOutcome, RevealSpec, RevealTarget};

/// Owns an IntersectionObserver together with its callback. Dropping it disconnects the observer.
pub struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn observe<F>(targets: &[Element], threshold: &JsValue, root_margin: &str, mut on_entries: F) -> Option<ObserverHandle>
where
    F: FnMut(Vec<IntersectionObserverEntry>, &IntersectionObserver) + 'static,
{
    if targets.is_empty() {
        return None;
    }

    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let entries = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .collect();
        on_entries(entries, &observer);
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(root_margin);
    options.set_threshold(threshold);

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(e) => {
            log::warn!("IntersectionObserver unavailable: {:?}", e);
            return None;
        }
    };
    for target in targets {
        observer.observe(target);
    }

    Some(ObserverHandle {
        observer,
        _callback: callback,
    })
}

impl RevealTarget for Element {
    fn add_class(&self, class: &str) {
        let _ = self.class_list().add_1(class);
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let _ = Element::set_attribute(self, name, value);
    }
}

/// Watches every element matching the reveal's selector and applies its effect on entry.
pub fn install_reveal(spec: RevealSpec) -> Option<ObserverHandle> {
    let targets = query_all(spec.selector);
    log::debug!("reveal {:?}: {} elements", spec.selector, targets.len());
    observe(
        &targets,
        &JsValue::from_f64(spec.threshold),
        spec.root_margin,
        move |entries, observer| {
            for entry in entries {
                let target = entry.target();
                if spec.apply(&target, entry.is_intersecting()) == RevealOutcome::Finished {
                    observer.unobserve(&target);
                }
            }
        },
    )
}
