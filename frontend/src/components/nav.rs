use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use wasm_bindgen::JsValue;
use web_sys::js_sys::Array;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::behaviors::sections::{
    link_is_active, section_href, section_label, section_root_margin, section_thresholds, SectionTracker, SECTION_IDS,
};
use crate::config::PageConfig;
use crate::dom::observer::{observe, query_all};
use crate::dom::page::{lock_scroll_for, navbar_height, scroll_to_section, set_body_mode};

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let active_section = use_state(|| None::<String>);

    {
        let active_section = active_section.clone();
        use_effect_with_deps(move |_| {
            let sections = query_all("section[id]");
            let tracker = Rc::new(RefCell::new(SectionTracker::new()));
            for section in &sections {
                tracker.borrow_mut().observe(&section.id());
            }

            let thresholds: Array = section_thresholds().into_iter().map(JsValue::from_f64).collect();
            let mut shown: Option<String> = None;
            let handle = observe(
                &sections,
                &thresholds,
                &section_root_margin(navbar_height()),
                move |entries, _| {
                    let mut tracker = tracker.borrow_mut();
                    for entry in &entries {
                        tracker.record(&entry.target().id(), entry.intersection_ratio(), entry.is_intersecting());
                    }
                    debug!("section batch of {}, active {:?}", entries.len(), tracker.active());
                    if let Some(id) = tracker.active() {
                        if shown.as_deref() != Some(id) {
                            set_body_mode(id);
                            shown = Some(id.to_string());
                            active_section.set(shown.clone());
                        }
                    }
                },
            );

            move || drop(handle)
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let on_link = {
        let menu_open = menu_open.clone();
        Callback::from(move |(e, id): (MouseEvent, &'static str)| {
            e.prevent_default();
            let config = PageConfig::default();
            if scroll_to_section(id, &config) {
                info!("Scrolling to #{}", id);
                if *menu_open {
                    menu_open.set(false);
                }
                lock_scroll_for(config.scroll_lock_ms);
            }
        })
    };

    let collapse_class = classes!("collapse", "navbar-collapse", (*menu_open).then(|| "show"));

    html! {
        <nav id="mainNav" class="navbar navbar-expand-lg fixed-top">
            <div class="container">
                <a class="navbar-brand" href="#inicio">{"Estudio"}</a>
                <button class="navbar-toggler" type="button" onclick={toggle_menu}>
                    <span class="navbar-toggler-icon"></span>
                </button>
                <div class={collapse_class}>
                    <ul class="navbar-nav ms-auto">
                        { for SECTION_IDS.iter().map(|id| {
                            let id: &'static str = *id;
                            let href = section_href(id);
                            let is_active = link_is_active(&href, active_section.as_deref());
                            let onclick = on_link.reform(move |e: MouseEvent| (e, id));
                            html! {
                                <li class="nav-item">
                                    <a class={classes!("nav-link", is_active.then(|| "active"))} href={href} {onclick}>
                                        {section_label(id)}
                                    </a>
                                </li>
                            }
                        }) }
                    </ul>
                </div>
            </div>
        </nav>
    }
}
