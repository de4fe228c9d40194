use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::behaviors::consent::BannerPhase;
use crate::config::PageConfig;
use crate::dom::storage::LocalStorage;

pub enum BannerAction {
    Accept,
    TimerElapsed,
}

#[derive(PartialEq)]
struct Banner(BannerPhase);

impl Reducible for Banner {
    type Action = BannerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            BannerAction::Accept => self.0.accept(&LocalStorage),
            BannerAction::TimerElapsed => self.0.timer_elapsed(),
        };
        if next == self.0 {
            return self;
        }
        if next == BannerPhase::Dismissing {
            info!("Cookie consent accepted");
        }
        Banner(next).into()
    }
}

#[function_component(ConsentBanner)]
pub fn consent_banner() -> Html {
    let banner = use_reducer(|| Banner(BannerPhase::on_load(&LocalStorage)));
    let phase = banner.0;

    {
        // one timer per timed phase; leaving the phase cancels it
        let dispatcher = banner.dispatcher();
        use_effect_with_deps(
            move |phase| {
                let timeout = phase
                    .timer_ms(&PageConfig::default())
                    .map(|delay| Timeout::new(delay, move || dispatcher.dispatch(BannerAction::TimerElapsed)));
                move || drop(timeout)
            },
            phase,
        );
    }

    let on_accept = {
        let dispatcher = banner.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(BannerAction::Accept))
    };

    html! {
        <div
            id="cookiesBanner"
            class={classes!("cookies-banner", phase.class())}
            style={format!("display: {};", phase.display())}
        >
            <div class="container d-flex flex-column flex-md-row align-items-center justify-content-between gap-3">
                <p class="mb-0">
                    {"Usamos cookies propias para mejorar tu experiencia. Al continuar navegando aceptas su uso."}
                </p>
                <button id="acceptCookies" class="btn btn-light btn-sm" onclick={on_accept}>
                    {"Aceptar"}
                </button>
            </div>
        </div>
    }
}
