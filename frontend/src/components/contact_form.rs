use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::behaviors::contact::{self, ContactFormState, Field, FollowUp, FormAction};
use crate::config::{self, PageConfig};
use crate::dom::effects::launch_confetti;
use crate::dom::transport::FetchTransport;

impl Reducible for ContactFormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let state = use_reducer(ContactFormState::default);

    let on_input = |field: Field| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let value = match field {
                Field::Message => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            state.dispatch(FormAction::Edit(field, value));
        })
    };

    let on_submit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let fields = state.fields.clone();
            state.dispatch(FormAction::Begin);

            let state = state.clone();
            spawn_local(async move {
                let page = PageConfig::default();
                let outcome = contact::submit(&FetchTransport, config::get_form_endpoint(), &fields).await;
                let sent = outcome.is_ok();
                state.dispatch(FormAction::Finish(outcome));
                if sent {
                    info!("Contact form sent");
                }

                for (delay, step) in contact::follow_ups(sent, &page) {
                    match step {
                        FollowUp::Confetti => launch_confetti(&page),
                        FollowUp::ClearMessage => {
                            let state = state.clone();
                            Timeout::new(delay, move || state.dispatch(FormAction::ClearMessage)).forget();
                        }
                    }
                }
            });
        })
    };

    html! {
        <form
            id="contactForm"
            class={classes!("contact-form", state.busy.then(|| "loading"))}
            action={config::get_form_endpoint()}
            method="POST"
            onsubmit={on_submit}
        >
            <div class="row g-3">
                <div class="col-md-6">
                    <input type="text" class="form-control" name={Field::Name.name()} placeholder="Nombre" required={true}
                        value={state.fields.name.clone()} oninput={on_input(Field::Name)} />
                </div>
                <div class="col-md-6">
                    <input type="email" class="form-control" name={Field::Email.name()} placeholder="Email" required={true}
                        value={state.fields.email.clone()} oninput={on_input(Field::Email)} />
                </div>
                <div class="col-12">
                    <input type="tel" class="form-control" name={Field::Phone.name()} placeholder="Teléfono"
                        value={state.fields.phone.clone()} oninput={on_input(Field::Phone)} />
                </div>
                <div class="col-12">
                    <textarea class="form-control" name={Field::Message.name()} rows="5" placeholder="Mensaje" required={true}
                        value={state.fields.message.clone()} oninput={on_input(Field::Message)} />
                </div>
                <div class="col-12">
                    <button type="submit" class="btn btn-primary btn-lg w-100" disabled={state.busy}>
                        if state.busy {
                            <i class="fas fa-spinner fa-spin me-2"></i>
                        }
                        {state.submit_label()}
                    </button>
                </div>
            </div>
            <div id="formMessage" class="mt-3">
                if let Some(message) = state.message {
                    <div class={message.alert_class()}>
                        <i class={message.icon_class()}></i>
                        {message.text()}
                    </div>
                }
            </div>
        </form>
    }
}
