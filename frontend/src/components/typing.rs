use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::behaviors::effects::{next_typing_delay, typed_prefix};
use crate::config::PageConfig;

#[derive(Properties, PartialEq)]
pub struct TypingTitleProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Heading that types its text out one character at a time after mount.
#[function_component(TypingTitle)]
pub fn typing_title(props: &TypingTitleProps) -> Html {
    let typed = use_state(|| 0usize);
    let total = props.text.chars().count();

    {
        let count = *typed;
        let typed = typed.clone();
        use_effect_with_deps(
            move |count| {
                let count = *count;
                if let Some(delay) = next_typing_delay(count, total, &PageConfig::default()) {
                    Timeout::new(delay, move || typed.set(count + 1)).forget();
                }
                || ()
            },
            count,
        );
    }

    html! {
        <h1 class={classes!("typing-effect", props.class.clone())}>
            {typed_prefix(&props.text, *typed)}
        </h1>
    }
}
