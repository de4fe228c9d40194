use yew::prelude::*;

use crate::behaviors::effects::{particle_field, PARTICLE_FIELD_STYLE};
use crate::config::PageConfig;
use crate::dom::effects::random;

/// Floating background particles. Positions are rolled once per page load.
#[function_component(ParticleField)]
pub fn particle_field_view() -> Html {
    let particles = use_state(|| {
        let mut rng = random;
        particle_field(&PageConfig::default(), &mut rng)
    });

    html! {
        <div class="particles" style={PARTICLE_FIELD_STYLE}>
            { for particles.iter().map(|p| html! { <div style={p.style()}></div> }) }
        </div>
    }
}
