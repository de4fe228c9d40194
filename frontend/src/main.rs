use yew::prelude::*;
use log::{info, Level};

mod config;
mod behaviors {
    pub mod consent;
    pub mod contact;
    pub mod effects;
    pub mod reveal;
    pub mod sections;
    pub mod video;
}
mod dom {
    pub mod effects;
    pub mod observer;
    pub mod page;
    pub mod storage;
    pub mod transport;
}
mod components {
    pub mod consent_banner;
    pub mod contact_form;
    pub mod nav;
    pub mod particles;
    pub mod typing;
    pub mod video_modal;
}
mod pages {
    pub mod landing;
}

use components::{consent_banner::ConsentBanner, nav::Nav, particles::ParticleField};
use pages::landing::Landing;

const ANIMATIONS: &str = r#"
    @keyframes ripple {
        to {
            transform: scale(4);
            opacity: 0;
        }
    }
    @keyframes slideInUp {
        from {
            transform: translateY(100%);
            opacity: 0;
        }
        to {
            transform: translateY(0);
            opacity: 1;
        }
    }
    @keyframes slideOutDown {
        from {
            transform: translateY(0);
            opacity: 1;
        }
        to {
            transform: translateY(100%);
            opacity: 0;
        }
    }
    @keyframes float {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(-20px); }
    }
    .fade-in {
        animation: fadeIn 0.5s ease-out;
    }
"#;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <style>{ANIMATIONS}</style>
            <ParticleField />
            <Nav />
            <Landing />
            <ConsentBanner />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
