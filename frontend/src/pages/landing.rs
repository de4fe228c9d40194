use chrono::Datelike;
use gloo_timers::callback::Timeout;
use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::behaviors::effects::hero_style;
use crate::behaviors::reveal;
use crate::components::contact_form::ContactForm;
use crate::components::typing::TypingTitle;
use crate::components::video_modal::VideoModalController;
use crate::config::{PageConfig, VIDEO_URL};
use crate::dom::effects::check_section_images;
use crate::dom::observer::install_reveal;
use crate::dom::page::apply_parallax;

const SERVICES: &[(&str, &str, &str)] = &[
    ("fa-video", "Producción audiovisual", "Vídeos corporativos, spots y piezas para redes sociales."),
    ("fa-camera", "Fotografía", "Sesiones de producto, eventos y retratos profesionales."),
    ("fa-bullhorn", "Marketing digital", "Estrategia de contenidos y campañas que convierten."),
];

const SHOWCASE_VIDEOS: &[(&str, &str)] = &[(VIDEO_URL, "Showreel")];

#[function_component(Hero)]
fn hero() -> Html {
    let entered = use_state(|| false);

    {
        let entered = entered.clone();
        use_mount(move || {
            Timeout::new(PageConfig::default().hero_entrance_delay_ms, move || entered.set(true)).forget();
        });
    }

    html! {
        <section id="inicio" class="hero">
            <div class="section-bg"></div>
            <div class="hero-content text-center" style={hero_style(*entered)}>
                <TypingTitle text="Contamos historias que mueven" class="display-3 fw-bold" />
                <p class="lead animate-fade-in">
                    {"Producción audiovisual y marketing para marcas con algo que decir."}
                </p>
                <div class="d-flex justify-content-center gap-3 animate-fade-in">
                    <a href="#contacto" class="btn btn-primary btn-lg">{"Hablemos"}</a>
                    <VideoModalController />
                </div>
            </div>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Reveal observers live as long as the page.
    use_effect_with_deps(
        move |_| {
            let handles: Vec<_> = reveal::ALL.into_iter().filter_map(install_reveal).collect();
            check_section_images();
            move || drop(handles)
        },
        (),
    );

    use_event_with_window("scroll", move |_: Event| {
        apply_parallax(PageConfig::default().parallax_speed);
    });

    let year = chrono::Local::now().year();

    html! {
        <div class="landing-page">
            <Hero />

            <section id="nosotros" class="section-about">
                <div class="section-bg"></div>
                <div class="container">
                    <div class="row align-items-center">
                        <div class="col-lg-6 animate-slide-in-left">
                            <h2>{"Nosotros"}</h2>
                            <p>
                                {"Somos un equipo pequeño de realizadores, fotógrafos y estrategas. Trabajamos cerca de cada cliente, desde la idea hasta la pieza final."}
                            </p>
                        </div>
                        <div class="col-lg-6 animate-slide-in-right">
                            <ul class="list-unstyled about-stats">
                                <li class="reveal"><strong>{"+120"}</strong>{" proyectos entregados"}</li>
                                <li class="reveal"><strong>{"10"}</strong>{" años de oficio"}</li>
                                <li class="reveal"><strong>{"100%"}</strong>{" producción propia"}</li>
                            </ul>
                        </div>
                    </div>
                </div>
            </section>

            <section id="servicios" class="section-services">
                <div class="section-bg"></div>
                <div class="container">
                    <h2 class="text-center animate-fade-in">{"Servicios"}</h2>
                    <div class="row g-4">
                        { for SERVICES.iter().map(|(icon, title, text)| html! {
                            <div class="col-md-4">
                                <div class="service-card reveal">
                                    <i class={classes!("fas", *icon, "fa-2x", "mb-3")}></i>
                                    <h3>{*title}</h3>
                                    <p>{*text}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="videos" class="section-videos">
                <div class="container">
                    <h2 class="text-center animate-fade-in">{"Videos"}</h2>
                    <div class="row g-4">
                        { for SHOWCASE_VIDEOS.iter().map(|(src, title)| html! {
                            <div class="col-lg-8 mx-auto">
                                <div class="ratio ratio-16x9">
                                    <iframe class="lazy-iframe" data-src={*src} title={*title} allowfullscreen={true}></iframe>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="contacto" class="section-contact">
                <div class="container">
                    <div class="row justify-content-center">
                        <div class="col-lg-8 reveal">
                            <h2 class="text-center">{"Contacto"}</h2>
                            <p class="text-center">{"Cuéntanos tu proyecto y te respondemos en menos de 48 horas."}</p>
                            <ContactForm />
                        </div>
                    </div>
                </div>
            </section>

            <footer class="footer text-center py-4">
                <p class="mb-0">
                    {"© "}<span id="currentYear">{year}</span>{" Estudio. Todos los derechos reservados."}
                </p>
            </footer>
        </div>
    }
}
