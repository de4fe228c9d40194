use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::behaviors::video::VideoModal;

#[function_component(VideoModalController)]
pub fn video_modal_controller() -> Html {
    let modal = use_state(VideoModal::default);

    let open = {
        let modal = modal.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            info!("Opening video modal");
            modal.set(modal.open());
        })
    };

    let close = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| {
            if modal.is_open() {
                info!("Closing video modal");
                modal.set(modal.close());
            }
        })
    };

    // Clicks inside the dialog or on the player must not reach the backdrop's close handler.
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());
    let swallow_player = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
        e.prevent_default();
    });

    let is_open = modal.is_open();

    html! {
        <>
            <button class="btn btn-outline-light btn-lg play-button" onclick={open}>
                <i class="fas fa-play me-2"></i>{"Ver video"}
            </button>
            <div
                id="videoModal"
                class={classes!("modal", "fade", is_open.then(|| "show"))}
                style={if is_open { "display: block;" } else { "display: none;" }}
                tabindex="-1"
                aria-hidden={(!is_open).to_string()}
                onclick={close.clone()}
            >
                <div class="modal-dialog modal-dialog-centered modal-lg" onclick={swallow}>
                    <div class="modal-content">
                        <div class="modal-header">
                            <button type="button" class="btn-close" aria-label="Cerrar" onclick={close}></button>
                        </div>
                        <div class="modal-body">
                            <div class="ratio ratio-16x9">
                                <iframe
                                    id="videoFrame"
                                    src={modal.player_src()}
                                    title="Video"
                                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                                    allowfullscreen={true}
                                    onclick={swallow_player}
                                ></iframe>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </>
    }
}
