use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub wide: bool,
    pub children: Children,
}

/// Overlay dialog. Closes on overlay click, the × button and Escape, and
/// locks page scroll while mounted.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(move |_| {
            let document = web_sys::window().and_then(|w| w.document());
            let body = document.as_ref().and_then(|d| d.body());
            if let Some(body) = &body {
                let _ = body.style().set_property("overflow", "hidden");
            }

            let keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                if e.key() == "Escape" {
                    on_close.emit(());
                }
            }) as Box<dyn FnMut(KeyboardEvent)>);

            if let Some(document) = &document {
                let _ = document.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
            }

            move || {
                if let Some(document) = &document {
                    let _ = document.remove_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
                }
                if let Some(body) = &body {
                    let _ = body.style().remove_property("overflow");
                }
            }
        }, ());
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-overlay" onclick={close.clone()}>
            <div
                class={classes!("modal-content", props.wide.then(|| "wide"))}
                role="dialog"
                aria-modal="true"
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                <button class="modal-close" aria-label="Закрыть" onclick={close}>{"×"}</button>
                {
                    if let Some(title) = &props.title {
                        html! { <h2 class="modal-title">{title.clone()}</h2> }
                    } else {
                        html! {}
                    }
                }
                { for props.children.iter() }
            </div>
            <style>
                {r#"
                .modal-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(20, 14, 8, 0.72);
                    backdrop-filter: blur(4px);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 1000;
                    padding: 1rem;
                }
                .modal-content {
                    position: relative;
                    background: #2a2119;
                    color: #f5ede1;
                    border: 1px solid rgba(214, 163, 92, 0.25);
                    border-radius: 16px;
                    width: 100%;
                    max-width: 520px;
                    max-height: 90vh;
                    overflow-y: auto;
                    padding: 2rem;
                    box-shadow: 0 20px 48px rgba(0, 0, 0, 0.45);
                }
                .modal-content.wide {
                    max-width: 880px;
                }
                .modal-close {
                    position: absolute;
                    top: 0.75rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    color: #d6a35c;
                    font-size: 2rem;
                    cursor: pointer;
                    line-height: 1;
                }
                .modal-title {
                    margin: 0 0 1.5rem;
                    font-size: 1.6rem;
                    color: #f0c27b;
                }
                "#}
            </style>
        </div>
    }
}
