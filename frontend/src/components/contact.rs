use yew::prelude::*;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;

use crate::analytics;
use crate::calendar;
use crate::config;
use crate::forms::{self, CallbackRequest, FormModel};
use crate::widgets::{self, CopyOutcome};

#[function_component(Contact)]
pub fn contact() -> Html {
    let copied = use_state(|| false);
    let form = use_state(CallbackRequest::default);
    let sent = use_state(|| false);

    let copy_phone = {
        let copied = copied.clone();
        Callback::from(move |_: MouseEvent| {
            analytics::button_click("copy_phone", "contact");
            let copied = copied.clone();
            spawn_local(async move {
                let outcome = widgets::copy_to_clipboard(config::PHONE).await;
                if outcome != CopyOutcome::Manual {
                    copied.set(true);
                    let copied = copied.clone();
                    Timeout::new(2_000, move || copied.set(false)).forget();
                }
            });
        })
    };

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(CallbackRequest { name: input.value(), ..(*form).clone() });
        })
    };
    let on_phone = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(CallbackRequest { phone: input.value(), ..(*form).clone() });
        })
    };
    let onsubmit = {
        let form = form.clone();
        let sent = sent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match forms::submit(&*form) {
                Ok(()) => sent.set(true),
                Err(e) => log::warn!("Callback form rejected: {}", e),
            }
        })
    };

    html! {
        <section class="contact" id="contact">
            <h2>{"Контакты"}</h2>
            <div class="contact-grid">
                <div class="contact-info">
                    <p class="contact-label">{"Адрес"}</p>
                    <p>{config::ADDRESS}</p>
                    <a href={config::MAP_URL} target="_blank" rel="noopener noreferrer">{"Открыть на карте"}</a>

                    <p class="contact-label">{"Телефон"}</p>
                    <p class="contact-phone">
                        <a href={config::PHONE_LINK}>{config::PHONE}</a>
                        <button class="link-button" onclick={copy_phone}>
                            { if *copied { "Скопировано" } else { "Копировать" } }
                        </button>
                    </p>

                    <p class="contact-label">{"Почта"}</p>
                    <p><a href={format!("mailto:{}", config::EMAIL)}>{config::EMAIL}</a></p>

                    <p class="contact-label">{"Часы работы"}</p>
                    <p>{format!(
                        "Ежедневно с {} до {}",
                        calendar::format_time(config::opening_time()),
                        calendar::format_time(config::closing_time())
                    )}</p>
                </div>
                <div class="contact-callback">
                    {
                        if *sent {
                            html! { <p class="success-inline">{"Спасибо! Перезвоним в течение 15 минут."}</p> }
                        } else {
                            html! {
                                <form class="modal-form" {onsubmit}>
                                    <h3>{"Перезвоните мне"}</h3>
                                    <input type="text" placeholder="Имя" value={form.name.clone()} oninput={on_name} />
                                    <input type="tel" placeholder="Телефон" value={form.phone.clone()} oninput={on_phone} />
                                    <button type="submit" class="primary-button" disabled={!form.is_complete()}>
                                        {"Жду звонка"}
                                    </button>
                                </form>
                            }
                        }
                    }
                </div>
            </div>
            <style>
                {r#"
                .contact { padding: 4rem 2rem; max-width: 1100px; margin: 0 auto; }
                .contact-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 2.5rem; }
                .contact-label { margin: 1.25rem 0 0.25rem; color: #b8a78f; font-size: 0.85rem; text-transform: uppercase; letter-spacing: 0.08em; }
                .contact-info p { margin-top: 0; }
                .contact-phone { display: flex; gap: 1rem; align-items: center; font-size: 1.2rem; }
                .contact-callback { background: #2a2119; padding: 2rem; border-radius: 16px; }
                .success-inline { color: #8fbf7a; }
                "#}
            </style>
        </section>
    }
}
