use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use crate::components::modal::Modal;
use crate::components::success::SuccessScreen;
use crate::forms::{self, FormModel, ReviewForm};

#[derive(Properties, PartialEq)]
pub struct ReviewModalProps {
    pub on_close: Callback<()>,
}

#[function_component(ReviewModal)]
pub fn review_modal(props: &ReviewModalProps) -> Html {
    let form = use_state(ReviewForm::default);
    let submitted = use_state(|| false);
    let error = use_state(|| None::<String>);

    if *submitted {
        return html! {
            <Modal on_close={props.on_close.clone()}>
                <SuccessScreen
                    title="Спасибо за отзыв!"
                    text="Мы опубликуем его после проверки модератором."
                    on_close={props.on_close.clone()}
                />
            </Modal>
        };
    }

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ReviewForm { name: input.value(), ..(*form).clone() });
        })
    };

    let on_text = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(ReviewForm { text: input.value(), ..(*form).clone() });
        })
    };

    let stars = (1..=5u8).map(|rating| {
        let onclick = {
            let form = form.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                form.set(ReviewForm { rating, ..(*form).clone() });
            })
        };
        let filled = rating <= form.rating;
        html! {
            <button
                type="button"
                class={classes!("star", filled.then(|| "filled"))}
                aria-label={format!("{} из 5", rating)}
                {onclick}
            >
                {if filled { "★" } else { "☆" }}
            </button>
        }
    }).collect::<Html>();

    let onsubmit = {
        let form = form.clone();
        let submitted = submitted.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match forms::submit(&*form) {
                Ok(()) => submitted.set(true),
                Err(e) => error.set(Some(e.to_string())),
            }
        })
    };

    html! {
        <Modal on_close={props.on_close.clone()} title="Оставить отзыв">
            <form class="modal-form" {onsubmit}>
                <label>
                    {"Ваше имя"}
                    <input type="text" value={form.name.clone()} oninput={on_name} />
                </label>
                <div class="rating-input">
                    <span>{"Оценка"}</span>
                    <div class="stars">{stars}</div>
                </div>
                <label>
                    {"Отзыв"}
                    <textarea rows="5" value={form.text.clone()} oninput={on_text}
                        placeholder="Расскажите, что понравилось и что можно улучшить"></textarea>
                </label>
                {
                    if let Some(message) = &*error {
                        html! { <p class="form-error">{message}</p> }
                    } else {
                        html! {}
                    }
                }
                <button type="submit" class="primary-button" disabled={!form.is_complete()}>
                    {"Отправить"}
                </button>
            </form>
            <style>
                {r#"
                .rating-input { display: flex; align-items: center; gap: 1rem; }
                .star { background: none; border: none; font-size: 1.8rem; color: #7a6a55; cursor: pointer; padding: 0 0.1rem; }
                .star.filled { color: #f0c27b; }
                "#}
            </style>
        </Modal>
    }
}
