use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::components::modal::Modal;
use crate::components::success::SuccessScreen;
use crate::forms::{self, FormModel, QuoteRequest};

const EVENT_TYPES: [&str; 4] = ["День рождения", "Корпоратив", "Девичник / мальчишник", "Другое"];

#[derive(Properties, PartialEq)]
pub struct QuoteModalProps {
    pub on_close: Callback<()>,
}

#[function_component(QuoteModal)]
pub fn quote_modal(props: &QuoteModalProps) -> Html {
    let form = use_state(QuoteRequest::default);
    let submitted = use_state(|| false);
    let error = use_state(|| None::<String>);

    if *submitted {
        return html! {
            <Modal on_close={props.on_close.clone()}>
                <SuccessScreen
                    title="Заявка принята"
                    text="Менеджер рассчитает стоимость и свяжется с вами в рабочее время."
                    on_close={props.on_close.clone()}
                />
            </Modal>
        };
    }

    let text_input = |apply: fn(&mut QuoteRequest, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };

    let on_event_type = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.set(QuoteRequest { event_type: select.value(), ..(*form).clone() });
        })
    };

    let on_comment = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(QuoteRequest { comment: input.value(), ..(*form).clone() });
        })
    };

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
        <Modal on_close={props.on_close.clone()} title="Рассчитать мероприятие">
            <form class="modal-form" {onsubmit}>
                <label>
                    {"Имя"}
                    <input type="text" value={form.name.clone()} oninput={text_input(|f, v| f.name = v)} />
                </label>
                <label>
                    {"Телефон"}
                    <input type="tel" value={form.phone.clone()} oninput={text_input(|f, v| f.phone = v)} />
                </label>
                <label>
                    {"Повод"}
                    <select onchange={on_event_type}>
                        <option value="" selected={form.event_type.is_empty()} disabled={true}>{"Выберите"}</option>
                        { for EVENT_TYPES.iter().map(|t| html! {
                            <option value={*t} selected={form.event_type == *t}>{*t}</option>
                        }) }
                    </select>
                </label>
                <div class="form-row">
                    <label>
                        {"Гостей"}
                        <input type="number" min="1" max="30" value={form.guests.clone()} oninput={text_input(|f, v| f.guests = v)} />
                    </label>
                    <label>
                        {"Дата (если знаете)"}
                        <input type="date" value={form.date.clone()} oninput={text_input(|f, v| f.date = v)} />
                    </label>
                </div>
                <label>
                    {"Пожелания"}
                    <textarea rows="3" value={form.comment.clone()} oninput={on_comment}></textarea>
                </label>
                {
                    if let Some(message) = &*error {
                        html! { <p class="form-error">{message}</p> }
                    } else {
                        html! {}
                    }
                }
                <button type="submit" class="primary-button" disabled={!form.is_complete()}>
                    {"Получить расчёт"}
                </button>
            </form>
        </Modal>
    }
}
