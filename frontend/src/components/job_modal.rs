use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use crate::components::modal::Modal;
use crate::components::success::SuccessScreen;
use crate::content::Vacancy;
use crate::forms::{self, FormModel, JobApplication};

#[derive(Properties, PartialEq)]
pub struct JobModalProps {
    pub vacancy: &'static Vacancy,
    pub on_close: Callback<()>,
}

#[function_component(JobModal)]
pub fn job_modal(props: &JobModalProps) -> Html {
    let form = use_state(|| JobApplication {
        vacancy: props.vacancy.id.to_string(),
        ..Default::default()
    });
    let submitted = use_state(|| false);
    let error = use_state(|| None::<String>);

    if *submitted {
        return html! {
            <Modal on_close={props.on_close.clone()}>
                <SuccessScreen
                    title="Отклик отправлен"
                    text="Спасибо! Мы изучим анкету и позвоним, если вы нам подходите."
                    on_close={props.on_close.clone()}
                />
            </Modal>
        };
    }

    let text_input = |apply: fn(&mut JobApplication, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };

    let on_about = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(JobApplication { about: input.value(), ..(*form).clone() });
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

    let title = format!("Отклик: {}", props.vacancy.title);

    html! {
        <Modal on_close={props.on_close.clone()} title={AttrValue::from(title)}>
            <form class="modal-form" {onsubmit}>
                <label>
                    {"ФИО"}
                    <input type="text" value={form.name.clone()} oninput={text_input(|f, v| f.name = v)} />
                </label>
                <label>
                    {"Телефон"}
                    <input type="tel" value={form.phone.clone()} oninput={text_input(|f, v| f.phone = v)} />
                </label>
                <label>
                    {"Опыт работы"}
                    <input type="text" value={form.experience.clone()} oninput={text_input(|f, v| f.experience = v)}
                        placeholder="Например: 2 года пармейстером" />
                </label>
                <label>
                    {"О себе"}
                    <textarea rows="4" value={form.about.clone()} oninput={on_about}></textarea>
                </label>
                {
                    if let Some(message) = &*error {
                        html! { <p class="form-error">{message}</p> }
                    } else {
                        html! {}
                    }
                }
                <button type="submit" class="primary-button" disabled={!form.is_complete()}>
                    {"Откликнуться"}
                </button>
            </form>
        </Modal>
    }
}
