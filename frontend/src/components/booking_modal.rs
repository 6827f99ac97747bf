use yew::prelude::*;
use chrono::NaiveDate;
use web_sys::HtmlInputElement;
use wasm_bindgen_futures::spawn_local;

use crate::analytics::{self, AnalyticsEvent};
use crate::booking::{BookingWizard, Step, FORM_STEPS};
use crate::calendar::{self, MonthView, WEEKDAYS_SHORT};
use crate::components::confetti::Confetti;
use crate::components::modal::Modal;
use crate::components::optimized_image::OptimizedImage;
use crate::config;
use crate::content::SAUNAS;

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub on_close: Callback<()>,
}

/// Four-step booking wizard. State lives only as long as the modal is
/// mounted, so closing and reopening starts from the first step.
#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
    let wizard = use_state(BookingWizard::new);
    let month = use_state(|| MonthView::containing(calendar::today_in_business_tz()));
    let error = use_state(|| None::<String>);
    let is_submitting = use_state(|| false);

    let today = calendar::today_in_business_tz();
    let now = calendar::now_in_business_tz();

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    let go_back = {
        let wizard = wizard.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*wizard).clone();
            next.back();
            error.set(None);
            wizard.set(next);
        })
    };

    let body = match wizard.step {
        Step::Sauna => {
            let cards = SAUNAS.iter().map(|sauna| {
                let onclick = {
                    let wizard = wizard.clone();
                    let error = error.clone();
                    let id = sauna.id;
                    Callback::from(move |_: MouseEvent| {
                        let mut next = (*wizard).clone();
                        match next.select_sauna(id) {
                            Ok(()) => {
                                analytics::track(AnalyticsEvent::BookingStep { step: next.step.number() });
                                error.set(None);
                                wizard.set(next);
                            }
                            Err(e) => error.set(Some(e.to_string())),
                        }
                    })
                };
                let selected = wizard.sauna == Some(sauna.id);
                html! {
                    <button class={classes!("sauna-option", selected.then(|| "selected"))} {onclick}>
                        <OptimizedImage src={sauna.image} fallback={Some(AttrValue::from(sauna.image_fallback))} alt={sauna.name} class="sauna-option-image" />
                        <div class="sauna-option-text">
                            <strong>{sauna.name}</strong>
                            <span>{format!("до {} гостей · от {} ₽/час", sauna.capacity, sauna.weekday_price)}</span>
                        </div>
                    </button>
                }
            }).collect::<Html>();
            html! { <div class="sauna-options">{cards}</div> }
        }
        Step::Date => {
            let view = *month;
            let prev = {
                let month = month.clone();
                Callback::from(move |_: MouseEvent| month.set(month.prev()))
            };
            let next = {
                let month = month.clone();
                Callback::from(move |_: MouseEvent| month.set(month.next()))
            };
            let cells = view.cells().into_iter().map(|cell| match cell {
                None => html! { <span class="calendar-cell empty"></span> },
                Some(date) => day_button(date, today, &wizard, &error),
            }).collect::<Html>();

            html! {
                <div class="calendar">
                    <div class="calendar-header">
                        <button class="calendar-nav" onclick={prev} disabled={!view.can_go_prev(today)} aria-label="Предыдущий месяц">{"‹"}</button>
                        <span class="calendar-title">{view.title()}</span>
                        <button class="calendar-nav" onclick={next} disabled={!view.can_go_next(today)} aria-label="Следующий месяц">{"›"}</button>
                    </div>
                    <div class="calendar-grid">
                        { for WEEKDAYS_SHORT.iter().map(|d| html! { <span class="calendar-weekday">{*d}</span> }) }
                        {cells}
                    </div>
                </div>
            }
        }
        Step::Time => {
            let durations = (config::MIN_SESSION_HOURS..=config::MAX_SESSION_HOURS).map(|hours| {
                let onclick = {
                    let wizard = wizard.clone();
                    let error = error.clone();
                    Callback::from(move |_: MouseEvent| {
                        let mut next = (*wizard).clone();
                        match next.set_hours(hours) {
                            Ok(()) => wizard.set(next),
                            Err(e) => error.set(Some(e.to_string())),
                        }
                    })
                };
                html! {
                    <button class={classes!("duration-option", (wizard.hours == hours).then(|| "selected"))} {onclick}>
                        {format!("{} ч", hours)}
                    </button>
                }
            }).collect::<Html>();

            let starts = wizard.available_starts(now);
            let slots = if starts.is_empty() {
                html! { <p class="booking-hint">{"На эту дату свободного времени нет. Выберите другой день."}</p> }
            } else {
                starts.into_iter().map(|start| {
                    let onclick = {
                        let wizard = wizard.clone();
                        let error = error.clone();
                        Callback::from(move |_: MouseEvent| {
                            let mut next = (*wizard).clone();
                            match next.select_time(start, calendar::now_in_business_tz()) {
                                Ok(()) => {
                                    analytics::track(AnalyticsEvent::BookingStep { step: next.step.number() });
                                    error.set(None);
                                    wizard.set(next);
                                }
                                Err(e) => error.set(Some(e.to_string())),
                            }
                        })
                    };
                    let label = format!(
                        "{}–{}",
                        calendar::format_time(start),
                        calendar::format_time(calendar::session_end(start, wizard.hours))
                    );
                    html! {
                        <button class={classes!("slot-option", (wizard.start == Some(start)).then(|| "selected"))} {onclick}>
                            {label}
                        </button>
                    }
                }).collect::<Html>()
            };

            html! {
                <>
                    <div class="duration-options">{durations}</div>
                    <div class="slot-options">{slots}</div>
                </>
            }
        }
        Step::Consent => {
            let on_name = {
                let wizard = wizard.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    let mut next = (*wizard).clone();
                    next.set_name(input.value());
                    wizard.set(next);
                })
            };
            let on_phone = {
                let wizard = wizard.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    let mut next = (*wizard).clone();
                    next.set_phone(input.value());
                    wizard.set(next);
                })
            };
            let on_consent = {
                let wizard = wizard.clone();
                Callback::from(move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    let mut next = (*wizard).clone();
                    next.set_consent(input.checked());
                    wizard.set(next);
                })
            };
            let on_submit = {
                let wizard = wizard.clone();
                let error = error.clone();
                let is_submitting = is_submitting.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    let mut next = (*wizard).clone();
                    match next.submit(calendar::now_in_business_tz()) {
                        Ok(request) => {
                            match serde_json::to_string_pretty(&request) {
                                Ok(json) => gloo_console::log!("Booking request:", json),
                                Err(e) => log::error!("Could not serialize booking: {}", e),
                            }
                            analytics::form_submit("booking");
                            error.set(None);
                            is_submitting.set(true);
                            let wizard = wizard.clone();
                            let is_submitting = is_submitting.clone();
                            // No backend: pretend the request takes a moment.
                            spawn_local(async move {
                                gloo_timers::future::TimeoutFuture::new(1_200).await;
                                is_submitting.set(false);
                                wizard.set(next);
                            });
                        }
                        Err(e) => error.set(Some(e.to_string())),
                    }
                })
            };

            let summary = summary(&wizard);
            let disabled = !wizard.can_submit() || *is_submitting;

            html! {
                <form class="booking-form" onsubmit={on_submit}>
                    {summary}
                    <label>
                        {"Имя"}
                        <input type="text" value={wizard.name.clone()} oninput={on_name} placeholder="Как к вам обращаться" disabled={*is_submitting} />
                    </label>
                    <label>
                        {"Телефон"}
                        <input type="tel" value={wizard.phone.clone()} oninput={on_phone} placeholder="+7 (___) ___-__-__" disabled={*is_submitting} />
                    </label>
                    <label class="checkbox">
                        <input type="checkbox" checked={wizard.consent} onchange={on_consent} disabled={*is_submitting} />
                        <span>{"Согласен на обработку персональных данных"}</span>
                    </label>
                    <button type="submit" class="primary-button" {disabled}>
                        { if *is_submitting { "Отправляем…" } else { "Отправить заявку" } }
                    </button>
                </form>
            }
        }
        Step::Done => {
            let book_again = {
                let wizard = wizard.clone();
                let month = month.clone();
                Callback::from(move |_: MouseEvent| {
                    let mut next = (*wizard).clone();
                    next.reset();
                    month.set(MonthView::containing(calendar::today_in_business_tz()));
                    wizard.set(next);
                })
            };
            html! {
                <div class="booking-done">
                    <Confetti />
                    <div class="booking-done-icon">{"♨"}</div>
                    <p>{"Спасибо! Мы перезвоним в течение 15 минут, чтобы подтвердить бронь."}</p>
                    {summary(&wizard)}
                    <div class="booking-done-actions">
                        <button class="primary-button" onclick={on_close.clone()}>{"Готово"}</button>
                        <button class="link-button" onclick={book_again}>{"Забронировать ещё"}</button>
                    </div>
                </div>
            }
        }
    };

    let show_back = back_enabled(wizard.step, *is_submitting);
    let progress_style = format!("width: {:.0}%;", wizard.progress() * 100.0);

    html! {
        <Modal on_close={props.on_close.clone()} title={AttrValue::from(wizard.step.title())} wide={true}>
            <div class="booking-wizard">
                {
                    if wizard.step != Step::Done {
                        html! {
                            <div class="booking-progress">
                                <span class="booking-step-label">{format!("Шаг {} из {}", wizard.step.number(), FORM_STEPS)}</span>
                                <div class="booking-progress-track"><div class="booking-progress-bar" style={progress_style}></div></div>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                {body}
                {
                    if let Some(message) = &*error {
                        html! { <p class="form-error">{message}</p> }
                    } else {
                        html! {}
                    }
                }
                {
                    if show_back {
                        html! { <button class="back-button" onclick={go_back}>{"← Назад"}</button> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <style>
                {r#"
                .booking-progress { margin-bottom: 1.5rem; }
                .booking-step-label { font-size: 0.85rem; color: #b8a78f; }
                .booking-progress-track { height: 6px; background: rgba(255,255,255,0.1); border-radius: 3px; margin-top: 0.4rem; }
                .booking-progress-bar { height: 100%; background: #d6a35c; border-radius: 3px; transition: width 0.3s ease; }
                .sauna-options { display: grid; gap: 1rem; }
                .sauna-option {
                    display: flex; gap: 1rem; align-items: center; text-align: left;
                    background: rgba(255,255,255,0.04); border: 1px solid rgba(214,163,92,0.2);
                    border-radius: 12px; padding: 0.75rem; color: inherit; cursor: pointer;
                }
                .sauna-option.selected, .sauna-option:hover { border-color: #d6a35c; }
                .sauna-option-image { width: 120px; height: 80px; object-fit: cover; border-radius: 8px; }
                .sauna-option-text { display: flex; flex-direction: column; gap: 0.3rem; }
                .sauna-option-text span { color: #b8a78f; font-size: 0.9rem; }
                .calendar-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem; }
                .calendar-title { font-weight: 600; }
                .calendar-nav { background: none; border: 1px solid rgba(214,163,92,0.4); color: #f0c27b; border-radius: 8px; width: 2.2rem; height: 2.2rem; cursor: pointer; }
                .calendar-nav:disabled { opacity: 0.3; cursor: default; }
                .calendar-grid { display: grid; grid-template-columns: repeat(7, 1fr); gap: 0.35rem; }
                .calendar-weekday { text-align: center; font-size: 0.8rem; color: #b8a78f; }
                .calendar-cell { aspect-ratio: 1; border-radius: 8px; border: none; background: rgba(255,255,255,0.05); color: inherit; cursor: pointer; }
                .calendar-cell.empty { background: none; cursor: default; }
                .calendar-cell.weekend { color: #e8845c; }
                .calendar-cell.selected { background: #d6a35c; color: #1e1711; }
                .calendar-cell:disabled { opacity: 0.25; cursor: default; }
                .duration-options, .slot-options { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1rem; }
                .duration-option, .slot-option {
                    padding: 0.55rem 0.9rem; border-radius: 8px; border: 1px solid rgba(214,163,92,0.35);
                    background: none; color: inherit; cursor: pointer;
                }
                .duration-option.selected, .slot-option.selected { background: #d6a35c; color: #1e1711; }
                .booking-form { display: flex; flex-direction: column; gap: 1rem; }
                .booking-summary { background: rgba(255,255,255,0.04); border-radius: 10px; padding: 1rem; margin: 0 0 1rem; }
                .booking-summary div { display: flex; justify-content: space-between; padding: 0.2rem 0; }
                .booking-summary dt { color: #b8a78f; }
                .booking-done { text-align: center; }
                .booking-done-icon { font-size: 3rem; color: #d6a35c; }
                .booking-done-actions { display: flex; gap: 1.5rem; justify-content: center; align-items: center; }
                .back-button { margin-top: 1rem; background: none; border: none; color: #b8a78f; cursor: pointer; }
                .booking-hint { color: #b8a78f; }
                "#}
            </style>
        </Modal>
    }
}

/// No stepping back while a request is in flight.
fn back_enabled(step: Step, submitting: bool) -> bool {
    !submitting && matches!(step, Step::Date | Step::Time | Step::Consent)
}

fn day_button(
    date: NaiveDate,
    today: NaiveDate,
    wizard: &UseStateHandle<BookingWizard>,
    error: &UseStateHandle<Option<String>>,
) -> Html {
    use chrono::Datelike;

    let selectable = calendar::is_selectable(date, today);
    let onclick = {
        let wizard = wizard.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*wizard).clone();
            match next.select_date(date, calendar::now_in_business_tz()) {
                Ok(()) => {
                    analytics::track(AnalyticsEvent::BookingStep { step: next.step.number() });
                    error.set(None);
                    wizard.set(next);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        })
    };
    let class = classes!(
        "calendar-cell",
        (wizard.date == Some(date)).then(|| "selected"),
        calendar::is_weekend_rate(date).then(|| "weekend"),
        (date == today).then(|| "today"),
    );

    html! {
        <button {class} {onclick} disabled={!selectable} title={calendar::format_long(date)}>
            {date.day().to_string()}
        </button>
    }
}

fn summary(wizard: &BookingWizard) -> Html {
    let sauna = wizard.selected_sauna().map(|s| s.name).unwrap_or("—");
    let date = wizard.date.map(calendar::format_long).unwrap_or_else(|| "—".to_string());
    let time = wizard
        .start
        .map(|s| format!("{}–{}", calendar::format_time(s), calendar::format_time(calendar::session_end(s, wizard.hours))))
        .unwrap_or_else(|| "—".to_string());
    let price = wizard
        .estimate_price()
        .map(|p| format!("{} ₽", p))
        .unwrap_or_else(|| "—".to_string());

    html! {
        <dl class="booking-summary">
            <div><dt>{"Баня"}</dt><dd>{sauna}</dd></div>
            <div><dt>{"Дата"}</dt><dd>{date}</dd></div>
            <div><dt>{"Время"}</dt><dd>{time}</dd></div>
            <div><dt>{"Стоимость"}</dt><dd>{price}</dd></div>
        </dl>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_is_offered_between_first_and_last_step() {
        assert!(!back_enabled(Step::Sauna, false));
        assert!(back_enabled(Step::Date, false));
        assert!(back_enabled(Step::Time, false));
        assert!(back_enabled(Step::Consent, false));
        assert!(!back_enabled(Step::Done, false));
    }

    #[test]
    fn back_is_hidden_while_submitting() {
        assert!(!back_enabled(Step::Consent, true));
    }
}
