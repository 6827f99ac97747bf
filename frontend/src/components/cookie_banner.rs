use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::HtmlInputElement;

use crate::analytics;
use crate::components::modal::Modal;
use crate::consent::{self, ConsentError, ConsentManager, CookiePreferences};

#[derive(Properties, PartialEq)]
pub struct CookieBannerProps {
    /// Opens the settings dialog even after a decision was made (footer link).
    pub settings_requested: bool,
    pub on_settings_closed: Callback<()>,
}

#[function_component(CookieBanner)]
pub fn cookie_banner(props: &CookieBannerProps) -> Html {
    let decided = use_state(|| ConsentManager::browser().has_decided());
    let settings_open = use_state(|| false);
    let draft = use_state(|| ConsentManager::browser().load().unwrap_or_default());
    let path = use_location().map(|l| l.path().to_string()).unwrap_or_default();

    {
        let draft = draft.clone();
        use_effect_with_deps(move |requested: &bool| {
            if *requested {
                draft.set(ConsentManager::browser().load().unwrap_or_default());
            }
            || ()
        }, props.settings_requested);
    }

    let finish = {
        let decided = decided.clone();
        let settings_open = settings_open.clone();
        let on_settings_closed = props.on_settings_closed.clone();
        move |previous: Option<CookiePreferences>, result: Result<CookiePreferences, ConsentError>| {
            match result {
                // The page view sent on arrival was dropped before consent.
                Ok(prefs) if consent::analytics_newly_allowed(previous, &prefs) => {
                    analytics::page_view(path.clone());
                }
                Ok(_) => {}
                Err(e) => log::error!("Could not save cookie consent: {}", e),
            }
            // Hide the banner even if storage failed; it will ask again next visit.
            decided.set(true);
            settings_open.set(false);
            on_settings_closed.emit(());
        }
    };

    let accept_all = {
        let finish = finish.clone();
        Callback::from(move |_: MouseEvent| {
            let manager = ConsentManager::browser();
            finish(manager.load(), manager.accept_all())
        })
    };

    let reject_all = {
        let finish = finish.clone();
        Callback::from(move |_: MouseEvent| {
            let manager = ConsentManager::browser();
            finish(manager.load(), manager.reject_all())
        })
    };

    let save_custom = {
        let finish = finish.clone();
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            let manager = ConsentManager::browser();
            finish(manager.load(), manager.save_custom(*draft))
        })
    };

    let forget = {
        let decided = decided.clone();
        let settings_open = settings_open.clone();
        let draft = draft.clone();
        let on_settings_closed = props.on_settings_closed.clone();
        Callback::from(move |_: MouseEvent| {
            ConsentManager::browser().clear();
            draft.set(CookiePreferences::default());
            decided.set(false);
            settings_open.set(false);
            on_settings_closed.emit(());
        })
    };

    let open_settings = {
        let settings_open = settings_open.clone();
        Callback::from(move |_: MouseEvent| settings_open.set(true))
    };

    let close_settings = {
        let settings_open = settings_open.clone();
        let on_settings_closed = props.on_settings_closed.clone();
        Callback::from(move |_| {
            settings_open.set(false);
            on_settings_closed.emit(());
        })
    };

    let toggle = |apply: fn(&mut CookiePreferences, bool)| {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = *draft;
            apply(&mut next, input.checked());
            draft.set(next);
        })
    };

    let show_settings = *settings_open || props.settings_requested;

    html! {
        <>
            {
                if !*decided && !show_settings {
                    html! {
                        <div class="cookie-banner" role="region" aria-label="Cookie">
                            <p>
                                {"Мы используем cookie, чтобы сайт работал корректно, и для анализа посещаемости. "}
                                {"Вы можете выбрать, какие cookie разрешить."}
                            </p>
                            <div class="cookie-actions">
                                <button class="primary-button" onclick={accept_all.clone()}>{"Принять все"}</button>
                                <button class="secondary-button" onclick={reject_all.clone()}>{"Только необходимые"}</button>
                                <button class="link-button" onclick={open_settings}>{"Настроить"}</button>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            {
                if show_settings {
                    html! {
                        <Modal on_close={close_settings} title="Настройки cookie">
                            <div class="cookie-settings">
                                <label class="cookie-option">
                                    <input type="checkbox" checked={true} disabled={true} />
                                    <div>
                                        <strong>{"Необходимые"}</strong>
                                        <p>{"Запоминают ваш выбор cookie. Отключить нельзя."}</p>
                                    </div>
                                </label>
                                <label class="cookie-option">
                                    <input type="checkbox" checked={draft.analytics} onchange={toggle(|p, v| p.analytics = v)} />
                                    <div>
                                        <strong>{"Аналитика"}</strong>
                                        <p>{"Помогают понять, какие страницы полезны гостям (Firebase Analytics)."}</p>
                                    </div>
                                </label>
                                <label class="cookie-option">
                                    <input type="checkbox" checked={draft.marketing} onchange={toggle(|p, v| p.marketing = v)} />
                                    <div>
                                        <strong>{"Маркетинг"}</strong>
                                        <p>{"Виджеты социальных сетей и персональные предложения."}</p>
                                    </div>
                                </label>
                                <div class="cookie-actions">
                                    <button class="primary-button" onclick={save_custom}>{"Сохранить"}</button>
                                    <button class="secondary-button" onclick={accept_all}>{"Принять все"}</button>
                                    <button class="link-button" onclick={reject_all}>{"Отклонить всё"}</button>
                                </div>
                                {
                                    if *decided {
                                        html! {
                                            <button class="link-button cookie-forget" onclick={forget}>
                                                {"Сбросить мой выбор"}
                                            </button>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                        </Modal>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .cookie-banner {
                    position: fixed;
                    left: 1rem;
                    right: 1rem;
                    bottom: 1rem;
                    max-width: 720px;
                    margin: 0 auto;
                    background: #2a2119;
                    border: 1px solid rgba(214, 163, 92, 0.35);
                    border-radius: 14px;
                    padding: 1.25rem 1.5rem;
                    z-index: 900;
                    box-shadow: 0 12px 32px rgba(0, 0, 0, 0.4);
                }
                .cookie-banner p { margin: 0 0 1rem; font-size: 0.95rem; }
                .cookie-actions { display: flex; flex-wrap: wrap; gap: 0.75rem; align-items: center; }
                .cookie-option { display: flex; gap: 1rem; align-items: flex-start; margin-bottom: 1rem; }
                .cookie-option p { margin: 0.25rem 0 0; color: #b8a78f; font-size: 0.9rem; }
                .cookie-forget { margin-top: 1.25rem; font-size: 0.85rem; }
                "#}
            </style>
        </>
    }
}
