use yew::prelude::*;
use yew_router::prelude::*;
use chrono::Datelike;

use crate::calendar;
use crate::config;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_cookie_settings: Callback<()>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let cookie_settings = {
        let on_cookie_settings = props.on_cookie_settings.clone();
        Callback::from(move |_: MouseEvent| on_cookie_settings.emit(()))
    };
    let year = calendar::today_in_business_tz().year();

    html! {
        <footer class="site-footer">
            <div class="footer-columns">
                <div>
                    <p class="footer-brand">{config::SITE_NAME}</p>
                    <p>{config::ADDRESS}</p>
                    <p><a href={config::PHONE_LINK}>{config::PHONE}</a></p>
                </div>
                <nav class="footer-links">
                    <Link<Route> to={Route::About}>{"О нас"}</Link<Route>>
                    <Link<Route> to={Route::Pricing}>{"Цены"}</Link<Route>>
                    <Link<Route> to={Route::Blog}>{"Новости"}</Link<Route>>
                    <Link<Route> to={Route::Vacancies}>{"Вакансии"}</Link<Route>>
                    <Link<Route> to={Route::Cancellation}>{"Отмена брони"}</Link<Route>>
                </nav>
                <div class="footer-social">
                    <a href={config::VK_GROUP_URL} target="_blank" rel="noopener noreferrer">{"ВКонтакте"}</a>
                    <a href={config::TELEGRAM_URL} target="_blank" rel="noopener noreferrer">{"Telegram"}</a>
                    <button class="link-button" onclick={cookie_settings}>{"Настройки cookie"}</button>
                </div>
            </div>
            <p class="footer-copy">{format!("© {} {}", year, config::SITE_NAME)}</p>
            <style>
                {r#"
                .site-footer { background: #15100b; padding: 3rem 2rem 1.5rem; margin-top: 4rem; }
                .footer-columns { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 2rem; max-width: 1100px; margin: 0 auto; }
                .footer-brand { font-size: 1.3rem; color: #f0c27b; margin-top: 0; }
                .footer-links, .footer-social { display: flex; flex-direction: column; gap: 0.6rem; align-items: flex-start; }
                .footer-copy { text-align: center; color: #7a6a55; font-size: 0.85rem; margin-top: 2.5rem; }
                "#}
            </style>
        </footer>
    }
}
