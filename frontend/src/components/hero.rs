use yew::prelude::*;

use crate::analytics;
use crate::config;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_book: Callback<()>,
    pub on_news: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let book = {
        let on_book = props.on_book.clone();
        Callback::from(move |_: MouseEvent| {
            analytics::button_click("book_now", "hero");
            on_book.emit(());
        })
    };
    let news = {
        let on_news = props.on_news.clone();
        Callback::from(move |_: MouseEvent| {
            analytics::button_click("news", "hero");
            on_news.emit(());
        })
    };

    html! {
        <header class="hero">
            <div class="hero-background"></div>
            <div class="hero-content">
                <p class="hero-kicker">{"Баня на дровах у лесного озера"}</p>
                <h1>{config::SITE_NAME}</h1>
                <p class="hero-subtitle">
                    {"Настоящий русский пар, ледяная купель и чан под открытым небом в часе езды от Петербурга."}
                </p>
                <div class="hero-cta-group">
                    <button class="primary-button hero-cta" onclick={book}>{"Забронировать"}</button>
                    <button class="link-button" onclick={news}>{"Новости и акции"}</button>
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 92vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 6rem 2rem 4rem;
                    overflow: hidden;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    background-image: url('/assets/hero.svg');
                    background-size: cover;
                    background-position: center;
                    z-index: -2;
                }
                .hero-background::after {
                    content: '';
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(30, 23, 17, 0.35) 0%, rgba(30, 23, 17, 0.95) 100%);
                }
                .hero-content { max-width: 760px; }
                .hero-kicker { text-transform: uppercase; letter-spacing: 0.2em; color: #d6a35c; font-size: 0.85rem; }
                .hero h1 {
                    font-size: 3.8rem;
                    margin: 0.5rem 0 1.5rem;
                    background: linear-gradient(45deg, #fff, #f0c27b);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-subtitle { font-size: 1.25rem; color: #e0d3c1; margin-bottom: 2.5rem; }
                .hero-cta-group { display: flex; gap: 1.5rem; justify-content: center; align-items: center; flex-wrap: wrap; }
                .hero-cta { font-size: 1.15rem; padding: 1rem 2.5rem; }
                @media (max-width: 700px) {
                    .hero h1 { font-size: 2.6rem; }
                }
                "#}
            </style>
        </header>
    }
}
