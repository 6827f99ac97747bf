use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::contact::Contact;
use crate::components::faq::FaqList;
use crate::components::gallery::Gallery;
use crate::components::hero::Hero;
use crate::components::news_modal::NewsModal;
use crate::components::services::Services;
use crate::components::testimonials::Testimonials;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_book: Callback<()>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let news_open = use_state(|| false);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let open_news = {
        let news_open = news_open.clone();
        Callback::from(move |_| news_open.set(true))
    };
    let close_news = {
        let news_open = news_open.clone();
        Callback::from(move |_| news_open.set(false))
    };

    html! {
        <div class="landing-page">
            <Hero on_book={props.on_book.clone()} on_news={open_news} />

            <Services />

            <section class="about-teaser">
                <div class="about-teaser-content">
                    <h2>{"Баня как в деревне у бабушки"}</h2>
                    <p>
                        {"Мы построили комплекс своими руками: рубленые срубы, печи из талькохлорита, "}
                        {"дрова только берёзовые. Никаких электрокаменок и хлорированной воды."}
                    </p>
                    <Link<Route> to={Route::About} classes="forward-link">{"Подробнее о нас →"}</Link<Route>>
                </div>
            </section>

            <Gallery />
            <Testimonials />
            <FaqList />
            <Contact />

            {
                if *news_open {
                    html! { <NewsModal on_close={close_news} /> }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .about-teaser {
                    padding: 5rem 2rem;
                    background: linear-gradient(135deg, rgba(214, 163, 92, 0.12), rgba(0, 0, 0, 0));
                }
                .about-teaser-content {
                    max-width: 760px;
                    margin: 0 auto;
                    text-align: center;
                }
                .about-teaser-content p {
                    font-size: 1.15rem;
                    color: #e0d3c1;
                }
                "#}
            </style>
        </div>
    }
}
