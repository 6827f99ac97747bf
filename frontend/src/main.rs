use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod analytics;
mod booking;
mod calendar;
mod config;
mod consent;
mod content;
mod forms;
mod widgets;

mod components {
    pub mod booking_modal;
    pub mod confetti;
    pub mod contact;
    pub mod cookie_banner;
    pub mod faq;
    pub mod footer;
    pub mod gallery;
    pub mod hero;
    pub mod job_modal;
    pub mod modal;
    pub mod news_modal;
    pub mod optimized_image;
    pub mod quote_modal;
    pub mod review_modal;
    pub mod services;
    pub mod success;
    pub mod testimonials;
}
mod pages {
    pub mod about;
    pub mod blog;
    pub mod cancellation;
    pub mod home;
    pub mod pricing;
    pub mod vacancies;
}

use components::{
    booking_modal::BookingModal,
    cookie_banner::CookieBanner,
    footer::Footer,
};
use pages::{
    about::About,
    blog::{Blog, BlogPostPage},
    cancellation::Cancellation,
    home::Home,
    pricing::Pricing,
    vacancies::Vacancies,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/prices")]
    Pricing,
    #[at("/news")]
    Blog,
    #[at("/news/:slug")]
    BlogPost { slug: String },
    #[at("/vacancies")]
    Vacancies,
    #[at("/cancellation")]
    Cancellation,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route, on_book: &Callback<()>) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home on_book={on_book.clone()} /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <Pricing on_book={on_book.clone()} /> }
        },
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        },
        Route::BlogPost { slug } => {
            info!("Rendering blog post {}", slug);
            html! { <BlogPostPage {slug} /> }
        },
        Route::Vacancies => {
            info!("Rendering Vacancies page");
            html! { <Vacancies /> }
        },
        Route::Cancellation => {
            info!("Rendering Cancellation page");
            html! { <Cancellation /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="content-page">
                    <section class="page-hero">
                        <h1>{"Страница не найдена"}</h1>
                        <Link<Route> to={Route::Home} classes="forward-link">{"На главную"}</Link<Route>>
                    </section>
                </div>
            }
        },
    }
}

/// Sends a page view whenever the path changes.
#[function_component(PageViewTracker)]
fn page_view_tracker() -> Html {
    let path = use_location().map(|l| l.path().to_string()).unwrap_or_default();
    use_effect_with_deps(
        |path: &String| {
            analytics::page_view(path.clone());
            || ()
        },
        path,
    );
    html! {}
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_book: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let scroll_y = window.as_ref().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                    is_scrolled.set(scroll_y > 80.0);
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = &window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let book = {
        let menu_open = menu_open.clone();
        let on_book = props.on_book.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            analytics::button_click("book_now", "nav");
            on_book.emit(());
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {config::SITE_NAME}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Меню">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::About} classes="nav-link">{"О нас"}</Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Pricing} classes="nav-link">{"Цены"}</Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Blog} classes="nav-link">{"Новости"}</Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Vacancies} classes="nav-link">{"Вакансии"}</Link<Route>>
                    </div>
                    <a class="nav-link nav-phone" href={config::PHONE_LINK}>{config::PHONE}</a>
                    <button class="primary-button nav-book" onclick={book}>{"Забронировать"}</button>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 500;
                    transition: background 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(30, 23, 17, 0.94);
                    backdrop-filter: blur(8px);
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.35);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    font-size: 1.35rem;
                    font-weight: 700;
                    color: #f0c27b;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-link {
                    color: #f5ede1;
                    text-decoration: none;
                }
                .nav-link:hover {
                    color: #f0c27b;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #f5ede1;
                }
                @media (max-width: 900px) {
                    .burger-menu { display: flex; }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1.5rem;
                        background: rgba(30, 23, 17, 0.98);
                    }
                    .nav-right.mobile-menu-open { display: flex; }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let booking_open = use_state(|| false);
    let cookie_settings_requested = use_state(|| false);

    let open_booking = {
        let booking_open = booking_open.clone();
        Callback::from(move |_| booking_open.set(true))
    };
    let close_booking = {
        let booking_open = booking_open.clone();
        Callback::from(move |_| booking_open.set(false))
    };
    let open_cookie_settings = {
        let cookie_settings_requested = cookie_settings_requested.clone();
        Callback::from(move |_| cookie_settings_requested.set(true))
    };
    let close_cookie_settings = {
        let cookie_settings_requested = cookie_settings_requested.clone();
        Callback::from(move |_| cookie_settings_requested.set(false))
    };

    let render = {
        let open_booking = open_booking.clone();
        Callback::from(move |route: Route| switch(route, &open_booking))
    };

    html! {
        <BrowserRouter>
            <PageViewTracker />
            <Nav on_book={open_booking} />
            <main>
                <Switch<Route> {render} />
            </main>
            <Footer on_cookie_settings={open_cookie_settings} />
            <CookieBanner
                settings_requested={*cookie_settings_requested}
                on_settings_closed={close_cookie_settings}
            />
            {
                if *booking_open {
                    html! { <BookingModal on_close={close_booking} /> }
                } else {
                    html! {}
                }
            }
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    console_log::init_with_level(level).expect("error initializing log");

    info!("Starting {}", config::SITE_NAME);
    yew::Renderer::<App>::new().render();
}
