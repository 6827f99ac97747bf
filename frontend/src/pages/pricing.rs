use yew::prelude::*;

use crate::analytics;
use crate::components::quote_modal::QuoteModal;
use crate::config;
use crate::content::{EXTRAS, SAUNAS};
use crate::widgets;

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    pub on_book: Callback<()>,
}

#[function_component(Pricing)]
pub fn pricing(props: &PricingProps) -> Html {
    let quote_open = use_state(|| false);

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

    let book = {
        let on_book = props.on_book.clone();
        Callback::from(move |_: MouseEvent| {
            analytics::button_click("book_now", "pricing");
            on_book.emit(());
        })
    };

    let yclients = Callback::from(|_: MouseEvent| {
        analytics::button_click("yclients", "pricing");
        if let Err(e) = widgets::open_yclients() {
            log::error!("Could not open YClients: {}", e);
        }
    });

    let open_quote = {
        let quote_open = quote_open.clone();
        Callback::from(move |_: MouseEvent| quote_open.set(true))
    };
    let close_quote = {
        let quote_open = quote_open.clone();
        Callback::from(move |_| quote_open.set(false))
    };

    html! {
        <div class="content-page pricing-page">
            <section class="page-hero">
                <h1>{"Цены"}</h1>
                <p>{format!(
                    "Аренда от {} часов. Выходной тариф действует с пятницы по воскресенье.",
                    config::MIN_SESSION_HOURS
                )}</p>
            </section>

            <section class="page-section">
                <h2>{"Аренда бани"}</h2>
                <table class="price-table">
                    <thead>
                        <tr>
                            <th>{"Баня"}</th>
                            <th>{"Гостей"}</th>
                            <th>{"Пн–Чт, ₽/час"}</th>
                            <th>{"Пт–Вс, ₽/час"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for SAUNAS.iter().map(|sauna| html! {
                            <tr>
                                <td>{sauna.name}</td>
                                <td>{format!("до {}", sauna.capacity)}</td>
                                <td>{sauna.weekday_price.to_string()}</td>
                                <td>{sauna.weekend_price.to_string()}</td>
                            </tr>
                        }) }
                    </tbody>
                </table>

                <div class="pricing-actions">
                    <button class="primary-button" onclick={book}>{"Забронировать"}</button>
                    <button class="secondary-button" onclick={yclients}>{"Онлайн-запись YClients"}</button>
                </div>

                <h2>{"Дополнительно"}</h2>
                <ul class="extras-list">
                    { for EXTRAS.iter().map(|extra| html! {
                        <li>
                            <span>{extra.name}</span>
                            <span class="extras-dots"></span>
                            <span class="extras-price">{extra.price}</span>
                        </li>
                    }) }
                </ul>

                <div class="event-cta">
                    <h2>{"Праздник или корпоратив?"}</h2>
                    <p>{"Закроем комплекс целиком и подготовим программу под вашу компанию."}</p>
                    <button class="primary-button" onclick={open_quote}>{"Рассчитать стоимость"}</button>
                </div>
            </section>

            {
                if *quote_open {
                    html! { <QuoteModal on_close={close_quote} /> }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .price-table { width: 100%; border-collapse: collapse; margin-bottom: 2rem; }
                .price-table th, .price-table td { padding: 0.9rem 0.75rem; border-bottom: 1px solid rgba(214,163,92,0.2); text-align: left; }
                .price-table th { color: #b8a78f; font-weight: 500; }
                .pricing-actions { display: flex; gap: 1rem; flex-wrap: wrap; margin-bottom: 3rem; }
                .extras-list { list-style: none; padding: 0; }
                .extras-list li { display: flex; align-items: baseline; gap: 0.5rem; padding: 0.4rem 0; }
                .extras-dots { flex: 1; border-bottom: 1px dotted rgba(214,163,92,0.4); }
                .extras-price { color: #f0c27b; white-space: nowrap; }
                .event-cta { margin-top: 3rem; padding: 2rem; border-radius: 16px; background: #2a2119; text-align: center; }
                "#}
            </style>
        </div>
    }
}
