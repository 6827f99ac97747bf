use yew::prelude::*;

use crate::config;
use crate::content::CANCELLATION_RULES;

#[function_component(Cancellation)]
pub fn cancellation() -> Html {
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

    html! {
        <div class="content-page">
            <section class="page-hero">
                <h1>{"Отмена и перенос брони"}</h1>
                <p>{"Понимаем, что планы меняются. Вот как это работает."}</p>
            </section>

            <section class="page-section">
                <h2>{"Возврат предоплаты"}</h2>
                <table class="price-table">
                    <thead>
                        <tr>
                            <th>{"Когда отменяете"}</th>
                            <th>{"Что возвращаем"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for CANCELLATION_RULES.iter().map(|rule| html! {
                            <tr>
                                <td>{rule.when}</td>
                                <td>{rule.refund}</td>
                            </tr>
                        }) }
                    </tbody>
                </table>

                <h2>{"Перенос"}</h2>
                <p>
                    {"Перенести визит можно один раз бесплатно, если предупредить нас не позднее чем за 24 часа. "}
                    {"Предоплата засчитывается в новую дату."}
                </p>

                <h2>{"Как отменить"}</h2>
                <p>
                    {"Позвоните по телефону "}
                    <a href={config::PHONE_LINK}>{config::PHONE}</a>
                    {" или напишите на "}
                    <a href={format!("mailto:{}", config::EMAIL)}>{config::EMAIL}</a>
                    {". Деньги вернутся на карту в течение 10 рабочих дней."}
                </p>
            </section>
            <style>
                {r#"
                .price-table { width: 100%; border-collapse: collapse; margin-bottom: 2rem; }
                .price-table th, .price-table td { padding: 0.9rem 0.75rem; border-bottom: 1px solid rgba(214,163,92,0.2); text-align: left; }
                .price-table th { color: #b8a78f; font-weight: 500; }
                "#}
            </style>
        </div>
    }
}
