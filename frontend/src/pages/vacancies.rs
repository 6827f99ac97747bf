use yew::prelude::*;

use crate::components::job_modal::JobModal;
use crate::config;
use crate::content::{self, VACANCIES};

#[function_component(Vacancies)]
pub fn vacancies() -> Html {
    let applying_for = use_state(|| None::<&'static str>);

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

    let close = {
        let applying_for = applying_for.clone();
        Callback::from(move |_| applying_for.set(None))
    };

    let resume_mailto = format!(
        "mailto:{}?subject={}",
        config::HR_EMAIL,
        urlencoding::encode("Резюме с сайта")
    );

    html! {
        <div class="content-page">
            <section class="page-hero">
                <h1>{"Вакансии"}</h1>
                <p>{"Ищем людей, которые любят баню так же, как мы"}</p>
            </section>

            <section class="page-section vacancies">
                { for VACANCIES.iter().map(|vacancy| {
                    let apply = {
                        let applying_for = applying_for.clone();
                        let id = vacancy.id;
                        Callback::from(move |_: MouseEvent| applying_for.set(Some(id)))
                    };
                    html! {
                        <article class="vacancy-card">
                            <header>
                                <h2>{vacancy.title}</h2>
                                <span class="vacancy-salary">{vacancy.salary}</span>
                            </header>
                            <p class="vacancy-schedule">{format!("График: {}", vacancy.schedule)}</p>
                            <h3>{"Обязанности"}</h3>
                            <ul>{ for vacancy.duties.iter().map(|d| html! { <li>{*d}</li> }) }</ul>
                            <h3>{"Требования"}</h3>
                            <ul>{ for vacancy.requirements.iter().map(|r| html! { <li>{*r}</li> }) }</ul>
                            <button class="primary-button" onclick={apply}>{"Откликнуться"}</button>
                        </article>
                    }
                }) }

                <p class="vacancies-note">
                    {"Не нашли подходящую вакансию? Пришлите резюме на "}
                    <a href={resume_mailto}>{config::HR_EMAIL}</a>
                </p>
            </section>

            {
                match (*applying_for).and_then(content::vacancy_by_id) {
                    Some(vacancy) => html! { <JobModal {vacancy} on_close={close} /> },
                    None => html! {},
                }
            }

            <style>
                {r#"
                .vacancies { display: grid; gap: 2rem; }
                .vacancy-card { background: #2a2119; border-radius: 16px; padding: 2rem; }
                .vacancy-card header { display: flex; justify-content: space-between; align-items: baseline; flex-wrap: wrap; gap: 1rem; }
                .vacancy-card h2 { margin: 0; }
                .vacancy-salary { color: #f0c27b; font-weight: 600; }
                .vacancy-schedule { color: #b8a78f; }
                .vacancies-note { text-align: center; color: #b8a78f; }
                "#}
            </style>
        </div>
    }
}
