use yew::prelude::*;

use crate::components::optimized_image::OptimizedImage;
use crate::content::TEAM;

#[function_component(About)]
pub fn about() -> Html {
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
                <h1>{"О нас"}</h1>
                <p>{"Семейная баня у лесного озера с 2014 года"}</p>
            </section>

            <section class="page-section">
                <h2>{"Как всё начиналось"}</h2>
                <p>
                    {"Первый сруб мы поставили для себя и друзей. Через год гости начали приезжать по рекомендациям, "}
                    {"и маленькая баня превратилась в комплекс из трёх парных, чана и гостевого дома."}
                </p>
                <p>
                    {"Мы по-прежнему топим печи только берёзовыми дровами, заготавливаем веники сами "}
                    {"и завариваем чай из трав, собранных в окрестных лесах."}
                </p>

                <h2>{"Во что мы верим"}</h2>
                <ul class="values-list">
                    <li><strong>{"Живой огонь."}</strong>{" Никаких электрокаменок: мягкий пар бывает только от дров."}</li>
                    <li><strong>{"Приватность."}</strong>{" Баня арендуется целиком, чужих гостей не будет."}</li>
                    <li><strong>{"Чистота."}</strong>{" После каждой компании полностью моем и проветриваем парную."}</li>
                </ul>

                <h2>{"Команда"}</h2>
                <div class="team-grid">
                    { for TEAM.iter().map(|member| html! {
                        <div class="team-member">
                            <OptimizedImage src={member.photo} alt={member.name} class="team-photo" />
                            <strong>{member.name}</strong>
                            <span>{member.role}</span>
                        </div>
                    }) }
                </div>
            </section>

            <style>
                {r#"
                .values-list li { margin-bottom: 0.75rem; }
                .team-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 1.5rem; }
                .team-member { display: flex; flex-direction: column; align-items: center; gap: 0.4rem; text-align: center; }
                .team-member span { color: #b8a78f; }
                .team-photo { width: 160px; height: 160px; border-radius: 50%; object-fit: cover; }
                "#}
            </style>
        </div>
    }
}
