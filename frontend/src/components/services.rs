use yew::prelude::*;

use crate::components::optimized_image::OptimizedImage;
use crate::content::{SAUNAS, SERVICES};

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section class="services" id="services">
            <h2>{"Бани и услуги"}</h2>
            <div class="sauna-cards">
                { for SAUNAS.iter().map(|sauna| html! {
                    <article class="sauna-card">
                        <OptimizedImage src={sauna.image} fallback={Some(AttrValue::from(sauna.image_fallback))} alt={sauna.name} class="sauna-card-image" />
                        <div class="sauna-card-body">
                            <h3>{sauna.name}</h3>
                            <p>{sauna.description}</p>
                            <p class="sauna-card-meta">
                                {format!("до {} гостей · от {} ₽/час", sauna.capacity, sauna.weekday_price)}
                            </p>
                        </div>
                    </article>
                }) }
            </div>
            <div class="features-grid">
                { for SERVICES.iter().map(|service| html! {
                    <div class="feature-item">
                        <span class="feature-icon">{service.icon}</span>
                        <h3>{service.title}</h3>
                        <p>{service.text}</p>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .services { padding: 4rem 2rem; max-width: 1200px; margin: 0 auto; }
                .sauna-cards { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 1.5rem; margin-bottom: 3rem; }
                .sauna-card { background: #2a2119; border-radius: 16px; overflow: hidden; border: 1px solid rgba(214,163,92,0.15); }
                .sauna-card-image { width: 100%; height: 220px; object-fit: cover; display: block; }
                .sauna-card-body { padding: 1.25rem 1.5rem 1.5rem; }
                .sauna-card-meta { color: #d6a35c; font-weight: 600; }
                .features-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1.5rem; }
                .feature-item { padding: 1.5rem; border-radius: 12px; background: rgba(255,255,255,0.03); }
                .feature-icon { font-size: 2rem; }
                .feature-item p { color: #c9b9a3; }
                "#}
            </style>
        </section>
    }
}
