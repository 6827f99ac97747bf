use yew::prelude::*;

use crate::components::modal::Modal;
use crate::components::optimized_image::OptimizedImage;
use crate::components::testimonials::{next_index, prev_index};
use crate::content::GALLERY;

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let selected = use_state(|| None::<usize>);

    let close = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    let tiles = GALLERY.iter().enumerate().map(|(i, image)| {
        let onclick = {
            let selected = selected.clone();
            Callback::from(move |_: MouseEvent| selected.set(Some(i)))
        };
        html! {
            <OptimizedImage
                src={image.src}
                fallback={Some(AttrValue::from(image.fallback))}
                alt={image.alt}
                class="gallery-tile"
                onclick={Some(onclick)}
            />
        }
    }).collect::<Html>();

    let lightbox = match *selected {
        Some(i) => {
            let image = &GALLERY[i.min(GALLERY.len() - 1)];
            let go_prev = {
                let selected = selected.clone();
                Callback::from(move |_: MouseEvent| selected.set(Some(prev_index(i, GALLERY.len()))))
            };
            let go_next = {
                let selected = selected.clone();
                Callback::from(move |_: MouseEvent| selected.set(Some(next_index(i, GALLERY.len()))))
            };
            html! {
                <Modal on_close={close} wide={true}>
                    <div class="lightbox">
                        <OptimizedImage src={image.src} fallback={Some(AttrValue::from(image.fallback))} alt={image.alt} class="lightbox-image" eager={true} />
                        <div class="lightbox-controls">
                            <button class="carousel-arrow" onclick={go_prev} aria-label="Предыдущее фото">{"‹"}</button>
                            <span>{format!("{} / {} · {}", i + 1, GALLERY.len(), image.alt)}</span>
                            <button class="carousel-arrow" onclick={go_next} aria-label="Следующее фото">{"›"}</button>
                        </div>
                    </div>
                </Modal>
            }
        }
        None => html! {},
    };

    html! {
        <section class="gallery" id="gallery">
            <h2>{"Галерея"}</h2>
            <div class="gallery-grid">{tiles}</div>
            {lightbox}
            <style>
                {r#"
                .gallery { padding: 4rem 2rem; max-width: 1200px; margin: 0 auto; }
                .gallery-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1rem; }
                .gallery-tile { width: 100%; height: 220px; object-fit: cover; border-radius: 12px; cursor: zoom-in; transition: transform 0.3s ease; }
                .gallery-tile:hover { transform: scale(1.02); }
                .lightbox-image { width: 100%; max-height: 70vh; object-fit: contain; border-radius: 8px; }
                .lightbox-controls { display: flex; justify-content: space-between; align-items: center; margin-top: 1rem; gap: 1rem; }
                "#}
            </style>
        </section>
    }
}
