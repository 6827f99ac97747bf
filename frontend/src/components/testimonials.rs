use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::review_modal::ReviewModal;
use crate::content::TESTIMONIALS;

const AUTOPLAY_MS: u32 = 6_000;

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + len - 1) % len
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let current = use_state(|| 0usize);
    let paused = use_state(|| false);
    let review_open = use_state(|| false);

    {
        let current = current.clone();
        let paused = paused.clone();
        // Interval of 0 stops the timer while the pointer is over the card.
        let millis = if *paused { 0 } else { AUTOPLAY_MS };
        use_interval(
            move || {
                if !*paused {
                    current.set(next_index(*current, TESTIMONIALS.len()));
                }
            },
            millis,
        );
    }

    let go_prev = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(prev_index(*current, TESTIMONIALS.len())))
    };
    let go_next = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(next_index(*current, TESTIMONIALS.len())))
    };
    let pause = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(true))
    };
    let resume = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(false))
    };
    let open_review = {
        let review_open = review_open.clone();
        Callback::from(move |_: MouseEvent| review_open.set(true))
    };
    let close_review = {
        let review_open = review_open.clone();
        Callback::from(move |_| review_open.set(false))
    };

    let card = match TESTIMONIALS.get(*current) {
        Some(t) => html! {
            <blockquote class="testimonial-card" key={current.to_string()}>
                <div class="testimonial-stars">{("★".repeat(t.rating as usize))}</div>
                <p>{t.text}</p>
                <footer>{format!("{}, {}", t.author, t.date)}</footer>
            </blockquote>
        },
        None => html! {},
    };

    let dots = (0..TESTIMONIALS.len()).map(|i| {
        let onclick = {
            let current = current.clone();
            Callback::from(move |_: MouseEvent| current.set(i))
        };
        html! {
            <button
                class={classes!("carousel-dot", (i == *current).then(|| "active"))}
                aria-label={format!("Отзыв {}", i + 1)}
                {onclick}
            ></button>
        }
    }).collect::<Html>();

    html! {
        <section class="testimonials" id="reviews">
            <h2>{"Отзывы гостей"}</h2>
            <div class="carousel" onmouseenter={pause} onmouseleave={resume}>
                <button class="carousel-arrow" onclick={go_prev} aria-label="Предыдущий отзыв">{"‹"}</button>
                {card}
                <button class="carousel-arrow" onclick={go_next} aria-label="Следующий отзыв">{"›"}</button>
            </div>
            <div class="carousel-dots">{dots}</div>
            <div class="testimonials-cta">
                <button class="secondary-button" onclick={open_review}>{"Оставить отзыв"}</button>
            </div>
            {
                if *review_open {
                    html! { <ReviewModal on_close={close_review} /> }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .testimonials { padding: 4rem 2rem; text-align: center; background: rgba(0, 0, 0, 0.18); }
                .carousel { display: flex; align-items: center; justify-content: center; gap: 1rem; max-width: 860px; margin: 0 auto; }
                .carousel-arrow { background: none; border: 1px solid rgba(214,163,92,0.4); color: #f0c27b; border-radius: 50%; width: 2.6rem; height: 2.6rem; font-size: 1.4rem; cursor: pointer; flex-shrink: 0; }
                .testimonial-card { margin: 0; padding: 2rem; background: #2a2119; border-radius: 16px; flex: 1; animation: fadeIn 0.5s ease; }
                .testimonial-card p { font-size: 1.15rem; line-height: 1.6; }
                .testimonial-card footer { color: #b8a78f; }
                .testimonial-stars { color: #f0c27b; letter-spacing: 0.2rem; margin-bottom: 0.75rem; }
                .carousel-dots { display: flex; justify-content: center; gap: 0.5rem; margin: 1.25rem 0; }
                .carousel-dot { width: 10px; height: 10px; border-radius: 50%; border: none; background: rgba(255,255,255,0.25); cursor: pointer; padding: 0; }
                .carousel-dot.active { background: #d6a35c; }
                @keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_wrap_both_ways() {
        assert_eq!(next_index(3, 4), 0);
        assert_eq!(next_index(1, 4), 2);
        assert_eq!(prev_index(0, 4), 3);
        assert_eq!(prev_index(2, 4), 1);
    }

    #[test]
    fn empty_list_stays_at_zero() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }
}
