use yew::prelude::*;
use gloo_timers::callback::Timeout;
use web_sys::js_sys::Math;

const COLORS: [&str; 5] = ["#f0c27b", "#d6a35c", "#8fbf7a", "#e8845c", "#f5ede1"];
const PIECES: usize = 80;
const SHOW_MS: u32 = 4_000;

#[derive(Clone, Debug, PartialEq)]
pub struct Piece {
    pub left: f64,
    pub delay: f64,
    pub duration: f64,
    pub rotation: f64,
    pub color: &'static str,
}

/// `rand` must yield values in `[0, 1)`.
pub fn confetti_pieces(count: usize, mut rand: impl FnMut() -> f64) -> Vec<Piece> {
    (0..count)
        .map(|_| {
            let left = rand() * 100.0;
            let delay = rand() * 0.8;
            let duration = 2.2 + rand() * 1.6;
            let rotation = rand() * 360.0;
            let color = COLORS[((rand() * COLORS.len() as f64) as usize).min(COLORS.len() - 1)];
            Piece { left, delay, duration, rotation, color }
        })
        .collect()
}

#[function_component(Confetti)]
pub fn confetti() -> Html {
    let pieces = use_memo(|_| confetti_pieces(PIECES, Math::random), ());
    let visible = use_state(|| true);

    {
        let visible = visible.clone();
        use_effect_with_deps(move |_| {
            let timeout = Timeout::new(SHOW_MS, move || visible.set(false));
            move || drop(timeout)
        }, ());
    }

    if !*visible {
        return html! {};
    }

    html! {
        <div class="confetti" aria-hidden="true">
            {
                pieces.iter().map(|p| {
                    let style = format!(
                        "left: {:.1}%; background: {}; animation-delay: {:.2}s; animation-duration: {:.2}s; transform: rotate({:.0}deg);",
                        p.left, p.color, p.delay, p.duration, p.rotation
                    );
                    html! { <span class="confetti-piece" {style}></span> }
                }).collect::<Html>()
            }
            <style>
                {r#"
                .confetti {
                    position: fixed;
                    inset: 0;
                    pointer-events: none;
                    overflow: hidden;
                    z-index: 1100;
                }
                .confetti-piece {
                    position: absolute;
                    top: -12px;
                    width: 8px;
                    height: 14px;
                    border-radius: 2px;
                    animation-name: confettiFall;
                    animation-timing-function: ease-in;
                    animation-fill-mode: forwards;
                }
                @keyframes confettiFall {
                    to { top: 105vh; transform: rotate(720deg); opacity: 0.2; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pieces_stay_in_bounds() {
        let mut seq = [0.0, 0.5, 0.999, 0.25].into_iter().cycle();
        let pieces = confetti_pieces(20, || seq.next().unwrap());
        assert_eq!(pieces.len(), 20);
        for p in &pieces {
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..=0.8).contains(&p.delay));
            assert!((2.2..=3.8).contains(&p.duration));
            assert!(COLORS.contains(&p.color));
        }
    }

    #[test]
    fn top_of_range_picks_last_color() {
        let pieces = confetti_pieces(1, || 0.9999);
        assert_eq!(pieces[0].color, COLORS[COLORS.len() - 1]);
    }
}
