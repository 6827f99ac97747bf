use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::FAQ;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle} aria-expanded={is_open.to_string()}>
                <span class="question-text">{props.question.clone()}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.answer.clone()}</p>
            </div>
        </div>
    }
}

#[function_component(FaqList)]
pub fn faq_list() -> Html {
    html! {
        <section class="faq-section" id="faq">
            <h2>{"Частые вопросы"}</h2>
            { for FAQ.iter().map(|entry| html! {
                <FaqItem question={entry.question} answer={entry.answer} />
            }) }
            <style>
                {r#"
                .faq-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }
                .faq-item {
                    border-bottom: 1px solid rgba(214, 163, 92, 0.2);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.25rem 0;
                    background: none;
                    border: none;
                    color: #f5ede1;
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                }
                .toggle-icon {
                    color: #d6a35c;
                    font-size: 1.5rem;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease;
                    color: #c9b9a3;
                }
                .faq-item.open .faq-answer {
                    max-height: 400px;
                }
                "#}
            </style>
        </section>
    }
}
