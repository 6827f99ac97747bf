use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SuccessScreenProps {
    pub title: AttrValue,
    pub text: AttrValue,
    pub on_close: Callback<()>,
}

#[function_component(SuccessScreen)]
pub fn success_screen(props: &SuccessScreenProps) -> Html {
    let onclick = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="success-screen">
            <div class="success-icon">{"✓"}</div>
            <h3>{props.title.clone()}</h3>
            <p>{props.text.clone()}</p>
            <button class="primary-button" {onclick}>{"Закрыть"}</button>
        </div>
    }
}
