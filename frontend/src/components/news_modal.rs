use yew::prelude::*;

use crate::components::modal::Modal;
use crate::config;
use crate::widgets;

const VK_CONTAINER_ID: &str = "vk_groups";

#[derive(Properties, PartialEq)]
pub struct NewsModalProps {
    pub on_close: Callback<()>,
}

/// Community feed from VK. Shows a plain link when the VK script is blocked.
#[function_component(NewsModal)]
pub fn news_modal(props: &NewsModalProps) -> Html {
    let widget_failed = use_state(|| false);

    {
        let widget_failed = widget_failed.clone();
        use_effect_with_deps(move |_| {
            if let Err(e) = widgets::mount_vk_group(VK_CONTAINER_ID) {
                log::warn!("VK widget unavailable: {}", e);
                widget_failed.set(true);
            }
            || ()
        }, ());
    }

    html! {
        <Modal on_close={props.on_close.clone()} title="Новости бани">
            <div class="news-widget">
                <div id={VK_CONTAINER_ID}></div>
                {
                    if *widget_failed {
                        html! {
                            <p class="news-fallback">
                                {"Не удалось загрузить ленту. Все новости в нашей группе "}
                                <a href={config::VK_GROUP_URL} target="_blank" rel="noopener noreferrer">{"ВКонтакте"}</a>
                                {"."}
                            </p>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </Modal>
    }
}
