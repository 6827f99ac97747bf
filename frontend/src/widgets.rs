// Bridges to scripts injected by index.html: YClients, VK and the clipboard.

use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::{Function, Promise, Reflect};
use web_sys::{window, HtmlDocument, HtmlElement, HtmlTextAreaElement};

use crate::config;

/// Buttons the YClients script injects, in the order we try them.
const YCLIENTS_SELECTORS: [&str; 2] = [".ms_booking", ".yButton"];

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("{0} is not available")]
    Missing(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for WidgetError {
    fn from(value: JsValue) -> Self {
        WidgetError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

fn get(target: &JsValue, key: &'static str) -> Result<JsValue, WidgetError> {
    let value = Reflect::get(target, &JsValue::from_str(key))?;
    if value.is_undefined() || value.is_null() {
        return Err(WidgetError::Missing(key));
    }
    Ok(value)
}

/// Opens the YClients booking overlay by clicking its injected button.
/// Falls back to the hosted booking page when the script never loaded.
pub fn open_yclients() -> Result<(), WidgetError> {
    let window = window().ok_or(WidgetError::Missing("window"))?;
    let document = window.document().ok_or(WidgetError::Missing("document"))?;

    for selector in YCLIENTS_SELECTORS {
        if let Some(element) = document.query_selector(selector)? {
            if let Ok(button) = element.dyn_into::<HtmlElement>() {
                button.click();
                return Ok(());
            }
        }
    }

    log::warn!("YClients button not found, opening {}", config::yclients_url());
    window.open_with_url_and_target(&config::yclients_url(), "_blank")?;
    Ok(())
}

#[derive(Serialize)]
struct VkGroupOptions {
    mode: u8,
    width: &'static str,
    height: u32,
    no_cover: u8,
}

/// Renders the VK community feed into the element with `element_id`.
pub fn mount_vk_group(element_id: &str) -> Result<(), WidgetError> {
    let window = window().ok_or(WidgetError::Missing("window"))?;
    let vk = get(&window, "VK")?;
    let widgets = get(&vk, "Widgets")?;
    let group: Function = get(&widgets, "Group")?
        .dyn_into()
        .map_err(|_| WidgetError::Missing("VK.Widgets.Group"))?;

    // mode 4 is the news feed
    let options = VkGroupOptions { mode: 4, width: "auto", height: 520, no_cover: 1 };
    let options = options
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| WidgetError::Js(e.to_string()))?;

    group.call3(
        &widgets,
        &JsValue::from_str(element_id),
        &options,
        &JsValue::from(config::VK_GROUP_ID),
    )?;
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    Clipboard,
    ExecCommand,
    /// Both copy paths failed and the text was shown in an alert.
    Manual,
}

pub async fn copy_to_clipboard(text: &str) -> CopyOutcome {
    match write_with_clipboard_api(text).await {
        Ok(()) => return CopyOutcome::Clipboard,
        Err(e) => log::warn!("Clipboard API failed: {}", e),
    }

    match copy_with_exec_command(text) {
        Ok(true) => return CopyOutcome::ExecCommand,
        Ok(false) => log::warn!("execCommand(\"copy\") returned false"),
        Err(e) => log::warn!("execCommand copy failed: {}", e),
    }

    if let Some(window) = window() {
        let _ = window.alert_with_message(&format!("Скопируйте вручную: {}", text));
    }
    CopyOutcome::Manual
}

async fn write_with_clipboard_api(text: &str) -> Result<(), WidgetError> {
    let window = window().ok_or(WidgetError::Missing("window"))?;
    // Undefined outside secure contexts.
    let clipboard = get(&window.navigator(), "clipboard")?;
    let write_text: Function = get(&clipboard, "writeText")?
        .dyn_into()
        .map_err(|_| WidgetError::Missing("clipboard.writeText"))?;
    let promise: Promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))?
        .dyn_into()
        .map_err(|_| WidgetError::Js("writeText did not return a promise".into()))?;
    JsFuture::from(promise).await?;
    Ok(())
}

fn copy_with_exec_command(text: &str) -> Result<bool, WidgetError> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or(WidgetError::Missing("document"))?;
    let body = document.body().ok_or(WidgetError::Missing("body"))?;
    let textarea: HtmlTextAreaElement = document
        .create_element("textarea")?
        .dyn_into()
        .map_err(|_| WidgetError::Js("created element is not a textarea".into()))?;

    textarea.set_value(text);
    textarea.set_attribute("readonly", "")?;
    let style = textarea.style();
    style.set_property("position", "fixed")?;
    style.set_property("opacity", "0")?;
    body.append_child(&textarea)?;
    textarea.select();

    let copied = match document.dyn_ref::<HtmlDocument>() {
        Some(html) => html.exec_command("copy").map_err(WidgetError::from),
        None => Err(WidgetError::Missing("HtmlDocument")),
    };
    let _ = body.remove_child(&textarea);
    copied
}
