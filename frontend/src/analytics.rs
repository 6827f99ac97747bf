use serde::Serialize;
use serde_json::{json, Value};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};
use web_sys::window;

use crate::config;
use crate::consent::ConsentManager;

/// Name of the global installed by `index.html` once Firebase is loaded.
const BRIDGE_FN: &str = "logAnalyticsEvent";

#[derive(Clone, Debug, PartialEq)]
pub enum AnalyticsEvent {
    PageView { page: String },
    ButtonClick { button: &'static str, location: &'static str },
    FormSubmit { form: &'static str },
    BookingStep { step: u8 },
}

impl AnalyticsEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::PageView { .. } => "page_view",
            AnalyticsEvent::ButtonClick { .. } => "button_click",
            AnalyticsEvent::FormSubmit { .. } => "form_submit",
            AnalyticsEvent::BookingStep { .. } => "booking_step",
        }
    }

    pub fn params(&self) -> Value {
        match self {
            AnalyticsEvent::PageView { page } => json!({ "page_path": page }),
            AnalyticsEvent::ButtonClick { button, location } => json!({
                "button_name": button,
                "location": location,
            }),
            AnalyticsEvent::FormSubmit { form } => json!({ "form_name": form }),
            AnalyticsEvent::BookingStep { step } => json!({ "step": step }),
        }
    }
}

pub fn page_view(page: impl Into<String>) {
    track(AnalyticsEvent::PageView { page: page.into() });
}

pub fn button_click(button: &'static str, location: &'static str) {
    track(AnalyticsEvent::ButtonClick { button, location });
}

pub fn form_submit(form: &'static str) {
    track(AnalyticsEvent::FormSubmit { form });
}

/// Fire-and-forget. Dropped silently unless analytics is enabled for this
/// build and the visitor allowed analytics cookies.
pub fn track(event: AnalyticsEvent) {
    if !config::analytics_enabled() || !ConsentManager::browser().analytics_allowed() {
        log::debug!("analytics off, dropping {}", event.name());
        return;
    }
    if let Err(e) = send(&event) {
        log::debug!("analytics event {} not sent: {:?}", event.name(), e);
    }
}

fn send(event: &AnalyticsEvent) -> Result<(), JsValue> {
    let window = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let bridge = Reflect::get(&window, &JsValue::from_str(BRIDGE_FN))?;
    let bridge: Function = bridge
        .dyn_into()
        .map_err(|_| JsValue::from_str("analytics bridge not loaded"))?;

    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let params = event.params().serialize(&serializer)?;
    bridge.call2(&JsValue::NULL, &JsValue::from_str(event.name()), &params)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_names_match_firebase_conventions() {
        assert_eq!(AnalyticsEvent::PageView { page: "/".into() }.name(), "page_view");
        assert_eq!(AnalyticsEvent::FormSubmit { form: "review" }.name(), "form_submit");
        assert_eq!(AnalyticsEvent::BookingStep { step: 2 }.name(), "booking_step");
    }

    #[test]
    fn button_click_carries_location() {
        let params = AnalyticsEvent::ButtonClick { button: "book_now", location: "hero" }.params();
        assert_eq!(params["button_name"], "book_now");
        assert_eq!(params["location"], "hero");
    }

    #[test]
    fn page_view_uses_page_path() {
        let params = AnalyticsEvent::PageView { page: "/prices".into() }.params();
        assert_eq!(params, json!({ "page_path": "/prices" }));
    }
}
