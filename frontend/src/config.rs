use shared::spin_strip::DeviceClass;
use wasm_bindgen::JsValue;
use web_sys::window;

pub fn get_api_base_url() -> String {
    if let Some(window) = window() {
        if let Ok(location) = window.location().host() {
            let protocol = window.location().protocol().unwrap_or_else(|_| "https:".to_string());
            return format!("{}//{}/api", protocol, location);
        }
    }

    shared::constants::API_BASE_URL.to_string()
}

pub fn get_asset_url(path: &str) -> String {
    if path.starts_with("http") || path.starts_with("data:") {
        path.to_string()
    } else if let Some(origin) = window().and_then(|w| w.location().origin().ok()) {
        format!("{}{}", origin, path)
    } else {
        path.to_string()
    }
}

/// Telegram init data saved by the launcher page, local storage first.
pub fn get_auth_token() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item("token").ok().flatten())
        .or_else(|| window()
            .and_then(|w| w.session_storage().ok().flatten())
            .and_then(|s| s.get_item("token").ok().flatten()))
}

/// Per-render view settings handed down from the app root as props.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConfig {
    pub fullscreen: bool,
    pub device: DeviceClass,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            fullscreen: false,
            device: DeviceClass::Mobile,
        }
    }
}

impl ViewConfig {
    pub fn detect() -> Self {
        let Some(window) = window() else {
            return Self::default();
        };
        let width = window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0);
        Self {
            fullscreen: telegram_fullscreen(&window),
            device: DeviceClass::from_viewport_width(width),
        }
    }

    pub fn top_padding_class(&self) -> &'static str {
        if self.fullscreen { "pt-24" } else { "pt-16" }
    }
}

fn telegram_fullscreen(window: &web_sys::Window) -> bool {
    let lookup = |target: &JsValue, key: &str| js_sys::Reflect::get(target, &JsValue::from_str(key)).ok();
    let root: &JsValue = window.as_ref();
    lookup(root, "Telegram")
        .filter(|v| !v.is_undefined())
        .and_then(|telegram| lookup(&telegram, "WebApp"))
        .filter(|v| !v.is_undefined())
        .and_then(|web_app| lookup(&web_app, "isFullscreen"))
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}
