/// Runtime configuration for the tab strip
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

/// Browser chrome settings. Every field is optional when loading; missing
/// fields take their default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// URL a new tab starts on
    pub home_url: String,
    /// Search endpoint, the encoded query is appended to it
    pub search_url: String,
    /// Label shown on a tab until it navigates
    pub new_tab_label: String,
    /// Suffix for the document title
    pub app_name: String,
    /// How long a toast stays visible
    pub toast_millis: u32,
    pub back_notice: String,
    pub forward_notice: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        BrowserConfig {
            home_url: "https://duckduckgo.com".to_string(),
            search_url: "https://duckduckgo.com/?q=".to_string(),
            new_tab_label: "New Tab".to_string(),
            app_name: "Tab Strip".to_string(),
            toast_millis: 1000,
            back_notice: "Use device back button".to_string(),
            forward_notice: "Use device forward".to_string(),
        }
    }
}

impl BrowserConfig {
    /// Parse a config from JSON text
    pub fn from_json(json: &str) -> Result<BrowserConfig, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Convert a JS object passed from the host page
    pub fn from_js(value: JsValue) -> Result<BrowserConfig, String> {
        if value.is_null() || value.is_undefined() {
            return Ok(BrowserConfig::default());
        }

        serde_wasm_bindgen::from_value(value)
            .map_err(|e| format!("Failed to parse config: {:?}", e))
    }
}
