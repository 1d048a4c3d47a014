/// Host environment primitives: everything the tab strip asks the browser to do

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use crate::tab_strip::Effect;

/// Browser operations the tab strip relies on
pub trait Host {
    fn open_window(&self, url: &str, target: &str) -> Result<(), String>;
    fn notify(&self, message: &str) -> Result<(), String>;
    fn reload(&self) -> Result<(), String>;
    /// Write `text` to the clipboard, calling `on_copied` once the write
    /// has succeeded
    fn copy_text(&self, text: &str, on_copied: Box<dyn FnOnce()>) -> Result<(), String>;
    fn set_fullscreen(&self, on: bool) -> Result<(), String>;
    fn set_title(&self, title: &str) -> Result<(), String>;
}

/// Carry out one effect. `on_toast` receives any message the user should
/// see once the effect has completed.
pub fn dispatch(host: &dyn Host, effect: Effect, on_toast: impl Fn(String) + 'static) {
    let result = match effect {
        Effect::OpenWindow { url, target } => host.open_window(&url, target),
        Effect::Notice(message) => host.notify(&message),
        Effect::Reload => host.reload(),
        Effect::CopyToClipboard { text, toast } => {
            host.copy_text(&text, Box::new(move || on_toast(toast)))
        }
        Effect::Fullscreen(on) => host.set_fullscreen(on),
    };

    if let Err(e) = result {
        log::error!("{}", e);
    }
}

/// `Host` backed by the page's `window`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WebHost;

impl WebHost {
    fn window(&self) -> Result<web_sys::Window, String> {
        web_sys::window().ok_or_else(|| "No window available".to_string())
    }

    fn document(&self) -> Result<web_sys::Document, String> {
        self.window()?
            .document()
            .ok_or_else(|| "No document available".to_string())
    }
}

impl Host for WebHost {
    fn open_window(&self, url: &str, target: &str) -> Result<(), String> {
        self.window()?
            .open_with_url_and_target(url, target)
            .map_err(|e| format!("Failed to open {}: {:?}", url, e))?;
        Ok(())
    }

    fn notify(&self, message: &str) -> Result<(), String> {
        self.window()?
            .alert_with_message(message)
            .map_err(|e| format!("Failed to show notice: {:?}", e))
    }

    fn reload(&self) -> Result<(), String> {
        self.window()?
            .location()
            .reload()
            .map_err(|e| format!("Reload failed: {:?}", e))
    }

    fn copy_text(&self, text: &str, on_copied: Box<dyn FnOnce()>) -> Result<(), String> {
        let promise: js_sys::Promise = self.window()?.navigator().clipboard().write_text(text);

        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => on_copied(),
                Err(e) => log::error!("Clipboard write failed: {:?}", e),
            }
        });

        Ok(())
    }

    fn set_fullscreen(&self, on: bool) -> Result<(), String> {
        let document = self.document()?;

        if on {
            document
                .document_element()
                .ok_or_else(|| "No document element".to_string())?
                .request_fullscreen()
                .map_err(|e| format!("Fullscreen request failed: {:?}", e))
        } else {
            document.exit_fullscreen();
            Ok(())
        }
    }

    fn set_title(&self, title: &str) -> Result<(), String> {
        self.document()?.set_title(title);
        Ok(())
    }
}

/// Run `callback` once after `millis` milliseconds
pub fn after_delay(millis: u32, callback: impl FnOnce() + 'static) -> Result<(), String> {
    let callback = Closure::once_into_js(callback);

    web_sys::window()
        .ok_or_else(|| "No window available".to_string())?
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            millis.min(i32::MAX as u32) as i32,
        )
        .map_err(|e| format!("Failed to schedule timer: {:?}", e))?;

    Ok(())
}
