#![forbid(unsafe_code)]

use std::time::Duration;

use js_sys::{Function, Promise, Reflect};
use sawaed_common::{PageEvent, PlatformError};
use sawaed_config::{config_to_json, load_from_str, SiteConfig};
use sawaed_dom::browser::{BrowserDom, BrowserSessionStore};
use sawaed_widgets::{ClipboardBackend, CopyCompletions, CopyStatus};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Element, HtmlDocument, HtmlTextAreaElement};

use crate::site::Site;

fn to_js(err: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// `navigator.clipboard.writeText`. Only available in secure contexts. The
/// promise settles through `completions`.
struct NavigatorClipboard {
    completions: CopyCompletions,
}

impl ClipboardBackend for NavigatorClipboard {
    fn name(&self) -> &'static str {
        "navigator.clipboard"
    }

    fn set_text(&mut self, text: &str) -> Result<CopyStatus, PlatformError> {
        let unsupported = || PlatformError::NotSupported("navigator.clipboard".into());
        let window = web_sys::window().ok_or_else(unsupported)?;
        let clipboard = Reflect::get(&window.navigator(), &"clipboard".into())
            .ok()
            .filter(|c| !c.is_undefined() && !c.is_null())
            .ok_or_else(unsupported)?;
        let write_text: Function = Reflect::get(&clipboard, &"writeText".into())
            .ok()
            .and_then(|f| f.dyn_into().ok())
            .ok_or_else(unsupported)?;
        let promise: Promise = write_text
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(|e| PlatformError::ClipboardError(format!("{e:?}")))?
            .dyn_into()
            .map_err(|_| PlatformError::NotSupported("writeText promise".into()))?;

        let ticket = self.completions.ticket();
        let completions = self.completions.clone();
        spawn_local(async move {
            let result = JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| PlatformError::ClipboardError(format!("{e:?}")));
            completions.settle(ticket, result);
        });
        Ok(CopyStatus::Pending(ticket))
    }
}

/// Copies through a temporary off-screen textarea and `execCommand("copy")`.
struct ExecCommandClipboard;

impl ClipboardBackend for ExecCommandClipboard {
    fn name(&self) -> &'static str {
        "execCommand"
    }

    fn set_text(&mut self, text: &str) -> Result<CopyStatus, PlatformError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| PlatformError::NotSupported("document".into()))?;
        let body = document
            .body()
            .ok_or_else(|| PlatformError::NotSupported("document.body".into()))?;
        let area: HtmlTextAreaElement = document
            .create_element("textarea")
            .ok()
            .and_then(|e| e.dyn_into().ok())
            .ok_or_else(|| PlatformError::DomError("create textarea".into()))?;
        area.set_value(text);
        area.style().set_property("position", "fixed").ok();
        area.style().set_property("opacity", "0").ok();
        body.append_child(&area)
            .map_err(|e| PlatformError::DomError(format!("{e:?}")))?;
        area.select();

        let copied = document
            .dyn_into::<HtmlDocument>()
            .map_err(|_| PlatformError::NotSupported("HTMLDocument".into()))
            .and_then(|d| {
                d.exec_command("copy")
                    .map_err(|e| PlatformError::ClipboardError(format!("{e:?}")))
            });
        area.remove();
        if copied? {
            Ok(CopyStatus::Copied)
        } else {
            Err(PlatformError::ClipboardError("execCommand refused".into()))
        }
    }
}

fn build(config_toml: Option<String>) -> sawaed_common::Result<Site<BrowserDom>> {
    let config = match config_toml {
        Some(toml) => load_from_str(&toml)?,
        None => SiteConfig::default(),
    };
    let dom = BrowserDom::new()?;
    let store = BrowserSessionStore::new()?;
    let site = Site::new(dom, Box::new(store), config);
    site.init_logging();

    let navigator = NavigatorClipboard {
        completions: site.copy_completions(),
    };
    Ok(site
        .with_clipboard(Box::new(navigator))
        .with_clipboard_fallback(Box::new(ExecCommandClipboard)))
}

/// Browser entry point.
///
/// The page script forwards events as JSON (`{"type": "Click", "data":
/// {"target": null}}`) together with the element they hit, calls `tick`
/// from `requestAnimationFrame` with `performance.now()`, and calls
/// `preventDefault` when `handleEvent` reports it. Copies answered by the
/// clipboard promise show their notice on the next `tick`.
#[wasm_bindgen]
pub struct SawaedSite {
    site: Site<BrowserDom>,
}

#[wasm_bindgen]
impl SawaedSite {
    /// Builds the runtime from an optional TOML config and mounts it.
    #[wasm_bindgen(constructor)]
    pub fn new(config_toml: Option<String>) -> Result<SawaedSite, JsValue> {
        let mut site = build(config_toml).map_err(to_js)?;
        site.mount();
        Ok(Self { site })
    }

    /// Routes one event; returns the outcome as JSON.
    #[wasm_bindgen(js_name = handleEvent)]
    pub fn handle_event(&mut self, json: &str, target: Option<Element>) -> Result<String, JsValue> {
        let event: PageEvent<()> = PageEvent::from_json(json).map_err(to_js)?;
        let kind = event.kind();
        let event = event.try_map_target(|()| {
            target.ok_or_else(|| to_js(format!("{kind} event without a target element")))
        })?;
        Ok(self.site.handle(event).to_json())
    }

    /// Runs deferred work due by `now_ms` milliseconds since page load and
    /// finishes settled copies.
    pub fn tick(&mut self, now_ms: f64) -> u32 {
        let now = Duration::from_secs_f64(now_ms.max(0.0) / 1000.0);
        self.site.tick(now) as u32
    }

    #[wasm_bindgen(js_name = pendingTasks)]
    pub fn pending_tasks(&self) -> u32 {
        self.site.pending_tasks() as u32
    }

    /// The effective configuration as JSON.
    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> String {
        config_to_json(self.site.config())
    }
}
