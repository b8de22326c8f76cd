//! Fetching translation bundles over HTTP.
//!
//! Each attempt races the fetch against `fetch_timeout_ms`; a failed or
//! timed-out attempt is retried `retries` more times. The caller decides
//! what to do once every attempt failed (the embedded bundle stays active).

use futures::future::{self, Either};
use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};
use wf_core::config::I18nConfig;
use wf_core::i18n::{negotiate, Locale, LocaleBundle};

use crate::i18n::I18n;

async fn fetch_text(url: &str) -> Result<String, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{:?}", e))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{:?}", e))?;

    let window = web_sys::window().ok_or("no global window")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{:?}", e))?;

    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{:?}", e))?;
    if !resp.ok() {
        return Err(format!("HTTP {} for {url}", resp.status()));
    }
    let text = JsFuture::from(resp.text().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| format!("{:?}", e))?;
    text.as_string().ok_or_else(|| "response body is not text".to_string())
}

async fn fetch_with_timeout(url: &str, timeout_ms: u32) -> Result<String, String> {
    let fetch = Box::pin(fetch_text(url));
    let timeout = Box::pin(TimeoutFuture::new(timeout_ms));
    match future::select(fetch, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(format!("timed out after {timeout_ms}ms: {url}")),
    }
}

/// Fetch and parse the bundle for `locale`, honouring retries and timeout.
pub async fn load_bundle(locale: Locale, cfg: &I18nConfig) -> Result<LocaleBundle, String> {
    let url = locale.load_path(&cfg.load_path);
    let attempts = cfg.retries + 1;
    let mut last_err = String::new();
    for attempt in 1..=attempts {
        match fetch_with_timeout(&url, cfg.fetch_timeout_ms).await {
            Ok(text) => return LocaleBundle::from_json_str(&text).map_err(|e| e.to_string()),
            Err(e) => {
                leptos::logging::warn!("locale fetch {attempt}/{attempts} failed: {e}");
                last_err = e;
            }
        }
    }
    Err(last_err)
}

/// Browser language preferences, most preferred first.
pub fn preferred_languages() -> Vec<String> {
    let Some(nav) = web_sys::window().map(|w| w.navigator()) else {
        return Vec::new();
    };
    let mut langs: Vec<String> = nav
        .languages()
        .iter()
        .filter_map(|v| v.as_string())
        .collect();
    if let Some(lang) = nav.language() {
        if !langs.contains(&lang) {
            langs.push(lang);
        }
    }
    langs
}

/// Detect the user language, load its bundle and clear the loading flag.
pub fn start(i18n: I18n) {
    let cfg = i18n.config();
    let locale = negotiate(&preferred_languages(), &cfg.supported, cfg.fallback);
    leptos::logging::log!("loading locale {locale}");

    i18n.request(locale);
    spawn_local(async move {
        match load_bundle(locale, &cfg).await {
            Ok(bundle) => i18n.complete(locale, bundle),
            Err(e) => {
                leptos::logging::warn!("using embedded {} bundle: {e}", cfg.fallback);
                i18n.abandon(locale);
            }
        }
        i18n.finish_loading();
    });
}
