//! Reactive translation handle.
//!
//! The translator lives in a signal so every `t()` call made inside a
//! reactive closure re-runs when the locale changes. The English bundle is
//! compiled in and seeds the translator, so lookups never fail even before
//! (or without) a successful fetch.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wf_core::config::I18nConfig;
use wf_core::i18n::{Locale, LocaleBundle, SwitchOutcome, Translator};

use crate::locale_loader;

pub const EMBEDDED_EN: &str = include_str!("../public/locales/en/translation.json");

/// Parse the compiled-in English bundle.
pub fn embedded_bundle() -> LocaleBundle {
    LocaleBundle::from_json_str(EMBEDDED_EN).unwrap_or_else(|e| {
        leptos::logging::warn!("embedded en bundle is invalid: {e}");
        LocaleBundle::default()
    })
}

#[derive(Clone, Copy)]
pub struct I18n {
    translator: RwSignal<Translator>,
    loading: RwSignal<bool>,
    config: StoredValue<I18nConfig>,
}

impl I18n {
    pub fn new(config: I18nConfig) -> Self {
        let translator = Translator::new(config.fallback, embedded_bundle(), config.missing_key);
        Self {
            translator: RwSignal::new(translator),
            loading: RwSignal::new(true),
            config: StoredValue::new(config),
        }
    }

    pub fn t(&self, key: &str) -> String {
        self.translator.with(|tr| tr.t(key))
    }

    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        self.translator.with(|tr| tr.t_with(key, params))
    }

    pub fn locale(&self) -> Locale {
        self.translator.with(|tr| tr.current())
    }

    /// The language last picked by the user, active or still loading.
    pub fn requested(&self) -> Locale {
        self.translator.with(|tr| tr.requested())
    }

    pub fn supported(&self) -> Vec<Locale> {
        self.config.with_value(|c| c.supported.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn finish_loading(&self) {
        self.loading.set(false);
    }

    pub fn config(&self) -> I18nConfig {
        self.config.get_value()
    }

    /// Record a language choice without fetching anything.
    pub fn request(&self, locale: Locale) -> SwitchOutcome {
        self.translator
            .try_update(|tr| tr.request(locale))
            .unwrap_or(SwitchOutcome::InFlight)
    }

    /// Hand over a fetched bundle; it is activated only if still requested.
    pub fn complete(&self, locale: Locale, bundle: LocaleBundle) {
        self.translator.update(|tr| {
            if !tr.complete(locale, bundle) {
                leptos::logging::log!("stored {locale} bundle, {} was picked meanwhile", tr.requested());
            }
        });
    }

    /// Drop a failed fetch; the switcher goes back to the active locale.
    pub fn abandon(&self, locale: Locale) {
        self.translator.update(|tr| tr.abandon(locale));
    }

    /// Switch the UI language, fetching the bundle on first use.
    pub fn switch_to(&self, locale: Locale) {
        if self.request(locale) != SwitchOutcome::Fetch {
            return;
        }
        let this = *self;
        spawn_local(async move {
            let cfg = this.config();
            match locale_loader::load_bundle(locale, &cfg).await {
                Ok(bundle) => this.complete(locale, bundle),
                Err(e) => {
                    leptos::logging::warn!("keeping {} after failed switch: {e}", this.locale());
                    this.abandon(locale);
                }
            }
        });
    }
}

pub fn provide_i18n(config: I18nConfig) -> I18n {
    let i18n = I18n::new(config);
    provide_context(i18n);
    // Keep <html lang> in step for screen readers.
    Effect::new(move |_| {
        let code = i18n.locale().code();
        if let Some(root) = document().document_element() {
            let _ = root.set_attribute("lang", code);
        }
    });
    i18n
}

pub fn use_i18n() -> I18n {
    expect_context::<I18n>()
}

/// Get a translated string for `key` in the current locale.
///
/// Reactive when called inside a closure.
pub fn t(key: &str) -> String {
    use_i18n().t(key)
}

/// A reactive label for use directly in `view!`.
pub fn tr(key: &'static str) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    let i18n = use_i18n();
    move || i18n.t(key)
}
