//! Locale bundles and translation lookup.
//!
//! Bundles are JSON documents (the `translation.json` files served under
//! `/locales/{{lng}}/`). Nested objects are flattened into dot-delimited
//! keys, so `{"nav": {"dashboard": "Dashboard"}}` is looked up as
//! `nav.dashboard`. Values may carry named `{{param}}` placeholders.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use unic_langid::LanguageIdentifier;

/// Placeholder replaced by the language code in a bundle load path.
pub const LNG_PLACEHOLDER: &str = "{{lng}}";

/// Supported locales
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Ja,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ja => "ja",
        }
    }

    /// Name of the language in that language, for the switcher menu.
    pub fn label(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ja => "日本語",
        }
    }

    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Ja]
    }

    /// Match a BCP 47 tag (`ja-JP`, `en_US`, `EN`) by its primary language.
    pub fn from_tag(tag: &str) -> Option<Locale> {
        tag.parse().ok()
    }

    /// Expand a bundle path template for this locale.
    pub fn load_path(&self, template: &str) -> String {
        template.replace(LNG_PLACEHOLDER, self.code())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Pick the first requested language that is in `supported`.
///
/// `requested` is in browser preference order (`navigator.languages`).
/// Unparseable tags are skipped; no match yields `fallback`.
pub fn negotiate<S: AsRef<str>>(requested: &[S], supported: &[Locale], fallback: Locale) -> Locale {
    for tag in requested {
        match Locale::from_tag(tag.as_ref()) {
            Some(locale) if supported.contains(&locale) => return locale,
            Some(_) | None => {
                tracing::debug!(tag = tag.as_ref(), "preferred language not supported");
            }
        }
    }
    fallback
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let unsupported = || I18nError::UnsupportedLocale(tag.to_string());
        let id: LanguageIdentifier = tag.trim().parse().map_err(|_| unsupported())?;
        Locale::all()
            .iter()
            .copied()
            .find(|l| l.code() == id.language.as_str())
            .ok_or_else(unsupported)
    }
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    #[error("bundle is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("bundle root must be a JSON object")]
    NotAnObject,
    #[error("unsupported locale: {0}")]
    UnsupportedLocale(String),
    #[error("no bundle loaded for locale {0}")]
    BundleNotLoaded(Locale),
}

// ---------------------------------------------------------------------------
// Missing keys
// ---------------------------------------------------------------------------

/// What `t()` renders for a key absent from both the active and the
/// fallback bundle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingKeyPolicy {
    /// Show the key itself (`nav.dashboard`).
    #[default]
    RawKey,
    /// Show nothing.
    Empty,
}

impl MissingKeyPolicy {
    pub fn render(&self, key: &str) -> String {
        match self {
            MissingKeyPolicy::RawKey => key.to_string(),
            MissingKeyPolicy::Empty => String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// LocaleBundle
// ---------------------------------------------------------------------------

/// A flattened translation bundle for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleBundle {
    entries: HashMap<String, String>,
}

impl LocaleBundle {
    pub fn from_json_str(text: &str) -> Result<Self, I18nError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self, I18nError> {
        let Value::Object(map) = value else {
            return Err(I18nError::NotAnObject);
        };
        let mut entries = HashMap::new();
        for (key, child) in map {
            flatten_into(key, child, &mut entries);
        }
        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

fn flatten_into(prefix: &str, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten_into(&format!("{prefix}.{key}"), child, out);
            }
        }
        Value::Array(items) => {
            for (idx, child) in items.iter().enumerate() {
                flatten_into(&format!("{prefix}.{idx}"), child, out);
            }
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        Value::Number(n) => {
            out.insert(prefix.to_string(), n.to_string());
        }
        Value::Bool(b) => {
            out.insert(prefix.to_string(), b.to_string());
        }
        Value::Null => {}
    }
}

/// Replace `{{name}}` placeholders with the matching parameter.
///
/// Whitespace inside the braces is ignored. Placeholders with no matching
/// parameter are left in place.
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let name = after[..end].trim();
        match params.iter().find(|(k, _)| *k == name) {
            Some((_, v)) => out.push_str(v),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

// ---------------------------------------------------------------------------
// Translator
// ---------------------------------------------------------------------------

/// What [`Translator::request`] decided for a language switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The bundle was loaded; the locale is active now.
    Switched,
    /// The caller must fetch the bundle and hand it to [`Translator::complete`].
    Fetch,
    /// A fetch for this locale is already running.
    InFlight,
}

/// Translation store holding one bundle per loaded locale.
///
/// Language switches are two-phase: [`request`](Self::request) records the
/// user's choice, [`complete`](Self::complete) delivers a fetched bundle.
/// Only the most recent request may change the active locale, so a slow
/// fetch cannot override a later choice.
#[derive(Debug, Clone)]
pub struct Translator {
    bundles: HashMap<Locale, LocaleBundle>,
    current: Locale,
    requested: Locale,
    in_flight: HashSet<Locale>,
    fallback: Locale,
    missing: MissingKeyPolicy,
}

impl Translator {
    /// Create a translator whose fallback bundle is already loaded.
    pub fn new(fallback: Locale, fallback_bundle: LocaleBundle, missing: MissingKeyPolicy) -> Self {
        let mut bundles = HashMap::new();
        bundles.insert(fallback, fallback_bundle);
        Self {
            bundles,
            current: fallback,
            requested: fallback,
            in_flight: HashSet::new(),
            fallback,
            missing,
        }
    }

    /// Add or replace the bundle for `locale`.
    pub fn insert_bundle(&mut self, locale: Locale, bundle: LocaleBundle) {
        self.bundles.insert(locale, bundle);
    }

    pub fn has_bundle(&self, locale: Locale) -> bool {
        self.bundles.contains_key(&locale)
    }

    /// Set the active locale. The bundle must already be loaded.
    pub fn set_locale(&mut self, locale: Locale) -> Result<(), I18nError> {
        if !self.has_bundle(locale) {
            return Err(I18nError::BundleNotLoaded(locale));
        }
        self.current = locale;
        self.requested = locale;
        Ok(())
    }

    /// Get the active locale.
    pub fn current(&self) -> Locale {
        self.current
    }

    /// The locale the user asked for last. Differs from [`current`](Self::current)
    /// while its bundle is being fetched.
    pub fn requested(&self) -> Locale {
        self.requested
    }

    /// Record a switch to `locale`.
    pub fn request(&mut self, locale: Locale) -> SwitchOutcome {
        self.requested = locale;
        if self.set_locale(locale).is_ok() {
            return SwitchOutcome::Switched;
        }
        if self.in_flight.insert(locale) {
            SwitchOutcome::Fetch
        } else {
            SwitchOutcome::InFlight
        }
    }

    /// Store a fetched bundle. It becomes active only if `locale` is still
    /// the latest request; returns whether it did.
    pub fn complete(&mut self, locale: Locale, bundle: LocaleBundle) -> bool {
        self.in_flight.remove(&locale);
        self.insert_bundle(locale, bundle);
        if self.requested != locale {
            tracing::debug!(%locale, requested = %self.requested, "stale bundle stored, not activated");
            return false;
        }
        self.current = locale;
        true
    }

    /// Give up on a failed fetch. A pending request for `locale` falls back
    /// to the active locale.
    pub fn abandon(&mut self, locale: Locale) {
        self.in_flight.remove(&locale);
        if self.requested == locale {
            self.requested = self.current;
        }
    }

    /// Resolve `key` in the active bundle, then in the fallback bundle.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.bundles
            .get(&self.current)
            .and_then(|b| b.get(key))
            .or_else(|| self.bundles.get(&self.fallback).and_then(|b| b.get(key)))
    }

    /// Translate a message key using the current locale.
    pub fn t(&self, key: &str) -> String {
        match self.lookup(key) {
            Some(s) => s.to_string(),
            None => self.missing.render(key),
        }
    }

    /// Translate a message key with `{{param}}` arguments.
    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        match self.lookup(key) {
            Some(s) => interpolate(s, params),
            None => self.missing.render(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle(json: &str) -> LocaleBundle {
        LocaleBundle::from_json_str(json).unwrap()
    }

    #[test]
    fn nested_objects_flatten_to_dot_keys() {
        let b = bundle(
            r#"{"nav": {"dashboard": "Dashboard", "help": "Help"},
                "templatesPage": {"difficulty": {"beginner": "Beginner"}},
                "count": 3, "flag": true, "nothing": null}"#,
        );
        assert_eq!(b.get("nav.dashboard"), Some("Dashboard"));
        assert_eq!(b.get("templatesPage.difficulty.beginner"), Some("Beginner"));
        assert_eq!(b.get("count"), Some("3"));
        assert_eq!(b.get("flag"), Some("true"));
        assert!(!b.contains("nothing"));
        assert_eq!(b.len(), 5);
    }

    #[test]
    fn non_object_root_is_rejected() {
        assert!(matches!(
            LocaleBundle::from_json_str(r#"["a", "b"]"#),
            Err(I18nError::NotAnObject)
        ));
        assert!(matches!(
            LocaleBundle::from_json_str("{not json"),
            Err(I18nError::Parse(_))
        ));
    }

    #[test]
    fn interpolation_replaces_named_params() {
        assert_eq!(
            interpolate("{{used}} of {{ limit }} used", &[("used", "24.9%"), ("limit", "50,000")]),
            "24.9% of 50,000 used"
        );
        assert_eq!(interpolate("{{missing}} stays", &[]), "{{missing}} stays");
        assert_eq!(interpolate("unterminated {{oops", &[("oops", "x")]), "unterminated {{oops");
        assert_eq!(interpolate("no placeholders", &[("a", "b")]), "no placeholders");
    }

    #[test]
    fn negotiation_uses_primary_subtag_in_preference_order() {
        let all = Locale::all();
        assert_eq!(negotiate(&["ja-JP", "en-US"], all, Locale::En), Locale::Ja);
        assert_eq!(negotiate(&["fr-FR", "en_GB"], all, Locale::En), Locale::En);
        assert_eq!(negotiate(&["de", "fr"], all, Locale::En), Locale::En);
        assert_eq!(negotiate::<&str>(&[], all, Locale::En), Locale::En);
        assert_eq!(negotiate(&["!!", "JA"], all, Locale::En), Locale::Ja);
        assert_eq!(negotiate(&["ja"], &[Locale::En], Locale::En), Locale::En);
    }

    #[test]
    fn load_path_substitutes_language_code() {
        assert_eq!(
            Locale::Ja.load_path("/locales/{{lng}}/translation.json"),
            "/locales/ja/translation.json"
        );
    }

    #[test]
    fn lookup_falls_back_then_applies_policy() {
        let mut tr = Translator::new(
            Locale::En,
            bundle(r#"{"a": "A-en", "b": "B-en"}"#),
            MissingKeyPolicy::RawKey,
        );
        tr.insert_bundle(Locale::Ja, bundle(r#"{"a": "A-ja"}"#));
        tr.set_locale(Locale::Ja).unwrap();
        assert_eq!(tr.t("a"), "A-ja");
        assert_eq!(tr.t("b"), "B-en");
        assert_eq!(tr.t("c"), "c");

        let empty = Translator::new(Locale::En, LocaleBundle::default(), MissingKeyPolicy::Empty);
        assert_eq!(empty.t("anything"), "");
        assert_eq!(empty.t_with("anything", &[("n", "1")]), "");
    }

    #[test]
    fn switching_to_unloaded_locale_is_an_error() {
        let mut tr = Translator::new(Locale::En, LocaleBundle::default(), MissingKeyPolicy::RawKey);
        assert!(matches!(
            tr.set_locale(Locale::Ja),
            Err(I18nError::BundleNotLoaded(Locale::Ja))
        ));
        assert_eq!(tr.current(), Locale::En);
    }

    #[test]
    fn latest_request_wins_over_a_slow_fetch() {
        let mut tr = Translator::new(Locale::En, bundle(r#"{"a": "A-en"}"#), MissingKeyPolicy::RawKey);
        assert_eq!(tr.request(Locale::Ja), SwitchOutcome::Fetch);
        assert_eq!(tr.request(Locale::Ja), SwitchOutcome::InFlight);
        assert_eq!(tr.request(Locale::En), SwitchOutcome::Switched);

        assert!(!tr.complete(Locale::Ja, bundle(r#"{"a": "A-ja"}"#)));
        assert_eq!(tr.current(), Locale::En);
        assert_eq!(tr.t("a"), "A-en");

        // The bundle was kept, so the next switch is immediate.
        assert_eq!(tr.request(Locale::Ja), SwitchOutcome::Switched);
        assert_eq!(tr.t("a"), "A-ja");
    }

    #[test]
    fn completed_fetch_activates_pending_request() {
        let mut tr = Translator::new(Locale::En, LocaleBundle::default(), MissingKeyPolicy::RawKey);
        assert_eq!(tr.request(Locale::Ja), SwitchOutcome::Fetch);
        assert_eq!(tr.current(), Locale::En);
        assert_eq!(tr.requested(), Locale::Ja);
        assert!(tr.complete(Locale::Ja, bundle(r#"{"a": "A-ja"}"#)));
        assert_eq!(tr.current(), Locale::Ja);
    }

    #[test]
    fn failed_fetch_reverts_request_to_active_locale() {
        let mut tr = Translator::new(Locale::En, LocaleBundle::default(), MissingKeyPolicy::RawKey);
        tr.request(Locale::Ja);
        tr.abandon(Locale::Ja);
        assert_eq!(tr.requested(), Locale::En);
        assert_eq!(tr.current(), Locale::En);
        // A retry starts a new fetch.
        assert_eq!(tr.request(Locale::Ja), SwitchOutcome::Fetch);
    }

    #[test]
    fn unknown_language_tag_is_unsupported() {
        assert_eq!("ja-JP".parse::<Locale>().unwrap(), Locale::Ja);
        assert!(matches!(
            "fr".parse::<Locale>(),
            Err(I18nError::UnsupportedLocale(tag)) if tag == "fr"
        ));
        assert!(matches!("!!".parse::<Locale>(), Err(I18nError::UnsupportedLocale(_))));
    }

    #[test]
    fn locale_serde_uses_language_codes() {
        assert_eq!(serde_json::to_string(&Locale::Ja).unwrap(), "\"ja\"");
        let l: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(l, Locale::En);
    }
}
