// =============================================================================
// a11y_tests.rs - Accessibility checks for the workflow studio frontend
//
// Validates that navigation labels read well to screen readers in every
// shipped language and that status chips carry translated text.
//
// Run with:
//   cd app/leptos-ui && wasm-pack test --headless --chrome
// =============================================================================

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use wf_core::i18n::{Locale, LocaleBundle, MissingKeyPolicy, Translator};
use wf_leptos_ui::i18n::embedded_bundle;

const JA: &str = include_str!("../public/locales/ja/translation.json");

fn get_document() -> web_sys::Document {
    web_sys::window()
        .expect("no window")
        .document()
        .expect("no document")
}

fn translator(locale: Locale) -> Translator {
    let mut t = Translator::new(Locale::En, embedded_bundle(), MissingKeyPolicy::RawKey);
    t.insert_bundle(Locale::Ja, LocaleBundle::from_json_str(JA).expect("ja bundle"));
    t.set_locale(locale).expect("bundle loaded");
    t
}

// =============================================================================
// Navigation labels
// =============================================================================

mod nav_a11y {
    use super::*;
    use wf_leptos_ui::components::nav_bar::nav_label_key;

    fn labels(locale: Locale) -> Vec<String> {
        let t = translator(locale);
        (0..)
            .map_while(nav_label_key)
            .map(|key| t.t(key))
            .collect()
    }

    #[wasm_bindgen_test]
    fn all_nav_items_have_text_labels() {
        for locale in Locale::all() {
            for (i, label) in labels(*locale).iter().enumerate() {
                assert!(!label.trim().is_empty(), "nav item {i} has no {locale:?} label");
            }
        }
    }

    #[wasm_bindgen_test]
    fn nav_labels_are_unique() {
        for locale in Locale::all() {
            let mut seen = std::collections::HashSet::new();
            for label in labels(*locale) {
                assert!(seen.insert(label.clone()), "duplicate nav label '{label}'");
            }
        }
    }

    #[wasm_bindgen_test]
    fn nav_labels_are_not_raw_keys() {
        for label in labels(Locale::Ja) {
            assert!(!label.starts_with("nav."), "untranslated nav label '{label}'");
        }
    }
}

// =============================================================================
// Status chips
// =============================================================================

mod chip_a11y {
    use super::*;
    use wf_core::runs::RunStatus;

    #[wasm_bindgen_test]
    fn run_status_chips_have_screen_reader_text() {
        let t = translator(Locale::En);
        for status in [RunStatus::Success, RunStatus::Failed, RunStatus::Running] {
            let text = t.t(status.label_key());
            assert_ne!(text, status.label_key());
            assert!(!text.is_empty());
        }
    }
}

// =============================================================================
// DOM sanity
// =============================================================================

mod dom_a11y {
    use super::*;

    #[wasm_bindgen_test]
    fn document_exists_for_a11y_testing() {
        let doc = get_document();
        assert!(doc.body().is_some(), "Document body must exist");
    }

    #[wasm_bindgen_test]
    fn html_lang_attribute_is_settable() {
        let doc = get_document();
        let root = doc.document_element().expect("no <html>");
        let _ = root.set_attribute("lang", Locale::Ja.code());
        assert_eq!(root.get_attribute("lang").as_deref(), Some("ja"));
        let _ = root.set_attribute("lang", Locale::En.code());
    }
}
