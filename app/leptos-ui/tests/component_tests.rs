// =============================================================================
// component_tests.rs - Leptos WASM unit tests for the workflow studio UI
//
// Covers the compiled-in locale bundle, the embedded studio.toml, icon
// markup and the navigation table the sidebar renders from.
//
// Run with:
//   cd app/leptos-ui && wasm-pack test --headless --chrome
//   or: cd app/leptos-ui && cargo test --target wasm32-unknown-unknown
// =============================================================================

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use wf_core::routes::{Page, NAV_ITEMS};
use wf_leptos_ui::components::icons::svg;
use wf_leptos_ui::i18n::{embedded_bundle, EMBEDDED_EN};

// =============================================================================
// Embedded English bundle
// =============================================================================

mod embedded_locale {
    use super::*;

    #[wasm_bindgen_test]
    fn embedded_bundle_parses() {
        let bundle = embedded_bundle();
        assert!(!bundle.is_empty());
        assert!(EMBEDDED_EN.trim_start().starts_with('{'));
    }

    #[wasm_bindgen_test]
    fn every_page_title_is_translated() {
        let bundle = embedded_bundle();
        for page in Page::ALL {
            assert!(bundle.contains(page.title_key()), "missing {}", page.title_key());
        }
        assert_eq!(bundle.get("app.name"), Some("AI Workflow Studio"));
    }

    #[wasm_bindgen_test]
    fn every_nav_label_is_translated() {
        let bundle = embedded_bundle();
        for item in NAV_ITEMS.iter() {
            assert!(bundle.contains(item.label_key), "missing {}", item.label_key);
        }
    }

    #[wasm_bindgen_test]
    fn interpolated_strings_keep_their_placeholders() {
        let bundle = embedded_bundle();
        let tokens = bundle.get("runsPage.details.tokens").unwrap_or_default();
        assert!(tokens.contains("{{count}}"));
        let terms = bundle.get("settingsPage.billing.planTerms").unwrap_or_default();
        assert!(terms.contains("{{price}}") && terms.contains("{{date}}"));
    }
}

// =============================================================================
// Embedded configuration
// =============================================================================

mod embedded_config {
    use wf_leptos_ui::state::load_config;

    #[wasm_bindgen_test::wasm_bindgen_test]
    fn studio_toml_loads_without_falling_back() {
        let cfg = load_config();
        assert_eq!(cfg.shell.expanded_width, 240);
        assert_eq!(cfg.shell.collapsed_width, 72);
        assert_eq!(cfg.agent.reply_delay_ms, 1000);
        assert!(cfg.i18n.load_path.contains("{{lng}}"));
    }
}

// =============================================================================
// Icons
// =============================================================================

mod icon_markup {
    use super::*;

    #[wasm_bindgen_test]
    fn nav_icons_have_their_own_paths() {
        let fallback = svg("no-such-icon", 20);
        for item in NAV_ITEMS.iter() {
            let markup = svg(item.icon, 20);
            assert!(markup.starts_with("<svg"));
            assert_ne!(markup, fallback, "icon {} falls back to the placeholder", item.icon);
        }
    }

    #[wasm_bindgen_test]
    fn size_is_applied_to_both_dimensions() {
        let markup = svg("zap", 32);
        assert!(markup.contains(r#"width="32""#));
        assert!(markup.contains(r#"height="32""#));
    }
}
