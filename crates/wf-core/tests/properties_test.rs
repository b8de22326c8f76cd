//! Behavioural properties of the studio shell and pages, exercised through
//! the public `wf_core` API only.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use wf_core::catalog::{connectors, ConnectorCategory, ConnectorQuery};
use wf_core::chat::{ChatSession, Role};
use wf_core::config::StudioConfig;
use wf_core::i18n::{Locale, LocaleBundle, MissingKeyPolicy, Translator};
use wf_core::routes::{self, Page, Resolution, NAV_ITEMS};
use wf_core::shell::{Sidebar, SidebarState};

const EN: &str = include_str!("../../../app/leptos-ui/public/locales/en/translation.json");
const JA: &str = include_str!("../../../app/leptos-ui/public/locales/ja/translation.json");

fn translator() -> Translator {
    let mut t = Translator::new(
        Locale::En,
        LocaleBundle::from_json_str(EN).unwrap(),
        MissingKeyPolicy::RawKey,
    );
    t.insert_bundle(Locale::Ja, LocaleBundle::from_json_str(JA).unwrap());
    t
}

fn noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

// ===========================================================================
// Routing and titles
// ===========================================================================

#[test]
fn test_sub_paths_keep_page_and_title() {
    for page in Page::ALL {
        let bare = page.path();
        let nested = format!("{bare}/some/child");
        let trailing = format!("{bare}/");
        for path in [bare.to_string(), nested, trailing] {
            assert_eq!(routes::resolve(&path), Resolution::Shell(page), "{path}");
            assert_eq!(routes::title_key(&path), routes::title_key(bare), "{path}");
        }
    }
}

#[test]
fn test_root_redirects_and_onboarding_is_chromeless() {
    assert_eq!(routes::resolve("/"), Resolution::Redirect("/dashboard"));
    assert_eq!(routes::resolve(""), Resolution::Redirect("/dashboard"));
    assert_eq!(routes::resolve("/onboarding"), Resolution::Onboarding);
    assert_eq!(routes::resolve("/nope"), Resolution::NotFound);
    assert_eq!(routes::title_key("/nope"), routes::DEFAULT_TITLE_KEY);
}

#[test]
fn test_every_nav_item_is_active_on_its_own_page() {
    for item in NAV_ITEMS.iter() {
        let path = format!("{}/detail", item.path);
        let active: Vec<_> = NAV_ITEMS.iter().filter(|i| i.is_active(&path)).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].page, item.page);
    }
}

// ===========================================================================
// Sidebar
// ===========================================================================

#[test]
fn test_two_toggles_restore_state_and_width() {
    let cfg = StudioConfig::default();
    let mut sidebar = Sidebar::new(&cfg.shell);
    let (state, width) = (sidebar.state(), sidebar.width_px());
    assert_eq!(state, SidebarState::Expanded);

    sidebar.toggle();
    assert_eq!(sidebar.width_px(), cfg.shell.collapsed_width);
    sidebar.toggle();
    assert_eq!(sidebar.state(), state);
    assert_eq!(sidebar.width_px(), width);
}

// ===========================================================================
// Connector filtering
// ===========================================================================

#[test]
fn test_unmatched_search_yields_no_cards() {
    let query = ConnectorQuery {
        search: "zzz-no-such-connector".into(),
        ..Default::default()
    };
    assert!(query.apply(connectors()).is_empty());
}

#[test]
fn test_category_filter_restricts_every_card() {
    for category in ConnectorCategory::ALL {
        let query = ConnectorQuery {
            category: Some(category),
            ..Default::default()
        };
        let shown = query.apply(connectors());
        assert!(!shown.is_empty(), "{category}");
        assert!(shown.iter().all(|c| c.category == category));
    }
}

// ===========================================================================
// Chat
// ===========================================================================

#[test]
fn test_send_then_delayed_reply_in_order() {
    let cfg = StudioConfig::default();
    let mut chat = ChatSession::with_sample();
    let before = chat.messages().len();

    let sent_at = noon();
    let ticket = chat.send("What changed in Q2?", sent_at).unwrap();
    assert_eq!(chat.messages().len(), before + 1);
    assert_eq!(chat.messages().last().unwrap().role, Role::User);

    let reply_at = sent_at + Duration::milliseconds(i64::from(cfg.agent.reply_delay_ms));
    assert!(chat.deliver_reply(ticket, &cfg.agent.reply_text, reply_at));

    let tail: Vec<_> = chat.messages()[before..].iter().map(|m| m.role).collect();
    assert_eq!(tail, vec![Role::User, Role::Assistant]);
    assert!(chat.messages()[before].timestamp <= chat.messages()[before + 1].timestamp);
}

// ===========================================================================
// Language switching
// ===========================================================================

#[test]
fn test_switching_language_and_back_restores_strings() {
    let mut t = translator();
    let keys: Vec<_> = Page::ALL.iter().map(|p| p.title_key()).collect();
    let english: Vec<_> = keys.iter().map(|k| t.t(k)).collect();

    t.set_locale(Locale::Ja).unwrap();
    let japanese: Vec<_> = keys.iter().map(|k| t.t(k)).collect();
    assert_ne!(english, japanese);

    t.set_locale(Locale::En).unwrap();
    let again: Vec<_> = keys.iter().map(|k| t.t(k)).collect();
    assert_eq!(english, again);
}

#[test]
fn test_shipped_bundles_have_same_keys() {
    let en = LocaleBundle::from_json_str(EN).unwrap();
    let ja = LocaleBundle::from_json_str(JA).unwrap();
    let mut en_keys: Vec<_> = en.keys().collect();
    let mut ja_keys: Vec<_> = ja.keys().collect();
    en_keys.sort_unstable();
    ja_keys.sort_unstable();
    assert_eq!(en_keys, ja_keys);
}

#[test]
fn test_english_titles_match_navigation_labels() {
    let t = translator();
    assert_eq!(t.t(Page::Dashboard.title_key()), "Dashboard");
    assert_eq!(t.t(Page::Builder.title_key()), "Workflow Builder");
    assert_eq!(t.t(Page::Help.title_key()), "Help & Documentation");
    assert_eq!(t.t(routes::DEFAULT_TITLE_KEY), "AI Workflow Studio");
}
