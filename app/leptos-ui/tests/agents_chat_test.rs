// =============================================================================
// agents_chat_test.rs - Simulated assistant reply on the Agents page
//
// Mounts the page with a short reply delay and watches the chat log: the
// user message shows up at once, the reply only after the delay, and an
// unmounted page never receives one.
//
// Run with:
//   cd app/leptos-ui && wasm-pack test --headless --chrome
// =============================================================================

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlElement, HtmlInputElement};
use wf_core::config::StudioConfig;
use wf_leptos_ui::i18n::provide_i18n;
use wf_leptos_ui::pages::agents::AgentsPage;
use wf_leptos_ui::state::provide_shell_state;

wasm_bindgen_test_configure!(run_in_browser);

const DELAY_MS: u32 = 60;
const SAMPLE_MESSAGES: u32 = 4;

fn config() -> StudioConfig {
    let mut cfg = StudioConfig::default();
    cfg.agent.reply_delay_ms = DELAY_MS;
    cfg
}

fn host() -> HtmlElement {
    let doc = web_sys::window().expect("no window").document().expect("no document");
    let host: HtmlElement = doc.create_element("div").expect("div").unchecked_into();
    doc.body().expect("no body").append_child(&host).expect("append host");
    host
}

fn rows(host: &HtmlElement) -> u32 {
    host.query_selector_all(".chat-row").map(|l| l.length()).unwrap_or(0)
}

fn last_text(host: &HtmlElement) -> Option<String> {
    let list = host.query_selector_all(".chat-row .bubble-text").ok()?;
    list.item(list.length().checked_sub(1)?)?.text_content()
}

fn type_and_send(host: &HtmlElement, text: &str) {
    let input: HtmlInputElement = host
        .query_selector(".chat-input input")
        .expect("query")
        .expect("chat input")
        .unchecked_into();
    input.set_value(text);
    let init = EventInit::new();
    init.set_bubbles(true);
    let ev = Event::new_with_event_init_dict("input", &init).expect("input event");
    input.dispatch_event(&ev).expect("dispatch input");

    let button: HtmlElement = host
        .query_selector(".chat-input button")
        .expect("query")
        .expect("send button")
        .unchecked_into();
    button.click();
}

async fn wait(ms: u32) {
    TimeoutFuture::new(ms).await;
}

#[wasm_bindgen_test]
async fn reply_arrives_only_after_the_delay() {
    let cfg = config();
    let reply = cfg.agent.reply_text.clone();
    let host = host();
    let _mounted = leptos::mount::mount_to(host.clone(), move || {
        provide_shell_state(cfg.clone());
        provide_i18n(cfg.i18n);
        view! { <AgentsPage /> }
    });
    wait(0).await;
    assert_eq!(rows(&host), SAMPLE_MESSAGES);

    type_and_send(&host, "hello agent");
    wait(DELAY_MS / 4).await;
    assert_eq!(rows(&host), SAMPLE_MESSAGES + 1, "user message is shown at once");
    assert_eq!(last_text(&host).as_deref(), Some("hello agent"));

    wait(DELAY_MS * 2).await;
    assert_eq!(rows(&host), SAMPLE_MESSAGES + 2, "reply is shown after the delay");
    assert_eq!(last_text(&host), Some(reply));
}

#[wasm_bindgen_test]
async fn blank_message_schedules_nothing() {
    let cfg = config();
    let host = host();
    let _mounted = leptos::mount::mount_to(host.clone(), move || {
        provide_shell_state(cfg.clone());
        provide_i18n(cfg.i18n);
        view! { <AgentsPage /> }
    });
    wait(0).await;

    type_and_send(&host, "   ");
    wait(DELAY_MS * 2).await;
    assert_eq!(rows(&host), SAMPLE_MESSAGES);
}

#[wasm_bindgen_test]
async fn unmounting_drops_the_pending_reply() {
    let cfg = config();
    let host = host();
    let mounted = leptos::mount::mount_to(host.clone(), move || {
        provide_shell_state(cfg.clone());
        provide_i18n(cfg.i18n);
        view! { <AgentsPage /> }
    });
    wait(0).await;
    type_and_send(&host, "leaving now");
    wait(DELAY_MS / 4).await;
    assert_eq!(rows(&host), SAMPLE_MESSAGES + 1);

    drop(mounted);
    // Past the delay: a surviving timer would write into disposed signals.
    wait(DELAY_MS * 2).await;
    assert_eq!(rows(&host), 0);
}
