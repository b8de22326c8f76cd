use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const FOCUSABLE: &str = r#"a[href], button:not([disabled]), input:not([disabled]), select:not([disabled]), textarea:not([disabled]), [tabindex]:not([tabindex="-1"])"#;

/// Keydown handler that keeps Tab / Shift+Tab focus inside the element it
/// is attached to. Used by every modal dialog.
///
/// ```rust,ignore
/// let trap = use_focus_trap();
/// view! { <div role="dialog" on:keydown=trap>...</div> }
/// ```
pub fn use_focus_trap() -> impl Fn(leptos::ev::KeyboardEvent) + Clone {
    move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() != "Tab" {
            return;
        }

        let Some(container) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };

        let focusable = focusable_elements(&container);
        let Some(last) = focusable.len().checked_sub(1) else {
            return;
        };

        let active = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.active_element());
        let current = active
            .as_ref()
            .and_then(|a| focusable.iter().position(|el| el.is_same_node(Some(a))));

        let next = match (current, ev.shift_key()) {
            (None, false) => 0,
            (None, true) => last,
            (Some(0), true) => last,
            (Some(i), true) => i - 1,
            (Some(i), false) if i >= last => 0,
            (Some(i), false) => i + 1,
        };

        if let Some(el) = focusable.get(next) {
            let _ = el.focus();
            ev.prevent_default();
        }
    }
}

fn focusable_elements(container: &HtmlElement) -> Vec<HtmlElement> {
    let Ok(list) = container.query_selector_all(FOCUSABLE) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}
