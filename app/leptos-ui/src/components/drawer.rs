use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

use crate::components::focus_trap::use_focus_trap;
use crate::components::icons::Icon;
use crate::i18n::use_i18n;

/// Panel sliding in from the right edge. Closes like [`Modal`](super::modal::Modal).
#[component]
pub fn Drawer(
    on_close: Callback<()>,
    /// Rendered in the header row next to the close button.
    header: ChildrenFn,
    children: Children,
    #[prop(optional)] footer: Option<ChildrenFn>,
) -> impl IntoView {
    let i18n = use_i18n();
    let focus_trap = use_focus_trap();
    let handle_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            on_close.run(());
            return;
        }
        focus_trap(ev);
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())></div>
        <aside class="drawer" role="dialog" aria-modal="true" on:keydown=handle_keydown>
            <div class="drawer-header">
                <div class="drawer-title">{header()}</div>
                <button class="icon-btn" aria-label=move || i18n.t("common.close") on:click=move |_| on_close.run(())>
                    <Icon name="x" />
                </button>
            </div>
            <div class="drawer-body">{children()}</div>
            {footer.map(|f| view! { <div class="drawer-footer">{f()}</div> })}
        </aside>
    }
}
