use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

use crate::components::focus_trap::use_focus_trap;
use crate::components::icons::Icon;
use crate::i18n::use_i18n;

/// Dialog with an overlay. Escape, the close button and an overlay click
/// all call `on_close`; Tab cycles inside the dialog.
#[component]
pub fn Modal(
    #[prop(into)] title: Signal<String>,
    on_close: Callback<()>,
    #[prop(default = "md")] size: &'static str,
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
        <div
            class=format!("modal modal-{size}")
            role="dialog"
            aria-modal="true"
            aria-label=move || title.get()
            on:keydown=handle_keydown
        >
            <div class="modal-header">
                <h2>{move || title.get()}</h2>
                <button class="icon-btn" aria-label=move || i18n.t("common.close") on:click=move |_| on_close.run(())>
                    <Icon name="x" />
                </button>
            </div>
            <div class="modal-body">{children()}</div>
            {footer.map(|f| view! { <div class="modal-footer">{f()}</div> })}
        </div>
    }
}
