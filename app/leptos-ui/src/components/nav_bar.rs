use leptos::prelude::*;
use leptos_router::hooks::use_location;
use wf_core::routes::{NavItem as NavEntry, NAV_ITEMS};

use crate::components::icons::Icon;
use crate::i18n::use_i18n;
use crate::state::use_shell;

/// Translation key of the nav entry at `idx`, if any.
pub fn nav_label_key(idx: usize) -> Option<&'static str> {
    NAV_ITEMS.get(idx).map(|item| item.label_key)
}

/// A single nav link. Collapsed, it shows only the icon and carries the
/// label as a tooltip.
#[component]
fn NavItem(item: &'static NavEntry) -> impl IntoView {
    let i18n = use_i18n();
    let shell = use_shell();
    let pathname = use_location().pathname;
    let label = move || i18n.t(item.label_key);
    let active = move || pathname.with(|p| item.is_active(p));

    view! {
        <li>
            <a
                href=item.path
                class="sidebar-item"
                class:active=active
                class:collapsed=move || shell.collapsed()
                title=move || if shell.collapsed() { label() } else { String::new() }
                aria-current=move || active().then_some("page")
            >
                <Icon name=item.icon size=20 />
                <span class="sidebar-item-label" class:collapsed=move || shell.collapsed()>{label}</span>
            </a>
        </li>
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let i18n = use_i18n();
    let shell = use_shell();
    let collapsed = move || shell.collapsed();

    view! {
        <aside
            class="sidebar"
            class:collapsed=collapsed
            style=move || shell.sidebar_style()
            aria-label="Main navigation"
        >
            <div class="sidebar-header">
                <div class="sidebar-brand" class:collapsed=collapsed>
                    <span class="sidebar-brand-icon"><Icon name="zap" size=24 /></span>
                    <span class="sidebar-brand-name" class:collapsed=collapsed>{move || i18n.t("app.shortName")}</span>
                </div>
            </div>

            <nav class="sidebar-nav" aria-label="Page navigation">
                <ul>
                    {NAV_ITEMS.iter().map(|item| view! { <NavItem item /> }).collect_view()}
                </ul>
            </nav>

            <div class="sidebar-footer">
                <button
                    class="sidebar-toggle-btn"
                    class:collapsed=collapsed
                    aria-label=move || if collapsed() { i18n.t("sidebar.expand") } else { i18n.t("sidebar.collapse") }
                    title=move || if collapsed() { i18n.t("sidebar.expand") } else { String::new() }
                    on:click=move |_| shell.toggle_sidebar()
                >
                    {move || if collapsed() {
                        view! { <Icon name="chevron-right" size=20 /> }.into_any()
                    } else {
                        view! {
                            <Icon name="chevron-left" size=20 />
                            <span class="sidebar-toggle-label">{i18n.t("sidebar.collapseShort")}</span>
                        }.into_any()
                    }}
                </button>
            </div>
        </aside>
    }
}
