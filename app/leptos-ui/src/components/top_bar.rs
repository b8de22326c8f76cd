use leptos::prelude::*;
use leptos_router::hooks::use_location;
use wf_core::i18n::Locale;
use wf_core::routes::{title_key, Page};

use crate::components::icons::Icon;
use crate::i18n::use_i18n;
use crate::state::use_shell;

const USER_EMAIL: &str = "alex@company.com";

/// Header above the page content: sidebar toggle, brand, page title,
/// language switch, notifications and the user menu.
#[component]
pub fn TopBar() -> impl IntoView {
    let i18n = use_i18n();
    let shell = use_shell();
    let pathname = use_location().pathname;
    let title = move || pathname.with(|p| i18n.t(title_key(p)));

    let on_language = move |ev: leptos::ev::Event| {
        let tag = event_target_value(&ev);
        match tag.parse::<Locale>() {
            Ok(locale) => i18n.switch_to(locale),
            Err(e) => leptos::logging::warn!("{e}"),
        }
    };

    view! {
        <header class="topbar">
            <div class="topbar-start">
                <button
                    class="icon-btn"
                    aria-label=move || i18n.t("topBar.toggleSidebar")
                    on:click=move |_| shell.toggle_sidebar()
                >
                    <Icon name="menu" size=20 />
                </button>
                <span class="topbar-brand">{move || i18n.t("app.name")}</span>
            </div>

            <h1 class="topbar-title">{title}</h1>

            <div class="topbar-end">
                <label class="sr-only" for="language-select">{move || i18n.t("topBar.language")}</label>
                <select
                    id="language-select"
                    class="language-select"
                    on:change=on_language
                    prop:value=move || i18n.requested().code()
                >
                    {i18n
                        .supported()
                        .into_iter()
                        .map(|l| view! { <option value=l.code()>{l.label()}</option> })
                        .collect_view()}
                </select>
                <button class="icon-btn" aria-label=move || i18n.t("topBar.notifications")>
                    <Icon name="bell" size=20 />
                </button>
                <UserMenu />
            </div>
        </header>
    }
}

#[component]
fn UserMenu() -> impl IntoView {
    let i18n = use_i18n();
    let (open, set_open) = signal(false);
    let close = move |_: leptos::ev::MouseEvent| set_open.set(false);

    view! {
        <div class="user-menu">
            <button
                class="avatar"
                aria-haspopup="menu"
                aria-expanded=move || open.get().to_string()
                aria-label=move || i18n.t("userMenu.label")
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                "A"
            </button>
            <Show when=move || open.get()>
                <div class="dropdown-backdrop" on:click=close></div>
                <ul class="dropdown-menu" role="menu">
                    <li class="dropdown-profile" role="presentation">
                        <p class="font-semibold">{move || i18n.t("userMenu.signedInAs")}</p>
                        <p class="font-semibold">{USER_EMAIL}</p>
                    </li>
                    <li role="none">
                        <a role="menuitem" href=Page::Settings.path() on:click=close>
                            <Icon name="settings" size=16 />
                            {move || i18n.t("userMenu.mySettings")}
                        </a>
                    </li>
                    <li role="none">
                        <a role="menuitem" href=Page::Settings.path() on:click=close>
                            <Icon name="users" size=16 />
                            {move || i18n.t("userMenu.team")}
                        </a>
                    </li>
                    <li role="none">
                        <a role="menuitem" href=Page::CostAnalytics.path() on:click=close>
                            <Icon name="bar-chart-2" size=16 />
                            {move || i18n.t("userMenu.analytics")}
                        </a>
                    </li>
                    <li role="none">
                        <a role="menuitem" href=Page::Help.path() on:click=close>
                            <Icon name="help-circle" size=16 />
                            {move || i18n.t("userMenu.helpFeedback")}
                        </a>
                    </li>
                    <li role="none">
                        <button role="menuitem" class="danger" on:click=close>
                            <Icon name="log-out" size=16 />
                            {move || i18n.t("userMenu.logout")}
                        </button>
                    </li>
                </ul>
            </Show>
        </div>
    }
}
