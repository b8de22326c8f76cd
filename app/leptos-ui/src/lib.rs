use leptos::prelude::*;
use leptos_router::components::{Redirect, Router};
use leptos_router::hooks::use_location;
use wf_core::routes::{resolve, Page, Resolution};

pub mod components;
pub mod i18n;
pub mod locale_loader;
pub mod pages;
pub mod state;

use wasm_bindgen::prelude::*;

use components::nav_bar::NavBar;
use components::spinner::Spinner;
use components::top_bar::TopBar;

#[component]
pub fn App() -> impl IntoView {
    let config = state::load_config();
    let i18n = i18n::provide_i18n(config.i18n.clone());
    state::provide_shell_state(config);
    locale_loader::start(i18n);

    view! {
        <Router>
            <Show
                when=move || !i18n.is_loading()
                fallback=move || view! {
                    <div class="app-loading">
                        <Spinner size="lg" label=Signal::derive(move || i18n.t("app.name")) />
                    </div>
                }
            >
                <AppRoutes />
            </Show>
        </Router>
    }
}

/// Picks what to render for the current location. Every path resolves to
/// exactly one of: a redirect, a page inside the shell, the onboarding
/// wizard, or the not-found view.
#[component]
fn AppRoutes() -> impl IntoView {
    let pathname = use_location().pathname;
    let resolution = Memo::new(move |_| pathname.with(|p| resolve(p)));

    move || match resolution.get() {
        Resolution::Redirect(to) => view! { <Redirect path=to /> }.into_any(),
        Resolution::Onboarding => view! { <pages::onboarding::OnboardingPage /> }.into_any(),
        Resolution::Shell(page) => view! { <Shell>{page_view(page)}</Shell> }.into_any(),
        Resolution::NotFound => view! { <Shell><pages::not_found::NotFoundPage /></Shell> }.into_any(),
    }
}

fn page_view(page: Page) -> AnyView {
    match page {
        Page::Dashboard => view! { <pages::dashboard::DashboardPage /> }.into_any(),
        Page::Builder => view! { <pages::builder::BuilderPage /> }.into_any(),
        Page::Connectors => view! { <pages::connectors::ConnectorsPage /> }.into_any(),
        Page::Templates => view! { <pages::templates::TemplatesPage /> }.into_any(),
        Page::Agents => view! { <pages::agents::AgentsPage /> }.into_any(),
        Page::RunsLogs => view! { <pages::runs_logs::RunsLogsPage /> }.into_any(),
        Page::CostAnalytics => view! { <pages::cost_analytics::CostAnalyticsPage /> }.into_any(),
        Page::Settings => view! { <pages::settings::SettingsPage /> }.into_any(),
        Page::Help => view! { <pages::help::HelpPage /> }.into_any(),
    }
}

/// Sidebar and top bar around the routed content.
#[component]
fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <NavBar />
            <div class="app-main">
                <TopBar />
                <main class="content">{children()}</main>
            </div>
        </div>
    }
}

#[wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
