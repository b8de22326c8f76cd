use leptos::prelude::*;
use leptos_router::hooks::use_location;
use wf_core::routes::HOME_PATH;

use crate::components::icons::Icon;
use crate::i18n::{tr, use_i18n};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let i18n = use_i18n();
    let pathname = use_location().pathname;

    view! {
        <div class="page page-not-found">
            <div class="card empty-state">
                <div class="icon-tile large"><Icon name="alert-circle" size=32 /></div>
                <h1>{tr("notFound.heading")}</h1>
                <p class="muted">
                    {move || pathname.with(|p| i18n.t_with("notFound.body", &[("path", p)]))}
                </p>
                <a class="btn btn-primary" href=HOME_PATH>
                    <Icon name="arrow-left" size=16 />
                    {tr("notFound.backHome")}
                </a>
            </div>
        </div>
    }
}
