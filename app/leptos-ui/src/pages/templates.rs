use leptos::prelude::*;
use wf_core::catalog::{is_installed, templates, Template, TemplateQuery, ALL_TEMPLATE_CATEGORIES_KEY, TEMPLATE_CATEGORY_CHIPS};
use wf_core::format::thousands;

use crate::components::icons::Icon;
use crate::components::modal::Modal;
use crate::components::status_chip::StatusChip;
use crate::i18n::{tr, use_i18n};

#[component]
pub fn TemplatesPage() -> impl IntoView {
    let i18n = use_i18n();
    let query = RwSignal::new(TemplateQuery::default());
    let installing = RwSignal::new(None::<&'static Template>);

    // Re-runs on query or locale change since the search matches translated text.
    let visible = move || query.with(|q| q.apply(templates(), |key| i18n.t(key)));

    view! {
        <div class="page page-templates">
            <section class="hero">
                <h1>{tr("templatesPage.title")}</h1>
                <p>{tr("templatesPage.subtitle")}</p>
                <div class="hero-actions">
                    <button class="btn btn-light">
                        <Icon name="search" size=16 />
                        {tr("templatesPage.browseTemplates")}
                    </button>
                    <button class="btn btn-outline-light">
                        <Icon name="upload" size=16 />
                        {tr("templatesPage.submitYourTemplate")}
                    </button>
                </div>
            </section>

            <div class="filters spread">
                <div class="search-field">
                    <Icon name="search" size=16 />
                    <input
                        type="search"
                        placeholder=move || i18n.t("templatesPage.searchPlaceholder")
                        aria-label=move || i18n.t("templatesPage.searchPlaceholder")
                        prop:value=move || query.with(|q| q.search.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            query.update(|q| q.search = value);
                        }
                    />
                </div>
                <div class="chip-row">
                    {TEMPLATE_CATEGORY_CHIPS
                        .iter()
                        .map(|cat| {
                            let cat = *cat;
                            let key = cat.map(|c| c.label_key()).unwrap_or(ALL_TEMPLATE_CATEGORIES_KEY);
                            let active = move || query.with(|q| q.category == cat);
                            view! {
                                <button
                                    class="chip chip-toggle"
                                    class:chip-primary=active
                                    aria-pressed=move || active().to_string()
                                    on:click=move |_| query.update(|q| q.category = cat)
                                >
                                    {move || i18n.t(key)}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            {move || {
                let items = visible();
                if items.is_empty() {
                    return view! { <p class="empty">{i18n.t("templatesPage.noResults")}</p> }.into_any();
                }
                view! {
                    <div class="grid grid-3">
                        {items
                            .into_iter()
                            .map(|tpl| view! {
                                <TemplateCard template=tpl on_use=Callback::new(move |_| installing.set(Some(tpl))) />
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}

            {move || installing.get().map(|tpl| view! {
                <InstallModal template=tpl on_close=Callback::new(move |_| installing.set(None)) />
            })}
        </div>
    }
}

#[component]
fn TemplateCard(template: &'static Template, on_use: Callback<()>) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <article class="card template-card">
            <img class="template-image" src=template.image alt=move || i18n.t(template.name_key) />
            <div class="template-body">
                <div class="template-title-row">
                    <h3>{move || i18n.t(template.name_key)}</h3>
                    <StatusChip tone=template.difficulty.tone() label_key=template.difficulty.label_key() />
                </div>
                <p class="muted small">{move || i18n.t(template.description_key)}</p>
                <div class="template-stats">
                    <span class="rating">
                        <Icon name="star" size=16 />
                        {format!("{:.1}", template.rating)}
                    </span>
                    <span>
                        <Icon name="download" size=16 />
                        {thousands(template.downloads as u64)}
                    </span>
                </div>
            </div>
            <button class="btn btn-primary full" on:click=move |_| on_use.run(())>
                {tr("templatesPage.useTemplate")}
            </button>
        </article>
    }
}

/// Required connectors of a template, marking which are installed.
#[component]
fn InstallModal(template: &'static Template, on_close: Callback<()>) -> impl IntoView {
    let i18n = use_i18n();
    let footer = move || {
        view! {
            <button class="btn btn-flat" on:click=move |_| on_close.run(())>{tr("common.cancel")}</button>
            <button class="btn btn-primary" on:click=move |_| on_close.run(())>
                {tr("templatesPage.installAndCustomize")}
            </button>
        }
    };

    view! {
        <Modal title=Signal::derive(move || i18n.t("templatesPage.installTemplate")) on_close footer=ChildrenFn::to_children(footer)>
            <h3>{move || i18n.t(template.name_key)}</h3>
            <p class="muted">{move || i18n.t(template.description_key)}</p>
            <h4>{tr("templatesPage.requiredConnectors")}</h4>
            <div class="chip-row">
                {template
                    .required_connectors
                    .iter()
                    .map(|name| {
                        let installed = is_installed(name);
                        view! {
                            <span class="chip" class:chip-success=installed>
                                {installed.then(|| view! { <Icon name="check" size=14 /> })}
                                {*name}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            {template.needs_install().then(|| view! {
                <p class="warning small">
                    <Icon name="alert-triangle" size=14 />
                    {tr("templatesPage.connectorsNotInstalled")}
                </p>
            })}
        </Modal>
    }
}
