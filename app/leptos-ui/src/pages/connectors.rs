use leptos::prelude::*;
use wf_core::catalog::{connectors, Connector, ConnectorCategory, ConnectorQuery, ConnectorSort, CONNECTOR_TAGS};
use wf_core::tone::ChipTone;

use crate::components::icons::Icon;
use crate::components::status_chip::PlainChip;
use crate::i18n::{tr, use_i18n};

const ALL: &str = "all";

#[component]
pub fn ConnectorsPage() -> impl IntoView {
    let i18n = use_i18n();
    let query = RwSignal::new(ConnectorQuery::default());
    let visible = move || query.with(|q| q.apply(connectors()).into_iter().cloned().collect::<Vec<_>>());

    let on_category = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        query.update(|q| q.category = ConnectorCategory::from_label(&value));
    };
    let on_sort = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        query.update(|q| q.sort = ConnectorSort::from_key(&value).unwrap_or_default());
    };

    view! {
        <div class="page page-connectors">
            <div class="page-header">
                <div>
                    <h1>{tr("connectorsPage.heading")}</h1>
                    <p class="muted">{tr("connectorsPage.subtitle")}</p>
                </div>
                <button class="btn btn-primary">
                    <Icon name="plus" size=16 />
                    {tr("connectorsPage.createCustom")}
                </button>
            </div>

            <div class="filters">
                <div class="search-field">
                    <Icon name="search" size=16 />
                    <input
                        type="search"
                        placeholder=move || i18n.t("connectorsPage.searchPlaceholder")
                        prop:value=move || query.with(|q| q.search.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            query.update(|q| q.search = value);
                        }
                    />
                </div>
                <select aria-label=tr("connectorsPage.category") on:change=on_category>
                    <option value=ALL selected>{tr("connectorsPage.allCategories")}</option>
                    {ConnectorCategory::ALL
                        .iter()
                        .map(|c| view! { <option value=c.label()>{c.label()}</option> })
                        .collect_view()}
                </select>
                <select aria-label=tr("connectorsPage.sortBy") on:change=on_sort>
                    <option value=ConnectorSort::Name.key() selected>{tr("connectorsPage.sortName")}</option>
                    <option value=ConnectorSort::Category.key()>{tr("connectorsPage.sortCategory")}</option>
                </select>
            </div>

            <div class="tag-row">
                {CONNECTOR_TAGS
                    .iter()
                    .map(|tag| {
                        let on = move || query.with(|q| q.has_tag(tag));
                        view! {
                            <button
                                class="chip chip-toggle"
                                class:chip-primary=on
                                aria-pressed=move || on().to_string()
                                on:click=move |_| query.update(|q| q.toggle_tag(tag))
                            >
                                {*tag}
                                {move || on().then(|| view! { <Icon name="x" size=12 /> })}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || {
                let items = visible();
                if items.is_empty() {
                    return view! { <p class="empty">{i18n.t("connectorsPage.noResults")}</p> }.into_any();
                }
                view! {
                    <div class="grid grid-4">
                        {items.into_iter().map(|c| view! { <ConnectorCard connector=c /> }).collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
fn ConnectorCard(connector: Connector) -> impl IntoView {
    view! {
        <article class="card connector-card">
            <div class="connector-card-head">
                <div class="logo-tile">
                    <img src=connector.logo_url() alt=connector.name width="32" height="32" />
                </div>
                <PlainChip tone=ChipTone::Default text=connector.category.label() />
            </div>
            <div>
                <h3>{connector.name}</h3>
                <p class="muted small">{connector.description}</p>
            </div>
            <div class="chip-row">
                {connector
                    .tags
                    .iter()
                    .map(|t| view! { <PlainChip tone=ChipTone::Default text=*t /> })
                    .collect_view()}
            </div>
            {if connector.installed {
                view! {
                    <button class="btn btn-success-flat full">
                        <Icon name="check" size=16 />
                        {tr("connectorsPage.installed")}
                    </button>
                }
                .into_any()
            } else {
                view! {
                    <button class="btn btn-primary-flat full">
                        <Icon name="plus" size=16 />
                        {tr("connectorsPage.addConnector")}
                    </button>
                }
                .into_any()
            }}
        </article>
    }
}
