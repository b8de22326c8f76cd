use leptos::prelude::*;
use wf_core::help::{search_articles, SearchDropdown, HELP_CATEGORIES, POPULAR_ARTICLES, VIDEOS};

use crate::components::icons::Icon;
use crate::i18n::{tr, use_i18n};

#[component]
pub fn HelpPage() -> impl IntoView {
    let i18n = use_i18n();
    let (query, set_query) = signal(String::new());
    let dropdown = Memo::new(move |_| query.with(|q| search_articles(q)));

    view! {
        <div class="page page-help">
            <section class="help-hero">
                <h1>{tr("helpPage.heading")}</h1>
                <p class="muted">{tr("helpPage.subtitle")}</p>
                <div class="help-search">
                    <div class="search-field large">
                        <Icon name="search" size=16 />
                        <input
                            type="search"
                            placeholder=move || i18n.t("helpPage.searchPlaceholder")
                            aria-label=move || i18n.t("helpPage.searchPlaceholder")
                            prop:value=query
                            on:input=move |ev| set_query.set(event_target_value(&ev))
                        />
                    </div>
                    {move || match dropdown.get() {
                        SearchDropdown::Hidden => ().into_any(),
                        SearchDropdown::NoResults => view! {
                            <div class="search-dropdown card">
                                <p class="muted">{i18n.t("helpPage.noResults")}</p>
                            </div>
                        }
                        .into_any(),
                        SearchDropdown::Results(hits) => view! {
                            <ul class="search-dropdown card" role="listbox">
                                {hits
                                    .into_iter()
                                    .map(|title| view! {
                                        <li role="option" class="search-hit">
                                            <Icon name="file-text" size=16 />
                                            <span>{title}</span>
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        }
                        .into_any(),
                    }}
                </div>
            </section>

            <div class="grid grid-4">
                {HELP_CATEGORIES
                    .iter()
                    .map(|cat| {
                        let count = cat.articles.to_string();
                        view! {
                            <article class="card help-category" id=cat.id>
                                <div class="icon-tile"><Icon name=cat.icon size=20 /></div>
                                <h3>{cat.title}</h3>
                                <p class="muted small">{cat.description}</p>
                                <p class="muted tiny">
                                    <Icon name="file-text" size=14 />
                                    {move || i18n.t_with("helpPage.articleCount", &[("count", &count)])}
                                </p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>

            <section>
                <h2>{tr("helpPage.popularArticles")}</h2>
                <ul class="card link-list">
                    {POPULAR_ARTICLES
                        .iter()
                        .map(|title| view! {
                            <li>
                                <Icon name="file-text" size=16 />
                                <span>{*title}</span>
                                <Icon name="chevron-right" size=16 />
                            </li>
                        })
                        .collect_view()}
                </ul>
            </section>

            <section class="support-panel">
                <div>
                    <h2>{tr("helpPage.needMoreHelp")}</h2>
                    <p>{tr("helpPage.supportHint")}</p>
                </div>
                <div class="toolbar-group">
                    <button class="btn btn-light">
                        <Icon name="message-circle" size=16 />
                        {tr("helpPage.liveChat")}
                    </button>
                    <button class="btn btn-outline-light">
                        <Icon name="mail" size=16 />
                        {tr("helpPage.emailSupport")}
                    </button>
                </div>
            </section>

            <section>
                <h2>{tr("helpPage.videoTutorials")}</h2>
                <div class="grid grid-3">
                    {VIDEOS
                        .iter()
                        .map(|video| view! {
                            <article class="card video-card">
                                <img src=video.thumbnail alt=video.title />
                                <div class="video-body">
                                    <h3>{video.title}</h3>
                                    <p class="muted small">{video.summary}</p>
                                    <button class="btn btn-primary-flat">
                                        <Icon name="play" size=16 />
                                        {tr("helpPage.watchVideo")}
                                    </button>
                                </div>
                            </article>
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
