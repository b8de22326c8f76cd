use leptos::ev::DragEvent;
use leptos::prelude::*;
use wf_core::canvas::{
    filter_palette, FlowGraph, NodeSettingsTab, PaletteItem, Position, DEFAULT_MAX_TOKENS,
    DEFAULT_TEMPERATURE, IO_FORMATS,
};
use wf_core::chat::BASE_MODELS;

use crate::components::flow_canvas::{FlowCanvas, PALETTE_MIME};
use crate::components::icons::Icon;
use crate::components::tabs::{options, TabBar};
use crate::i18n::{tr, use_i18n};

const VERSION_TAG: &str = "v1.2.0";

#[component]
pub fn BuilderPage() -> impl IntoView {
    let graph = RwSignal::new(FlowGraph::sample());
    let palette_open = RwSignal::new(true);
    let settings_open = RwSignal::new(true);

    view! {
        <div class="page page-builder">
            <Toolbar />
            <div class="builder-body">
                <aside class="builder-panel left" class:collapsed=move || !palette_open.get()>
                    <Show
                        when=move || palette_open.get()
                        fallback=move || view! {
                            <button class="icon-btn panel-reopen" aria-label=tr("builder.palette.expand") on:click=move |_| palette_open.set(true)>
                                <Icon name="chevron-right" size=16 />
                            </button>
                        }
                    >
                        <div class="panel-header">
                            <h3>{tr("builder.palette.title")}</h3>
                            <button class="icon-btn" aria-label=tr("builder.palette.collapse") on:click=move |_| palette_open.set(false)>
                                <Icon name="chevron-left" size=16 />
                            </button>
                        </div>
                        <NodePalette graph />
                    </Show>
                </aside>

                <div class="builder-canvas">
                    <FlowCanvas graph on_node_click=Callback::new(move |_: String| settings_open.set(true)) />
                </div>

                <aside class="builder-panel right" class:collapsed=move || !settings_open.get()>
                    <Show
                        when=move || settings_open.get()
                        fallback=move || view! {
                            <button class="icon-btn panel-reopen" aria-label=tr("builder.settings.expand") on:click=move |_| settings_open.set(true)>
                                <Icon name="chevron-left" size=16 />
                            </button>
                        }
                    >
                        <div class="panel-header">
                            <h3>{tr("builder.settings.title")}</h3>
                            <button class="icon-btn" aria-label=tr("builder.settings.collapse") on:click=move |_| settings_open.set(false)>
                                <Icon name="chevron-right" size=16 />
                            </button>
                        </div>
                        <NodeSettings graph />
                    </Show>
                </aside>
            </div>
        </div>
    }
}

/// Run / save / history controls. Nothing here executes a workflow.
#[component]
fn Toolbar() -> impl IntoView {
    let save_open = RwSignal::new(false);
    let close = move |_: leptos::ev::MouseEvent| save_open.set(false);

    view! {
        <div class="builder-toolbar">
            <div class="toolbar-group">
                <button class="btn btn-primary">
                    <Icon name="play" size=18 />
                    {tr("builder.runWorkflow")}
                </button>
                <div class="dropdown">
                    <button class="btn btn-flat" aria-haspopup="menu" on:click=move |_| save_open.update(|o| *o = !*o)>
                        <Icon name="save" size=18 />
                        {tr("builder.save")}
                    </button>
                    <Show when=move || save_open.get()>
                        <ul class="dropdown-menu" role="menu" aria-label=tr("builder.saveOptions")>
                            <li role="menuitem" on:click=close>{tr("builder.save")}</li>
                            <li role="menuitem" on:click=close>{tr("builder.saveAs")}</li>
                            <li role="menuitem" on:click=close>{tr("builder.saveVersion")}</li>
                        </ul>
                    </Show>
                </div>
                <button class="icon-btn" aria-label=tr("builder.undo")><Icon name="undo" size=18 /></button>
                <button class="icon-btn" aria-label=tr("builder.redo")><Icon name="redo" size=18 /></button>
            </div>
            <div class="toolbar-group">
                <span class="version-badge">
                    <Icon name="git-branch" size=16 />
                    {VERSION_TAG}
                </span>
                <button class="icon-btn" aria-label=tr("builder.workflowSettings")><Icon name="settings" size=18 /></button>
                <button class="icon-btn" aria-label=tr("builder.help")><Icon name="help-circle" size=18 /></button>
            </div>
        </div>
    }
}

#[component]
fn NodePalette(graph: RwSignal<FlowGraph>) -> impl IntoView {
    let i18n = use_i18n();
    let (query, set_query) = signal(String::new());
    let groups = move || query.with(|q| filter_palette(q));

    // Clicking an entry appends it below the current graph.
    let add = move |item: &'static PaletteItem| {
        graph.update(|g| {
            let at = g
                .bounds()
                .map(|b| Position::new(b.x, b.y + b.height + 40.0))
                .unwrap_or_default();
            let id = g.add_palette_node(item, at);
            let _ = g.select(&id);
        });
    };

    view! {
        <div class="palette">
            <div class="search-field">
                <Icon name="search" size=16 />
                <input
                    type="search"
                    placeholder=move || i18n.t("builder.palette.search")
                    prop:value=query
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
            </div>
            {move || {
                let groups = groups();
                if groups.is_empty() {
                    return view! { <p class="empty">{i18n.t("builder.palette.empty")}</p> }.into_any();
                }
                groups
                    .into_iter()
                    .map(|(cat, items)| view! {
                        <details class="palette-category" open>
                            <summary>
                                <Icon name=cat.icon size=16 />
                                <span>{cat.title}</span>
                            </summary>
                            <div class="palette-items">
                                {items
                                    .into_iter()
                                    .map(|item| view! {
                                        <div
                                            class="card palette-item"
                                            draggable="true"
                                            on:dragstart=move |ev: DragEvent| {
                                                if let Some(dt) = ev.data_transfer() {
                                                    let _ = dt.set_data(PALETTE_MIME, item.id);
                                                    dt.set_effect_allowed("move");
                                                }
                                            }
                                            on:click=move |_| add(item)
                                        >
                                            <Icon name=item.icon size=16 />
                                            <span>{item.name}</span>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                        </details>
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}

/// Settings for the selected node, or a hint when nothing is selected.
#[component]
fn NodeSettings(graph: RwSignal<FlowGraph>) -> impl IntoView {
    let selected = Memo::new(move |_| {
        graph.with(|g| g.selected().map(|n| (n.id.clone(), n.label.clone(), n.description.clone())))
    });

    move || match selected.get() {
        None => view! {
            <div class="node-settings-empty">
                <Icon name="settings" size=32 />
                <p>{tr("builder.settings.empty")}</p>
            </div>
        }
        .into_any(),
        Some((id, label, description)) => {
            view! { <NodeSettingsForm graph id label description /> }.into_any()
        }
    }
}

#[component]
fn NodeSettingsForm(graph: RwSignal<FlowGraph>, id: String, label: String, description: String) -> impl IntoView {
    let i18n = use_i18n();
    let id = StoredValue::new(id);
    let name = RwSignal::new(label);
    let description = RwSignal::new(description);
    let tab = RwSignal::new(NodeSettingsTab::default());
    let temperature = RwSignal::new(DEFAULT_TEMPERATURE);
    let max_tokens = RwSignal::new(DEFAULT_MAX_TOKENS);

    let apply = move |_| {
        let (label, desc) = (name.get_untracked(), description.get_untracked());
        graph.update(|g| {
            if let Err(e) = id.with_value(|id| g.update_node(id, &label, &desc)) {
                leptos::logging::warn!("apply failed: {e}");
            }
        });
    };
    let delete = move |_| {
        graph.update(|g| {
            let _ = id.with_value(|id| g.remove_node(id));
        });
    };

    let tabs: Vec<_> = NodeSettingsTab::ALL
        .iter()
        .map(|t| {
            let icon = match t {
                NodeSettingsTab::Input => "arrow-down",
                NodeSettingsTab::Output => "arrow-up",
                NodeSettingsTab::LlmParams => "settings",
            };
            (*t, t.label_key(), Some(icon))
        })
        .collect();

    view! {
        <div class="node-settings">
            <label class="field">
                <span>{tr("builder.settings.nodeName")}</span>
                <input
                    type="text"
                    placeholder=move || i18n.t("builder.settings.nodeNamePlaceholder")
                    prop:value=name
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span>{tr("builder.settings.description")}</span>
                <textarea
                    placeholder=move || i18n.t("builder.settings.descriptionPlaceholder")
                    prop:value=description
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>

            <TabBar tabs active=tab aria_label="Node settings tabs" />

            <div class="tab-panel">
                {move || match tab.get() {
                    NodeSettingsTab::Input => view! {
                        <label class="field">
                            <span>{tr("builder.settings.inputType")}</span>
                            <select>{options(&IO_FORMATS, "text")}</select>
                        </label>
                        <label class="checkbox">
                            <input type="checkbox" checked />
                            {tr("builder.settings.required")}
                        </label>
                        <label class="field">
                            <span>{tr("builder.settings.defaultValue")}</span>
                            <input type="text" placeholder=move || i18n.t("builder.settings.defaultValuePlaceholder") />
                        </label>
                    }
                    .into_any(),
                    NodeSettingsTab::Output => view! {
                        <label class="field">
                            <span>{tr("builder.settings.outputFormat")}</span>
                            <select>{options(&IO_FORMATS, "json")}</select>
                        </label>
                        <label class="field">
                            <span>{tr("builder.settings.schema")}</span>
                            <textarea rows="4" placeholder=move || i18n.t("builder.settings.schemaPlaceholder")></textarea>
                        </label>
                    }
                    .into_any(),
                    NodeSettingsTab::LlmParams => view! {
                        <label class="field">
                            <span>{tr("builder.settings.model")}</span>
                            <select>{options(BASE_MODELS, "gpt4")}</select>
                        </label>
                        <label class="field">
                            <span>{tr("builder.settings.temperature")} ": " {move || format!("{:.1}", temperature.get())}</span>
                            <input
                                type="range"
                                min="0"
                                max="1"
                                step="0.1"
                                prop:value=move || temperature.get().to_string()
                                on:input=move |ev| {
                                    if let Ok(v) = event_target_value(&ev).parse() {
                                        temperature.set(v);
                                    }
                                }
                            />
                        </label>
                        <label class="field">
                            <span>{tr("builder.settings.maxTokens")} ": " {move || max_tokens.get()}</span>
                            <input
                                type="range"
                                min="100"
                                max="4000"
                                step="100"
                                prop:value=move || max_tokens.get().to_string()
                                on:input=move |ev| {
                                    if let Ok(v) = event_target_value(&ev).parse() {
                                        max_tokens.set(v);
                                    }
                                }
                            />
                        </label>
                        <label class="field">
                            <span>{tr("builder.settings.systemPrompt")}</span>
                            <textarea rows="4" placeholder=move || i18n.t("builder.settings.systemPromptPlaceholder")></textarea>
                        </label>
                    }
                    .into_any(),
                }}
            </div>

            <div class="form-actions">
                <button class="btn btn-danger-flat" on:click=delete>{tr("builder.settings.deleteNode")}</button>
                <button class="btn btn-primary" on:click=apply>{tr("builder.settings.applyChanges")}</button>
            </div>
        </div>
    }
}
