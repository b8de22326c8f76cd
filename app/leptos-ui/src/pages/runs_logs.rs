use leptos::prelude::*;
use wf_core::runs::{sample_runs, DetailTab, Run, RunStatus, RunTab, SAMPLE_INPUT, SAMPLE_OUTPUT, SAMPLE_STACK_TRACE, TRACE_STEPS};

use crate::components::drawer::Drawer;
use crate::components::icons::Icon;
use crate::components::status_chip::StatusChip;
use crate::components::tabs::TabBar;
use crate::i18n::{tr, use_i18n};

#[component]
pub fn RunsLogsPage() -> impl IntoView {
    let runs = StoredValue::new(sample_runs());
    let tab = RwSignal::new(RunTab::default());
    let selected = RwSignal::new(None::<Run>);

    let visible = move || runs.with_value(|all| tab.with(|t| t.filter(all).into_iter().cloned().collect::<Vec<_>>()));
    let tabs: Vec<_> = RunTab::ALL.iter().map(|t| (*t, t.label_key(), None)).collect();

    view! {
        <div class="page page-runs">
            <div class="page-header">
                <div>
                    <h1>{tr("runsPage.heading")}</h1>
                    <p class="muted">{tr("runsPage.subtitle")}</p>
                </div>
                <div class="toolbar-group">
                    <button class="btn btn-flat">
                        <Icon name="filter" size=16 />
                        {tr("runsPage.filter")}
                    </button>
                    <button class="btn btn-flat">
                        <Icon name="download" size=16 />
                        {tr("runsPage.export")}
                    </button>
                </div>
            </div>

            <section class="card flush">
                <TabBar tabs active=tab aria_label="Run status tabs" />
                <table class="table selectable" aria-label=tr("runsPage.tableLabel")>
                    <thead>
                        <tr>
                            <th>{tr("runsPage.columns.workflow")}</th>
                            <th>{tr("runsPage.columns.status")}</th>
                            <th>{tr("runsPage.columns.startTime")}</th>
                            <th>{tr("runsPage.columns.duration")}</th>
                            <th>{tr("runsPage.columns.tokens")}</th>
                            <th>{tr("runsPage.columns.cost")}</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=visible
                            key=|run| run.id
                            children=move |run| {
                                let row = run.clone();
                                let id = run.id;
                                view! {
                                    <tr
                                        tabindex="0"
                                        class:selected=move || selected.with(|s| s.as_ref().map(|r| r.id) == Some(id))
                                        on:click=move |_| selected.set(Some(row.clone()))
                                    >
                                        <td>{run.workflow}</td>
                                        <td><StatusChip tone=run.status.tone() label_key=run.status.label_key() /></td>
                                        <td>{run.start_label()}</td>
                                        <td>{run.duration_label()}</td>
                                        <td>{run.tokens_label()}</td>
                                        <td>{run.cost_label()}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </section>

            {move || selected.get().map(|run| view! {
                <RunDetails run on_close=Callback::new(move |_| selected.set(None)) />
            })}
        </div>
    }
}

#[component]
fn RunDetails(run: Run, on_close: Callback<()>) -> impl IntoView {
    let i18n = use_i18n();
    let tab = RwSignal::new(DetailTab::Input);
    let tabs: Vec<_> = run
        .detail_tabs()
        .into_iter()
        .map(|t| (t, t.label_key(), (t == DetailTab::Error).then_some("alert-triangle")))
        .collect();
    let failed = run.status == RunStatus::Failed;
    let (status, workflow, id) = (run.status, run.workflow, run.id);
    let (start, duration, cost, tokens) = (run.start_label(), run.duration_label(), run.cost_label(), run.tokens_label());

    let header = move || {
        view! {
            <div class="drawer-title-row">
                <h3>{move || i18n.t("runsPage.details.title")}</h3>
                <StatusChip tone=status.tone() label_key=status.label_key() />
            </div>
            <p class="muted small">{format!("{workflow} • {id}")}</p>
        }
    };
    let footer = move || {
        view! {
            <button class="btn btn-flat" on:click=move |_| on_close.run(())>{tr("common.close")}</button>
            <button class="btn btn-primary">{tr("runsPage.details.rerun")}</button>
        }
    };

    view! {
        <Drawer on_close header=ChildrenFn::to_children(header) footer=ChildrenFn::to_children(footer)>
            <div class="grid grid-3">
                <div class="card stat">
                    <p class="muted small">{tr("runsPage.details.startTime")}</p>
                    <p>{start}</p>
                </div>
                <div class="card stat">
                    <p class="muted small">{tr("runsPage.details.duration")}</p>
                    <p>{duration}</p>
                </div>
                <div class="card stat">
                    <p class="muted small">{tr("runsPage.details.cost")}</p>
                    <p>
                        {cost} " "
                        {move || i18n.t_with("runsPage.details.tokens", &[("count", &tokens)])}
                    </p>
                </div>
            </div>

            <TabBar tabs active=tab aria_label="Run details tabs" />
            <div class="tab-panel">
                {move || match tab.get() {
                    DetailTab::Input => view! { <pre class="code">{SAMPLE_INPUT}</pre> }.into_any(),
                    DetailTab::Output => view! { <pre class="code">{SAMPLE_OUTPUT}</pre> }.into_any(),
                    DetailTab::Trace => view! {
                        <ol class="trace">
                            {TRACE_STEPS
                                .iter()
                                .map(|step| view! {
                                    <li>
                                        <span class="trace-dot"><Icon name="check" size=16 /></span>
                                        <div>
                                            <p class="trace-name">{step.name}</p>
                                            <p class="muted small">{format!("{:.2}s", step.seconds)}</p>
                                        </div>
                                    </li>
                                })
                                .collect_view()}
                        </ol>
                    }
                    .into_any(),
                    DetailTab::Error if failed => view! {
                        <div class="error-panel">
                            <p class="error-title">{tr("runsPage.details.rateLimitTitle")}</p>
                            <p class="small">{tr("runsPage.details.rateLimitBody")}</p>
                        </div>
                        <pre class="code">{SAMPLE_STACK_TRACE}</pre>
                    }
                    .into_any(),
                    DetailTab::Error => ().into_any(),
                }}
            </div>
        </Drawer>
    }
}
