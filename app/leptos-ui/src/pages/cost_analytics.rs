use leptos::prelude::*;
use wf_core::costs::{
    summary, AlertDraft, AlertKind, DateRange, NotifyVia, DAILY_TOKENS, MODEL_COSTS, WORKFLOW_COSTS,
};
use wf_core::tone::ChipTone;

use crate::components::charts::{BarChart, DonutChart};
use crate::components::icons::Icon;
use crate::components::kpi_card::KpiCard;
use crate::components::modal::Modal;
use crate::i18n::{tr, use_i18n};

const DEFAULT_THRESHOLD: &str = "50";
const DEFAULT_ALERT_EMAIL: &str = "admin@company.com";

#[component]
pub fn CostAnalyticsPage() -> impl IntoView {
    let i18n = use_i18n();
    // The range only changes the select; the sample series stays the same.
    let range = RwSignal::new(DateRange::default());
    let alert_open = RwSignal::new(false);
    let totals = summary();

    let dates: Signal<Vec<String>> = Signal::derive(|| DAILY_TOKENS.iter().map(|d| d.date.to_string()).collect());
    let tokens: Vec<f64> = DAILY_TOKENS.iter().map(|d| d.tokens as f64).collect();

    view! {
        <div class="page page-costs">
            <div class="page-header">
                <div>
                    <h1>{tr("costAnalyticsPage.heading")}</h1>
                    <p class="muted">{tr("costAnalyticsPage.subtitle")}</p>
                </div>
                <div class="toolbar-group">
                    <select
                        aria-label=tr("costAnalyticsPage.dateRangeLabel")
                        on:change=move |ev| {
                            if let Some(r) = DateRange::from_key(&event_target_value(&ev)) {
                                range.set(r);
                            }
                        }
                    >
                        {DateRange::ALL
                            .iter()
                            .map(|r| {
                                let r = *r;
                                view! {
                                    <option value=r.key() selected=move || range.get() == r>
                                        {move || i18n.t(r.label_key())}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <button class="btn btn-primary-flat" on:click=move |_| alert_open.set(true)>
                        <Icon name="bell" size=16 />
                        {tr("costAnalyticsPage.setAlert")}
                    </button>
                </div>
            </div>

            <div class="grid grid-3">
                <KpiCard label_key="costAnalyticsPage.totalCost" value=totals.total_cost icon="dollar-sign" tone=ChipTone::Primary />
                <KpiCard label_key="costAnalyticsPage.totalTokens" value=totals.total_tokens icon="message-square" tone=ChipTone::Success />
                <KpiCard label_key="costAnalyticsPage.dailyAverage" value=totals.daily_average icon="trending-up" tone=ChipTone::Warning />
            </div>

            <section class="card">
                <h4 class="card-title">{tr("costAnalyticsPage.dailyTokenUsage")}</h4>
                <BarChart labels=dates values=tokens aria_label=Signal::derive(tr("costAnalyticsPage.dailyTokenUsage")) />
            </section>

            <div class="grid grid-2">
                <section class="card">
                    <h4 class="card-title">{tr("costAnalyticsPage.costByModel")}</h4>
                    <DonutChart slices=&MODEL_COSTS aria_label=Signal::derive(tr("costAnalyticsPage.costByModel")) />
                </section>
                <section class="card">
                    <h4 class="card-title">{tr("costAnalyticsPage.costByWorkflow")}</h4>
                    <table class="table" aria-label=tr("costAnalyticsPage.costByWorkflow")>
                        <thead>
                            <tr>
                                <th>{tr("costAnalyticsPage.columns.workflow")}</th>
                                <th>{tr("costAnalyticsPage.columns.runs")}</th>
                                <th>{tr("costAnalyticsPage.columns.tokens")}</th>
                                <th>{tr("costAnalyticsPage.columns.cost")}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {WORKFLOW_COSTS
                                .iter()
                                .map(|row| view! {
                                    <tr>
                                        <td>{row.workflow}</td>
                                        <td>{row.runs}</td>
                                        <td>{row.tokens_label()}</td>
                                        <td>{row.cost_label()}</td>
                                    </tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </section>
            </div>

            <Show when=move || alert_open.get()>
                <AlertModal on_close=Callback::new(move |_| alert_open.set(false)) />
            </Show>
        </div>
    }
}

/// "Set Cost Alert" form. Saving validates the threshold and closes.
#[component]
fn AlertModal(on_close: Callback<()>) -> impl IntoView {
    let i18n = use_i18n();
    let draft = RwSignal::new(AlertDraft {
        threshold: DEFAULT_THRESHOLD.to_string(),
        email: DEFAULT_ALERT_EMAIL.to_string(),
        ..Default::default()
    });
    let valid = move || draft.with(|d| d.threshold_usd().is_some());

    let footer = move || {
        view! {
            <button class="btn btn-flat" on:click=move |_| on_close.run(())>{tr("common.cancel")}</button>
            <button class="btn btn-primary" disabled=move || !valid() on:click=move |_| on_close.run(())>
                {tr("costAnalyticsPage.saveAlert")}
            </button>
        }
    };

    view! {
        <Modal title=Signal::derive(tr("costAnalyticsPage.setCostAlert")) on_close footer=ChildrenFn::to_children(footer)>
            <label class="field">
                <span>{tr("costAnalyticsPage.alertType")}</span>
                <select on:change=move |ev| {
                    if let Some(kind) = AlertKind::from_key(&event_target_value(&ev)) {
                        draft.update(|d| d.kind = kind);
                    }
                }>
                    {AlertKind::ALL
                        .iter()
                        .map(|k| {
                            let k = *k;
                            view! {
                                <option value=k.key() selected=move || draft.with(|d| d.kind == k)>
                                    {move || i18n.t(k.label_key())}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <label class="field">
                <span>{tr("costAnalyticsPage.costThreshold")}</span>
                <div class="input-prefix">
                    <span>"$"</span>
                    <input
                        type="number"
                        min="0"
                        placeholder=move || i18n.t("costAnalyticsPage.enterAmount")
                        prop:value=move || draft.with(|d| d.threshold.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.threshold = value);
                        }
                    />
                </div>
            </label>
            <label class="field">
                <span>{tr("costAnalyticsPage.notificationMethod")}</span>
                <select on:change=move |ev| {
                    if let Some(via) = NotifyVia::from_key(&event_target_value(&ev)) {
                        draft.update(|d| d.via = via);
                    }
                }>
                    {NotifyVia::ALL
                        .iter()
                        .map(|n| {
                            let n = *n;
                            view! {
                                <option value=n.key() selected=move || draft.with(|d| d.via == n)>
                                    {move || i18n.t(n.label_key())}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <label class="field">
                <span>{tr("costAnalyticsPage.emailAddress")}</span>
                <input
                    type="email"
                    placeholder=move || i18n.t("costAnalyticsPage.enterEmail")
                    prop:value=move || draft.with(|d| d.email.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.email = value);
                    }
                />
            </label>
        </Modal>
    }
}
