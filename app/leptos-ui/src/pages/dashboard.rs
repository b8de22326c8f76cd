use leptos::prelude::*;
use wf_core::dashboard::{COST_BY_MODEL, RECENT_ACTIVITY, SUMMARY_CARDS, WEEKLY_RUNS};

use crate::components::charts::{DonutChart, LineChart};
use crate::components::kpi_card::KpiCard;
use crate::components::status_chip::StatusChip;
use crate::i18n::{tr, use_i18n};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let i18n = use_i18n();
    let day_labels: Signal<Vec<String>> = Signal::derive(move || WEEKLY_RUNS.iter().map(|(key, _)| i18n.t(key)).collect());
    let runs: Vec<f64> = WEEKLY_RUNS.iter().map(|(_, v)| *v).collect();

    view! {
        <div class="page page-dashboard">
            <div class="grid grid-4">
                {SUMMARY_CARDS
                    .iter()
                    .map(|c| view! { <KpiCard label_key=c.label_key value=c.value icon=c.icon tone=c.tone /> })
                    .collect_view()}
            </div>

            <div class="grid grid-2">
                <section class="card">
                    <h4 class="card-title">{tr("dashboard.weeklyRuns")}</h4>
                    <LineChart labels=day_labels values=runs aria_label=Signal::derive(tr("dashboard.weeklyRuns")) />
                </section>
                <section class="card">
                    <h4 class="card-title">{tr("dashboard.costByModel")}</h4>
                    <DonutChart slices=&COST_BY_MODEL aria_label=Signal::derive(tr("dashboard.costByModel")) />
                </section>
            </div>

            <section class="card">
                <h4 class="card-title">{tr("dashboard.recentActivity")}</h4>
                <table class="table" aria-label=tr("dashboard.recentActivity")>
                    <thead>
                        <tr>
                            <th>{tr("dashboard.table.workflow")}</th>
                            <th>{tr("dashboard.table.status")}</th>
                            <th>{tr("dashboard.table.duration")}</th>
                            <th>{tr("dashboard.table.cost")}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {RECENT_ACTIVITY
                            .iter()
                            .map(|row| view! {
                                <tr>
                                    <td>{row.workflow}</td>
                                    <td><StatusChip tone=row.status.tone() label_key=row.status.label_key() /></td>
                                    <td>{row.duration_label()}</td>
                                    <td>{row.cost_label()}</td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </section>
        </div>
    }
}
