use leptos::prelude::*;
use wf_core::onboarding::Industry;
use wf_core::settings::{
    SettingsSection, UsageMeter, API_KEYS, DEFAULT_INDUSTRY, DEFAULT_ORG_NAME, DEFAULT_TIMEZONE, INVOICES,
    KEY_SECURITY_TIPS, MEMBERS, PAYMENT_CARD, PLAN_NAME, PLAN_PRICE_CENTS, PLAN_RENEWS_ON, TIMEZONES, USAGE_METERS,
};
use wf_core::tone::ChipTone;

use crate::components::icons::Icon;
use crate::components::status_chip::StatusChip;
use crate::components::tabs::{options, TabBar};
use crate::i18n::{tr, use_i18n};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let i18n = use_i18n();
    let section = RwSignal::new(SettingsSection::default());
    let tabs: Vec<_> = SettingsSection::ALL.iter().map(|s| (*s, s.label_key(), Some(s.icon()))).collect();

    view! {
        <div class="page page-settings settings-layout">
            <nav class="card settings-menu" aria-label=tr("settingsPage.title")>
                <h3 class="card-title">{tr("settingsPage.title")}</h3>
                {SettingsSection::ALL
                    .iter()
                    .map(|s| {
                        let s = *s;
                        let active = move || section.get() == s;
                        view! {
                            <button
                                class="menu-item"
                                class:active=active
                                aria-current=move || active().then_some("page")
                                on:click=move |_| section.set(s)
                            >
                                <Icon name=s.icon() size=16 />
                                <span>{move || i18n.t(s.label_key())}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <section class="card settings-body">
                <TabBar tabs active=section aria_label="Organization settings tabs" />
                <div class="tab-panel">
                    {move || match section.get() {
                        SettingsSection::General => view! { <GeneralSettings /> }.into_any(),
                        SettingsSection::Members => view! { <MembersSettings /> }.into_any(),
                        SettingsSection::ApiKeys => view! { <ApiKeySettings /> }.into_any(),
                        SettingsSection::Billing => view! { <BillingSettings /> }.into_any(),
                    }}
                </div>
            </section>
        </div>
    }
}

#[component]
fn GeneralSettings() -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <h3>{tr("settingsPage.general.heading")}</h3>
        <label class="field">
            <span>{tr("settingsPage.general.orgName")}</span>
            <input
                type="text"
                value=DEFAULT_ORG_NAME
                placeholder=move || i18n.t("settingsPage.general.orgNamePlaceholder")
            />
        </label>
        <label class="field">
            <span>{tr("settingsPage.general.industry")}</span>
            <select>
                {Industry::ALL
                    .iter()
                    .map(|ind| {
                        let ind = *ind;
                        view! {
                            <option value=ind.key() selected=ind.key() == DEFAULT_INDUSTRY>
                                {move || i18n.t(ind.label_key())}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
        <label class="field">
            <span>{tr("settingsPage.general.timezone")}</span>
            <select>{options(&TIMEZONES, DEFAULT_TIMEZONE)}</select>
        </label>
        <div class="switch-row">
            <div>
                <p class="strong">{tr("settingsPage.general.usageAnalytics")}</p>
                <p class="muted small">{tr("settingsPage.general.usageAnalyticsHint")}</p>
            </div>
            <input type="checkbox" role="switch" class="switch" checked />
        </div>
        <div class="switch-row">
            <div>
                <p class="strong">{tr("settingsPage.general.emailNotifications")}</p>
                <p class="muted small">{tr("settingsPage.general.emailNotificationsHint")}</p>
            </div>
            <input type="checkbox" role="switch" class="switch" checked />
        </div>
        <div class="form-actions">
            <button class="btn btn-primary">{tr("settingsPage.saveChanges")}</button>
        </div>
    }
}

#[component]
fn MembersSettings() -> impl IntoView {
    view! {
        <div class="section-header">
            <h3>{tr("settingsPage.members.heading")}</h3>
            <button class="btn btn-primary">
                <Icon name="user-plus" size=16 />
                {tr("settingsPage.members.invite")}
            </button>
        </div>
        <table class="table" aria-label="Team members table">
            <thead>
                <tr>
                    <th>{tr("settingsPage.members.columns.user")}</th>
                    <th>{tr("settingsPage.members.columns.role")}</th>
                    <th>{tr("settingsPage.members.columns.status")}</th>
                    <th>{tr("settingsPage.columns.actions")}</th>
                </tr>
            </thead>
            <tbody>
                {MEMBERS
                    .iter()
                    .map(|m| view! {
                        <tr>
                            <td>
                                <div class="user-cell">
                                    <img class="avatar sm" src=m.avatar alt="" />
                                    <div>
                                        <p>{m.name}</p>
                                        <p class="muted small">{m.email}</p>
                                    </div>
                                </div>
                            </td>
                            <td><StatusChip tone=m.role.tone() label_key=m.role.label_key() /></td>
                            <td><StatusChip tone=m.status.tone() label_key=m.status.label_key() /></td>
                            <td>
                                <div class="row-actions">
                                    <button class="btn btn-icon" aria-label=tr("settingsPage.edit")>
                                        <Icon name="edit" size=16 />
                                    </button>
                                    <button class="btn btn-icon danger" aria-label=tr("settingsPage.remove")>
                                        <Icon name="trash" size=16 />
                                    </button>
                                </div>
                            </td>
                        </tr>
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[component]
fn ApiKeySettings() -> impl IntoView {
    view! {
        <div class="section-header">
            <h3>{tr("settingsPage.apiKeys.heading")}</h3>
            <button class="btn btn-primary">
                <Icon name="plus" size=16 />
                {tr("settingsPage.apiKeys.create")}
            </button>
        </div>
        <table class="table" aria-label="API keys table">
            <thead>
                <tr>
                    <th>{tr("settingsPage.apiKeys.columns.name")}</th>
                    <th>{tr("settingsPage.apiKeys.columns.type")}</th>
                    <th>{tr("settingsPage.apiKeys.columns.created")}</th>
                    <th>{tr("settingsPage.apiKeys.columns.lastUsed")}</th>
                    <th>{tr("settingsPage.columns.actions")}</th>
                </tr>
            </thead>
            <tbody>
                {API_KEYS
                    .iter()
                    .map(|k| view! {
                        <tr>
                            <td>
                                <p>{k.name}</p>
                                <p class="muted small mono">{k.masked}</p>
                            </td>
                            <td><StatusChip tone=k.kind.tone() label_key=k.kind.label_key() /></td>
                            <td>{k.created}</td>
                            <td>{k.last_used}</td>
                            <td>
                                <div class="row-actions">
                                    <button class="btn btn-icon" aria-label=tr("settingsPage.apiKeys.copy")>
                                        <Icon name="copy" size=16 />
                                    </button>
                                    <button class="btn btn-icon danger" aria-label=tr("settingsPage.remove")>
                                        <Icon name="trash" size=16 />
                                    </button>
                                </div>
                            </td>
                        </tr>
                    })
                    .collect_view()}
            </tbody>
        </table>
        <div class="card inset">
            <h4>{tr("settingsPage.apiKeys.securityTitle")}</h4>
            <p class="small">{tr("settingsPage.apiKeys.securityIntro")}</p>
            <ul class="bullets small">
                {KEY_SECURITY_TIPS.iter().map(|key| view! { <li>{tr(*key)}</li> }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn BillingSettings() -> impl IntoView {
    let i18n = use_i18n();
    let price = format!("${}", PLAN_PRICE_CENTS / 100);
    let (card, expires) = PAYMENT_CARD;

    view! {
        <h3>{tr("settingsPage.billing.heading")}</h3>
        <div class="card plan-card">
            <div>
                <h4 class="text-primary">{PLAN_NAME}</h4>
                <p>{move || i18n.t_with("settingsPage.billing.planTerms", &[("price", &price), ("date", PLAN_RENEWS_ON)])}</p>
            </div>
            <button class="btn btn-primary-flat">{tr("settingsPage.billing.changePlan")}</button>
        </div>

        <h4>{tr("settingsPage.billing.usage")}</h4>
        <div class="grid grid-3">
            {USAGE_METERS.iter().map(|m| view! { <UsageCard meter=*m /> }).collect_view()}
        </div>

        <h4>{tr("settingsPage.billing.paymentMethod")}</h4>
        <div class="card inset payment-row">
            <div class="user-cell">
                <Icon name="credit-card" size=28 />
                <div>
                    <p>{card}</p>
                    <p class="muted small">{move || i18n.t_with("settingsPage.billing.expires", &[("date", expires)])}</p>
                </div>
            </div>
            <button class="btn btn-flat">{tr("settingsPage.edit")}</button>
        </div>

        <h4>{tr("settingsPage.billing.history")}</h4>
        <table class="table" aria-label="Billing history table">
            <thead>
                <tr>
                    <th>{tr("settingsPage.billing.columns.date")}</th>
                    <th>{tr("settingsPage.billing.columns.description")}</th>
                    <th>{tr("settingsPage.billing.columns.amount")}</th>
                    <th>{tr("settingsPage.billing.columns.status")}</th>
                    <th>{tr("settingsPage.billing.columns.invoice")}</th>
                </tr>
            </thead>
            <tbody>
                {INVOICES
                    .iter()
                    .map(|inv| view! {
                        <tr>
                            <td>{inv.date}</td>
                            <td>{inv.description}</td>
                            <td>{inv.amount_label()}</td>
                            <td>
                                {if inv.paid {
                                    view! { <StatusChip tone=ChipTone::Success label_key="settingsPage.billing.paid" /> }.into_any()
                                } else {
                                    view! { <StatusChip tone=ChipTone::Warning label_key="settingsPage.billing.due" /> }.into_any()
                                }}
                            </td>
                            <td>
                                <button class="btn btn-flat small">
                                    <Icon name="download" size=14 />
                                    {tr("settingsPage.billing.download")}
                                </button>
                            </td>
                        </tr>
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[component]
fn UsageCard(meter: UsageMeter) -> impl IntoView {
    let i18n = use_i18n();
    let percent = meter.percent_label();
    let tone = meter.tone();
    view! {
        <div class="card stat">
            <p class="muted small">{move || i18n.t(meter.label_key)}</p>
            <p class="stat-value">{meter.amount_label()}</p>
            <div class="meter" role="progressbar" aria-valuenow=meter.percent().round().to_string() aria-valuemin="0" aria-valuemax="100">
                <div class=format!("meter-fill {}", tone.class()) style:width=format!("{}%", meter.percent())></div>
            </div>
            <p class=format!("small meter-label {}", tone.class())>
                {move || i18n.t_with("settingsPage.billing.percentUsed", &[("percent", &percent)])}
            </p>
        </div>
    }
}
