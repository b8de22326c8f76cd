use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use wf_core::onboarding::{offered_connectors, offered_templates, Advance, Industry, StepStatus, Wizard, WizardStep};
use wf_core::routes::HOME_PATH;

use crate::components::icons::Icon;
use crate::i18n::{tr, use_i18n};

/// First-run setup, rendered without the shell. Skip and Finish both leave
/// for the dashboard; the wizard state is dropped with the page.
#[component]
pub fn OnboardingPage() -> impl IntoView {
    let wizard = RwSignal::new(Wizard::new());
    let step = Memo::new(move |_| wizard.with(|w| w.step()));

    let navigate = use_navigate();
    let skip = {
        let navigate = navigate.clone();
        move |_: leptos::ev::MouseEvent| navigate(HOME_PATH, NavigateOptions::default())
    };
    let next = move |_: leptos::ev::MouseEvent| match wizard.try_update(|w| w.advance()) {
        Some(Ok(Advance::Finished)) => navigate(HOME_PATH, NavigateOptions::default()),
        Some(Ok(Advance::Moved(_))) | None => {}
        Some(Err(err)) => leptos::logging::warn!("onboarding: {err}"),
    };

    view! {
        <div class="onboarding">
            <div class="card onboarding-card">
                <header class="onboarding-header">
                    <div class="icon-tile large"><Icon name="zap" size=32 /></div>
                    <h1>{tr("onboardingPage.welcome")}</h1>
                    <p class="muted">{tr("onboardingPage.intro")}</p>
                </header>

                <StepIndicator wizard />

                <div class="onboarding-body">
                    {move || match step.get() {
                        WizardStep::BasicInfo => view! { <BasicInfoStep wizard /> }.into_any(),
                        WizardStep::Connectors => view! { <ConnectorsStep wizard /> }.into_any(),
                        WizardStep::Template => view! { <TemplateStep wizard /> }.into_any(),
                    }}
                </div>

                <footer class="onboarding-footer">
                    <div>
                        <Show when=move || wizard.with(|w| w.can_go_back())>
                            <button class="btn btn-flat" on:click=move |_| { wizard.update(|w| { w.back(); }); }>
                                <Icon name="arrow-left" size=16 />
                                {tr("onboardingPage.back")}
                            </button>
                        </Show>
                    </div>
                    <div class="toolbar-group">
                        <button class="btn btn-light" on:click=skip>{tr("onboardingPage.skip")}</button>
                        <button
                            class="btn btn-primary"
                            disabled=move || !wizard.with(|w| w.can_advance())
                            on:click=next
                        >
                            {move || {
                                if step.get() == WizardStep::Template {
                                    view! { <span>{tr("onboardingPage.finish")}</span> }.into_any()
                                } else {
                                    view! {
                                        <span>{tr("onboardingPage.continue")}</span>
                                        <Icon name="arrow-right" size=16 />
                                    }
                                    .into_any()
                                }
                            }}
                        </button>
                    </div>
                </footer>
            </div>
            <p class="muted small center">
                {tr("onboardingPage.needHelp")} " "
                <a href="/help">{tr("onboardingPage.contactSupport")}</a>
            </p>
        </div>
    }
}

#[component]
fn StepIndicator(wizard: RwSignal<Wizard>) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <ol class="steps">
            {WizardStep::ALL
                .iter()
                .map(|s| {
                    let s = *s;
                    let status = move || wizard.with(|w| w.status_of(s));
                    let last = s.index() + 1 == WizardStep::ALL.len();
                    view! {
                        <li
                            class="step"
                            class:done=move || status() == StepStatus::Completed
                            class:active=move || status() == StepStatus::Active
                            aria-current=move || (status() == StepStatus::Active).then_some("step")
                        >
                            <span class="step-dot">
                                {move || match status() {
                                    StepStatus::Completed => view! { <Icon name="check" size=16 /> }.into_any(),
                                    _ => (s.index() + 1).to_string().into_any(),
                                }}
                            </span>
                            {(!last).then(|| view! { <span class="step-line"></span> })}
                            <span class="step-text">
                                <span class="step-title">{move || i18n.t(s.title_key())}</span>
                                <span class="muted tiny">{move || i18n.t(s.subtitle_key())}</span>
                            </span>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}

#[component]
fn BasicInfoStep(wizard: RwSignal<Wizard>) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <label class="field">
            <span>{tr("onboardingPage.orgName")} <span class="required">"*"</span></span>
            <input
                type="text"
                required
                placeholder=move || i18n.t("onboardingPage.orgNamePlaceholder")
                prop:value=move || wizard.with(|w| w.org_name.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    wizard.update(|w| w.org_name = value);
                }
            />
        </label>
        <label class="field">
            <span>{tr("onboardingPage.industry")} <span class="required">"*"</span></span>
            <select
                required
                aria-label=tr("onboardingPage.industry")
                on:change=move |ev| {
                    let industry = Industry::from_key(&event_target_value(&ev));
                    wizard.update(|w| w.industry = industry);
                }
            >
                <option value="" disabled selected=move || wizard.with(|w| w.industry.is_none())>
                    {tr("onboardingPage.selectIndustry")}
                </option>
                {Industry::ALL
                    .iter()
                    .map(|ind| {
                        let ind = *ind;
                        view! {
                            <option value=ind.key() selected=move || wizard.with(|w| w.industry == Some(ind))>
                                {move || i18n.t(ind.label_key())}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
        <label class="checkbox">
            <input
                type="checkbox"
                prop:checked=move || wizard.with(|w| w.terms_accepted)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    wizard.update(|w| w.terms_accepted = checked);
                }
            />
            <span class="small">{tr("onboardingPage.terms")}</span>
        </label>
    }
}

#[component]
fn ConnectorsStep(wizard: RwSignal<Wizard>) -> impl IntoView {
    view! {
        <p class="muted">{tr("onboardingPage.selectConnectors")}</p>
        <div class="grid grid-3">
            {offered_connectors()
                .into_iter()
                .map(|c| {
                    let id = c.id;
                    let selected = move || wizard.with(|w| w.is_connector_selected(id));
                    view! {
                        <button
                            class="card pick-card"
                            class:picked=selected
                            aria-pressed=move || selected().to_string()
                            on:click=move |_| wizard.update(|w| w.toggle_connector(id))
                        >
                            <div class="pick-card-head">
                                <div class="logo-tile">
                                    <img src=c.logo_url() alt=c.name width="24" height="24" />
                                </div>
                                <input type="checkbox" tabindex="-1" aria-hidden="true" prop:checked=selected />
                            </div>
                            <h3>{c.name}</h3>
                            <p class="muted small">{c.description}</p>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn TemplateStep(wizard: RwSignal<Wizard>) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <p class="muted">{tr("onboardingPage.chooseTemplate")}</p>
        <div class="grid grid-3">
            {offered_templates()
                .into_iter()
                .map(|tpl| {
                    let id = tpl.id;
                    let selected = move || wizard.with(|w| w.selected_template() == Some(id));
                    view! {
                        <article class="card pick-card" class:picked=selected>
                            <img class="template-image" src=tpl.image alt=move || i18n.t(tpl.name_key) />
                            <h3>{move || i18n.t(tpl.name_key)}</h3>
                            <p class="muted small">{move || i18n.t(tpl.description_key)}</p>
                            <button
                                class="btn full"
                                class:btn-primary=selected
                                class:btn-flat=move || !selected()
                                on:click=move |_| wizard.update(|w| w.select_template(id))
                            >
                                {move || {
                                    if selected() {
                                        i18n.t("onboardingPage.selected")
                                    } else {
                                        i18n.t("onboardingPage.selectTemplate")
                                    }
                                }}
                            </button>
                        </article>
                    }
                })
                .collect_view()}
        </div>
    }
}
