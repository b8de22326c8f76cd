use leptos::prelude::*;
use wf_core::tone::ChipTone;

use crate::components::icons::Icon;
use crate::i18n::use_i18n;

/// Headline metric: tinted icon tile, translated label, value.
#[component]
pub fn KpiCard(
    label_key: &'static str,
    #[prop(into)] value: String,
    icon: &'static str,
    #[prop(default = ChipTone::Primary)] tone: ChipTone,
    /// Optional small line under the value, e.g. a trend.
    #[prop(optional, into)]
    hint: Option<Signal<String>>,
) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <div class="card kpi-card">
            <div class=format!("kpi-icon {}", tone.class())>
                <Icon name=icon size=24 />
            </div>
            <div>
                <p class="label">{move || i18n.t(label_key)}</p>
                <p class="value">{value}</p>
                {hint.map(|h| view! { <p class="hint">{move || h.get()}</p> })}
            </div>
        </div>
    }
}
