use leptos::prelude::*;
use wf_core::tone::ChipTone;

use crate::i18n::use_i18n;

/// Small rounded label whose colour comes from `tone`. `label_key` is
/// translated reactively.
#[component]
pub fn StatusChip(tone: ChipTone, label_key: &'static str) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <span class=format!("chip {}", tone.class())>{move || i18n.t(label_key)}</span>
    }
}

/// Chip for text that is not translated (tags, categories, model names).
#[component]
pub fn PlainChip(tone: ChipTone, #[prop(into)] text: String) -> impl IntoView {
    view! { <span class=format!("chip {}", tone.class())>{text}</span> }
}
