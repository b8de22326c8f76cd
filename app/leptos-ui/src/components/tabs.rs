use leptos::prelude::*;

use crate::components::icons::Icon;
use crate::i18n::use_i18n;

/// Row of tab buttons bound to `active`. Each entry is the tab value, its
/// label translation key and an optional icon.
#[component]
pub fn TabBar<T>(
    tabs: Vec<(T, &'static str, Option<&'static str>)>,
    active: RwSignal<T>,
    #[prop(default = "")] aria_label: &'static str,
) -> impl IntoView
where
    T: Copy + PartialEq + Send + Sync + 'static,
{
    let i18n = use_i18n();
    view! {
        <div class="tabs" role="tablist" aria-label=aria_label>
            {tabs
                .into_iter()
                .map(|(tab, key, icon)| {
                    let selected = move || active.get() == tab;
                    view! {
                        <button
                            class="tab"
                            role="tab"
                            class:active=selected
                            aria-selected=move || selected().to_string()
                            on:click=move |_| active.set(tab)
                        >
                            {icon.map(|name| view! { <Icon name size=16 /> })}
                            <span>{move || i18n.t(key)}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// `<option>` list for a `(value, label)` table with `selected` preselected.
/// Labels are not translated.
pub fn options(list: &'static [(&'static str, &'static str)], selected: &str) -> impl IntoView {
    list.iter()
        .map(|(value, label)| view! { <option value=*value selected=*value == selected>{*label}</option> })
        .collect_view()
}
