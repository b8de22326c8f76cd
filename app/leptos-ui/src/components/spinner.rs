use leptos::prelude::*;

fn diameter(size: &str) -> u32 {
    match size {
        "sm" => 16,
        "lg" => 40,
        _ => 24,
    }
}

/// Rotating arc shown while the first locale bundle loads.
/// Sizes: "sm", "md" (default) and "lg".
#[component]
pub fn Spinner(
    #[prop(default = "md")] size: &'static str,
    #[prop(optional, into)] label: Option<Signal<String>>,
) -> impl IntoView {
    let px = diameter(size);
    let arc = format!(
        r##"<svg width="{px}" height="{px}" viewBox="0 0 24 24" fill="none" class="svg-spinner" aria-hidden="true"><circle cx="12" cy="12" r="10" stroke="#dbeafe" stroke-width="2.5"/><path d="M12 2a10 10 0 0 1 10 10" stroke="#2563eb" stroke-width="2.5" stroke-linecap="round"/></svg>"##
    );
    view! {
        <div class=format!("spinner-container spinner-{size}") role="status" aria-live="polite">
            <span class="svg-spinner-wrap" inner_html=arc></span>
            {label.map(|text| view! { <span class="spinner-label">{move || text.get()}</span> })}
        </div>
    }
}
