use leptos::prelude::*;

/// Page title bar with an optional action slot on the right.
#[component]
pub fn PageHeader(
    /// Main title text
    title: String,
    /// Subtitle shown under the title
    #[prop(into, optional)]
    subtitle: Option<String>,
    /// Optional action area (buttons etc.)
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__titles">
                <h1 class="page-header__title">{title}</h1>
                {subtitle.map(|s| view! { <p class="page-header__subtitle">{s}</p> })}
            </div>
            <div class="page-header__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
