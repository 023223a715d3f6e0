use leptos::prelude::*;

/// Placeholder blocks shown while the dashboard data is loading.
///
/// Mirrors the layout of the loaded page: a header bar, a row of
/// stat cards and a content area.
#[component]
pub fn DashboardSkeleton() -> impl IntoView {
    view! {
        <div class="skeleton" aria-busy="true">
            <div class="skeleton__block skeleton__block--header"></div>
            <div class="skeleton__row">
                <div class="skeleton__block skeleton__block--card"></div>
                <div class="skeleton__block skeleton__block--card"></div>
                <div class="skeleton__block skeleton__block--card"></div>
                <div class="skeleton__block skeleton__block--card"></div>
            </div>
            <div class="skeleton__block skeleton__block--body"></div>
        </div>
    }
}
