use crate::dashboards::d100_manager::ui::ManagerDashboard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ManagerDashboard />
    }
}
