use crate::shared::components::stat_card::{StatCard, ValueKind};
use contracts::dashboards::d100_pantry_performance::PantryPerformance;
use leptos::prelude::*;

/// Pantry performance metrics as a row of stat cards.
///
/// When the metrics source failed, all cards fall back to zeros.
#[component]
pub fn PantryPerformancePanel(
    #[prop(into)] performance: Signal<Option<PantryPerformance>>,
) -> impl IntoView {
    let metrics = move || performance.get().unwrap_or_default();

    view! {
        <div class="performance-panel">
            <StatCard
                label="Meals prepared on time".to_string()
                icon_name="check".to_string()
                value=Signal::derive(move || metrics().meals_preparation_on_time)
                kind=ValueKind::Percent
            />
            <StatCard
                label="Delivery success rate".to_string()
                icon_name="delivery".to_string()
                value=Signal::derive(move || metrics().delivery_success_rate)
                kind=ValueKind::Percent
            />
            <StatCard
                label="Average preparation time".to_string()
                icon_name="clock".to_string()
                value=Signal::derive(move || metrics().average_preparation_time)
                kind=ValueKind::Minutes
            />
            <StatCard
                label="Average delivery time".to_string()
                icon_name="clock".to_string()
                value=Signal::derive(move || metrics().average_delivery_time)
                kind=ValueKind::Minutes
            />
        </div>
    }
}
