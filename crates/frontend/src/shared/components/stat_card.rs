use crate::shared::format::{format_minutes, format_percent};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// How a stat card renders its numeric value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueKind {
    Percent,
    Minutes,
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Primary numeric value
    #[prop(into)]
    value: Signal<f64>,
    /// How to format the value
    kind: ValueKind,
) -> impl IntoView {
    let formatted = move || match kind {
        ValueKind::Percent => format_percent(value.get()),
        ValueKind::Minutes => format_minutes(value.get()),
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}
