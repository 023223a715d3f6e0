use crate::dashboards::d100_manager::api;
use crate::dashboards::d100_manager::state::{aggregate_error, DashboardTab};
use crate::dashboards::d100_manager::ui::PantryPerformancePanel;
use crate::domain::a001_patient::ui::PatientManagement;
use crate::domain::a002_diet_chart::ui::DietChartManagement;
use crate::domain::a003_meal_delivery::ui::DeliveryTracking;
use crate::shared::components::{DashboardSkeleton, PageHeader};
use contracts::dashboards::d100_pantry_performance::PantryPerformance;
use contracts::domain::a001_patient::aggregate::Patient;
use contracts::domain::a002_diet_chart::aggregate::DietChart;
use contracts::domain::a003_meal_delivery::aggregate::MealDelivery;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Hospital food service manager dashboard
///
/// Owns the four data slices for its child panels. Each source is
/// fetched independently; a failed call leaves its slice empty and
/// only total failure raises the error banner.
#[component]
pub fn ManagerDashboard() -> impl IntoView {
    let (patients, set_patients) = signal(Vec::<Patient>::new());
    let (diet_charts, set_diet_charts) = signal(Vec::<DietChart>::new());
    let (deliveries, set_deliveries) = signal(Vec::<MealDelivery>::new());
    let (performance, set_performance) = signal(None::<PantryPerformance>);

    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (active_tab, set_active_tab) = signal(DashboardTab::Patients);

    let load = move || {
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            // Each source fails independently; a lost section just
            // renders empty.
            let (patients_res, charts_res, deliveries_res, performance_res) = futures::join!(
                api::get_patients(),
                api::get_diet_charts(),
                api::get_meal_deliveries(),
                api::get_pantry_performance(),
            );

            let fetched_patients = patients_res.unwrap_or_else(|e| {
                log::error!("Failed to load patients: {}", e);
                Vec::new()
            });
            let fetched_charts = charts_res.unwrap_or_else(|e| {
                log::error!("Failed to load diet charts: {}", e);
                Vec::new()
            });
            let fetched_deliveries = deliveries_res.unwrap_or_else(|e| {
                log::error!("Failed to load meal deliveries: {}", e);
                Vec::new()
            });
            let fetched_performance = match performance_res {
                Ok(v) => Some(v),
                Err(e) => {
                    log::error!("Failed to load pantry performance: {}", e);
                    None
                }
            };

            set_error.set(aggregate_error(
                &fetched_patients,
                &fetched_charts,
                &fetched_deliveries,
                &fetched_performance,
            ));

            set_patients.set(fetched_patients);
            set_diet_charts.set(fetched_charts);
            set_deliveries.set(fetched_deliveries);
            set_performance.set(fetched_performance);
            set_loading.set(false);
        });
    };

    // Initial load on mount. Tab changes never reach this effect.
    Effect::new(move |_| {
        load();
    });

    let tab_bar = move || {
        DashboardTab::ALL
            .iter()
            .map(|tab| {
                let tab = *tab;
                let class = move || {
                    if active_tab.get() == tab {
                        "dashboard__tab dashboard__tab--active"
                    } else {
                        "dashboard__tab"
                    }
                };
                view! {
                    <button class=class on:click=move |_| set_active_tab.set(tab)>
                        {tab.label()}
                    </button>
                }
            })
            .collect_view()
    };

    let active_panel = move || match active_tab.get() {
        DashboardTab::Patients => view! {
            <PatientManagement patients=patients set_patients=set_patients />
        }
        .into_any(),
        DashboardTab::DietCharts => view! {
            <DietChartManagement
                diet_charts=diet_charts
                set_diet_charts=set_diet_charts
                patients=patients
            />
        }
        .into_any(),
        DashboardTab::Deliveries => view! {
            <DeliveryTracking deliveries=deliveries set_deliveries=set_deliveries />
        }
        .into_any(),
        DashboardTab::Performance => view! {
            <PantryPerformancePanel performance=performance />
        }
        .into_any(),
    };

    view! {
        <div id="d100_manager--dashboard" class="dashboard">
            <PageHeader
                title="Hospital Food Manager".to_string()
                subtitle="Patients, diet charts, deliveries and pantry performance".to_string()
            />

            {move || {
                if loading.get() {
                    // Skeleton replaces all content while a load cycle runs
                    view! { <DashboardSkeleton /> }.into_any()
                } else {
                    view! {
                        <div class="dashboard__content">
                            {move || {
                                error.get().map(|message| view! {
                                    <div class="dashboard__error" role="alert">
                                        <span>{message}</span>
                                        <button
                                            class="dashboard__retry"
                                            on:click=move |_| load()
                                        >
                                            "Retry"
                                        </button>
                                    </div>
                                })
                            }}

                            <div class="dashboard__tabs">{tab_bar}</div>
                            <div class="dashboard__panel">{active_panel}</div>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
