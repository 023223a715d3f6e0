use crate::dashboards::d100_manager::api::get_meal_deliveries;
use crate::shared::api_utils::api_url;
use contracts::domain::a003_meal_delivery::aggregate::MealDelivery;
use contracts::domain::common::AggregateId;
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;

async fn mark_delivered(id: &str) -> Result<(), String> {
    let response = Request::post(&api_url(&format!("/api/meal_deliveries/{}/deliver", id)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}

fn format_time(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// Meal delivery board. Unfinished deliveries can be marked as
/// handed over; the change is persisted first, then the parent
/// collection is replaced with the reloaded list.
#[component]
pub fn DeliveryTracking(
    #[prop(into)] deliveries: Signal<Vec<MealDelivery>>,
    set_deliveries: WriteSignal<Vec<MealDelivery>>,
) -> impl IntoView {
    let rows = move || {
        deliveries
            .get()
            .into_iter()
            .map(|d| {
                let id = d.base.id.as_string();
                let finished = d.status.is_finished();
                let on_deliver = move |_| {
                    let id = id.clone();
                    spawn_local(async move {
                        match mark_delivered(&id).await {
                            Ok(()) => match get_meal_deliveries().await {
                                Ok(list) => set_deliveries.set(list),
                                Err(e) => log::error!("Failed to reload deliveries: {}", e),
                            },
                            Err(e) => log::error!("Failed to mark delivery: {}", e),
                        }
                    });
                };
                let status_class = if finished {
                    "delivery-status delivery-status--finished"
                } else {
                    "delivery-status"
                };
                view! {
                    <tr>
                        <td>{d.base.code.clone()}</td>
                        <td>{d.base.description.clone()}</td>
                        <td>{d.meal_type.as_str().to_string()}</td>
                        <td>
                            <span class=status_class>{d.status.as_str().to_string()}</span>
                        </td>
                        <td>{format_time(d.scheduled_at)}</td>
                        <td>{d.delivered_at.map(format_time).unwrap_or_else(|| "-".into())}</td>
                        <td>{d.delivery_person.clone().unwrap_or_else(|| "-".into())}</td>
                        <td>
                            {(!finished).then(|| view! {
                                <button class="btn btn--small" on:click=on_deliver>
                                    "Mark delivered"
                                </button>
                            })}
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="panel panel--deliveries">
            <table class="panel__table">
                <thead>
                    <tr>
                        <th>"Code"</th>
                        <th>"Description"</th>
                        <th>"Meal"</th>
                        <th>"Status"</th>
                        <th>"Scheduled"</th>
                        <th>"Delivered"</th>
                        <th>"Courier"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>

            {move || {
                if deliveries.get().is_empty() {
                    view! { <div class="panel__empty">"No deliveries"</div> }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </div>
    }
}
