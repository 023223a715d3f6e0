use crate::dashboards::d100_manager::api::get_diet_charts;
use crate::shared::api_utils::api_url;
use crate::shared::icons::icon;
use chrono::NaiveDate;
use contracts::domain::a001_patient::aggregate::Patient;
use contracts::domain::a002_diet_chart::aggregate::{DietChart, DietChartDto};
use contracts::domain::common::AggregateId;
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;

async fn save_diet_chart(dto: &DietChartDto) -> Result<(), String> {
    let response = Request::post(&api_url("/api/diet_charts"))
        .json(dto)
        .map_err(|e| format!("Failed to serialize diet chart: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}

async fn delete_diet_chart(id: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/diet_charts/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}

/// Diet chart list with a creation form.
///
/// The patients slice is read-only here, used to resolve patient
/// names and to populate the form's patient selector.
#[component]
pub fn DietChartManagement(
    #[prop(into)] diet_charts: Signal<Vec<DietChart>>,
    set_diet_charts: WriteSignal<Vec<DietChart>>,
    #[prop(into)] patients: Signal<Vec<Patient>>,
) -> impl IntoView {
    let (form_description, set_form_description) = signal(String::new());
    let (form_patient, set_form_patient) = signal(String::new());
    let (form_start, set_form_start) = signal(String::new());
    let (form_end, set_form_end) = signal(String::new());
    let (form_error, set_form_error) = signal(None::<String>);

    let refresh = move || {
        spawn_local(async move {
            match get_diet_charts().await {
                Ok(list) => set_diet_charts.set(list),
                Err(e) => log::error!("Failed to reload diet charts: {}", e),
            }
        });
    };

    let on_add = move |_| {
        let start_date = match NaiveDate::parse_from_str(&form_start.get(), "%Y-%m-%d") {
            Ok(d) => d,
            Err(_) => {
                set_form_error.set(Some("Start date must be YYYY-MM-DD".into()));
                return;
            }
        };
        let end_date = match NaiveDate::parse_from_str(&form_end.get(), "%Y-%m-%d") {
            Ok(d) => d,
            Err(_) => {
                set_form_error.set(Some("End date must be YYYY-MM-DD".into()));
                return;
            }
        };
        let patient_ref = form_patient.get();
        if patient_ref.is_empty() {
            set_form_error.set(Some("Select a patient".into()));
            return;
        }
        let dto = DietChartDto {
            id: None,
            code: None,
            description: form_description.get(),
            comment: None,
            patient_ref,
            start_date,
            end_date,
            morning: Default::default(),
            evening: Default::default(),
            night: Default::default(),
            status: Default::default(),
        };
        set_form_error.set(None);

        spawn_local(async move {
            match save_diet_chart(&dto).await {
                Ok(()) => {
                    set_form_description.set(String::new());
                    set_form_start.set(String::new());
                    set_form_end.set(String::new());
                    match get_diet_charts().await {
                        Ok(list) => set_diet_charts.set(list),
                        Err(e) => log::error!("Failed to reload diet charts: {}", e),
                    }
                }
                Err(e) => set_form_error.set(Some(e)),
            }
        });
    };

    // patient uuid -> display name
    let patient_names = move || {
        patients
            .get()
            .into_iter()
            .map(|p| (p.base.id.as_string(), p.base.description))
            .collect::<HashMap<_, _>>()
    };

    let patient_options = move || {
        patients
            .get()
            .into_iter()
            .map(|p| {
                let id = p.base.id.as_string();
                view! { <option value=id>{p.base.description.clone()}</option> }
            })
            .collect_view()
    };

    let rows = move || {
        let names = patient_names();
        diet_charts
            .get()
            .into_iter()
            .map(|c| {
                let id = c.base.id.as_string();
                let patient_name = names
                    .get(&c.patient_ref)
                    .cloned()
                    .unwrap_or_else(|| c.patient_ref.clone());
                let on_delete = move |_| {
                    let id = id.clone();
                    spawn_local(async move {
                        match delete_diet_chart(&id).await {
                            Ok(()) => refresh(),
                            Err(e) => log::error!("Failed to delete diet chart: {}", e),
                        }
                    });
                };
                view! {
                    <tr>
                        <td>{c.base.code.clone()}</td>
                        <td>{c.base.description.clone()}</td>
                        <td>{patient_name}</td>
                        <td>{c.start_date.format("%Y-%m-%d").to_string()}</td>
                        <td>{c.end_date.format("%Y-%m-%d").to_string()}</td>
                        <td>{c.status.as_str().to_string()}</td>
                        <td>
                            <button class="btn btn--icon" title="Remove" on:click=on_delete>
                                {icon("trash")}
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="panel panel--diet-charts">
            <div class="panel__form">
                <input
                    placeholder="Description"
                    prop:value=form_description
                    on:input=move |ev| set_form_description.set(event_target_value(&ev))
                />
                <select on:change=move |ev| set_form_patient.set(event_target_value(&ev))>
                    <option value="">"Select patient"</option>
                    {patient_options}
                </select>
                <input
                    placeholder="Start (YYYY-MM-DD)"
                    prop:value=form_start
                    on:input=move |ev| set_form_start.set(event_target_value(&ev))
                />
                <input
                    placeholder="End (YYYY-MM-DD)"
                    prop:value=form_end
                    on:input=move |ev| set_form_end.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" on:click=on_add>"Create chart"</button>
            </div>

            {move || {
                form_error.get().map(|e| view! { <div class="panel__form-error">{e}</div> })
            }}

            <table class="panel__table">
                <thead>
                    <tr>
                        <th>"Code"</th>
                        <th>"Description"</th>
                        <th>"Patient"</th>
                        <th>"Start"</th>
                        <th>"End"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>

            {move || {
                if diet_charts.get().is_empty() {
                    view! { <div class="panel__empty">"No diet charts"</div> }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </div>
    }
}
