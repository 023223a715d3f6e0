use crate::dashboards::d100_manager::api::get_patients;
use crate::shared::api_utils::api_url;
use crate::shared::icons::icon;
use contracts::domain::a001_patient::aggregate::{Gender, Patient, PatientDto};
use contracts::domain::common::AggregateId;
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;

async fn save_patient(dto: &PatientDto) -> Result<(), String> {
    let response = Request::post(&api_url("/api/patients"))
        .json(dto)
        .map_err(|e| format!("Failed to serialize patient: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}

async fn delete_patient(id: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/patients/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}

fn parse_gender(value: &str) -> Gender {
    match value {
        "Male" => Gender::Male,
        "Female" => Gender::Female,
        _ => Gender::Other,
    }
}

/// Patient list with a small admission form.
///
/// Mutations persist through the API first, then replace the
/// parent-owned collection wholesale via `set_patients`.
#[component]
pub fn PatientManagement(
    #[prop(into)] patients: Signal<Vec<Patient>>,
    set_patients: WriteSignal<Vec<Patient>>,
) -> impl IntoView {
    let (form_name, set_form_name) = signal(String::new());
    let (form_age, set_form_age) = signal(String::new());
    let (form_gender, set_form_gender) = signal("Other".to_string());
    let (form_ward, set_form_ward) = signal(String::new());
    let (form_bed, set_form_bed) = signal(String::new());
    let (form_floor, set_form_floor) = signal(String::new());
    let (form_error, set_form_error) = signal(None::<String>);

    let refresh = move || {
        spawn_local(async move {
            match get_patients().await {
                Ok(list) => set_patients.set(list),
                Err(e) => log::error!("Failed to reload patients: {}", e),
            }
        });
    };

    let on_add = move |_| {
        let name = form_name.get();
        if name.trim().is_empty() {
            set_form_error.set(Some("Name is required".into()));
            return;
        }
        let age = match form_age.get().trim().parse::<u32>() {
            Ok(v) => v,
            Err(_) => {
                set_form_error.set(Some("Age must be a number".into()));
                return;
            }
        };
        let dto = PatientDto {
            name,
            age,
            gender: parse_gender(&form_gender.get()),
            ward: form_ward.get(),
            bed: form_bed.get(),
            floor: form_floor.get().trim().parse().unwrap_or(0),
            ..Default::default()
        };
        set_form_error.set(None);

        spawn_local(async move {
            match save_patient(&dto).await {
                Ok(()) => {
                    set_form_name.set(String::new());
                    set_form_age.set(String::new());
                    set_form_ward.set(String::new());
                    set_form_bed.set(String::new());
                    set_form_floor.set(String::new());
                    match get_patients().await {
                        Ok(list) => set_patients.set(list),
                        Err(e) => log::error!("Failed to reload patients: {}", e),
                    }
                }
                Err(e) => set_form_error.set(Some(e)),
            }
        });
    };

    let rows = move || {
        patients
            .get()
            .into_iter()
            .map(|p| {
                let id = p.base.id.as_string();
                let on_delete = move |_| {
                    let id = id.clone();
                    spawn_local(async move {
                        match delete_patient(&id).await {
                            Ok(()) => refresh(),
                            Err(e) => log::error!("Failed to delete patient: {}", e),
                        }
                    });
                };
                view! {
                    <tr>
                        <td>{p.base.code.clone()}</td>
                        <td>{p.base.description.clone()}</td>
                        <td>{p.age}</td>
                        <td>{p.gender.as_str().to_string()}</td>
                        <td>{format!("{} / {} (floor {})", p.ward, p.bed, p.floor)}</td>
                        <td>{p.diseases.join(", ")}</td>
                        <td>{p.allergies.join(", ")}</td>
                        <td>
                            <button class="btn btn--icon" title="Discharge" on:click=on_delete>
                                {icon("trash")}
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="panel panel--patients">
            <div class="panel__form">
                <input
                    placeholder="Full name"
                    prop:value=form_name
                    on:input=move |ev| set_form_name.set(event_target_value(&ev))
                />
                <input
                    placeholder="Age"
                    prop:value=form_age
                    on:input=move |ev| set_form_age.set(event_target_value(&ev))
                />
                <select on:change=move |ev| set_form_gender.set(event_target_value(&ev))>
                    <option value="Other">"Other"</option>
                    <option value="Male">"Male"</option>
                    <option value="Female">"Female"</option>
                </select>
                <input
                    placeholder="Ward"
                    prop:value=form_ward
                    on:input=move |ev| set_form_ward.set(event_target_value(&ev))
                />
                <input
                    placeholder="Bed"
                    prop:value=form_bed
                    on:input=move |ev| set_form_bed.set(event_target_value(&ev))
                />
                <input
                    placeholder="Floor"
                    prop:value=form_floor
                    on:input=move |ev| set_form_floor.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" on:click=on_add>"Admit patient"</button>
            </div>

            {move || {
                form_error.get().map(|e| view! { <div class="panel__form-error">{e}</div> })
            }}

            <table class="panel__table">
                <thead>
                    <tr>
                        <th>"Code"</th>
                        <th>"Name"</th>
                        <th>"Age"</th>
                        <th>"Gender"</th>
                        <th>"Placement"</th>
                        <th>"Diseases"</th>
                        <th>"Allergies"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>

            {move || {
                if patients.get().is_empty() {
                    view! { <div class="panel__empty">"No patients"</div> }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </div>
    }
}
