use crate::shared::api_utils::api_url;
use contracts::dashboards::d100_pantry_performance::PantryPerformance;
use contracts::domain::a001_patient::aggregate::Patient;
use contracts::domain::a002_diet_chart::aggregate::DietChart;
use contracts::domain::a003_meal_delivery::aggregate::MealDelivery;
use gloo_net::http::Request;

/// Fetch all patients
pub async fn get_patients() -> Result<Vec<Patient>, String> {
    let url = api_url("/api/patients");

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: Vec<Patient> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

/// Fetch all diet charts
pub async fn get_diet_charts() -> Result<Vec<DietChart>, String> {
    let url = api_url("/api/diet_charts");

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: Vec<DietChart> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

/// Fetch all meal deliveries
pub async fn get_meal_deliveries() -> Result<Vec<MealDelivery>, String> {
    let url = api_url("/api/meal_deliveries");

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: Vec<MealDelivery> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

/// Fetch pantry performance metrics
pub async fn get_pantry_performance() -> Result<PantryPerformance, String> {
    let url = api_url("/api/pantry/performance");

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: PantryPerformance = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
