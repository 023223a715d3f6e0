use axum::Json;

use crate::dashboards::d100_pantry_performance;

/// GET /api/pantry/performance
pub async fn get_performance() -> Result<
    Json<contracts::dashboards::d100_pantry_performance::PantryPerformance>,
    axum::http::StatusCode,
> {
    match d100_pantry_performance::service::get_performance().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to compute pantry performance: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
