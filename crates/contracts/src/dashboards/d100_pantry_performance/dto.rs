use serde::{Deserialize, Serialize};

/// Aggregate operational metrics of the pantry
///
/// Wire format is camelCase; the manager dashboard and any external
/// consumer rely on these exact field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PantryPerformance {
    /// Percent of meals prepared within the on-time window
    pub meals_preparation_on_time: f64,
    /// Percent of finished deliveries that were delivered (not failed)
    pub delivery_success_rate: f64,
    /// Mean minutes from scheduled time to preparation
    pub average_preparation_time: f64,
    /// Mean minutes from preparation to hand-over
    pub average_delivery_time: f64,
}

impl Default for PantryPerformance {
    /// All-zero record, the read-only fallback the dashboard renders
    /// when no performance data is available
    fn default() -> Self {
        Self {
            meals_preparation_on_time: 0.0,
            delivery_success_rate: 0.0,
            average_preparation_time: 0.0,
            average_delivery_time: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let perf = PantryPerformance {
            meals_preparation_on_time: 92.5,
            delivery_success_rate: 98.0,
            average_preparation_time: 24.0,
            average_delivery_time: 11.5,
        };
        let json = serde_json::to_value(&perf).unwrap();
        assert_eq!(json["mealsPreparationOnTime"], 92.5);
        assert_eq!(json["deliverySuccessRate"], 98.0);
        assert_eq!(json["averagePreparationTime"], 24.0);
        assert_eq!(json["averageDeliveryTime"], 11.5);
    }

    #[test]
    fn test_default_is_all_zero() {
        let perf = PantryPerformance::default();
        assert_eq!(perf.meals_preparation_on_time, 0.0);
        assert_eq!(perf.delivery_success_rate, 0.0);
        assert_eq!(perf.average_preparation_time, 0.0);
        assert_eq!(perf.average_delivery_time, 0.0);
    }
}
