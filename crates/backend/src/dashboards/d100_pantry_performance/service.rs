use anyhow::Result;
use contracts::dashboards::d100_pantry_performance::PantryPerformance;
use contracts::domain::a003_meal_delivery::aggregate::{DeliveryStatus, MealDelivery};

use crate::domain::a003_meal_delivery;

/// A meal counts as prepared on time when it leaves the kitchen no more
/// than this many minutes after its scheduled time.
const ON_TIME_WINDOW_MINUTES: i64 = 15;

/// Compute current pantry performance from the delivery log
pub async fn get_performance() -> Result<PantryPerformance> {
    let deliveries = a003_meal_delivery::service::list_all().await?;
    Ok(compute_performance(&deliveries))
}

/// Pure metric computation over a delivery collection
///
/// All rates are percentages in 0..=100; averages are minutes. Metrics
/// with no qualifying records come out as 0.0.
pub fn compute_performance(deliveries: &[MealDelivery]) -> PantryPerformance {
    let mut prepared_total = 0usize;
    let mut prepared_on_time = 0usize;
    let mut prep_minutes_sum = 0.0f64;

    let mut finished_total = 0usize;
    let mut delivered_total = 0usize;
    let mut delivery_minutes_sum = 0.0f64;
    let mut delivery_minutes_count = 0usize;

    for d in deliveries {
        if let Some(prepared_at) = d.prepared_at {
            prepared_total += 1;
            let lateness = prepared_at - d.scheduled_at;
            if lateness.num_minutes() <= ON_TIME_WINDOW_MINUTES {
                prepared_on_time += 1;
            }
            // Preparation ahead of schedule counts as zero minutes
            prep_minutes_sum += minutes_between(d.scheduled_at, prepared_at).max(0.0);

            if let Some(delivered_at) = d.delivered_at {
                delivery_minutes_sum += minutes_between(prepared_at, delivered_at);
                delivery_minutes_count += 1;
            }
        }

        if d.status.is_finished() {
            finished_total += 1;
            if d.status == DeliveryStatus::Delivered {
                delivered_total += 1;
            }
        }
    }

    PantryPerformance {
        meals_preparation_on_time: ratio_percent(prepared_on_time, prepared_total),
        delivery_success_rate: ratio_percent(delivered_total, finished_total),
        average_preparation_time: mean(prep_minutes_sum, prepared_total),
        average_delivery_time: mean(delivery_minutes_sum, delivery_minutes_count),
    }
}

fn minutes_between(
    from: chrono::DateTime<chrono::Utc>,
    to: chrono::DateTime<chrono::Utc>,
) -> f64 {
    (to - from).num_seconds() as f64 / 60.0
}

fn ratio_percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use contracts::domain::a003_meal_delivery::aggregate::MealType;
    use uuid::Uuid;

    fn delivery(
        scheduled_offset_min: i64,
        prepared_after_min: Option<i64>,
        delivered_after_prep_min: Option<i64>,
        status: DeliveryStatus,
    ) -> MealDelivery {
        let scheduled = Utc.with_ymd_and_hms(2025, 1, 10, 8, 0, 0).unwrap()
            + Duration::minutes(scheduled_offset_min);
        let mut d = MealDelivery::new_for_insert(
            "DEL-T".into(),
            "test meal".into(),
            Uuid::new_v4().to_string(),
            Uuid::new_v4().to_string(),
            MealType::Morning,
            scheduled,
        );
        d.status = status;
        d.prepared_at = prepared_after_min.map(|m| scheduled + Duration::minutes(m));
        d.delivered_at = match (d.prepared_at, delivered_after_prep_min) {
            (Some(p), Some(m)) => Some(p + Duration::minutes(m)),
            _ => None,
        };
        d
    }

    #[test]
    fn test_empty_collection_yields_all_zero() {
        assert_eq!(compute_performance(&[]), PantryPerformance::default());
    }

    #[test]
    fn test_on_time_rate_uses_fifteen_minute_window() {
        let deliveries = vec![
            delivery(0, Some(10), None, DeliveryStatus::Ready),
            delivery(0, Some(15), None, DeliveryStatus::Ready),
            delivery(0, Some(16), None, DeliveryStatus::Ready),
            delivery(0, Some(40), None, DeliveryStatus::Ready),
        ];
        let perf = compute_performance(&deliveries);
        assert_eq!(perf.meals_preparation_on_time, 50.0);
    }

    #[test]
    fn test_success_rate_counts_only_finished_deliveries() {
        let deliveries = vec![
            delivery(0, Some(5), Some(20), DeliveryStatus::Delivered),
            delivery(0, Some(5), Some(30), DeliveryStatus::Delivered),
            delivery(0, Some(5), None, DeliveryStatus::Failed),
            // Pending deliveries don't count toward success rate
            delivery(0, None, None, DeliveryStatus::Pending),
            delivery(0, None, None, DeliveryStatus::Preparing),
        ];
        let perf = compute_performance(&deliveries);
        assert!((perf.delivery_success_rate - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_average_times() {
        let deliveries = vec![
            delivery(0, Some(10), Some(20), DeliveryStatus::Delivered),
            delivery(0, Some(20), Some(40), DeliveryStatus::Delivered),
        ];
        let perf = compute_performance(&deliveries);
        assert_eq!(perf.average_preparation_time, 15.0);
        assert_eq!(perf.average_delivery_time, 30.0);
    }

    #[test]
    fn test_early_preparation_is_on_time_and_counts_as_zero_minutes() {
        let deliveries = vec![
            delivery(0, Some(-10), None, DeliveryStatus::Ready),
            delivery(0, Some(10), None, DeliveryStatus::Ready),
        ];
        let perf = compute_performance(&deliveries);
        assert_eq!(perf.meals_preparation_on_time, 100.0);
        assert_eq!(perf.average_preparation_time, 5.0);
    }

    #[test]
    fn test_unprepared_deliveries_do_not_skew_averages() {
        let deliveries = vec![
            delivery(0, Some(10), None, DeliveryStatus::Ready),
            delivery(0, None, None, DeliveryStatus::Pending),
        ];
        let perf = compute_performance(&deliveries);
        assert_eq!(perf.average_preparation_time, 10.0);
        assert_eq!(perf.average_delivery_time, 0.0);
    }
}
