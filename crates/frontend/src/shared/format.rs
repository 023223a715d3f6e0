//! Value formatting helpers shared by dashboard components.

/// Format a percentage with one decimal place, e.g. `93.5%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Format a duration given in minutes, e.g. `25 min` or `1 h 05 min`.
/// Durations never render negative.
pub fn format_minutes(value: f64) -> String {
    let total = value.round().max(0.0) as i64;
    if total < 60 {
        return format!("{} min", total);
    }
    format!("{} h {:02} min", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(93.478), "93.5%");
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(100.0), "100.0%");
    }

    #[test]
    fn test_format_minutes_under_hour() {
        assert_eq!(format_minutes(25.4), "25 min");
        assert_eq!(format_minutes(0.0), "0 min");
    }

    #[test]
    fn test_format_minutes_clamps_negative_to_zero() {
        assert_eq!(format_minutes(-3.0), "0 min");
    }

    #[test]
    fn test_format_minutes_over_hour() {
        assert_eq!(format_minutes(65.0), "1 h 05 min");
        assert_eq!(format_minutes(120.0), "2 h 00 min");
    }
}
