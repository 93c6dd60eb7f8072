/// Renders a number for display: integers without a fractional part, anything
/// else fixed to two decimals with exact ties rounded away from zero
/// (`0.125` -> `0.13`). Non-finite values render as `Infinity`, `-Infinity`
/// or `NaN`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value.fract() == 0.0 {
        // Avoid rendering negative zero as "-0"
        if value == 0.0 {
            return "0".to_string();
        }
        return format!("{value:.0}");
    }
    two_decimals(value)
}

fn two_decimals(value: f64) -> String {
    // Only multiples of 1/8 land exactly on a hundredths midpoint
    let scaled = value * 100.0;
    if (value * 8.0).fract() == 0.0 && scaled.fract().abs() == 0.5 {
        let rounded = scaled.signum() * (scaled.abs() + 0.5).floor();
        return format!("{:.2}", rounded / 100.0);
    }
    format!("{value:.2}")
}

/// Renders whole seconds as `1h 2m 3s`, dropping leading zero units.
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_drop_fraction() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn fractions_use_two_decimals() {
        assert_eq!(format_number(2.5), "2.50");
        assert_eq!(format_number(1.0 / 3.0), "0.33");
    }

    #[test]
    fn exact_ties_round_away_from_zero() {
        assert_eq!(format_number(0.125), "0.13");
        assert_eq!(format_number(2.375), "2.38");
        assert_eq!(format_number(-0.125), "-0.13");
        assert_eq!(format_number(0.625), "0.63");
        // 0.115 is stored slightly above the midpoint already
        assert_eq!(format_number(0.115), "0.12");
    }

    #[test]
    fn non_finite_values_are_literal() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn durations_drop_leading_units() {
        assert_eq!(format_duration(5), "5s");
        assert_eq!(format_duration(65), "1m 5s");
        assert_eq!(format_duration(3723), "1h 2m 3s");
    }
}
