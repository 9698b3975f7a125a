//! Shared formatting utilities for UI components.

/// Format an axis tick label with fixed one-decimal precision.
pub fn format_tick(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    // Rounding tiny negatives would otherwise print "-0.0".
    let rounded = (val * 10.0).round() / 10.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.1}", rounded)
}

/// Format a readout value with smart precision.
pub fn format_value(val: f64) -> String {
    if !val.is_finite() {
        return if val.is_nan() {
            "NaN".to_string()
        } else if val.is_sign_positive() {
            "+Inf".to_string()
        } else {
            "-Inf".to_string()
        };
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-3..1e6).contains(&abs_val) {
        format!("{:.3e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.2}", val)
    } else if abs_val >= 1.0 {
        format!("{:.4}", val)
    } else {
        format!("{:.5}", val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_have_exactly_one_decimal() {
        assert_eq!(format_tick(4.0), "4.0");
        assert_eq!(format_tick(-2.5), "-2.5");
        assert_eq!(format_tick(0.0), "0.0");
        assert_eq!(format_tick(3.14159), "3.1");
    }

    #[test]
    fn tiny_negatives_do_not_render_as_negative_zero() {
        assert_eq!(format_tick(-0.01), "0.0");
    }

    #[test]
    fn values_use_smart_precision() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(1.5), "1.5000");
        assert_eq!(format_value(123.456), "123.46");
        assert_eq!(format_value(0.25), "0.25000");
        assert_eq!(format_value(1.0e7), "1.000e7");
        assert_eq!(format_value(f64::NAN), "NaN");
    }
}
