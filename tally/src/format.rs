//! Result formatting
//!
//! Results are kept as display text, so the rendering rules below are what
//! the user sees and also what the next calculation parses back.

use tallycore::config::DisplayConfig;

/// Sentinel shown in place of a value after a failed calculation.
pub const ERROR: &str = "Error";

/// Numeric limits the engine reads from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySettings {
    /// Digits accepted while typing. Results above `10^max_digits` switch to
    /// exponential notation.
    pub max_digits: usize,
    /// Fractional digits a result is rounded to when it has more.
    pub decimal_places: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            max_digits: 12,
            decimal_places: 10,
        }
    }
}

impl From<&DisplayConfig> for DisplaySettings {
    fn from(config: &DisplayConfig) -> Self {
        Self {
            max_digits: config.max_digits,
            decimal_places: config.decimal_places,
        }
    }
}

/// Render a computed value for the display.
///
/// 1. non-finite values become [`ERROR`]
/// 2. magnitudes above `10^max_digits` use exponential notation with
///    `decimal_places - 1` fractional digits
/// 3. everything else uses the shortest round-trip rendering
/// 4. if that has more than `decimal_places` characters after the point it is
///    rounded to `decimal_places` and trailing zeros are stripped
pub fn format_number(value: f64, settings: &DisplaySettings) -> String {
    if !value.is_finite() {
        return ERROR.to_string();
    }

    let max_digits = i32::try_from(settings.max_digits).unwrap_or(i32::MAX);
    if value.abs() > 10f64.powi(max_digits) {
        return to_exponential(value, settings.decimal_places.saturating_sub(1));
    }

    let text = shortest(value);
    match text.split_once('.') {
        Some((_, fraction)) if fraction.len() > settings.decimal_places => {
            strip_trailing_zeros(&format!("{:.*}", settings.decimal_places, value))
        }
        _ => text,
    }
}

/// Exponential notation with a signed exponent, e.g. `1.500000000e+13`.
fn to_exponential(value: f64, fraction_digits: usize) -> String {
    let rendered = format!("{:.*e}", fraction_digits, value);
    match rendered.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => rendered,
    }
}

/// Shortest round-trip text in the layout calculators conventionally use:
/// plain decimals between `1e-7` and `1e21`, exponential outside.
fn shortest(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => match e.parse::<i32>() {
            Ok(e) => (m, e),
            Err(_) => return value.to_string(),
        },
        None => return value.to_string(),
    };

    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let k = digits.len() as i32;
    // Position of the decimal point relative to the start of `digits`.
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", lead, sign, exponent.abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, sign, exponent.abs())
        }
    };

    if value < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

fn strip_trailing_zeros(fixed: &str) -> String {
    if !fixed.contains('.') {
        return fixed.to_string();
    }
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(value: f64) -> String {
        format_number(value, &DisplaySettings::default())
    }

    #[test]
    fn test_integers() {
        assert_eq!(fmt(20.0), "20");
        assert_eq!(fmt(-7.0), "-7");
        assert_eq!(fmt(0.0), "0");
        assert_eq!(fmt(-0.0), "0");
        assert_eq!(fmt(123456789012.0), "123456789012");
        assert_eq!(fmt(1e12), "1000000000000");
    }

    #[test]
    fn test_float_artifacts_are_rounded() {
        assert_eq!(fmt(0.1 + 0.2), "0.3");
        assert_eq!(fmt(1.0 / 3.0), "0.3333333333");
        assert_eq!(fmt(2.0 / 3.0), "0.6666666667");
        assert_eq!(fmt(1.1 * 1.1), "1.21");
    }

    #[test]
    fn test_short_fractions_untouched() {
        assert_eq!(fmt(0.5), "0.5");
        assert_eq!(fmt(-2.25), "-2.25");
        assert_eq!(fmt(0.000001), "0.000001");
        assert_eq!(fmt(0.1234567891), "0.1234567891");
    }

    #[test]
    fn test_large_values_go_exponential() {
        assert_eq!(fmt(1.5e13), "1.500000000e+13");
        assert_eq!(fmt(-2e15), "-2.000000000e+15");
        assert_eq!(fmt(123456789012345.0), "1.234567890e+14");
    }

    #[test]
    fn test_tiny_values() {
        assert_eq!(fmt(1e-7), "1e-7");
        assert_eq!(fmt(1.5e-7), "1.5e-7");
        assert_eq!(fmt(1.2345678901234e-7), "0.0000001235");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(fmt(f64::NAN), ERROR);
        assert_eq!(fmt(f64::INFINITY), ERROR);
        assert_eq!(fmt(f64::NEG_INFINITY), ERROR);
    }

    #[test]
    fn test_custom_settings() {
        let settings = DisplaySettings {
            max_digits: 4,
            decimal_places: 3,
        };
        assert_eq!(format_number(12345.0, &settings), "1.23e+4");
        assert_eq!(format_number(9999.0, &settings), "9999");
        assert_eq!(format_number(1.0 / 3.0, &settings), "0.333");
        assert_eq!(format_number(2.5, &settings), "2.5");
        assert_eq!(format_number(0.0005, &settings), "0.001");
        assert_eq!(format_number(0.0004, &settings), "0");
    }

    #[test]
    fn test_shortest_layout() {
        assert_eq!(shortest(1e21), "1e+21");
        assert_eq!(shortest(1.5e21), "1.5e+21");
        assert_eq!(shortest(1e20), "100000000000000000000");
        assert_eq!(shortest(12.5), "12.5");
        assert_eq!(shortest(-0.001), "-0.001");
    }
}
