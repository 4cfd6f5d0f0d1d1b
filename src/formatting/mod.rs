use crate::types::metric_is_percent;

/// Render a metric value for display
///
/// Percent metrics get one decimal (trailing `.0` dropped) and a `%` suffix,
/// everything else is a whole number. Missing or NaN values render as a bare
/// `"0"` whatever the metric.
pub fn format_metric_value(metric_id: &str, value: Option<f64>) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return "0".to_string();
    };

    if metric_is_percent(metric_id) {
        format!("{}%", round_half_up(value, 1))
    } else {
        round_half_up(value, 0)
    }
}

/// Round to `decimals` places, ties away from zero, trailing zeros trimmed
///
/// Rounding works on the shortest decimal representation of the value so
/// that `50.55` rounds to `50.6` even though the nearest double sits just
/// below it.
pub fn round_half_up(value: f64, decimals: usize) -> String {
    let repr = format!("{}", value.abs());
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(decimals))
        .map(|b| b - b'0')
        .collect();
    let mut int_len = int_part.len();

    let round_up = frac_part
        .as_bytes()
        .get(decimals)
        .is_some_and(|&next| next >= b'5');
    if round_up {
        let mut idx = digits.len();
        loop {
            if idx == 0 {
                digits.insert(0, 1);
                int_len += 1;
                break;
            }
            idx -= 1;
            if digits[idx] == 9 {
                digits[idx] = 0;
            } else {
                digits[idx] += 1;
                break;
            }
        }
    }

    let mut out: String = digits[..int_len].iter().map(|d| char::from(b'0' + d)).collect();
    let frac: String = digits[int_len..].iter().map(|d| char::from(b'0' + d)).collect();
    let frac = frac.trim_end_matches('0');
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }

    let is_zero = digits.iter().all(|d| *d == 0);
    if value.is_sign_negative() && !is_zero {
        out.insert(0, '-');
    }
    out
}

// Format number with thousands separator
pub fn format_number_with_commas(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let mut count = 0;

    for c in s.chars().rev() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(c);
        count += 1;
    }

    result.chars().rev().collect()
}
