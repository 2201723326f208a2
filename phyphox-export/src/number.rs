/// Significant digits written for every exported sample.
pub const SIGNIFICANT_DIGITS: usize = 10;

const MIN_EXPONENT_DIGITS: usize = 2;

/// Formats `value` in scientific notation with exactly `SIGNIFICANT_DIGITS` significant digits,
/// using `decimal_point` as decimal marker: `1234.5` becomes `1.234500000E+03`.
pub fn format_scientific(value: f64, decimal_point: char) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // `{:e}` yields e.g. "1.234500000e3" or "-5.000000000e-4"
    let formatted = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let (mantissa, exponent) = formatted
        .split_once('e')
        .unwrap_or((formatted.as_str(), "0"));
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };

    let mut out = String::with_capacity(mantissa.len() + MIN_EXPONENT_DIGITS + 2);
    for c in mantissa.chars() {
        out.push(if c == '.' { decimal_point } else { c });
    }
    out.push('E');
    out.push(sign);
    for _ in digits.len()..MIN_EXPONENT_DIGITS {
        out.push('0');
    }
    out.push_str(digits);
    out
}
