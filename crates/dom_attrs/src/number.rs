//! Number-to-string conversion with the platform's standard decimal form.
//!
//! Shortest round-trip digits come from `f64`'s `LowerExp` formatting; the
//! layout (positional vs. exponent) follows the Number::toString rules:
//! positional for decimal exponents in `-6 < n <= 21`, exponent form otherwise.

use std::fmt::Write;

pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        // Covers -0 as well.
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-Infinity" } else { "Infinity" }.to_string();
    }

    let mut out = String::new();
    if value < 0.0 {
        out.push('-');
    }

    let (digits, exp) = shortest_digits(value.abs());
    let k = digits.len() as i32;
    let n = exp + 1;

    if k <= n && n <= 21 {
        out.push_str(&digits);
        for _ in 0..(n - k) {
            out.push('0');
        }
    } else if 0 < n && n <= 21 {
        let split = n as usize;
        out.push_str(&digits[..split]);
        out.push('.');
        out.push_str(&digits[split..]);
    } else if -6 < n && n <= 0 {
        out.push_str("0.");
        for _ in 0..(-n) {
            out.push('0');
        }
        out.push_str(&digits);
    } else {
        out.push_str(&digits[..1]);
        if k > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        let e = n - 1;
        let sign = if e < 0 { '-' } else { '+' };
        let _ = write!(&mut out, "e{sign}{}", e.abs());
    }
    out
}

/// Shortest decimal digits (no leading/trailing zeros) and the decimal
/// exponent of the first digit, for a finite positive value.
fn shortest_digits(value: f64) -> (String, i32) {
    let formatted = format!("{value:e}");
    let (mantissa, exp) = formatted
        .split_once('e')
        .unwrap_or((formatted.as_str(), "0"));
    let exp = exp.parse::<i32>().unwrap_or(0);
    let mut digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    while digits.len() > 1 && digits.ends_with('0') {
        digits.pop();
    }
    (digits, exp)
}
