//! # Numeric Field Parsing
//!
//! Form fields hand their raw text to the editors. Parsing is lenient: the
//! longest numeric prefix wins (`"12.5 kN"` reads as `12.5`), and anything that
//! yields no number, or yields zero, becomes the caller's fallback. Invalid
//! input is never an error, it just degrades to the field's default.
//!
//! ```rust
//! use purlin_core::input::{parse_float_or, parse_int_or};
//!
//! assert_eq!(parse_float_or("12.5 kN", 0.0), 12.5);
//! assert_eq!(parse_float_or("abc", 0.0), 0.0);
//! assert_eq!(parse_int_or("7.9", 0), 7);
//! assert_eq!(parse_int_or("", 20), 20);
//! ```

/// Parse the leading decimal number of `text`, if there is one.
pub fn float_prefix(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse the leading integer of `text`, if there is one.
pub fn int_prefix(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }

    s[..end].parse::<i64>().ok()
}

/// Lenient float parse; no number or zero gives `fallback`.
pub fn parse_float_or(text: &str, fallback: f64) -> f64 {
    match float_prefix(text) {
        Some(value) if value != 0.0 => value,
        _ => fallback,
    }
}

/// Lenient integer parse; no number or zero gives `fallback`.
pub fn parse_int_or(text: &str, fallback: i64) -> i64 {
    match int_prefix(text) {
        Some(value) if value != 0 => value,
        _ => fallback,
    }
}
