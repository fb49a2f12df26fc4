//! # Display Formatting
//!
//! Text rendering of model outputs for the CLI. Non-finite values render as
//! an em dash: the model reports them as-is and the display marks them
//! unavailable instead of printing `NaN` or `inf`.

/// Placeholder for values the model could not produce.
pub const UNAVAILABLE: &str = "—";

/// Fixed-decimal number with `,` thousands separators.
pub fn format_number(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return UNAVAILABLE.to_string();
    }

    let fixed = format!("{:.*}", digits, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Amount in millions: `$12.51M`.
pub fn format_money(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return UNAVAILABLE.to_string();
    }
    format!("${}M", format_number(value, digits))
}

/// Cost per kilogram rounded to whole units: `$2,035/kg`.
pub fn format_per_kg(value: f64) -> String {
    if !value.is_finite() {
        return UNAVAILABLE.to_string();
    }
    format!("${}/kg", format_number(value.round(), 0))
}

/// Duration in days: `26.92 d`.
pub fn format_days(value: f64) -> String {
    if !value.is_finite() {
        return UNAVAILABLE.to_string();
    }
    format!("{} d", format_number(value, 2))
}

/// `PASS` / `FAIL` label for a gate.
pub fn format_verdict(passed: bool) -> &'static str {
    if passed { "PASS" } else { "FAIL" }
}
