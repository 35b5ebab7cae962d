//! Numeric coercions that are part of the response contract.

/// Fixed-point rendering with ties rounded away from zero.
pub fn to_fixed(value: f64, digits: u32) -> String {
    let factor = 10f64.powi(digits as i32);
    let rounded = (value * factor).round() / factor;
    format!("{:.*}", digits as usize, rounded)
}

/// Currency amount, always two decimals. NULL renders as `"0.00"`.
pub fn currency(value: Option<f64>) -> String {
    to_fixed(value.unwrap_or(0.0), 2)
}

/// Minutes, no decimals. NULL renders as `"0"`.
pub fn minutes(value: Option<f64>) -> String {
    to_fixed(value.unwrap_or(0.0), 0)
}
