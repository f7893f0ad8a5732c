pub use dashboard_models::presentation::parse_percent;

/// Groups digits in threes, e.g. `1234567` becomes `1,234,567`.
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Parses a display size such as `"2.3 GB"` into gigabytes.
pub fn parse_gigabytes(size: &str) -> Option<f64> {
    let trimmed = size.trim();
    let number = trimmed
        .strip_suffix("GB")
        .or_else(|| trimmed.strip_suffix("gb"))
        .unwrap_or(trimmed);
    number.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Shortens long validator addresses for table cells.
pub fn short_id(id: &str) -> String {
    const VISIBLE: usize = 20;
    match id.char_indices().nth(VISIBLE) {
        Some((cut, _)) => format!("{}...", &id[..cut]),
        None => id.to_string(),
    }
}
