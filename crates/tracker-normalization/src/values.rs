//! Scalar value conversions shared by all sources.

/// `true` for yes, y, true and 1 in any case; `false` for everything else,
/// including blank text.
pub fn yes_no_to_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "yes" | "y" | "true" | "1"
    )
}

/// Parse an integer-like cell: `"3"`, `" 3 "`, `"3.0"`.
///
/// Fractions are truncated toward zero. Blank, non-numeric and
/// out-of-range text yields `None`.
pub fn parse_int_like(value: &str) -> Option<i32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = trimmed.parse::<i32>() {
        return Some(parsed);
    }
    let float = trimmed.parse::<f64>().ok()?;
    if !float.is_finite() {
        return None;
    }
    let truncated = float.trunc();
    if truncated < f64::from(i32::MIN) || truncated > f64::from(i32::MAX) {
        return None;
    }
    Some(truncated as i32)
}

/// [`parse_int_like`] with a fallback for missing or unusable values.
pub fn int_or(value: Option<&str>, default: i32) -> i32 {
    value.and_then(parse_int_like).unwrap_or(default)
}
