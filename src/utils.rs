use once_cell::sync::Lazy;
use regex::Regex;
use wasm_bindgen::{JsCast, JsValue};

// Leading integer, the way HTML form values and table cells are read
static LEADING_INT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").unwrap());

/// Parse the integer prefix of a string, ignoring anything after it.
///
/// Returns `None` when the text does not start with digits.
///
/// # Examples
/// ```
/// use f1_browser::utils::parse_leading_int;
///
/// assert_eq!(parse_leading_int("2022"), Some(2022));
/// assert_eq!(parse_leading_int(" 3rd"), Some(3));
/// assert_eq!(parse_leading_int("-"), None);
/// ```
pub fn parse_leading_int(input: &str) -> Option<i64> {
    LEADING_INT_REGEX
        .captures(input)
        .and_then(|c| c[1].parse::<i64>().ok())
}

/// Parse a whole cell as a number; empty or non-numeric text yields `None`.
pub fn parse_number(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Render optional text, substituting `fallback` for missing or empty values.
pub fn or_fallback(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

/// Best-effort message from a rejected JS promise or thrown value.
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_int_behaves_like_form_parsing() {
        assert_eq!(parse_leading_int("1"), Some(1));
        assert_eq!(parse_leading_int("  12 "), Some(12));
        assert_eq!(parse_leading_int("3.5"), Some(3));
        assert_eq!(parse_leading_int("+4"), Some(4));
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("DNF"), None);
    }

    #[test]
    fn parse_number_rejects_placeholders() {
        assert_eq!(parse_number("25"), Some(25.0));
        assert_eq!(parse_number(" 0.5 "), Some(0.5));
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("1:23.456"), None);
    }

    #[test]
    fn fallback_covers_blank_values() {
        assert_eq!(or_fallback(Some("British"), "N/A"), "British");
        assert_eq!(or_fallback(Some("  "), "N/A"), "N/A");
        assert_eq!(or_fallback(None, "-"), "-");
    }
}
