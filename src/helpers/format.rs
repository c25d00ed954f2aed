//! Display formatting for unit values.

/// Placeholder shown for absent money amounts
pub const NOT_APPLICABLE: &str = "N/A";

/// Format an optional money amount for the table ("$1200.00" or "N/A")
pub fn format_money(amount: Option<f64>) -> String {
    match amount {
        Some(value) => format!("${value:.2}"),
        None => NOT_APPLICABLE.to_string(),
    }
}

/// Format a number the way a user would type it back ("1500", "1500.5")
pub fn format_plain_number(value: f64) -> String {
    value.to_string()
}

/// Title-case a string: first letter of each alphabetic run upper, rest lower.
///
/// Letters following a digit start a new word ("unit101b" -> "Unit101B").
pub fn title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_is_letter = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            result.push(c);
            prev_is_letter = false;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Some(1500.0)), "$1500.00");
        assert_eq!(format_money(Some(0.0)), "$0.00");
        assert_eq!(format_money(Some(99.999)), "$100.00");
        assert_eq!(format_money(None), "N/A");
    }

    #[test]
    fn test_format_plain_number() {
        assert_eq!(format_plain_number(1500.0), "1500");
        assert_eq!(format_plain_number(1500.25), "1500.25");
        assert_eq!(format_plain_number(0.0), "0");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("unit101"), "Unit101");
        assert_eq!(title_case("north tower"), "North Tower");
        assert_eq!(title_case("UNIT-a"), "Unit-A");
        assert_eq!(title_case("unit101b"), "Unit101B");
        assert_eq!(title_case(""), "");
    }
}
