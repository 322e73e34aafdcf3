//! Integer extraction from free-text queries

use regex::Regex;
use std::sync::LazyLock;

/// Matches a run of ASCII digits with an optional minus sign directly in front
static NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"-?[0-9]+") {
    Ok(regex) => regex,
    Err(err) => panic!("Number regex is invalid: {err}"),
});

/// Extract every integer embedded in the query, in order of appearance
///
/// Values outside the `i64` range saturate instead of failing, so extraction
/// is total over any input.
pub fn extract_numbers(query: &str) -> Vec<i64> {
    NUMBER_REGEX
        .find_iter(query)
        .map(|m| parse_saturating(m.as_str()))
        .collect()
}

fn parse_saturating(token: &str) -> i64 {
    match token.parse::<i64>() {
        Ok(value) => value,
        // The regex only yields digits, so the sole failure left is overflow
        Err(_) if token.starts_with('-') => i64::MIN,
        Err(_) => i64::MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_in_order_with_duplicates() {
        let numbers = extract_numbers("Which of the following are primes: 94, 16, 78, 89, 19, 16?");
        assert_eq!(numbers, vec![94, 16, 78, 89, 19, 16]);
    }

    #[test]
    fn test_negative_numbers_need_adjacent_hyphen() {
        assert_eq!(extract_numbers("What is -5 plus 3?"), vec![-5, 3]);
        assert_eq!(extract_numbers("What is 10 - 4?"), vec![10, 4]);
        assert_eq!(extract_numbers("range 10-4"), vec![10, -4]);
    }

    #[test]
    fn test_no_numbers() {
        assert!(extract_numbers("Can you decipher this cryptic message?!").is_empty());
        assert!(extract_numbers("").is_empty());
        assert!(extract_numbers("-").is_empty());
    }

    #[test]
    fn test_digit_runs_are_maximal() {
        assert_eq!(extract_numbers("abc123def4567"), vec![123, 4567]);
        assert_eq!(extract_numbers("007"), vec![7]);
        assert_eq!(extract_numbers("3.14"), vec![3, 14]);
    }

    #[test]
    fn test_overflowing_values_saturate() {
        assert_eq!(extract_numbers("99999999999999999999"), vec![i64::MAX]);
        assert_eq!(extract_numbers("-99999999999999999999"), vec![i64::MIN]);
    }

    #[test]
    fn test_non_ascii_digits_are_ignored() {
        assert!(extract_numbers("١٢٣").is_empty());
    }
}
