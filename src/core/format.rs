use chrono::NaiveDate;
use num_format::{Locale, ToFormattedString as _};
use std::cmp::Ordering;

/// Formats a dollar amount as `$1,234.56`, with `-$` for negatives.
///
/// Always uses the en locale ('.' as decimal mark) regardless of the host.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0.00".to_string();
    }
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = (cents / 100).to_formatted_string(&Locale::en);
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, dollars, cents % 100)
}

/// Formats an ISO `YYYY-MM-DD` date (optionally with a time part) as
/// `January 2, 2024`. Unparseable input is returned unchanged.
pub fn format_date_from_string(value: &str) -> String {
    let trimmed = value.trim();
    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => trimmed.to_string(),
    }
}

/// Joins a list the way it reads in prose: `A`, `A and B`, `A, B, and C`.
pub fn humanize_list<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [one] => one.as_ref().to_string(),
        [a, b] => format!("{} and {}", a.as_ref(), b.as_ref()),
        [rest @ .., last] => {
            let head: Vec<&str> = rest.iter().map(|s| s.as_ref()).collect();
            format!("{}, and {}", head.join(", "), last.as_ref())
        }
    }
}

/// Case-insensitive ordering with an exact tiebreak, approximating a
/// locale-aware string comparison: punctuation and whitespace sort before
/// digits, digits before letters.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let fold = |s: &str| -> Vec<(u8, char)> {
        s.chars()
            .flat_map(char::to_lowercase)
            .map(|c| {
                let rank = if c.is_alphabetic() {
                    2
                } else if c.is_numeric() {
                    1
                } else {
                    0
                };
                (rank, c)
            })
            .collect()
    };
    fold(a).cmp(&fold(b)).then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(10_000_000.0), "$10,000,000.00");
        assert_eq!(format_currency(-5.0), "-$5.00");
        assert_eq!(format_currency(0.006), "$0.01");
        assert_eq!(format_currency(f64::NAN), "$0.00");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date_from_string("2024-01-02"), "January 2, 2024");
        assert_eq!(format_date_from_string("2024-11-30T00:00:00"), "November 30, 2024");
        assert_eq!(format_date_from_string("not a date"), "not a date");
        assert_eq!(format_date_from_string(""), "");
    }

    #[test]
    fn test_humanize_list() {
        assert_eq!(humanize_list::<&str>(&[]), "");
        assert_eq!(humanize_list(&["Coinbase"]), "Coinbase");
        assert_eq!(humanize_list(&["Coinbase", "Ripple"]), "Coinbase and Ripple");
        assert_eq!(
            humanize_list(&["Coinbase", "Ripple", "a16z"]),
            "Coinbase, Ripple, and a16z"
        );
    }

    #[test]
    fn test_locale_cmp() {
        assert_eq!(locale_cmp("armstrong", "Bankman"), Ordering::Less);
        assert_eq!(locale_cmp("abc", "abc"), Ordering::Equal);
        // Lower case sorts before upper case on ties, as in most locales.
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("a_b", "a1"), Ordering::Less);
        assert_eq!(locale_cmp("a1", "ab"), Ordering::Less);
        assert_eq!(locale_cmp("a b", "a1"), Ordering::Less);
    }
}
