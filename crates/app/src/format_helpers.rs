/// Shared formatting utilities for the UI layer.
///
/// Date helpers accept ISO-8601 strings (e.g. "2026-01-20T21:35:00Z") and
/// produce human-readable output without external crate dependencies.

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse month number (1-12) from a two-digit string.
fn parse_month(s: &str) -> Option<usize> {
    s.parse::<usize>().ok().filter(|m| (1..=12).contains(m))
}

/// Format an ISO date string as "Jan 20, 2026" (date-only, human-readable).
///
/// Falls back to the first 10 characters if parsing fails.
pub fn format_date_human(date_str: &str) -> String {
    if date_str.len() < 10 {
        return date_str.to_string();
    }
    let year = &date_str[..4];
    let month = &date_str[5..7];
    let day = &date_str[8..10];

    if let Some(m) = parse_month(month) {
        let day_num: u32 = day.parse().unwrap_or(0);
        format!("{} {}, {}", MONTH_NAMES[m - 1], day_num, year)
    } else {
        date_str[..10].to_string()
    }
}

/// Up to two initials for an avatar fallback, taken from the first letters
/// of the first two words ("Ada Lovelace" becomes "AL", "priya" becomes "P").
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_iso_datetime_as_date() {
        assert_eq!(format_date_human("2026-01-20T21:35:00Z"), "Jan 20, 2026");
    }

    #[test]
    fn short_input_passes_through() {
        assert_eq!(format_date_human("n/a"), "n/a");
    }

    #[test]
    fn initials_use_first_two_words() {
        assert_eq!(initials("Ada Lovelace"), "AL");
        assert_eq!(initials("priya"), "P");
        assert_eq!(initials("Jean Luc Picard"), "JL");
        assert_eq!(initials(""), "");
    }
}
