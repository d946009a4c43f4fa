//! Formatting applied to the payment inputs on every keystroke.

/// Keep ASCII digits only.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Group a card number into blocks of four separated by spaces.
///
/// Whitespace already present is dropped first, so formatting is idempotent.
pub fn format_card_number(input: &str) -> String {
    let compact: Vec<char> = input.chars().filter(|c| !c.is_whitespace()).collect();
    compact
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format an expiry date as `MM/YY` once two digits are present.
///
/// Digits beyond the fourth are dropped.
pub fn format_expiry(input: &str) -> String {
    let digits = digits_only(input);
    if digits.len() < 2 {
        return digits;
    }
    let (month, year) = digits.split_at(2);
    let year: String = year.chars().take(2).collect();
    format!("{}/{}", month, year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_number_groups() {
        assert_eq!(format_card_number("4242424242424242"), "4242 4242 4242 4242");
        assert_eq!(format_card_number("4242 42424"), "4242 4242 4");
        assert_eq!(format_card_number("424"), "424");
        assert_eq!(format_card_number(""), "");
    }

    #[test]
    fn test_card_number_idempotent() {
        let once = format_card_number("12345678");
        assert_eq!(format_card_number(&once), once);
    }

    #[test]
    fn test_expiry() {
        assert_eq!(format_expiry("1"), "1");
        assert_eq!(format_expiry("12"), "12/");
        assert_eq!(format_expiry("1227"), "12/27");
        assert_eq!(format_expiry("12/27"), "12/27");
        assert_eq!(format_expiry("122799"), "12/27");
        assert_eq!(format_expiry("ab"), "");
    }

    #[test]
    fn test_cvv_digits_only() {
        assert_eq!(digits_only("1a2 3"), "123");
    }
}
