//! Display-formatting helpers shared by the profile screen.

/// Format a raw phone number string into `(123) 456-7890` form.
///
/// Non-digit characters in the input are ignored. Eleven-digit numbers with a
/// leading `1` drop the country code. Anything that is not a standard US
/// number is returned unchanged.
pub fn format_phone_number(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..10])
    } else if digits.len() == 11 && digits.starts_with('1') {
        format!("({}) {}-{}", &digits[1..4], &digits[4..7], &digits[7..11])
    } else {
        phone.to_string()
    }
}

/// Replace a stored security answer character-for-character with `*`.
pub fn mask_answer(answer: &str) -> String {
    answer.chars().map(|_| '*').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_phone_ten_digits() {
        assert_eq!(format_phone_number("5551234567"), "(555) 123-4567");
        assert_eq!(format_phone_number("555-123-4567"), "(555) 123-4567");
        assert_eq!(format_phone_number("(555) 123 4567"), "(555) 123-4567");
    }

    #[test]
    fn test_format_phone_leading_country_code() {
        assert_eq!(format_phone_number("15551234567"), "(555) 123-4567");
        assert_eq!(format_phone_number("+1 555 123 4567"), "(555) 123-4567");
    }

    #[test]
    fn test_format_phone_non_us_passthrough() {
        assert_eq!(format_phone_number("12345"), "12345");
        assert_eq!(format_phone_number("+44 20 7946 0958"), "+44 20 7946 0958");
        assert_eq!(format_phone_number(""), "");
    }

    #[test]
    fn test_mask_answer_length_matches() {
        assert_eq!(mask_answer("blue"), "****");
        assert_eq!(mask_answer(""), "");
        // Character count, not byte count.
        assert_eq!(mask_answer("héllo"), "*****");
    }
}
