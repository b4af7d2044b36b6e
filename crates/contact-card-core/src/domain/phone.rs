/// Formats a phone number for display and `tel:`/`sms:` links.
///
/// Non-digits are removed. Ten-digit numbers without a leading `1` are
/// treated as North American numbers missing their country code. Only the
/// eleven-digit `1AAAEEELLLL` shape is pretty-printed; every other digit
/// string is returned bare.
pub fn format_phone(value: &str) -> String {
    let mut digits: String = value.chars().filter(|ch| ch.is_ascii_digit()).collect();

    if !digits.starts_with('1') && digits.len() == 10 {
        digits.insert(0, '1');
    }

    if digits.len() == 11 && digits.starts_with('1') {
        return format!(
            "+1 ({}) {}-{}",
            &digits[1..4],
            &digits[4..7],
            &digits[7..11]
        );
    }

    digits
}
