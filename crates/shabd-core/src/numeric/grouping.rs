//! Indian digit grouping for display (12,34,56,789).

/// Fraction digits kept by [`format_indian_decimal`].
const MAX_FRACTION_DIGITS: usize = 3;

/// Format `n` with Indian grouping separators: the last three digits form one
/// group and every two digits before that form another.
pub fn format_indian_grouping(n: i64) -> String {
    let grouped = group_digits(&n.unsigned_abs().to_string());
    if n < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Format an integer part and its fractional digits for display.
///
/// The fraction is rounded half-up to three digits and trailing zeros are
/// dropped, so `("1234567", "50")` becomes `12,34,567.5`.
pub fn format_indian_decimal(integer: u64, fraction: &str) -> String {
    let (integer, fraction) = round_fraction(integer, fraction);
    let mut out = group_digits(&integer.to_string());
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(&fraction);
    }
    out
}

fn group_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, c) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push(',');
    out.push_str(tail);
    out
}

/// Round `fraction` to [`MAX_FRACTION_DIGITS`], carrying into `integer` when
/// the fraction rounds up to one.
fn round_fraction(integer: u64, fraction: &str) -> (u64, String) {
    let digits: Vec<u8> = fraction
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();

    let mut integer = integer;
    let mut kept: Vec<u8> = digits.iter().take(MAX_FRACTION_DIGITS).copied().collect();

    if digits.get(MAX_FRACTION_DIGITS).is_some_and(|&d| d >= 5) {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            integer = integer.saturating_add(1);
        }
    }

    while kept.last() == Some(&0) {
        kept.pop();
    }

    let fraction = kept.iter().map(|&d| char::from(b'0' + d)).collect();
    (integer, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_small() {
        assert_eq!(format_indian_grouping(0), "0");
        assert_eq!(format_indian_grouping(7), "7");
        assert_eq!(format_indian_grouping(999), "999");
    }

    #[test]
    fn test_grouping_indian_convention() {
        assert_eq!(format_indian_grouping(1_000), "1,000");
        assert_eq!(format_indian_grouping(12_345), "12,345");
        assert_eq!(format_indian_grouping(100_000), "1,00,000");
        assert_eq!(format_indian_grouping(1_234_567), "12,34,567");
        assert_eq!(format_indian_grouping(10_000_000), "1,00,00,000");
        assert_eq!(format_indian_grouping(123_456_789), "12,34,56,789");
        assert_eq!(
            format_indian_grouping(99_999_999_999_999),
            "9,99,99,99,99,99,999"
        );
    }

    #[test]
    fn test_grouping_negative() {
        assert_eq!(format_indian_grouping(-1_234_567), "-12,34,567");
        assert_eq!(format_indian_grouping(-12), "-12");
        assert_eq!(
            format_indian_grouping(i64::MIN),
            "-92,23,37,20,36,85,47,75,808"
        );
    }

    #[test]
    fn test_decimal_fraction() {
        assert_eq!(format_indian_decimal(1_234_567, ""), "12,34,567");
        assert_eq!(format_indian_decimal(1_234_567, "50"), "12,34,567.5");
        assert_eq!(format_indian_decimal(12, "125"), "12.125");
        assert_eq!(format_indian_decimal(12, "000"), "12");
    }

    #[test]
    fn test_decimal_rounding() {
        assert_eq!(format_indian_decimal(1, "12345"), "1.123");
        assert_eq!(format_indian_decimal(1, "1235"), "1.124");
        assert_eq!(format_indian_decimal(1, "9995"), "2");
        assert_eq!(format_indian_decimal(99_999, "9999"), "1,00,000");
    }
}
