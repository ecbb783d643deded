//! Display formatting helpers

/// Maximum fraction digits shown for a price
const MAX_FRACTION_DIGITS: usize = 3;

/// Format an amount with Indian digit grouping (`1234567.5` -> `12,34,567.5`).
///
/// The last three integer digits form one group and the rest are grouped in
/// pairs. At most three fraction digits are kept and trailing zeros dropped.
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    if amount < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_indian(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    let mut out = groups.join(",");
    out.push(',');
    out.push_str(tail);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_amounts_are_not_grouped() {
        assert_eq!(format_inr(0.0), "0");
        assert_eq!(format_inr(7.0), "7");
        assert_eq!(format_inr(999.0), "999");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(format_inr(1000.0), "1,000");
        assert_eq!(format_inr(85000.0), "85,000");
    }

    #[test]
    fn test_lakhs_and_crores() {
        assert_eq!(format_inr(750000.0), "7,50,000");
        assert_eq!(format_inr(1200000.0), "12,00,000");
        assert_eq!(format_inr(1500000.0), "15,00,000");
        assert_eq!(format_inr(123456789.0), "12,34,56,789");
    }

    #[test]
    fn test_fraction_digits_trimmed_and_rounded() {
        assert_eq!(format_inr(1234567.5), "12,34,567.5");
        assert_eq!(format_inr(1000.25), "1,000.25");
        assert_eq!(format_inr(1.23456), "1.235");
        assert_eq!(format_inr(2.0004), "2");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_inr(-150000.0), "-1,50,000");
        assert_eq!(format_inr(-0.0001), "0");
    }

    #[test]
    fn test_non_finite_passthrough() {
        assert_eq!(format_inr(f64::NAN), "NaN");
    }
}
