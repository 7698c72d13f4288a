//! Indian-currency display helpers.

/// Compact rupee display on the Indian short scale: crores above 1,00,00,000,
/// lakhs above 1,00,000, thousands above 1,000, plain rupees below that.
pub fn format_indian_currency_short(amount: i64) -> String {
    const CRORE: i64 = 10_000_000;
    const LAKH: i64 = 100_000;

    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs() as i64;

    let (value, suffix) = if abs >= CRORE {
        (abs as f64 / CRORE as f64, "Cr")
    } else if abs >= LAKH {
        (abs as f64 / LAKH as f64, "L")
    } else if abs >= 1_000 {
        (abs as f64 / 1_000.0, "K")
    } else {
        return format!("{sign}₹{abs}");
    };

    format!("{sign}₹{value:.1}{suffix}")
}

/// Full rupee display with Indian digit grouping and no decimals,
/// e.g. `₹12,34,567`.
pub fn format_indian_currency(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}₹{}", group_indian(&amount.unsigned_abs().to_string()))
}

/// Indian grouping: the last three digits form one group, everything above
/// groups in pairs.
fn group_indian(digits: &str) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(len - 3);
    let mut pairs = Vec::new();
    let mut end = head.len();
    while end > 2 {
        pairs.push(&head[end - 2..end]);
        end -= 2;
    }
    pairs.push(&head[..end]);
    pairs.reverse();

    format!("{},{}", pairs.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_scale_breakpoints() {
        assert_eq!(format_indian_currency_short(12_345_678), "₹1.2Cr");
        assert_eq!(format_indian_currency_short(250_000), "₹2.5L");
        assert_eq!(format_indian_currency_short(5_000), "₹5.0K");
        assert_eq!(format_indian_currency_short(500), "₹500");
    }

    #[test]
    fn test_short_scale_edges() {
        assert_eq!(format_indian_currency_short(0), "₹0");
        assert_eq!(format_indian_currency_short(10_000_000), "₹1.0Cr");
        assert_eq!(format_indian_currency_short(100_000), "₹1.0L");
        assert_eq!(format_indian_currency_short(1_000), "₹1.0K");
        assert_eq!(format_indian_currency_short(999), "₹999");
    }

    #[test]
    fn test_short_scale_negative() {
        assert_eq!(format_indian_currency_short(-250_000), "-₹2.5L");
        assert_eq!(format_indian_currency_short(-500), "-₹500");
    }

    #[test]
    fn test_grouped_inr() {
        assert_eq!(format_indian_currency(1_234_567), "₹12,34,567");
        assert_eq!(format_indian_currency(1_000), "₹1,000");
        assert_eq!(format_indian_currency(100), "₹100");
        assert_eq!(format_indian_currency(0), "₹0");
        assert_eq!(format_indian_currency(10_000_000), "₹1,00,00,000");
        assert_eq!(format_indian_currency(123_456_789_012), "₹1,23,45,67,89,012");
    }

    #[test]
    fn test_grouped_inr_negative() {
        assert_eq!(format_indian_currency(-1_234_567), "-₹12,34,567");
    }
}
