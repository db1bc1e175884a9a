// ---------------------------------------------------------------------------
// Display formatting for metrics and table cells
// ---------------------------------------------------------------------------

/// Abbreviated currency: `$1.50B`, `$2.50MM`, `$1.50K`, `$500.00`.
/// Zero and NaN render as `N/A`.
pub fn format_currency(value: f64) -> String {
    if value.is_nan() || value == 0.0 {
        return "N/A".to_string();
    }
    if value >= 1e9 {
        format!("${:.2}B", value / 1e9)
    } else if value >= 1e6 {
        format!("${:.2}MM", value / 1e6)
    } else if value >= 1e3 {
        format!("${:.2}K", value / 1e3)
    } else {
        format!("${}", group_thousands(&format!("{value:.2}")))
    }
}

/// Integer with `,` thousands separators.
pub fn format_count(value: i64) -> String {
    group_thousands(&value.to_string())
}

/// Share of a whole as a one-decimal percentage, e.g. `33.3%`.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Insert `,` every three digits of the integer part of a plain decimal
/// literal (optional leading `-`, optional fractional part).
fn group_thousands(literal: &str) -> String {
    let (sign, unsigned) = match literal.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", literal),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(literal.len() + int_part.len() / 3);
    grouped.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_abbreviations() {
        assert_eq!(format_currency(0.0), "N/A");
        assert_eq!(format_currency(f64::NAN), "N/A");
        assert_eq!(format_currency(1_500_000_000.0), "$1.50B");
        assert_eq!(format_currency(2_500_000.0), "$2.50MM");
        assert_eq!(format_currency(1_500.0), "$1.50K");
        assert_eq!(format_currency(500.0), "$500.00");
    }

    #[test]
    fn test_currency_thresholds() {
        assert_eq!(format_currency(1e9), "$1.00B");
        assert_eq!(format_currency(999_999.0), "$1000.00K");
        assert_eq!(format_currency(1_000.0), "$1.00K");
        assert_eq!(format_currency(999.5), "$999.50");
        assert_eq!(format_currency(12_345_678_900.0), "$12.35B");
    }

    #[test]
    fn test_negative_currency_keeps_full_form() {
        assert_eq!(format_currency(-1_234.5), "$-1,234.50");
    }

    #[test]
    fn test_count_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
        assert_eq!(format_count(-45_000), "-45,000");
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(1.0 / 3.0), "33.3%");
        assert_eq!(format_percent(0.5), "50.0%");
    }
}
