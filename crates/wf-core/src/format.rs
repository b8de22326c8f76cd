//! Number formatting shared by tables and cards.

/// Group digits in threes: `1245` → `1,245`.
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Dollar amount from cents: `42` → `$0.42`.
pub fn usd_cents(cents: u64) -> String {
    format!("${}.{:02}", thousands(cents / 100), cents % 100)
}

/// One decimal in thousands: `185_000` → `185.0K`.
pub fn kilo(n: u64) -> String {
    format!("{:.1}K", n as f64 / 1000.0)
}

/// Two decimals in millions: `2_170_000` → `2.17M`.
pub fn mega(n: u64) -> String {
    format!("{:.2}M", n as f64 / 1_000_000.0)
}

/// Minutes and zero-padded seconds: `154` → `2m 34s`.
pub fn minutes_seconds(secs: u32) -> String {
    format!("{}m {:02}s", secs / 60, secs % 60)
}

/// Percentage with one decimal, computed from a used / limit pair.
pub fn percent(used: u64, limit: u64) -> f64 {
    if limit == 0 {
        return 0.0;
    }
    (used as f64 / limit as f64 * 1000.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_groups_digits() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1245), "1,245");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn money_and_scales() {
        assert_eq!(usd_cents(42), "$0.42");
        assert_eq!(usd_cents(8650), "$86.50");
        assert_eq!(usd_cents(129_900), "$1,299.00");
        assert_eq!(kilo(185_000), "185.0K");
        assert_eq!(kilo(42_500), "42.5K");
        assert_eq!(mega(2_170_000), "2.17M");
    }

    #[test]
    fn durations_pad_seconds() {
        assert_eq!(minutes_seconds(154), "2m 34s");
        assert_eq!(minutes_seconds(185), "3m 05s");
        assert_eq!(minutes_seconds(45), "0m 45s");
    }

    #[test]
    fn percent_rounds_to_one_decimal() {
        assert_eq!(percent(12_450, 50_000), 24.9);
        assert_eq!(percent(1, 3), 33.3);
        assert_eq!(percent(5, 0), 0.0);
    }
}
