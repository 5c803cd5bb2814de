//! Number formatting for tiles, table rows, popups and chart ticks.

const ABBREVIATIONS: [(f64, &str); 4] = [(1e12, "t"), (1e9, "b"), (1e6, "m"), (1e3, "k")];

/// Abbreviate with a suffix and a fixed number of decimals: 1234 -> "1.2k"
/// (1 decimal), 2500000 -> "3m" (0 decimals).
pub fn abbreviate(value: f64, decimals: usize) -> String {
    let magnitude = value.abs();
    for (threshold, suffix) in ABBREVIATIONS {
        if magnitude >= threshold {
            return format!("{:.*}{}", decimals, value / threshold, suffix);
        }
    }
    format!("{:.*}", decimals, value)
}

/// Tile figure: "+1.2k", "+3.4m"; missing or zero shows "+0".
pub fn format_stat(stat: Option<i64>) -> String {
    match stat {
        Some(value) if value != 0 => format!("+{}", abbreviate(value as f64, 1)),
        _ => "+0".to_string(),
    }
}

/// Full count with thousands separators: 1234567 -> "1,234,567".
pub fn format_count(count: Option<i64>) -> String {
    let value = count.unwrap_or(0);
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Chart y-axis tick: one decimal from a million up, none below.
pub fn format_axis_tick(value: f64) -> String {
    if value >= 1e6 {
        abbreviate(value, 1)
    } else {
        abbreviate(value, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_stat() {
        assert_eq!(format_stat(None), "+0");
        assert_eq!(format_stat(Some(0)), "+0");
        assert_eq!(format_stat(Some(1234)), "+1.2k");
        assert_eq!(format_stat(Some(3_400_000)), "+3.4m");
        assert_eq!(format_stat(Some(676_570_149)), "+676.6m");
        assert_eq!(format_stat(Some(42)), "+42.0");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(Some(0)), "0");
        assert_eq!(format_count(None), "0");
        assert_eq!(format_count(Some(999)), "999");
        assert_eq!(format_count(Some(1000)), "1,000");
        assert_eq!(format_count(Some(40_138_560)), "40,138,560");
        assert_eq!(format_count(Some(-12_345)), "-12,345");
    }

    #[test]
    fn test_format_axis_tick() {
        assert_eq!(format_axis_tick(500.0), "500");
        assert_eq!(format_axis_tick(25_000.0), "25k");
        assert_eq!(format_axis_tick(2_500_000.0), "2.5m");
    }
}
