//! Number formatting for reports and terminal output

/// Group digits in threes with commas, e.g. `1923` -> `1,923`
#[must_use]
pub fn format_count(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Round to one decimal place, halves away from zero (`2.25` -> `2.3`)
fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// One decimal place, e.g. `22.1034` -> `22.1`
#[must_use]
pub fn format_ratio(value: f64) -> String {
    format!("{:.1}", round_tenths(value))
}

/// One decimal place with a percent sign, e.g. `62.07` -> `62.1%`
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", round_tenths(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1923), "1,923");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn one_decimal() {
        assert_eq!(format_ratio(1923.0 / 87.0), "22.1");
        assert_eq!(format_ratio(0.0), "0.0");
        assert_eq!(format_percent(54.0 / 87.0 * 100.0), "62.1%");
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(format_ratio(9.0 / 4.0), "2.3");
        assert_eq!(format_ratio(0.25), "0.3");
        assert_eq!(format_percent(62.25), "62.3%");
        assert_eq!(format_percent(0.25), "0.3%");
    }
}
