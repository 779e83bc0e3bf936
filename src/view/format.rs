use crate::data::model::Number;

/// Thousands-separated rendering of a total, e.g. `1,234,567`.
///
/// Integer totals print without a fractional part. Float totals print their
/// shortest exact form and always show at least one decimal (`5.0`).
pub fn thousands(n: Number) -> String {
    if !n.value.is_finite() {
        return n.value.to_string();
    }
    let text = if n.integral {
        format!("{:.0}", n.value)
    } else if n.value.fract() == 0.0 {
        format!("{:.1}", n.value)
    } else {
        n.value.to_string()
    };

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Growth value with two decimals and a percent sign.
pub fn percent(value: f64) -> String {
    format!("{value:.2}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_group_by_three() {
        assert_eq!(thousands(Number::integer(0.0)), "0");
        assert_eq!(thousands(Number::integer(999.0)), "999");
        assert_eq!(thousands(Number::integer(1000.0)), "1,000");
        assert_eq!(thousands(Number::integer(1234567.0)), "1,234,567");
        assert_eq!(thousands(Number::integer(-45210.0)), "-45,210");
    }

    #[test]
    fn floats_keep_their_fraction() {
        assert_eq!(thousands(Number::float(1234.5)), "1,234.5");
        assert_eq!(thousands(Number::float(5.0)), "5.0");
        assert_eq!(thousands(Number::float(-0.25)), "-0.25");
    }

    #[test]
    fn percent_has_two_decimals() {
        assert_eq!(percent(-8.333333), "-8.33%");
        assert_eq!(percent(0.0), "0.00%");
        assert_eq!(percent(50.0), "50.00%");
    }
}
