use serde::Deserialize;

/// How a numeric signal is rendered. Applied by the caller on every update;
/// the animation itself never formats.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    pub decimals: usize,
    pub group_digits: bool,
    pub prefix: String,
    pub suffix: String,
}

impl NumberFormat {
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return format!("{}{}{}", self.prefix, value, self.suffix);
        }

        let fixed = format!("{:.*}", self.decimals, value.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (fixed.as_str(), None),
        };

        let mut out = String::with_capacity(fixed.len() + self.prefix.len() + self.suffix.len() + 4);
        // Values that round to zero lose their sign.
        if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
            out.push('-');
        }
        out.push_str(&self.prefix);
        if self.group_digits {
            out.push_str(&group_thousands(int_part));
        } else {
            out.push_str(int_part);
        }
        if let Some(frac_part) = frac_part {
            out.push('.');
            out.push_str(frac_part);
        }
        out.push_str(&self.suffix);
        out
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(decimals: usize, group_digits: bool, prefix: &str, suffix: &str) -> NumberFormat {
        NumberFormat {
            decimals,
            group_digits,
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        }
    }

    #[test]
    fn groups_large_integers() {
        let format = fmt(0, true, "", "");
        assert_eq!(format.format(982_000.0), "982,000");
        assert_eq!(format.format(1_234_567.4), "1,234,567");
        assert_eq!(format.format(999.0), "999");
        assert_eq!(format.format(0.0), "0");
    }

    #[test]
    fn fixed_decimals_with_affixes() {
        assert_eq!(fmt(1, false, "£", "B").format(42.5), "£42.5B");
        assert_eq!(fmt(2, false, "", "%").format(99.25), "99.25%");
        assert_eq!(fmt(2, false, "", "%").format(86.84375), "86.84%");
        assert_eq!(fmt(0, false, "", "x").format(6.6), "7x");
    }

    #[test]
    fn grouping_keeps_fraction_intact() {
        assert_eq!(fmt(2, true, "£", "").format(26_800.5), "£26,800.50");
    }

    #[test]
    fn negative_values_put_sign_before_prefix() {
        assert_eq!(fmt(0, true, "£", "").format(-1500.0), "-£1,500");
        assert_eq!(fmt(1, false, "", "").format(-0.01), "0.0");
    }

    #[test]
    fn missing_fields_default_when_deserialized() {
        let format: NumberFormat = serde_json::from_str(r#"{ "suffix": "%" }"#).unwrap();
        assert_eq!(format, fmt(0, false, "", "%"));
    }
}
