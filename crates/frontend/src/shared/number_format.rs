//! Number formatting for money columns

/// Formats an amount in minor units with a space as thousands separator
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_minor_units;
/// assert_eq!(format_minor_units(1234567), "1 234 567");
/// ```
pub fn format_minor_units(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(' ');
        }
        result.push(c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_minor_units() {
        assert_eq!(format_minor_units(0), "0");
        assert_eq!(format_minor_units(999), "999");
        assert_eq!(format_minor_units(1000), "1 000");
        assert_eq!(format_minor_units(4500250), "4 500 250");
    }
}
