//! # Display Formatting Helpers
//!
//! Address truncation and amount formatting shared by the header, the
//! connect button, and the feature panels.

/// Shorten an address to `prefix…suffix` for display.
///
/// Works on characters, not bytes, so it is safe for any address alphabet.
/// Addresses too short to shorten meaningfully come back unchanged.
///
/// # Examples
///
/// ```rust
/// use hub_core::utils::shorten_address;
///
/// assert_eq!(shorten_address("0x1234567890abcdef", 6, 4), "0x1234...cdef");
/// assert_eq!(shorten_address("0xabc", 6, 4), "0xabc");
/// ```
pub fn shorten_address(address: &str, prefix: usize, suffix: usize) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= prefix + suffix {
        return address.to_string();
    }
    let head: String = chars[..prefix].iter().collect();
    let tail: String = chars[chars.len() - suffix..].iter().collect();
    format!("{head}...{tail}")
}

/// Shorten with the display default used across the app: six leading and
/// four trailing characters.
pub fn truncate_address(address: &str) -> String {
    shorten_address(address, 6, 4)
}

/// Format an amount with thousands separators and a fixed number of
/// decimals, e.g. `1234567.891 -> "1,234,567.89"`.
pub fn format_amount(value: f64, decimals: usize) -> String {
    let fixed = format!("{value:.decimals$}");
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) if !frac.is_empty() => format!("{sign}{grouped}.{frac}"),
        _ => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_address() {
        let addr = "0x8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKu";
        assert_eq!(shorten_address(addr, 6, 4), "0x8W6Q...fSKu");
        assert_eq!(truncate_address(addr), "0x8W6Q...fSKu");
    }

    #[test]
    fn test_short_addresses_pass_through() {
        assert_eq!(shorten_address("0xabc", 6, 4), "0xabc");
        assert_eq!(shorten_address("", 6, 4), "");
    }

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(1_234_567.891, 2), "1,234,567.89");
        assert_eq!(format_amount(100.0, 2), "100.00");
        assert_eq!(format_amount(999.5, 0), "1,000");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(-12_345.6, 1), "-12,345.6");
    }
}
