//! Parse-or-zero numeric coercion for form input.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Converts raw form text into a decimal.
///
/// Surrounding whitespace is ignored. Plain (`"12.5"`) and scientific
/// (`"1.25e1"`) notation are accepted. Blank or unparsable text yields zero,
/// so a half-typed row contributes nothing to the totals until it is complete.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use brokerbook_core::ledger::to_number;
///
/// assert_eq!(to_number(" 12.5 "), dec!(12.5));
/// assert_eq!(to_number(""), dec!(0));
/// assert_eq!(to_number("abc"), dec!(0));
/// ```
#[must_use]
pub fn to_number(text: &str) -> Decimal {
    parse_decimal(text).unwrap_or(Decimal::ZERO)
}

/// Parses numeric text, or `None` when it is blank or not a number.
///
/// Digit separators are not accepted (`"1_000"` and `"1,000"` are not
/// numbers). A plain number too large for [`Decimal`] saturates to
/// [`Decimal::MAX`] or [`Decimal::MIN`].
#[must_use]
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() || text.contains('_') {
        return None;
    }

    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
        .or_else(|| saturated(text))
}

fn saturated(text: &str) -> Option<Decimal> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    let plain = !whole.is_empty()
        && whole.bytes().all(|b| b.is_ascii_digit())
        && fraction.bytes().all(|b| b.is_ascii_digit());

    plain.then_some(if negative { Decimal::MIN } else { Decimal::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("10", dec!(10))]
    #[case("2.5", dec!(2.5))]
    #[case("  7 ", dec!(7))]
    #[case("0.001", dec!(0.001))]
    #[case("1e3", dec!(1000))]
    #[case("-4", dec!(-4))]
    fn test_parses_numbers(#[case] text: &str, #[case] expected: Decimal) {
        assert_eq!(to_number(text), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("abc")]
    #[case("12abc")]
    #[case("1,000")]
    #[case("1_000")]
    #[case(".")]
    #[case("--5")]
    fn test_blank_or_invalid_is_zero(#[case] text: &str) {
        assert_eq!(to_number(text), Decimal::ZERO);
    }

    #[rstest]
    #[case("99999999999999999999999999999999", Decimal::MAX)]
    #[case("+99999999999999999999999999999999.5", Decimal::MAX)]
    #[case("-99999999999999999999999999999999", Decimal::MIN)]
    fn test_oversized_number_saturates(#[case] text: &str, #[case] expected: Decimal) {
        assert_eq!(to_number(text), expected);
    }

    #[test]
    fn test_parse_decimal_distinguishes_blank() {
        assert_eq!(parse_decimal(" 3 "), Some(dec!(3)));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("abc"), None);
    }
}
