//! Input validation
//!
//! Pure syntax checks for record names and amounts. Nothing here logs; the
//! engine records validation failures in the audit log.

use crate::types::{Amount, LedgerError};

/// Check that `name` matches `^[A-Za-z][A-Za-z0-9]*$`
///
/// # Errors
///
/// Returns `InvalidName` if the name is empty, starts with anything other than
/// an ASCII letter, or contains a character that is not an ASCII letter or digit.
pub fn validate_name(name: &str) -> Result<(), LedgerError> {
    let mut chars = name.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());

    if starts_with_letter && chars.all(|c| c.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err(LedgerError::invalid_name(name))
    }
}

/// Parse a non-negative decimal amount
///
/// Only ASCII digits are accepted: no sign, no whitespace, no separators.
/// Zero is accepted here; rejecting it is a caller policy (see [`require_positive`]).
///
/// # Errors
///
/// Returns `InvalidAmount` if the text is empty, contains a non-digit, or
/// does not fit in an [`Amount`].
pub fn validate_amount(amount: &str) -> Result<Amount, LedgerError> {
    if amount.is_empty() || !amount.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LedgerError::invalid_amount(
            amount,
            "must contain only decimal digits",
        ));
    }

    amount
        .parse::<Amount>()
        .map_err(|_| LedgerError::invalid_amount(amount, "exceeds the maximum amount"))
}

/// Reject a zero amount for operations that must change something
pub fn require_positive(amount: Amount, raw: &str, reason: &str) -> Result<Amount, LedgerError> {
    if amount == 0 {
        Err(LedgerError::invalid_amount(raw, reason))
    } else {
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::single_letter("A")]
    #[case::lowercase("alice")]
    #[case::mixed_case("McDonald")]
    #[case::trailing_digits("Record1")]
    #[case::digits_inside("a1b2c3")]
    fn test_validate_name_accepts(#[case] name: &str) {
        assert!(validate_name(name).is_ok());
    }

    #[rstest]
    #[case::empty("")]
    #[case::leading_digit("1Record")]
    #[case::space("Mary Ann")]
    #[case::comma("Bob,5")]
    #[case::underscore("first_name")]
    #[case::hyphen("Jean-Luc")]
    #[case::non_ascii("Zoë")]
    #[case::leading_space(" Bob")]
    fn test_validate_name_rejects(#[case] name: &str) {
        assert_eq!(validate_name(name), Err(LedgerError::invalid_name(name)));
    }

    #[rstest]
    #[case::zero("0", 0)]
    #[case::small("7", 7)]
    #[case::leading_zeros("007", 7)]
    #[case::large("18446744073709551615", u64::MAX)]
    fn test_validate_amount_accepts(#[case] amount: &str, #[case] expected: Amount) {
        assert_eq!(validate_amount(amount), Ok(expected));
    }

    #[rstest]
    #[case::empty("")]
    #[case::negative("-5")]
    #[case::plus_sign("+5")]
    #[case::decimal("1.5")]
    #[case::letters("ten")]
    #[case::whitespace(" 5")]
    #[case::too_large("18446744073709551616")]
    fn test_validate_amount_rejects(#[case] amount: &str) {
        assert!(matches!(
            validate_amount(amount),
            Err(LedgerError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive(3, "3", "nothing to add"), Ok(3));
        assert_eq!(
            require_positive(0, "0", "nothing to add"),
            Err(LedgerError::invalid_amount("0", "nothing to add"))
        );
    }
}
