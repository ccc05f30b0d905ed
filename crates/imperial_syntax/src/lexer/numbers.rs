//! Number scanning for the Imperial lexer.
//!
//! Handles `Numeral` (integer) and `Decimal` literals. A literal is a run of digits with at most one decimal point;
//! a second point ends the literal. Digit limits are checked on the digit strings, so leading zeros count.

use imperial_core::lang::limits::{MAX_DECIMAL_FRAC_DIGITS, MAX_DECIMAL_INT_DIGITS, MAX_NUMERAL_DIGITS};

use super::cursor::{Cursor, Scanned};
use super::tokens::TokenKind;
use crate::diagnostics::errors;

/// Scan a numeral or decimal literal starting at a digit.
pub fn scan_number(cur: Cursor<'_>) -> Scanned<'_> {
    let start = cur.pos();
    let (int_digits, after_int) = cur.eat_while(|c| c.is_ascii_digit());

    let Some(after_dot) = after_int.eat('.') else {
        let span = after_int.span_from(start);
        if int_digits.len() > MAX_NUMERAL_DIGITS {
            return Scanned::error(errors::numeral_too_long(int_digits, span), after_int);
        }
        return match int_digits.parse::<i64>() {
            Ok(value) => Scanned::token(TokenKind::NumeralLit(value), after_int),
            Err(_) => Scanned::error(errors::numeral_too_long(int_digits, span), after_int),
        };
    };

    let (frac_digits, rest) = after_dot.eat_while(|c| c.is_ascii_digit());
    let text = rest.slice_from(start);
    let span = rest.span_from(start);

    if int_digits.len() > MAX_DECIMAL_INT_DIGITS || frac_digits.len() > MAX_DECIMAL_FRAC_DIGITS {
        return Scanned::error(errors::decimal_out_of_range(text, span), rest);
    }

    // `5.` is a decimal with no fractional digits.
    let frac = if frac_digits.is_empty() { "0" } else { frac_digits };
    match format!("{}.{}", int_digits, frac).parse::<f64>() {
        Ok(value) => Scanned::token(TokenKind::DecimalLit(value), rest),
        Err(_) => Scanned::error(errors::decimal_out_of_range(text, span), rest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticKind;

    fn scan(src: &str) -> Result<TokenKind, (DiagnosticKind, String)> {
        scan_number(Cursor::new(src)).result.map_err(|d| (d.kind, d.message))
    }

    #[test]
    fn numerals_decode() {
        assert_eq!(scan("0"), Ok(TokenKind::NumeralLit(0)));
        assert_eq!(scan("42;"), Ok(TokenKind::NumeralLit(42)));
        assert_eq!(scan("999999999"), Ok(TokenKind::NumeralLit(999_999_999)));
    }

    #[test]
    fn ten_digits_is_too_long() {
        assert_eq!(
            scan("1234567890"),
            Err((DiagnosticKind::NumeralTooLong, "1234567890".to_string()))
        );
        // Leading zeros count toward the limit.
        assert_eq!(scan("0000000001").unwrap_err().0, DiagnosticKind::NumeralTooLong);
    }

    #[test]
    fn decimals_decode() {
        assert_eq!(scan("3.25"), Ok(TokenKind::DecimalLit(3.25)));
        assert_eq!(scan("5."), Ok(TokenKind::DecimalLit(5.0)));
        assert_eq!(scan("123456789.123456"), Ok(TokenKind::DecimalLit(123456789.123456)));
    }

    #[test]
    fn decimal_limits() {
        assert_eq!(
            scan("1.1234567"),
            Err((DiagnosticKind::DecimalOutOfRange, "1.1234567".to_string()))
        );
        assert_eq!(scan("1234567890.5").unwrap_err().0, DiagnosticKind::DecimalOutOfRange);
    }

    #[test]
    fn second_point_ends_the_literal() {
        let scanned = scan_number(Cursor::new("1.2.3"));
        assert_eq!(scanned.result, Ok(TokenKind::DecimalLit(1.2)));
        assert_eq!(scanned.rest.peek(), Some('.'));
    }

    #[test]
    fn failed_literal_consumes_its_digits() {
        let scanned = scan_number(Cursor::new("12345678901 x"));
        assert!(scanned.result.is_err());
        assert_eq!(scanned.rest.peek(), Some(' '));
    }
}
