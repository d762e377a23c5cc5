// Decimal-digit Braille table (Korean Braille number notation).

use crate::BrailleError;
use crate::cell;

/// Dot notation for one decimal digit.
///
/// Arithmetic operators (`+ - * / =` and the decimal comma) have no
/// verified dot patterns in the source documents and stay unmapped until
/// they are.
fn digit_notation(ch: char) -> Option<&'static str> {
    match ch {
        '0' => Some("2-4-5"),
        '1' => Some("1"),
        '2' => Some("1-2"),
        '3' => Some("1-4"),
        '4' => Some("1-4-5"),
        '5' => Some("1-5"),
        '6' => Some("1-2-4"),
        '7' => Some("1-2-4-5"),
        '8' => Some("1-2-5"),
        '9' => Some("2-4"),
        _ => None,
    }
}

/// Dot notation for a digit, with contextual rules applied.
///
/// Digits have no positional Braille variants, so this agrees with
/// [`notation_without_rules`]; both entry points exist because other
/// character classes diverge between the two.
pub fn notation(ch: char) -> Result<&'static str, BrailleError> {
    digit_notation(ch).ok_or(BrailleError::UnsupportedCharacter(ch))
}

/// Dot notation for a digit, ignoring contextual rules.
pub fn notation_without_rules(ch: char) -> Result<&'static str, BrailleError> {
    // Digits read the same with or without number rules.
    notation(ch)
}

/// Render a digit as Braille cells, with contextual rules applied.
pub fn to_braille(ch: char) -> Result<String, BrailleError> {
    cell::from_notation(notation(ch)?)
}

/// Render a digit as Braille cells, ignoring contextual rules.
pub fn to_braille_without_rules(ch: char) -> Result<String, BrailleError> {
    cell::from_notation(notation_without_rules(ch)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Lookup --

    #[test]
    fn every_digit_is_mapped() {
        for d in '0'..='9' {
            assert!(notation(d).is_ok(), "digit {d} missing from table");
        }
    }

    #[test]
    fn known_notations() {
        assert_eq!(notation('0'), Ok("2-4-5"));
        assert_eq!(notation('1'), Ok("1"));
        assert_eq!(notation('7'), Ok("1-2-4-5"));
        assert_eq!(notation('9'), Ok("2-4"));
    }

    #[test]
    fn rule_modes_agree_for_digits() {
        for d in '0'..='9' {
            assert_eq!(notation(d), notation_without_rules(d));
            assert_eq!(to_braille(d), to_braille_without_rules(d));
        }
    }

    // -- Rendering --

    #[test]
    fn digit_glyphs() {
        assert_eq!(to_braille('7'), Ok("⠛".to_string()));
        assert_eq!(to_braille('0'), Ok("⠚".to_string()));
        assert_eq!(to_braille('1'), Ok("⠁".to_string()));
    }

    #[test]
    fn digits_render_one_cell() {
        for d in '0'..='9' {
            assert_eq!(to_braille(d).unwrap().chars().count(), 1);
        }
    }

    // -- Misses --

    #[test]
    fn non_digits_are_unsupported() {
        for ch in ['a', '가', ' ', ',', '+', '-', '*', '/', '='] {
            assert_eq!(notation(ch), Err(BrailleError::UnsupportedCharacter(ch)));
            assert_eq!(
                notation_without_rules(ch),
                Err(BrailleError::UnsupportedCharacter(ch))
            );
        }
    }
}
