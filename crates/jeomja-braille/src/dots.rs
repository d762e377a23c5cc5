// Dot patterns and dot-index notation parsing.

use std::fmt;

use crate::BrailleError;

// ---------------------------------------------------------------------------
// DotPattern
// ---------------------------------------------------------------------------

/// A single Braille cell as a six-bit dot mask.
///
/// Dot *k* (1-6) raised ⇔ bit *k*-1 set, so the value never exceeds 63.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DotPattern(u8);

impl DotPattern {
    /// The blank cell (no raised dots).
    pub const EMPTY: DotPattern = DotPattern(0);

    /// Build a pattern from a raw mask. Bits above the sixth are discarded
    /// so the six-bit invariant holds by construction.
    pub const fn from_bits(bits: u8) -> Self {
        DotPattern(bits & 0x3F)
    }

    /// The raw six-bit mask.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether dot `dot` (1-6) is raised. Out-of-range dots are never raised.
    pub const fn has_dot(self, dot: u8) -> bool {
        dot >= 1 && dot <= 6 && self.0 & (1 << (dot - 1)) != 0
    }

    fn raise(&mut self, dot: u8) {
        self.0 |= 1 << (dot - 1);
    }
}

/// Formats the pattern back into single-cell dot-index notation
/// ("1-2-4-5"); the blank cell formats as the empty string.
impl fmt::Display for DotPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for dot in 1..=6 {
            if self.has_dot(dot) {
                if !first {
                    f.write_str("-")?;
                }
                write!(f, "{dot}")?;
                first = false;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Notation parsing
// ---------------------------------------------------------------------------

/// Parse dot-index notation into one pattern per cell, in cell order.
///
/// Grammar: `notation := cell (',' cell)*`, `cell := digit ('-' digit)*`,
/// digit ∈ 1-6. Digits within a cell need not be sorted but must be
/// unique. Parsing aborts at the first violation: an empty notation, an
/// empty cell (stray comma or hyphen), a non-digit or out-of-range digit,
/// or a duplicate digit.
pub fn parse_notation(notation: &str) -> Result<Vec<DotPattern>, BrailleError> {
    if notation.is_empty() {
        return Err(BrailleError::EmptyNotation);
    }
    let mut patterns = Vec::new();
    for (cell_index, cell) in notation.split(',').enumerate() {
        let mut pattern = DotPattern::EMPTY;
        for token in cell.split('-') {
            let mut chars = token.chars();
            let dot = match (chars.next(), chars.next()) {
                (None, _) => return Err(BrailleError::EmptyCell(cell_index)),
                (Some(c @ '1'..='6'), None) => c as u8 - b'0',
                (Some(c), None) => return Err(BrailleError::InvalidDot(c)),
                // Digits must be hyphen-separated; the run-on character is
                // the offender.
                (Some(_), Some(c)) => return Err(BrailleError::InvalidDot(c)),
            };
            if pattern.has_dot(dot) {
                return Err(BrailleError::DuplicateDot(dot));
            }
            pattern.raise(dot);
        }
        patterns.push(pattern);
    }
    Ok(patterns)
}
