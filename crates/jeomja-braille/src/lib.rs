//! Six-dot Braille cell codec.
//!
//! Braille tables are conventionally written in dot-index notation: the
//! raised dots of one cell listed as digits 1-6 joined by `-`, with `,`
//! separating consecutive cells ("1-2-4-5", "3-4,3-4"). This crate parses
//! that notation into six-bit dot masks and renders the masks as Unicode
//! Braille Patterns glyphs, plus the per-character tables that drive it.
//!
//! # Architecture
//!
//! - [`dots`] -- dot-index notation parsing into [`dots::DotPattern`] masks
//! - [`cell`] -- rendering dot patterns as Braille Patterns glyphs
//! - [`number`] -- the decimal-digit character table

pub mod cell;
pub mod dots;
pub mod number;

/// Error type for Braille notation parsing and table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BrailleError {
    /// The notation string was empty.
    #[error("empty dot notation")]
    EmptyNotation,
    /// A cell had no digits (stray comma or hyphen); the payload is the
    /// zero-based cell position.
    #[error("empty cell at position {0} in dot notation")]
    EmptyCell(usize),
    /// A character where a dot digit 1-6 was expected.
    #[error("invalid dot index '{0}', expected a digit 1-6")]
    InvalidDot(char),
    /// The same dot listed twice within one cell.
    #[error("dot {0} listed twice in one cell")]
    DuplicateDot(u8),
    /// The character has no entry in the consulted table.
    #[error("no Braille mapping for character '{0}'")]
    UnsupportedCharacter(char),
}
