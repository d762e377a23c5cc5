// Rendering dot patterns as Unicode Braille Patterns glyphs.

use crate::BrailleError;
use crate::dots::{DotPattern, parse_notation};

/// First code point of the Unicode Braille Patterns block (the blank cell);
/// a cell's glyph sits at this base plus its dot mask.
pub const CELL_BASE: char = '\u{2800}';

/// Render one dot pattern as its Braille glyph.
///
/// Total: every six-bit mask has a glyph in the block.
pub fn to_char(pattern: DotPattern) -> char {
    // Masks are six bits, so the offset stays inside the 256-glyph block.
    char::from_u32(CELL_BASE as u32 + u32::from(pattern.bits())).unwrap_or(CELL_BASE)
}

/// Recover the dot pattern of a rendered six-dot cell.
///
/// `None` for characters outside the six-dot range of the block (including
/// the eight-dot glyphs in its upper half).
pub fn from_char(glyph: char) -> Option<DotPattern> {
    let offset = (glyph as u32).checked_sub(CELL_BASE as u32)?;
    if offset > 0x3F {
        return None;
    }
    Some(DotPattern::from_bits(offset as u8))
}

/// Render a cell sequence in order. Empty input renders as the empty string.
pub fn render(patterns: &[DotPattern]) -> String {
    patterns.iter().map(|&p| to_char(p)).collect()
}

/// Parse dot-index notation and render every cell it names.
///
/// The primary entry point for table-driven callers; parse errors
/// propagate unchanged.
pub fn from_notation(notation: &str) -> Result<String, BrailleError> {
    Ok(render(&parse_notation(notation)?))
}
