// Syllable block decomposition and composition.

use crate::HangulError;
use crate::jamo::{
    self, CODA_COUNT, CODAS, NUCLEUS_COUNT, NUCLEUSES, ONSETS, SYLLABLE_FIRST, SYLLABLE_LAST,
};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Final-consonant slot of a syllable.
///
/// `Coda::None` is a real value (the syllable ends on its vowel), not a
/// missing one; "slot not computed" is expressed by `Option<Coda>` in
/// [`PartialSyllable`] and the two must not be conflated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coda {
    /// No final consonant (coda index 0).
    None,
    /// One of the 27 final consonant symbols.
    Jamo(char),
}

/// A fully decomposed syllable block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Syllable {
    pub onset: char,
    pub nucleus: char,
    pub coda: Coda,
}

/// A partially decomposed syllable block: `None` in a field means the slot
/// was not requested. A requested-but-absent coda is `Some(Coda::None)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PartialSyllable {
    pub onset: Option<char>,
    pub nucleus: Option<char>,
    pub coda: Option<Coda>,
}

// ---------------------------------------------------------------------------
// Decomposition
// ---------------------------------------------------------------------------

/// Whether `ch` is a precomposed Hangul syllable block.
pub fn is_syllable(ch: char) -> bool {
    (SYLLABLE_FIRST..=SYLLABLE_LAST).contains(&ch)
}

/// Offset of `ch` within the syllable block, or `NotSyllable`.
fn syllable_offset(ch: char) -> Result<u32, HangulError> {
    if !is_syllable(ch) {
        return Err(HangulError::NotSyllable(ch));
    }
    Ok(ch as u32 - SYLLABLE_FIRST as u32)
}

fn onset_at(offset: u32) -> char {
    ONSETS[(offset / (NUCLEUS_COUNT * CODA_COUNT)) as usize]
}

fn nucleus_at(offset: u32) -> char {
    NUCLEUSES[((offset / CODA_COUNT) % NUCLEUS_COUNT) as usize]
}

fn coda_at(offset: u32) -> Coda {
    match (offset % CODA_COUNT) as usize {
        0 => Coda::None,
        i => Coda::Jamo(CODAS[i - 1]),
    }
}

/// Decompose a syllable block into its full phoneme triple.
///
/// Fails with `NotSyllable` for any character outside the precomposed
/// syllable range; Hangul is assumed already precomposed, one code point
/// per syllable.
pub fn decompose(ch: char) -> Result<Syllable, HangulError> {
    let offset = syllable_offset(ch)?;
    Ok(Syllable {
        onset: onset_at(offset),
        nucleus: nucleus_at(offset),
        coda: coda_at(offset),
    })
}

/// Decompose a syllable block, computing only the requested slots.
///
/// Unrequested slots come back as `None`, which for the coda field is
/// distinct from `Some(Coda::None)` (requested, and absent).
pub fn decompose_slots(
    ch: char,
    want_onset: bool,
    want_nucleus: bool,
    want_coda: bool,
) -> Result<PartialSyllable, HangulError> {
    let offset = syllable_offset(ch)?;
    Ok(PartialSyllable {
        onset: want_onset.then(|| onset_at(offset)),
        nucleus: want_nucleus.then(|| nucleus_at(offset)),
        coda: want_coda.then(|| coda_at(offset)),
    })
}

/// Whether `ch` is a syllable block carrying a final consonant.
///
/// Total: non-syllable input answers `false` rather than erroring.
pub fn has_coda(ch: char) -> bool {
    match decompose_slots(ch, false, false, true) {
        Ok(parts) => matches!(parts.coda, Some(Coda::Jamo(_))),
        Err(_) => false,
    }
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Compose a syllable block from its phoneme triple.
///
/// Each symbol is resolved through its alphabet table; a symbol outside
/// its table is an error, never silently corrected. Inverse of
/// [`decompose`] over the whole block.
pub fn compose(onset: char, nucleus: char, coda: Coda) -> Result<char, HangulError> {
    let onset_i = u32::from(jamo::onset_index(onset).ok_or(HangulError::UnknownOnset(onset))?);
    let nucleus_i =
        u32::from(jamo::nucleus_index(nucleus).ok_or(HangulError::UnknownNucleus(nucleus))?);
    let coda_i = match coda {
        Coda::None => 0,
        Coda::Jamo(c) => u32::from(jamo::coda_index(c).ok_or(HangulError::UnknownCoda(c))?),
    };
    let code = SYLLABLE_FIRST as u32 + (onset_i * NUCLEUS_COUNT + nucleus_i) * CODA_COUNT + coda_i;
    // Bounded indices keep the code point inside the syllable block.
    Ok(char::from_u32(code).unwrap_or(SYLLABLE_FIRST))
}

/// Strip the final consonant from a syllable block.
///
/// `remove_coda('각')` is `'가'`; a syllable without a coda passes through
/// unchanged. Fails with `NotSyllable` for non-syllable input.
pub fn remove_coda(ch: char) -> Result<char, HangulError> {
    let parts = decompose_slots(ch, true, true, false)?;
    // Both slots were requested, so they are present.
    let onset = parts.onset.unwrap_or(ONSETS[0]);
    let nucleus = parts.nucleus.unwrap_or(NUCLEUSES[0]);
    compose(onset, nucleus, Coda::None)
}
