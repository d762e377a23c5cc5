//! Hangul syllable layer for Korean Braille transliteration.
//!
//! Precomposed Hangul syllables occupy one contiguous Unicode block of
//! 19 × 21 × 28 = 11172 code points, ordered so that a syllable's offset
//! from the block start encodes its onset, nucleus, and coda indices in a
//! fixed radix. This crate provides the alphabet tables and the positional
//! arithmetic over them.
//!
//! # Architecture
//!
//! - [`jamo`] -- onset/nucleus/coda alphabet tables and symbol-to-index maps
//! - [`syllable`] -- decomposition and composition of syllable blocks

pub mod jamo;
pub mod syllable;

/// Error type for Hangul syllable decomposition and composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HangulError {
    #[error("'{0}' is not a precomposed Hangul syllable")]
    NotSyllable(char),
    #[error("'{0}' is not an onset consonant")]
    UnknownOnset(char),
    #[error("'{0}' is not a nucleus vowel")]
    UnknownNucleus(char),
    #[error("'{0}' is not a coda consonant")]
    UnknownCoda(char),
}
