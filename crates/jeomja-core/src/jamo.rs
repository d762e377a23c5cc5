// Jamo alphabet tables and symbol-to-index lookup.

use std::sync::LazyLock;

use hashbrown::HashMap;

// ---------------------------------------------------------------------------
// Syllable block boundaries
// ---------------------------------------------------------------------------

/// First code point of the precomposed Hangul syllable block (가).
pub const SYLLABLE_FIRST: char = '\u{AC00}';

/// Last code point of the precomposed Hangul syllable block (힣).
pub const SYLLABLE_LAST: char = '\u{D7A3}';

// ---------------------------------------------------------------------------
// Alphabet tables
//
// The ordering is the Unicode johab ordering: a syllable's offset from
// SYLLABLE_FIRST is (onset * 21 + nucleus) * 28 + coda, so these indices
// are load-bearing and must not be reordered.
// ---------------------------------------------------------------------------

/// Onset (leading consonant) symbols, indices 0-18.
pub const ONSETS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ',
    'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// Nucleus (vowel) symbols, indices 0-20.
pub const NUCLEUSES: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ',
    'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// Coda (final consonant or cluster) symbols.
///
/// Coda *index* space is 0..=27: index 0 is the absent-coda sentinel and
/// carries no symbol, so `CODAS[i - 1]` is the symbol for coda index `i`.
pub const CODAS: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ',
    'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// Number of nucleus symbols.
pub const NUCLEUS_COUNT: u32 = NUCLEUSES.len() as u32;

/// Number of coda index values, including the absent-coda sentinel.
pub const CODA_COUNT: u32 = CODAS.len() as u32 + 1;

// ---------------------------------------------------------------------------
// Reverse maps (symbol -> index)
//
// Built once on first use and read-only afterwards, so lookups are O(1)
// and safe to share across threads.
// ---------------------------------------------------------------------------

static ONSET_INDEX: LazyLock<HashMap<char, u8>> = LazyLock::new(|| {
    ONSETS
        .iter()
        .enumerate()
        .map(|(i, &c)| (c, i as u8))
        .collect()
});

static NUCLEUS_INDEX: LazyLock<HashMap<char, u8>> = LazyLock::new(|| {
    NUCLEUSES
        .iter()
        .enumerate()
        .map(|(i, &c)| (c, i as u8))
        .collect()
});

static CODA_INDEX: LazyLock<HashMap<char, u8>> = LazyLock::new(|| {
    CODAS
        .iter()
        .enumerate()
        .map(|(i, &c)| (c, i as u8 + 1))
        .collect()
});

/// Index of `c` in the onset alphabet (0-18), or `None` if `c` is not an
/// onset consonant.
pub fn onset_index(c: char) -> Option<u8> {
    ONSET_INDEX.get(&c).copied()
}

/// Index of `c` in the nucleus alphabet (0-20), or `None` if `c` is not a
/// nucleus vowel.
pub fn nucleus_index(c: char) -> Option<u8> {
    NUCLEUS_INDEX.get(&c).copied()
}

/// Coda index of `c` (1-27), or `None` if `c` is not a coda consonant.
/// Index 0 (no coda) has no symbol and is never returned here.
pub fn coda_index(c: char) -> Option<u8> {
    CODA_INDEX.get(&c).copied()
}

/// Whether `c` can fill the onset slot of a syllable.
pub fn is_onset(c: char) -> bool {
    onset_index(c).is_some()
}

/// Whether `c` can fill the nucleus slot of a syllable.
pub fn is_nucleus(c: char) -> bool {
    nucleus_index(c).is_some()
}

/// Whether `c` can fill the coda slot of a syllable.
pub fn is_coda(c: char) -> bool {
    coda_index(c).is_some()
}
