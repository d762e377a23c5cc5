//! Exhaustive properties over the full precomposed syllable block.
//!
//! The in-module unit tests cover spot values; these walk all 11172 code
//! points to prove the decompose/compose bijection.

use std::collections::HashSet;

use jeomja_core::jamo::{SYLLABLE_FIRST, SYLLABLE_LAST};
use jeomja_core::syllable::{Coda, compose, decompose, has_coda, remove_coda};

fn all_syllables() -> impl Iterator<Item = char> {
    (SYLLABLE_FIRST as u32..=SYLLABLE_LAST as u32).filter_map(char::from_u32)
}

// ---------------------------------------------------------------------------
// Bijection
// ---------------------------------------------------------------------------

#[test]
fn compose_inverts_decompose_everywhere() {
    let mut count = 0usize;
    for ch in all_syllables() {
        let s = decompose(ch).unwrap_or_else(|e| panic!("{ch}: {e}"));
        assert_eq!(compose(s.onset, s.nucleus, s.coda), Ok(ch));
        count += 1;
    }
    assert_eq!(count, 11172);
}

#[test]
fn no_two_syllables_share_a_triple() {
    let mut seen = HashSet::new();
    for ch in all_syllables() {
        let s = decompose(ch).unwrap();
        assert!(seen.insert((s.onset, s.nucleus, s.coda)), "duplicate triple for {ch}");
    }
    assert_eq!(seen.len(), 11172);
}

// ---------------------------------------------------------------------------
// Coda queries
// ---------------------------------------------------------------------------

#[test]
fn coda_population() {
    // 27 of every 28 consecutive syllables carry a coda.
    let with_coda = all_syllables().filter(|&ch| has_coda(ch)).count();
    assert_eq!(with_coda, 19 * 21 * 27);
}

#[test]
fn remove_coda_lands_on_open_syllable() {
    for ch in all_syllables() {
        let open = remove_coda(ch).unwrap();
        assert!(!has_coda(open));
        let s = decompose(open).unwrap();
        assert_eq!(s.coda, Coda::None);
        let orig = decompose(ch).unwrap();
        assert_eq!((s.onset, s.nucleus), (orig.onset, orig.nucleus));
    }
}
