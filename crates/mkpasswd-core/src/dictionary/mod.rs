//! The fixed passphrase dictionary.
//!
//! 2048 words of three or four letters, embedded at compile time via
//! `include_str!` and parsed once on first access using `OnceLock`.
//! Words keep their original capitalisation (`Abe`, `Zoo`).

use std::sync::OnceLock;

/// Number of words in the dictionary (2^11).
pub const DICTIONARY_SIZE: usize = 2048;

/// Bits of entropy contributed by one uniformly chosen word.
pub const INDEX_BITS: u32 = DICTIONARY_SIZE.trailing_zeros();

const WORDS_RAW: &str = include_str!("words.txt");

static WORDS_LOCK: OnceLock<Box<[&'static str]>> = OnceLock::new();

/// Returns the parsed dictionary, in index order.
///
/// # Panics
///
/// Panics if the embedded word file does not contain exactly
/// [`DICTIONARY_SIZE`] words.
#[must_use]
pub fn words() -> &'static [&'static str] {
    WORDS_LOCK.get_or_init(|| {
        let words: Vec<&'static str> = WORDS_RAW.lines().map(str::trim).collect();
        assert!(
            words.len() == DICTIONARY_SIZE,
            "dictionary must contain exactly {DICTIONARY_SIZE} words, got {}",
            words.len()
        );
        words.into_boxed_slice()
    })
}

/// Word at `index`, or `None` past the end of the dictionary.
#[must_use]
pub fn word(index: usize) -> Option<&'static str> {
    words().get(index).copied()
}

/// Map a 32-bit random value onto a dictionary index.
///
/// 2048 divides 2^32 evenly, so a uniform `value` yields a uniform index.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn index_for(value: u32) -> usize {
    (value % DICTIONARY_SIZE as u32) as usize
}

/// Returns `true` if `candidate` is a dictionary word (exact match).
#[must_use]
pub fn contains(candidate: &str) -> bool {
    words().contains(&candidate)
}
