#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! Property-based tests for passphrase generation.

use std::collections::VecDeque;

use mkpasswd_core::{
    contains, generate, index_for, word, PassphraseError, RandomSource, Separator,
    DICTIONARY_SIZE, WORDS_PER_PHRASE,
};
use proptest::prelude::*;

/// Deterministic stand-in for the OS generator.
///
/// Also defined in the `passphrase` unit tests; kept separate since unit-test
/// helpers are not visible to integration tests.
struct Scripted(VecDeque<u32>);

impl RandomSource for Scripted {
    fn next_u32(&mut self) -> Result<u32, PassphraseError> {
        self.0
            .pop_front()
            .ok_or_else(|| PassphraseError::EntropyReadFailure("script exhausted".into()))
    }
}

fn separator_strategy() -> impl Strategy<Value = Separator> {
    prop_oneof![
        Just(Separator::None),
        Just(Separator::Dash),
        Just(Separator::Space),
    ]
}

proptest! {
    /// Each slot picks the word at `value % 2048`, in draw order.
    #[test]
    fn words_follow_modulo_mapping(
        values in prop::collection::vec(any::<u32>(), WORDS_PER_PHRASE),
        sep in separator_strategy(),
    ) {
        let pp = generate(Scripted(values.iter().copied().collect()), sep).unwrap();
        prop_assert_eq!(pp.words().len(), WORDS_PER_PHRASE);
        for (value, selected) in values.iter().zip(pp.words()) {
            prop_assert_eq!(Some(*selected), word(index_for(*value)));
        }
    }

    /// Values congruent modulo 2048 select the same word.
    #[test]
    fn congruent_values_select_same_word(value in any::<u32>(), k in 0u32..1024) {
        let shifted = (value % DICTIONARY_SIZE as u32).wrapping_add(k * DICTIONARY_SIZE as u32);
        prop_assert_eq!(index_for(value), index_for(shifted));
    }

    /// Splitting a rendered dashed or spaced passphrase recovers six dictionary words.
    #[test]
    fn rendered_output_splits_into_dictionary_words(
        values in prop::collection::vec(any::<u32>(), WORDS_PER_PHRASE),
        dashed in any::<bool>(),
    ) {
        let (sep, ch) = if dashed { (Separator::Dash, '-') } else { (Separator::Space, ' ') };
        let pp = generate(Scripted(values.into_iter().collect()), sep).unwrap();
        let rendered = pp.render();
        prop_assert!(!rendered.starts_with(ch) && !rendered.ends_with(ch));
        prop_assert_eq!(rendered.matches(ch).count(), WORDS_PER_PHRASE - 1);
        let parts: Vec<&str> = rendered.split(ch).collect();
        prop_assert_eq!(parts.len(), WORDS_PER_PHRASE);
        for part in parts {
            prop_assert!(contains(part), "'{}' is not a dictionary word", part);
        }
    }

    /// Without a separator the output is purely alphabetic.
    #[test]
    fn unseparated_output_is_alphabetic(
        values in prop::collection::vec(any::<u32>(), WORDS_PER_PHRASE),
    ) {
        let pp = generate(Scripted(values.into_iter().collect()), Separator::None).unwrap();
        let rendered = pp.render();
        prop_assert!(rendered.chars().all(|c| c.is_ascii_alphabetic()));
        prop_assert!((18..=24).contains(&rendered.len()));
    }

    /// Any script shorter than six values fails.
    #[test]
    fn short_scripts_fail(values in prop::collection::vec(any::<u32>(), 0..WORDS_PER_PHRASE)) {
        let result = generate(Scripted(values.into_iter().collect()), Separator::Dash);
        prop_assert!(matches!(result, Err(PassphraseError::EntropyReadFailure(_))));
    }
}
