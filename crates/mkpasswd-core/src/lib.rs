//! `mkpasswd-core` — dictionary passphrase generation.
//!
//! Six words are drawn from a fixed 2048-word dictionary, one per 32-bit value
//! read from an entropy source, giving 66 bits of entropy per passphrase.
//! The crate does no I/O besides the entropy backends and the writer handed
//! to [`generate_and_print`].

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod dictionary;

pub mod entropy;

pub mod passphrase;

pub use dictionary::{contains, index_for, word, words, DICTIONARY_SIZE, INDEX_BITS};
pub use entropy::{DeviceEntropy, OsEntropy, RandomSource, DEFAULT_RANDOM_DEVICE};
pub use error::PassphraseError;
pub use passphrase::{
    generate, generate_and_print, Passphrase, Separator, ENTROPY_BITS, WORDS_PER_PHRASE,
};
