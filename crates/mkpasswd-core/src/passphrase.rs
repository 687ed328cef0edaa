//! Passphrase generation and rendering.
//!
//! [`generate`] draws [`WORDS_PER_PHRASE`] values from a [`RandomSource`],
//! reduces each modulo the dictionary size and looks the word up.
//! [`generate_and_print`] additionally writes the result as one line.

use std::fmt;
use std::io::Write;

use zeroize::Zeroizing;

use crate::dictionary::{self, INDEX_BITS};
use crate::entropy::RandomSource;
use crate::error::PassphraseError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of words in every passphrase.
pub const WORDS_PER_PHRASE: usize = 6;

/// Entropy of a passphrase in bits (6 × 11).
#[allow(clippy::cast_possible_truncation)]
pub const ENTROPY_BITS: u32 = WORDS_PER_PHRASE as u32 * INDEX_BITS;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Separator placed between consecutive words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Separator {
    /// No separator: `AbeBathCowl`
    #[default]
    None,
    /// Dash: `Abe-Bath-Cowl`
    Dash,
    /// Space: `Abe Bath Cowl`
    Space,
}

impl Separator {
    /// Returns the string representation of this separator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Dash => "-",
            Self::Space => " ",
        }
    }
}

/// A generated passphrase.
///
/// `Debug` is manually implemented to mask the words and prevent accidental
/// logging of secret material.
#[derive(Clone, PartialEq, Eq)]
pub struct Passphrase {
    words: Vec<&'static str>,
    separator: Separator,
}

impl Passphrase {
    /// Selected words, in draw order.
    #[must_use]
    pub fn words(&self) -> &[&'static str] {
        &self.words
    }

    /// Separator used by [`Passphrase::render`].
    #[must_use]
    pub const fn separator(&self) -> Separator {
        self.separator
    }

    /// Entropy of this passphrase in bits.
    #[must_use]
    pub const fn entropy_bits(&self) -> u32 {
        ENTROPY_BITS
    }

    /// Join the words with the separator. No trailing newline.
    ///
    /// The returned buffer is zeroed when dropped. It is allocated once with
    /// one spare byte, so appending a newline does not reallocate and leave a
    /// stale copy behind.
    #[must_use]
    pub fn render(&self) -> Zeroizing<String> {
        let sep = self.separator.as_str();
        let capacity = self
            .words
            .iter()
            .map(|w| w.len().saturating_add(sep.len()))
            .sum::<usize>()
            .saturating_add(1);
        let mut out = Zeroizing::new(String::with_capacity(capacity));
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                out.push_str(sep);
            }
            out.push_str(word);
        }
        out
    }
}

impl fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Passphrase")
            .field("words", &"***")
            .field("separator", &self.separator)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Draw a passphrase from `source`.
///
/// Exactly [`WORDS_PER_PHRASE`] values are read, in slot order. The first
/// failed draw aborts generation; partial passphrases are never returned.
///
/// # Errors
///
/// Propagates [`PassphraseError::EntropyReadFailure`] from the source.
pub fn generate<S: RandomSource>(
    mut source: S,
    separator: Separator,
) -> Result<Passphrase, PassphraseError> {
    let table = dictionary::words();
    let mut words = Vec::with_capacity(WORDS_PER_PHRASE);
    for _ in 0..WORDS_PER_PHRASE {
        let value = source.next_u32()?;
        words.push(table[dictionary::index_for(value)]);
    }
    Ok(Passphrase { words, separator })
}

/// Generate a passphrase and write it to `out` as a single line.
///
/// Nothing is written if generation fails.
///
/// # Errors
///
/// Returns the generation error, or [`PassphraseError::Output`] if writing fails.
pub fn generate_and_print<S: RandomSource, W: Write>(
    source: S,
    separator: Separator,
    mut out: W,
) -> Result<Passphrase, PassphraseError> {
    let passphrase = generate(source, separator)?;
    let mut line = passphrase.render();
    line.push('\n');
    out.write_all(line.as_bytes())
        .and_then(|()| out.flush())
        .map_err(PassphraseError::Output)?;
    Ok(passphrase)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
