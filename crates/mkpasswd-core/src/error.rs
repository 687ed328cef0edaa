//! Error types for `mkpasswd-core`.

use std::io;

use thiserror::Error;

/// Errors produced while drawing entropy or emitting a passphrase.
#[derive(Debug, Error)]
pub enum PassphraseError {
    /// The entropy source could not be opened (missing device, permissions, sandboxing).
    #[error("unable to open {source_name}: {error}")]
    EntropySourceUnavailable {
        /// Human-readable name of the source, e.g. a device path.
        source_name: String,
        /// Underlying OS error.
        #[source]
        error: io::Error,
    },

    /// A read from an opened source failed or returned fewer bytes than requested.
    #[error("entropy read failed: {0}")]
    EntropyReadFailure(String),

    /// Writing the rendered passphrase failed.
    #[error("failed to write passphrase: {0}")]
    Output(#[source] io::Error),
}

impl PassphraseError {
    /// Process exit status for this error.
    ///
    /// Uses the low byte of the underlying OS error code when there is one,
    /// falling back to `1` so the status is never zero.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        let raw = match self {
            Self::EntropySourceUnavailable { error, .. } | Self::Output(error) => {
                error.raw_os_error()
            }
            Self::EntropyReadFailure(_) => None,
        };
        raw.and_then(|code| u8::try_from(code & 0xff).ok())
            .filter(|code| *code != 0)
            .unwrap_or(1)
    }
}
