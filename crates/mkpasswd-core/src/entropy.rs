//! Entropy sources.
//!
//! [`RandomSource`] is the only capability the generator needs: "give me the
//! next uniformly distributed `u32`, or fail". Two backends are provided:
//! - [`OsEntropy`] — the platform secure random API via `OsRng` (default)
//! - [`DeviceEntropy`] — a random character device read directly

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::PassphraseError;

/// Random device used by [`DeviceEntropy::open_default`].
///
/// Linux `/dev/random` may block waiting for entropy, so `/dev/urandom` is
/// used there. The BSDs and macOS share one non-blocking CSPRNG behind
/// `/dev/random`.
#[cfg(target_os = "linux")]
pub const DEFAULT_RANDOM_DEVICE: &str = "/dev/urandom";

/// Random device used by [`DeviceEntropy::open_default`].
#[cfg(not(target_os = "linux"))]
pub const DEFAULT_RANDOM_DEVICE: &str = "/dev/random";

/// Name reported when the OS random generator is unavailable.
const OS_SOURCE_NAME: &str = "system random generator";

/// A source of uniformly distributed 32-bit values.
pub trait RandomSource {
    /// Draw the next value.
    ///
    /// # Errors
    ///
    /// Returns [`PassphraseError::EntropyReadFailure`] if the source cannot
    /// supply a full value.
    fn next_u32(&mut self) -> Result<u32, PassphraseError>;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_u32(&mut self) -> Result<u32, PassphraseError> {
        (**self).next_u32()
    }
}

// ---------------------------------------------------------------------------
// OsEntropy
// ---------------------------------------------------------------------------

/// Entropy from the operating system's secure random API (`getrandom(2)`,
/// `getentropy(2)`, `BCryptGenRandom`, ...), through `OsRng`.
///
/// Blocking behaviour is whatever the platform facility decides.
#[derive(Debug, Clone, Copy)]
pub struct OsEntropy {
    _private: (),
}

impl OsEntropy {
    /// Check that the OS generator answers, then return a handle to it.
    ///
    /// # Errors
    ///
    /// Returns [`PassphraseError::EntropySourceUnavailable`] if the probe draw fails.
    pub fn open() -> Result<Self, PassphraseError> {
        let mut probe = [0u8; 4];
        OsRng
            .try_fill_bytes(&mut probe)
            .map_err(|e| PassphraseError::EntropySourceUnavailable {
                source_name: OS_SOURCE_NAME.to_string(),
                error: rand_error_to_io(&e),
            })?;
        tracing::debug!("opened {OS_SOURCE_NAME}");
        Ok(Self { _private: () })
    }
}

impl RandomSource for OsEntropy {
    fn next_u32(&mut self) -> Result<u32, PassphraseError> {
        let mut buf = [0u8; 4];
        OsRng
            .try_fill_bytes(&mut buf)
            .map_err(|e| PassphraseError::EntropyReadFailure(e.to_string()))?;
        Ok(u32::from_ne_bytes(buf))
    }
}

fn rand_error_to_io(err: &rand::Error) -> io::Error {
    err.raw_os_error().map_or_else(
        || io::Error::other(err.to_string()),
        io::Error::from_raw_os_error,
    )
}

// ---------------------------------------------------------------------------
// DeviceEntropy
// ---------------------------------------------------------------------------

/// Entropy read from a random character device such as `/dev/urandom`.
///
/// The device is opened once and closed when the value is dropped.
#[derive(Debug)]
pub struct DeviceEntropy {
    path: PathBuf,
    file: File,
}

impl DeviceEntropy {
    /// Open the platform's [`DEFAULT_RANDOM_DEVICE`].
    ///
    /// # Errors
    ///
    /// Returns [`PassphraseError::EntropySourceUnavailable`] if the device cannot be opened.
    pub fn open_default() -> Result<Self, PassphraseError> {
        Self::open(DEFAULT_RANDOM_DEVICE)
    }

    /// Open the device (or file) at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PassphraseError::EntropySourceUnavailable`] if `path` cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PassphraseError> {
        let path = path.as_ref().to_path_buf();
        let file =
            File::open(&path).map_err(|error| PassphraseError::EntropySourceUnavailable {
                source_name: path.display().to_string(),
                error,
            })?;
        tracing::debug!(device = %path.display(), "opened random device");
        Ok(Self { path, file })
    }

    /// Path this source was opened from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RandomSource for DeviceEntropy {
    /// Reads exactly four bytes. `read_exact` already retries `EINTR`; a short
    /// read (end of file) or any other error is fatal.
    fn next_u32(&mut self) -> Result<u32, PassphraseError> {
        let mut buf = [0u8; 4];
        self.file.read_exact(&mut buf).map_err(|e| {
            let reason = if e.kind() == io::ErrorKind::UnexpectedEof {
                "short read".to_string()
            } else {
                e.to_string()
            };
            PassphraseError::EntropyReadFailure(format!("{}: {reason}", self.path.display()))
        })?;
        Ok(u32::from_ne_bytes(buf))
    }
}
