//! `mkpasswd` — command-line front end.
//!
//! Parses the options, opens the entropy source chosen at build time and
//! prints one passphrase. Generated values are never logged.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod args;
pub mod logging;

use std::ffi::OsString;
use std::io::Write;

use mkpasswd_core::{generate_and_print, PassphraseError, RandomSource};

#[cfg(feature = "random-device")]
use mkpasswd_core::DeviceEntropy;
#[cfg(not(feature = "random-device"))]
use mkpasswd_core::OsEntropy;

/// Open the entropy source this binary was built for.
///
/// # Errors
///
/// Returns [`PassphraseError::EntropySourceUnavailable`] if the source cannot be opened.
#[cfg(not(feature = "random-device"))]
pub fn open_system_source() -> Result<OsEntropy, PassphraseError> {
    OsEntropy::open()
}

/// Open the entropy source this binary was built for.
///
/// # Errors
///
/// Returns [`PassphraseError::EntropySourceUnavailable`] if the device cannot be opened.
#[cfg(feature = "random-device")]
pub fn open_system_source() -> Result<DeviceEntropy, PassphraseError> {
    DeviceEntropy::open_default()
}

/// Run the program and return its exit status.
///
/// `argv` is the full argument vector including the program name. The source
/// is opened only when a passphrase is actually generated, and dropped before
/// returning.
pub fn run<I, T, F, S, O, E>(argv: I, open_source: F, stdout: O, mut stderr: E) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    F: FnOnce() -> Result<S, PassphraseError>,
    S: RandomSource,
    O: Write,
    E: Write,
{
    let invocation = match args::parse(argv) {
        Ok(invocation) => invocation,
        Err(e) => {
            let _ = write!(stderr, "{}: {e}", args::PROGRAM);
            return u8::try_from(e.exit_code()).unwrap_or(1);
        }
    };

    for ch in &invocation.illegal {
        let _ = writeln!(stderr, "{}: illegal option -- {ch}", args::PROGRAM);
    }

    if invocation.cli.help {
        let _ = stderr.write_all(args::USAGE.as_bytes());
        return 0;
    }

    let separator = invocation.cli.separator();
    tracing::debug!(?separator, "generating passphrase");

    match open_source().and_then(|source| generate_and_print(source, separator, stdout)) {
        Ok(passphrase) => {
            tracing::debug!(bits = passphrase.entropy_bits(), "passphrase written");
            0
        }
        Err(e) => {
            tracing::debug!("generation failed: {e}");
            let _ = writeln!(stderr, "{}: {e}", args::PROGRAM);
            e.exit_code()
        }
    }
}
