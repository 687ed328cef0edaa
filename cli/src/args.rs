//! Command-line option parsing.
//!
//! Options follow `getopt(3)` conventions: flags may be clustered (`-ds`),
//! scanning stops at `--` or the first operand, and unknown flag characters
//! are reported but otherwise ignored. The scan normalises the arguments into
//! individual flags before handing them to `clap`, where `-d` and `-s`
//! override each other so the last one given wins.

use std::ffi::OsString;

use clap::{ArgAction, Parser};
use mkpasswd_core::Separator;

/// Program name used in diagnostics and usage.
pub const PROGRAM: &str = "mkpasswd";

/// Usage text printed for `-h`.
pub const USAGE: &str = "usage: mkpasswd [-dsh]
  -h : print this message
  -d : delimit words with dashes
  -s : delimit words with spaces
  (default) : no delimiters
";

const KNOWN_FLAGS: [char; 3] = ['d', 's', 'h'];

#[derive(Debug, Parser)]
#[command(name = PROGRAM, about = "Generate a six-word passphrase", disable_help_flag = true)]
pub struct Cli {
    /// Delimit words with dashes
    #[arg(short = 'd', action = ArgAction::SetTrue, overrides_with = "spaces")]
    pub dashes: bool,

    /// Delimit words with spaces
    #[arg(short = 's', action = ArgAction::SetTrue, overrides_with = "dashes")]
    pub spaces: bool,

    /// Print usage and exit
    #[arg(short = 'h', action = ArgAction::SetTrue)]
    pub help: bool,
}

impl Cli {
    /// Separator selected by the flags.
    #[must_use]
    pub const fn separator(&self) -> Separator {
        if self.dashes {
            Separator::Dash
        } else if self.spaces {
            Separator::Space
        } else {
            Separator::None
        }
    }
}

/// Result of scanning the command line.
#[derive(Debug)]
pub struct Invocation {
    /// Parsed flags.
    pub cli: Cli,
    /// Unknown flag characters, in the order they were seen.
    pub illegal: Vec<char>,
}

/// Parse a full argument vector (including the program name).
///
/// Unknown flags end up in [`Invocation::illegal`] rather than failing.
///
/// # Errors
///
/// Returns the `clap` error if the normalised flags are rejected. The scan
/// only emits known flags, each at most once.
pub fn parse<I, T>(args: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let (flags, illegal) = scan(args.into_iter().skip(1).map(Into::into));

    let normalized = std::iter::once(PROGRAM.to_string())
        .chain(flags.iter().map(|flag| format!("-{flag}")));
    let cli = Cli::try_parse_from(normalized)?;

    Ok(Invocation { cli, illegal })
}

/// getopt-style scan. Returns the known flags (each kept once, at its last
/// position) and the unknown flag characters.
fn scan(args: impl Iterator<Item = OsString>) -> (Vec<char>, Vec<char>) {
    let mut seen = Vec::new();
    let mut illegal = Vec::new();

    'args: for arg in args {
        let arg = arg.to_string_lossy().into_owned();
        if arg == "--" || arg == "-" || !arg.starts_with('-') {
            break;
        }
        for ch in arg.chars().skip(1) {
            if KNOWN_FLAGS.contains(&ch) {
                seen.push(ch);
                // getopt callers exit on -h; later arguments are never examined.
                if ch == 'h' {
                    break 'args;
                }
            } else {
                illegal.push(ch);
            }
        }
    }

    let mut flags: Vec<char> = Vec::with_capacity(KNOWN_FLAGS.len());
    for ch in seen.into_iter().rev() {
        if !flags.contains(&ch) {
            flags.push(ch);
        }
    }
    flags.reverse();

    (flags, illegal)
}
