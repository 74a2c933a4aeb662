
use std::fmt::Display;
use std::path::PathBuf;

use crate::progname::usage;

/// Fatal conditions that end the program with a dedicated exit status.
///
/// They travel inside `anyhow::Error` and are recovered in `main` with
/// `downcast_ref::<Abort>()`; any other error is a plain failure (status 1).
#[derive(Debug, PartialEq)]
pub enum Abort {
    /// The host is not macOS. Nothing is printed.
    UnsupportedPlatform { os: String },
    /// Anything but exactly one argument.
    BadUsage,
    /// The (absolutized) target project directory does not exist.
    TargetNotFound { path: PathBuf },
}

impl Abort {
    pub fn exit_code(&self) -> u8 {
        match self {
            Abort::UnsupportedPlatform { .. } => 255,
            Abort::BadUsage => 1,
            Abort::TargetNotFound { .. } => 255,
        }
    }

    /// What goes to stdout before exiting, if anything.
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            Abort::UnsupportedPlatform { .. } => None,
            Abort::BadUsage => Some(usage()),
            Abort::TargetNotFound { path } => Some(format!("err: project dir not found ({:?})", path)),
        }
    }
}

impl Display for Abort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Abort::UnsupportedPlatform { os } => write!(f, "unsupported platform {}", os),
            Abort::BadUsage => write!(f, "bad usage"),
            Abort::TargetNotFound { path } => write!(f, "project dir not found {:?}", path),
        }
    }
}

impl std::error::Error for Abort {}
