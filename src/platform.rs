
use anyhow::Result;
use log::debug;

use crate::abort::Abort;

/// The only value of `std::env::consts::OS` we run on; the bundled libraries are osx builds.
pub const SUPPORTED_OS: &str = "macos";

pub fn ensure_supported_platform(os: &str) -> Result<()> {
    if os != SUPPORTED_OS {
        return Err(Abort::UnsupportedPlatform { os: os.to_string() }.into());
    }
    debug!("running on {}", os);
    Ok(())
}
