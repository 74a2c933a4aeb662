
use std::fmt::Display;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use path_clean::PathClean;

use crate::canon_path::CanonPath;

/// Where the library binaries live, relative to the addon root.
pub const LIB_SOURCE: &str = "libs/OpenNI2/lib/osx";
pub const CONFIG_SOURCE: &str = "libs/OpenNI2/config";

/// Where they go, relative to the target project.
pub const LIB_DESTINATION: &str = "bin/data/OpenNI2/lib";
pub const CONFIG_DESTINATION: &str = "bin/data/OpenNI2/config";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Lib,
    Config,
}

impl AssetKind {
    pub fn source(&self) -> &'static str {
        match self {
            AssetKind::Lib => LIB_SOURCE,
            AssetKind::Config => CONFIG_SOURCE,
        }
    }

    pub fn destination(&self) -> &'static str {
        match self {
            AssetKind::Lib => LIB_DESTINATION,
            AssetKind::Config => CONFIG_DESTINATION,
        }
    }
}

impl Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetKind::Lib => write!(f, "lib"),
            AssetKind::Config => write!(f, "config"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssetPair {
    pub kind: AssetKind,
    pub source: PathBuf,
    pub destination: PathBuf,
}

#[derive(Debug)]
pub struct AssetLayout {
    /// Lib first, then config.
    pub pairs: Vec<AssetPair>,
}

impl AssetLayout {
    pub fn new(addon_root: &CanonPath, target: &CanonPath) -> Self {
        let pairs = [AssetKind::Lib, AssetKind::Config].iter()
            .map(|kind| AssetPair {
                kind: *kind,
                source: addon_root.join(kind.source()),
                destination: target.join(kind.destination()),
            })
            .collect();
        AssetLayout { pairs }
    }
}

/// The directory holding `libs/OpenNI2`: the given one, or `<dir of the executable>/..`.
pub fn resolve_addon_root(addon_root: Option<&Path>) -> Result<CanonPath> {
    match addon_root {
        Some(addon_root) => CanonPath::new(addon_root),
        None => {
            let exe = std::env::current_exe()?;
            let exe_dir = match exe.parent() {
                None => bail!("Could not get the directory of {:?}", exe),
                Some(dir) => dir,
            };
            CanonPath::new(exe_dir.join("..").clean())
        }
    }
}
