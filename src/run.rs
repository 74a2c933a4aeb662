
use std::ffi::OsString;
use std::path::Path;

use anyhow::Result;
use log::info;

use crate::abort::Abort;
use crate::args::Cli;
use crate::asset_copy::AssetCopier;
use crate::canon_path::CanonPath;
use crate::copy_outcome::CopyOutcome;
use crate::fs_ops::Fs;
use crate::layout::{resolve_addon_root, AssetKind, AssetLayout};
use crate::platform::ensure_supported_platform;

#[derive(Debug)]
pub struct CopyReport {
    pub target: CanonPath,
    pub outcomes: Vec<(AssetKind, CopyOutcome)>,
}

impl CopyReport {
    pub fn outcome(&self, kind: AssetKind) -> Option<&CopyOutcome> {
        self.outcomes.iter().find(|(k, _)| *k == kind).map(|(_, outcome)| outcome)
    }
}

/// The whole program, from the raw command line: platform, arguments, then copies.
/// Nothing is written before all three checks have passed.
/// `addon_root` is where `libs/OpenNI2` is looked up; `None` means next to the executable.
pub fn execute<I, T>(args: I, host_os: &str, addon_root: Option<&Path>) -> Result<CopyReport>
        where I: IntoIterator<Item = T>, T: Into<OsString> + Clone {
    ensure_supported_platform(host_os)?;
    let cli = Cli::parse_args(args)?;
    run(&cli, addon_root)
}

pub fn run(cli: &Cli, addon_root: Option<&Path>) -> Result<CopyReport> {
    let target = CanonPath::new(&cli.target_project)?;
    if !target.exists() {
        return Err(Abort::TargetNotFound { path: target.path().to_path_buf() }.into());
    }
    println!("target_project = {}", target);

    let addon_root = resolve_addon_root(addon_root)?;
    info!("addon root = {}", addon_root);

    let layout = AssetLayout::new(&addon_root, &target);
    let fs = Fs::new();
    let copier = AssetCopier::new(&fs);
    let outcomes = copier.copy_all(&layout)?;

    Ok(CopyReport { target, outcomes })
}
