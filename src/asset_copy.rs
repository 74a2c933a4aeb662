
use anyhow::{bail, Result};
use log::{debug, info};

use crate::copy_outcome::CopyOutcome;
use crate::fs_ops::Fs;
use crate::layout::{AssetKind, AssetLayout, AssetPair};

pub struct AssetCopier<'a> {
    fs: &'a Fs,
}

impl <'a> AssetCopier<'a> {
    pub fn new(fs: &'a Fs) -> AssetCopier<'a> {
        AssetCopier { fs }
    }

    /// Copies each pair in order, stops at the first failure.
    pub fn copy_all(&self, layout: &AssetLayout) -> Result<Vec<(AssetKind, CopyOutcome)>> {
        let mut outcomes = Vec::with_capacity(layout.pairs.len());
        for pair in &layout.pairs {
            println!("{}", pair.destination.display());
            let outcome = self.copy_pair(pair)?;
            outcomes.push((pair.kind, outcome));
        }
        Ok(outcomes)
    }

    /// An existing destination is never touched, whatever its content.
    pub fn copy_pair(&self, pair: &AssetPair) -> Result<CopyOutcome> {
        if self.fs.exists(&pair.destination) {
            debug!("{} destination {:?} already exists, skipping", pair.kind, pair.destination);
            return Ok(CopyOutcome::Skipped);
        }
        if !self.fs.is_dir(&pair.source) {
            bail!("{} source directory {:?} not found", pair.kind, pair.source);
        }
        info!("copy {} from {:?} to {:?}", pair.kind, pair.source, pair.destination);
        let bytes = self.fs.copy_tree(&pair.source, &pair.destination)?;
        Ok(CopyOutcome::Copied { bytes })
    }
}

#[cfg(test)]
mod asset_copy_tests {
    use std::path::PathBuf;

    use anyhow::bail;
    use faux::when;

    use crate::copy_outcome::CopyOutcome;
    use crate::fs_ops::Fs;
    use crate::layout::{AssetKind, AssetPair};

    use super::AssetCopier;

    fn lib_pair() -> AssetPair {
        AssetPair {
            kind: AssetKind::Lib,
            source: PathBuf::from("/addon/libs/OpenNI2/lib/osx"),
            destination: PathBuf::from("/project/bin/data/OpenNI2/lib"),
        }
    }

    #[test]
    fn existing_destination_is_skipped() {
        let mut fs = Fs::faux();
        when!(fs.exists).then(|_| true);
        when!(fs.copy_tree).then(|_| bail!("Should not be called"));

        let copier = AssetCopier::new(&fs);
        assert_eq!(copier.copy_pair(&lib_pair()).unwrap(), CopyOutcome::Skipped);
    }

    #[test]
    fn missing_destination_is_copied() {
        let mut fs = Fs::faux();
        when!(fs.exists).then(|_| false);
        when!(fs.is_dir).then(|_| true);
        when!(fs.copy_tree).then(|_| Ok(1234));

        let copier = AssetCopier::new(&fs);
        assert_eq!(copier.copy_pair(&lib_pair()).unwrap(), CopyOutcome::Copied { bytes: 1234 });
    }

    #[test]
    fn missing_source_fails() {
        let mut fs = Fs::faux();
        when!(fs.exists).then(|_| false);
        when!(fs.is_dir).then(|_| false);
        when!(fs.copy_tree).then(|_| bail!("Should not be called"));

        let copier = AssetCopier::new(&fs);
        let error = copier.copy_pair(&lib_pair()).unwrap_err();
        assert!(error.to_string().contains("lib source directory"));
    }

    #[test]
    fn copy_failure_is_propagated() {
        let mut fs = Fs::faux();
        when!(fs.exists).then(|_| false);
        when!(fs.is_dir).then(|_| true);
        when!(fs.copy_tree).then(|_| bail!("disk full"));

        let copier = AssetCopier::new(&fs);
        assert!(copier.copy_pair(&lib_pair()).is_err());
    }
}
