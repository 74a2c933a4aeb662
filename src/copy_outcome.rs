
#[derive(Debug, Clone, PartialEq)]
pub enum CopyOutcome {
    Copied { bytes: u64 },
    /// The destination was already there; it was left alone.
    Skipped,
}

impl CopyOutcome {
    pub fn wrote(&self) -> bool {
        match self {
            CopyOutcome::Copied { .. } => true,
            CopyOutcome::Skipped => false,
        }
    }
}
