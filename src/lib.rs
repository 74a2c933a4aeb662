pub mod abort;
pub mod args;
pub mod asset_copy;
pub mod canon_path;
pub mod copy_outcome;
pub mod fs_ops;
pub mod layout;
pub mod platform;
pub mod progname;
pub mod run;
