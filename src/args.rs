
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser as _;
use clap_derive::Parser;
use log::debug;

use crate::abort::Abort;
use crate::progname::PROGNAME;


#[derive(Parser, Debug, Default)]
#[command(name = PROGNAME)]
#[command(about = "Copies the OpenNI2 libraries and configuration into an openFrameworks project", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {

    /// Path of the project receiving the files (in `bin/data/OpenNI2`).
    /// Taken as is, even when it looks like an option.
    #[arg(allow_hyphen_values = true)]
    pub target_project: PathBuf,
}

impl Cli {
    /// Parses the command line (program name first).
    /// Anything but exactly one argument is `Abort::BadUsage`.
    pub fn parse_args<I, T>(args: I) -> Result<Cli>
            where I: IntoIterator<Item = T>, T: Into<OsString> + Clone {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if args.len() != 2 {
            debug!("expected one argument, got {}", args.len().saturating_sub(1));
            return Err(Abort::BadUsage.into());
        }
        match Cli::try_parse_from(args) {
            Ok(cli) => Ok(cli),
            Err(error) => {
                debug!("invalid command line\n{}", error);
                Err(Abort::BadUsage.into())
            }
        }
    }
}
