
pub const PROGNAME: &str = "copyfiles";

/// One-line usage printed when the command line is malformed.
pub fn usage() -> String {
    format!("$ {} [PATH_TO_YOUR_OF_PROJECT]", PROGNAME)
}
