use std::ffi::OsString;

pub use clap::Parser;

use crate::Result;

#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[clap(version, about)]
pub struct Options {
    /// Name of the project
    pub project_name: Option<String>,

    /// Template to generate from [default: RestAPI]
    #[clap(long, short)]
    pub template: Option<String>,
}

impl Options {
    /// Parses `argv`, including the program name in first position.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Parse`] on malformed flags, and also for
    /// `--help` and `--version` which clap reports as errors.
    pub fn parse_from_args<I, T>(argv: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Ok(Self::try_parse_from(argv)?)
    }
}
