// src/args.rs
use crate::constants::PACKAGE_NAME;
use clap::Parser;
use std::ffi::OsString;

#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = PACKAGE_NAME)]
#[command(about = "A minimal terminal window around the VTE widget")]
pub struct CliArgs {
    #[arg(short = 'e', long = "execute", help = "Run COMMAND instead of the shell")]
    pub execute: bool,

    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        help = "Command and arguments to run (default: $SHELL)"
    )]
    pub command: Vec<String>,
}

impl CliArgs {
    /// Parse a full invocation, program name included. `--help` comes back
    /// as an error whose exit code is 0.
    pub fn try_from_arguments<I, T>(arguments: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(arguments)
    }
}
