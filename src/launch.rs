// src/launch.rs
use crate::args::CliArgs;
use crate::constants::FALLBACK_SHELL;
use crate::environment::lookup;
use std::path::PathBuf;

/// What to run inside a new terminal window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launch {
    pub argv: Vec<String>,
    pub working_directory: Option<PathBuf>,
    pub env: Vec<String>,
}

impl Launch {
    /// Resolve the child command for one invocation: the command given on
    /// the command line, otherwise `$SHELL` from `env`, otherwise `/bin/sh`.
    pub fn resolve(args: &CliArgs, env: Vec<String>, cwd: Option<PathBuf>) -> Self {
        let argv = if args.command.is_empty() {
            let shell = lookup(&env, "SHELL")
                .filter(|shell| !shell.is_empty())
                .unwrap_or(FALLBACK_SHELL);
            vec![shell.to_string()]
        } else {
            args.command.clone()
        };

        Self {
            argv,
            working_directory: cwd.filter(|dir| dir.is_dir()),
            env,
        }
    }

    pub fn program(&self) -> &str {
        self.argv.first().map(String::as_str).unwrap_or(FALLBACK_SHELL)
    }
}
