// src/environment.rs
use crate::constants::PACKAGE_NAME;
use std::ffi::{OsStr, OsString};

pub const COLORTERM: &str = "COLORTERM";

/// Build the child's environment from `KEY=VALUE` entries.
///
/// Any inherited `COLORTERM` is dropped and `COLORTERM=<package>` is appended
/// so programs in the shell can tell which terminal they run in. Entries
/// without `=` or that are not valid UTF-8 are skipped; the spawn API takes
/// `&str`.
pub fn child_environment<I, S>(inherited: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut env: Vec<String> = inherited
        .into_iter()
        .filter_map(|entry| entry.as_ref().to_str().map(str::to_owned))
        .filter(|entry| match entry.split_once('=') {
            Some((key, _)) => !key.is_empty() && key != COLORTERM,
            None => false,
        })
        .collect();
    env.push(format!("{COLORTERM}={PACKAGE_NAME}"));
    env
}

/// The current process environment as `KEY=VALUE` entries.
pub fn process_environment() -> Vec<OsString> {
    std::env::vars_os()
        .map(|(key, value)| {
            let mut entry = key;
            entry.push("=");
            entry.push(value);
            entry
        })
        .collect()
}

/// Look up `key` in a list of `KEY=VALUE` entries.
pub fn lookup<'a>(env: &'a [String], key: &str) -> Option<&'a str> {
    env.iter().find_map(|entry| {
        let (k, v) = entry.split_once('=')?;
        (k == key).then_some(v)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorterm_rewritten() {
        let env = child_environment(["HOME=/home/hugo", "COLORTERM=truecolor", "TERM=xterm"]);
        assert_eq!(
            env,
            vec![
                "HOME=/home/hugo".to_string(),
                "TERM=xterm".to_string(),
                format!("COLORTERM={PACKAGE_NAME}"),
            ]
        );
    }

    #[test]
    fn test_colorterm_added_when_missing() {
        let env = child_environment(Vec::<OsString>::new());
        assert_eq!(env, vec![format!("COLORTERM={PACKAGE_NAME}")]);
    }

    #[test]
    fn test_malformed_entries_dropped() {
        let env = child_environment(["NOEQUALS", "=value", "EMPTY=", "COLORTERMX=1"]);
        assert_eq!(env[0], "EMPTY=");
        assert_eq!(env[1], "COLORTERMX=1");
        assert_eq!(env.len(), 3);
    }

    #[test]
    fn test_value_with_equals_kept_whole() {
        let env = child_environment(["OPTS=a=b=c"]);
        assert_eq!(lookup(&env, "OPTS"), Some("a=b=c"));
    }

    #[test]
    fn test_lookup() {
        let env = vec!["SHELL=/bin/zsh".to_string(), "PATH=/usr/bin".to_string()];
        assert_eq!(lookup(&env, "SHELL"), Some("/bin/zsh"));
        assert_eq!(lookup(&env, "SHEL"), None);
    }
}
