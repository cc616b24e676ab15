// tests/terminal_integration_tests.rs
//! Integration tests for the display-independent parts of a terminal session

use hugoterm::constants::{FALLBACK_SHELL, PACKAGE_NAME};
use hugoterm::environment::{child_environment, lookup};
use hugoterm::{ChildExit, CliArgs, Edit, Expander, Expansion, Launch, Screen, TerminalConfig};

fn cli(list: &[&str]) -> CliArgs {
    CliArgs::try_from_arguments(list.iter().copied()).unwrap()
}

#[test]
fn test_remote_invocation_launch() {
    // Environment as a second `hugoterm` process would forward it.
    let forwarded = ["SHELL=/usr/bin/fish", "COLORTERM=truecolor", "LANG=C.UTF-8"];
    let env = child_environment(forwarded);
    let launch = Launch::resolve(&cli(&["hugoterm"]), env, Some(std::env::temp_dir()));

    assert_eq!(launch.argv, vec!["/usr/bin/fish"]);
    assert_eq!(lookup(&launch.env, "COLORTERM"), Some(PACKAGE_NAME));
    assert_eq!(lookup(&launch.env, "LANG"), Some("C.UTF-8"));
    assert_eq!(launch.env.iter().filter(|e| e.starts_with("COLORTERM=")).count(), 1);
    assert!(launch.working_directory.is_some());
}

#[test]
fn test_command_overrides_shell() {
    let env = child_environment(["SHELL=/bin/zsh"]);
    let launch = Launch::resolve(&cli(&["hugoterm", "-e", "top"]), env, None);
    assert_eq!(launch.program(), "top");
}

#[test]
fn test_no_shell_anywhere() {
    let launch = Launch::resolve(&cli(&["hugoterm"]), child_environment(["PATH=/bin"]), None);
    assert_eq!(launch.program(), FALLBACK_SHELL);
}

#[test]
fn test_bad_invocation_opens_nothing() {
    let err = CliArgs::try_from_arguments(["hugoterm", "--bogus"]).unwrap_err();
    assert_eq!(err.exit_code(), 2);
    assert!(err.render().to_string().contains("--bogus"));
}

#[test]
fn test_exit_code_table() {
    let cases = [
        (0x0000, 0),   // exit 0
        (0x0100, 1),   // exit 1
        (0x7f00, 127), // exit 127
        (0x0002, 130), // SIGINT
        (0x000f, 143), // SIGTERM
        (0x137f, 127), // stopped by SIGSTOP
    ];
    for (raw, code) in cases {
        assert_eq!(ChildExit::from_wait_status(raw).exit_code(), code, "raw status {raw:#06x}");
    }
}

#[test]
fn test_word_expansion_session() {
    let config = TerminalConfig::default();
    let screen = Screen::from_rows(
        "$ cat /etc/hostname\n$ ls /etc/host.conf /etc/hosts\n",
        "$ vim /etc/ho",
        13,
        "",
    );

    let mut expander = Expander::new();
    let mut typed = String::from("/etc/ho");
    let apply = |expansion: &Expansion, typed: &mut String| {
        let edit = match expansion {
            Expansion::Insert(edit) | Expansion::Exhausted(edit) => edit,
            Expansion::NoCandidates => return,
        };
        for _ in 0..edit.erase {
            typed.pop();
        }
        typed.push_str(&edit.insert);
    };

    let first = expander.expand(|| Some(screen.clone()), |c| config.is_word_char(c));
    apply(&first, &mut typed);
    assert_eq!(typed, "/etc/hosts");

    let second = expander.expand(|| None, |c| config.is_word_char(c));
    apply(&second, &mut typed);
    assert_eq!(typed, "/etc/host.conf");

    let third = expander.expand(|| None, |c| config.is_word_char(c));
    apply(&third, &mut typed);
    assert_eq!(typed, "/etc/hostname");

    let done = expander.expand(|| None, |c| config.is_word_char(c));
    assert!(matches!(done, Expansion::Exhausted(_)));
    apply(&done, &mut typed);
    assert_eq!(typed, "/etc/ho");
    assert!(!expander.is_active());
}

#[test]
fn test_expansion_bytes_fed_to_child() {
    let screen = Screen::from_rows("hello\n", "he", 2, "");
    let mut expander = Expander::new();
    let expansion = expander.expand(|| Some(screen), char::is_alphanumeric);
    assert_eq!(expansion, Expansion::Insert(Edit { erase: 0, insert: "llo".to_string() }));

    let Expansion::Exhausted(restore) = expander.expand(|| None, char::is_alphanumeric) else {
        panic!("expected the candidate list to be exhausted");
    };
    assert_eq!(restore.to_bytes(), vec![0x7f, 0x7f, 0x7f]);
}
