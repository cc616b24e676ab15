// src/app.rs
use crate::args::CliArgs;
use crate::config::TerminalConfig;
use crate::constants::APP_ID;
use crate::window::{TerminalWindow, TRANSPARENT_CLASS};

use gtk4::prelude::*;
use gtk4::{gdk, gio, glib, Application, CssProvider};
use std::cell::Cell;
use std::process::ExitCode;
use std::rc::Rc;

/// Run the application until every window is gone.
///
/// Remote invocations get their exit status through the command-line object;
/// for the primary instance the status of its own window becomes the process
/// exit code.
pub fn run(config: TerminalConfig) -> ExitCode {
    let app = Application::builder()
        .application_id(APP_ID)
        .flags(gio::ApplicationFlags::HANDLES_COMMAND_LINE | gio::ApplicationFlags::SEND_ENVIRONMENT)
        .build();

    app.connect_startup(|_| setup_transparency());

    let config = Rc::new(config);
    let local_status = Rc::new(Cell::new(None));
    {
        let local_status = Rc::clone(&local_status);
        app.connect_command_line(move |app, cmdline| {
            tracing::debug!(remote = cmdline.is_remote(), "command line received");
            match CliArgs::try_from_arguments(cmdline.arguments()) {
                Ok(args) => TerminalWindow::open(
                    app,
                    cmdline,
                    &args,
                    Rc::clone(&config),
                    Rc::clone(&local_status),
                ),
                Err(err) => report_usage(cmdline, &err, &local_status),
            }
            glib::ExitCode::SUCCESS
        });
    }

    let status = app.run();
    if status != glib::ExitCode::SUCCESS {
        return ExitCode::FAILURE;
    }
    match local_status.get() {
        Some(code) => ExitCode::from(code.clamp(0, 255) as u8),
        None => ExitCode::SUCCESS,
    }
}

/// Print a parse error (or `--help`) to the invoking terminal and record its
/// exit code without opening a window.
fn report_usage(
    cmdline: &gio::ApplicationCommandLine,
    err: &clap::Error,
    local_status: &Cell<Option<i32>>,
) {
    let text = err.render().to_string();
    if err.use_stderr() {
        cmdline.printerr_literal(&text);
    } else {
        cmdline.print_literal(&text);
    }

    let code = err.exit_code();
    cmdline.set_exit_status(code);
    if !cmdline.is_remote() {
        local_status.set(Some(code));
    }
}

fn setup_transparency() {
    let css = CssProvider::new();
    css.load_from_data(&format!(
        "window.{TRANSPARENT_CLASS} {{ background-color: transparent; }}"
    ));

    if let Some(display) = gdk::Display::default() {
        gtk4::style_context_add_provider_for_display(
            &display,
            &css,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );

        if display.is_composited() {
            tracing::debug!("compositor available, background opacity enabled");
        } else {
            tracing::warn!("no compositor detected, background will be opaque");
        }
    }
}
