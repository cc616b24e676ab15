// src/window.rs
use crate::args::CliArgs;
use crate::config::TerminalConfig;
use crate::constants::PACKAGE_NAME;
use crate::dabbrev::{Edit, Expander, Expansion, Screen};
use crate::environment::{child_environment, process_environment};
use crate::error::TerminalError;
use crate::exit_status::{ChildExit, EXIT_UNKNOWN};
use crate::font;
use crate::keys::{stops_expansion, Shortcut};
use crate::launch::Launch;

use glib::Propagation;
use gtk4::prelude::*;
use gtk4::{gdk, gio, Application, ApplicationWindow, EventControllerKey, PropagationPhase};
use std::cell::{Cell, RefCell};
use std::path::Path;
use std::rc::Rc;
use vte4::prelude::*;

/// CSS class that lets the terminal background alpha show through.
pub const TRANSPARENT_CLASS: &str = "hugoterm";

/// One command-line invocation waiting for its window to go away.
struct Invocation {
    cmdline: gio::ApplicationCommandLine,
    local_status: Rc<Cell<Option<i32>>>,
    _hold: gio::ApplicationHoldGuard,
}

impl Invocation {
    fn finish(self, code: i32) {
        self.cmdline.set_exit_status(code);
        if !self.cmdline.is_remote() {
            self.local_status.set(Some(code));
        }
        // Dropping the hold guard lets the application quit once the last
        // window is gone.
    }
}

type SharedInvocation = Rc<RefCell<Option<Invocation>>>;

/// Main terminal window - one per command-line invocation
pub struct TerminalWindow {
    window: ApplicationWindow,
    terminal: vte4::Terminal,
    config: Rc<TerminalConfig>,
    invocation: SharedInvocation,
    expander: Rc<RefCell<Expander>>,
}

impl TerminalWindow {
    /// Open a window for `cmdline` and start its child. The application stays
    /// alive until the child exits or the window is closed.
    pub fn open(
        app: &Application,
        cmdline: &gio::ApplicationCommandLine,
        args: &CliArgs,
        config: Rc<TerminalConfig>,
        local_status: Rc<Cell<Option<i32>>>,
    ) {
        let window = ApplicationWindow::builder()
            .application(app)
            .title(PACKAGE_NAME)
            .build();
        window.add_css_class(TRANSPARENT_CLASS);

        let terminal = vte4::Terminal::new();
        terminal.set_hexpand(true);
        terminal.set_vexpand(true);
        window.set_child(Some(&terminal));

        let invocation = Rc::new(RefCell::new(Some(Invocation {
            cmdline: cmdline.clone(),
            local_status,
            _hold: app.hold(),
        })));

        let this = Self {
            window,
            terminal,
            config,
            invocation,
            expander: Rc::new(RefCell::new(Expander::new())),
        };

        this.apply_config();
        this.connect_title();
        this.connect_child_exit();
        this.connect_close();
        this.connect_keys();
        this.connect_font_metrics();

        this.window.present();
        this.terminal.grab_focus();

        this.spawn(Self::launch_for(cmdline, args));
    }

    fn launch_for(cmdline: &gio::ApplicationCommandLine, args: &CliArgs) -> Launch {
        let environ = cmdline.environ();
        let env = if cmdline.is_remote() && !environ.is_empty() {
            child_environment(environ)
        } else {
            child_environment(process_environment())
        };
        Launch::resolve(args, env, cmdline.cwd())
    }

    /// Property setter sequence for a fresh terminal.
    fn apply_config(&self) {
        let term = &self.terminal;
        let config = &self.config;

        term.set_word_char_exceptions(&config.word_chars);
        term.set_scrollback_lines(config.scrollback_lines);
        term.set_scroll_on_output(config.scroll_on_output);
        term.set_scroll_on_keystroke(config.scroll_on_keystroke);

        let fg = config.default_fg.to_opaque_rgba();
        let bg = config.default_bg.to_rgba(config.opacity);
        let palette: Vec<gdk::RGBA> = config.palette.iter().map(|c| c.to_opaque_rgba()).collect();
        let palette: Vec<&gdk::RGBA> = palette.iter().collect();
        term.set_colors(Some(&fg), Some(&bg), &palette);
        term.set_color_cursor(Some(&config.cursor_color.to_opaque_rgba()));
        term.set_cursor_blink_mode(vte4::CursorBlinkMode::Off);
        term.set_bold_is_bright(config.bold_is_bright);
        font::reset(term, &config.font);

        term.set_audible_bell(config.audible_bell);
    }

    #[allow(deprecated)]
    fn connect_title(&self) {
        let window = self.window.downgrade();
        self.terminal.connect_window_title_changed(move |term| {
            let Some(window) = window.upgrade() else { return };
            let title = term.window_title();
            window.set_title(Some(title.as_deref().filter(|t| !t.is_empty()).unwrap_or(PACKAGE_NAME)));
        });
    }

    fn connect_child_exit(&self) {
        let window = self.window.downgrade();
        let invocation = Rc::clone(&self.invocation);
        self.terminal.connect_child_exited(move |_, status| {
            let exit = ChildExit::from_wait_status(status);
            tracing::info!(?exit, code = exit.exit_code(), "child exited");
            finish(&invocation, &window, exit.exit_code());
        });
    }

    fn connect_close(&self) {
        let invocation = Rc::clone(&self.invocation);
        self.window.connect_close_request(move |_| {
            // Closed by the user while the child still runs.
            if invocation.borrow_mut().take().is_some() {
                tracing::debug!("window closed before child exit");
            }
            Propagation::Proceed
        });
    }

    fn connect_keys(&self) {
        let key_controller = EventControllerKey::new();
        // Run before VTE so the chords never reach the child.
        key_controller.set_propagation_phase(PropagationPhase::Capture);

        let terminal = self.terminal.downgrade();
        let config = Rc::clone(&self.config);
        let expander = Rc::clone(&self.expander);

        key_controller.connect_key_pressed(move |controller, keyval, _keycode, state| {
            let Some(terminal) = terminal.upgrade() else {
                return Propagation::Proceed;
            };

            let shortcut = Shortcut::from_key(keyval, state);
            let is_modifier = controller
                .current_event()
                .and_then(|event| event.downcast::<gdk::KeyEvent>().ok())
                .is_some_and(|event| event.is_modifier());
            if stops_expansion(is_modifier, shortcut) {
                expander.borrow_mut().stop();
            }

            match shortcut {
                Some(Shortcut::ZoomIn) => font::zoom(&terminal, 1),
                Some(Shortcut::ZoomOut) => font::zoom(&terminal, -1),
                Some(Shortcut::ZoomReset) => font::reset(&terminal, &config.font),
                Some(Shortcut::ExpandWord) => expand_word(&terminal, &expander, &config),
                None => return Propagation::Proceed,
            }
            Propagation::Stop
        });

        self.terminal.add_controller(key_controller);
    }

    /// Re-apply the font when the cell size or the screen resolution changes.
    fn connect_font_metrics(&self) {
        self.terminal
            .connect_char_size_changed(|term, _width, _height| font::zoom(term, 0));

        let Some(settings) = gtk4::Settings::default() else {
            tracing::warn!("no GtkSettings, DPI changes will not rescale the font");
            return;
        };
        let terminal = self.terminal.downgrade();
        let handler = settings.connect_gtk_xft_dpi_notify(move |_| {
            if let Some(terminal) = terminal.upgrade() {
                font::zoom(&terminal, 0);
            }
        });
        let handler = RefCell::new(Some(handler));
        self.window.connect_destroy(move |_| {
            if let Some(handler) = handler.borrow_mut().take() {
                settings.disconnect(handler);
            }
        });
    }

    fn spawn(&self, launch: Launch) {
        tracing::info!(argv = ?launch.argv, cwd = ?launch.working_directory, "spawning child");

        let argv: Vec<&str> = launch.argv.iter().map(String::as_str).collect();
        let envv: Vec<&str> = launch.env.iter().map(String::as_str).collect();
        let cwd = launch.working_directory.as_deref().and_then(Path::to_str);
        let program = launch.program().to_string();

        let window = self.window.downgrade();
        let invocation = Rc::clone(&self.invocation);

        self.terminal.spawn_async(
            vte4::PtyFlags::DEFAULT,
            cwd,
            &argv,
            &envv,
            glib::SpawnFlags::SEARCH_PATH,
            || {},
            -1,
            gio::Cancellable::NONE,
            move |result| match result {
                Ok(pid) => tracing::debug!(pid = pid.0, "child started"),
                Err(source) => {
                    let err = TerminalError::Spawn { program, source };
                    tracing::error!("{err}");
                    finish(&invocation, &window, EXIT_UNKNOWN);
                }
            },
        );
    }
}

/// Report `code` for the invocation and tear the window down.
fn finish(invocation: &SharedInvocation, window: &glib::WeakRef<ApplicationWindow>, code: i32) {
    if let Some(invocation) = invocation.borrow_mut().take() {
        invocation.finish(code);
    }
    if let Some(window) = window.upgrade() {
        window.destroy();
    }
}

/// Text of the rows `start_row..=end_row` up to `end_col`. Rows that
/// soft-wrap come back joined to the next one.
fn text_range(terminal: &vte4::Terminal, start_row: i64, end_row: i64, end_col: i64) -> String {
    if end_row < start_row {
        return String::new();
    }
    let (text, _len) =
        terminal.text_range_format(vte4::Format::Text, start_row, 0, end_row, end_col);
    text.map(|t| t.to_string()).unwrap_or_default()
}

/// Snapshot the visible rows. The cursor row is read on its own so its
/// offset does not depend on how many rows above it wrapped.
fn read_screen(terminal: &vte4::Terminal) -> Option<Screen> {
    let (col, row) = terminal.cursor_position();
    let top = terminal.vadjustment().map_or(0.0, |adj| adj.value()) as i64;
    let bottom = top + terminal.row_count() - 1;
    let cols = terminal.column_count();
    if row < top || row > bottom {
        return None;
    }

    // Ending at column 0 of the cursor row keeps the break (or the lack of
    // one) after the previous row.
    let above = if row > top { text_range(terminal, top, row, 0) } else { String::new() };
    let line = text_range(terminal, row, row, cols);
    let below = text_range(terminal, row + 1, bottom, cols);

    Some(Screen::from_rows(&above, &line, usize::try_from(col).ok()?, &below))
}

fn feed(terminal: &vte4::Terminal, edit: &Edit) {
    if !edit.is_empty() {
        terminal.feed_child(&edit.to_bytes());
    }
}

fn expand_word(terminal: &vte4::Terminal, expander: &RefCell<Expander>, config: &TerminalConfig) {
    let expansion = expander
        .borrow_mut()
        .expand(|| read_screen(terminal), |c| config.is_word_char(c));

    match expansion {
        Expansion::Insert(edit) => feed(terminal, &edit),
        Expansion::Exhausted(edit) => {
            feed(terminal, &edit);
            terminal.error_bell();
        }
        Expansion::NoCandidates => terminal.error_bell(),
    }
}
