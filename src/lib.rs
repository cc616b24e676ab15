//! HugoTerm - a minimal terminal window around the VTE widget
//!
//! The GTK side lives in [`app`] and [`window`]. Everything that can be
//! decided without a display is kept in plain modules:
//! - exit status mapping for the child shell
//! - child environment and command resolution
//! - key chord dispatch and font zoom arithmetic
//! - dynamic abbreviation (Alt+/) over the visible text

pub mod app;
pub mod args;
pub mod color;
pub mod config;
pub mod constants;
pub mod dabbrev;
pub mod environment;
pub mod error;
pub mod exit_status;
pub mod font;
pub mod keys;
pub mod launch;
pub mod window;

// Re-export main types for convenience
pub use args::CliArgs;
pub use color::Rgb;
pub use config::TerminalConfig;
pub use dabbrev::{Edit, Expander, Expansion, Screen};
pub use error::{TerminalError, TerminalResult};
pub use exit_status::ChildExit;
pub use keys::Shortcut;
pub use launch::Launch;
pub use window::TerminalWindow;
