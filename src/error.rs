// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TerminalError {
    #[error("Invalid configuration: {field} = {value:?}")]
    Configuration { field: &'static str, value: String },

    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: glib::Error,
    },
}

pub type TerminalResult<T> = Result<T, TerminalError>;
