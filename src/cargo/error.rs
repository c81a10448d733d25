use std::process::ExitStatus;

use thiserror::Error;

use crate::parser::traits::ParseError;

#[derive(Debug, Error)]
pub enum CargoError {
    #[error("I/O error running \"{command}\": {source}")]
    Io {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("\"{command}\" failed ({status}): {stderr}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}
