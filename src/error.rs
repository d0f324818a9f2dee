use std::io;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Failures the scaffold generator can report.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("invalid architecture_mode `{mode}`; choose 'services' or 'bridge'")]
    InvalidConfiguration { mode: String },

    /// `action` is a short verb phrase such as "creating directory" or "writing".
    #[error("{action} {path}")]
    Filesystem {
        action: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
