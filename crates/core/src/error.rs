use thiserror::Error;

/// Error type shared by every gauge crate.
///
/// Builders never produce errors; these come from loading gauge files and
/// from the rendering stage.
#[derive(Debug, Error)]
pub enum GaugeError {
    #[error("config error: {0}")]
    Config(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = GaugeError> = std::result::Result<T, E>;
