use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Network Error: {0}")]
    Network(String),

    #[error("Plugin API Error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Response Error: {0}")]
    Response(String),

    #[error("File I/O Error: {0}")]
    Io(String),
}

// Allow conversion from std::io::Error to AppError::Io
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}
