use std::path::PathBuf;

/// Errors raised around the renderer: reading inputs, loading settings and
/// producing documents. Rendering itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("refusing to overwrite input file {}", .0.display())]
    OverwritesInput(PathBuf),

    #[error("invalid chat JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Typst compilation failed: {0}")]
    Compile(String),

    #[error("PDF generation failed: {0}")]
    Pdf(String),
}

pub type Result<T> = std::result::Result<T, Error>;
