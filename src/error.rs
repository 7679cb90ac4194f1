use std::path::PathBuf;
use thiserror::Error;

/// Failure to open a document at startup
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("could not load {}: {reason}", path.display())]
    Unreadable { path: PathBuf, reason: String },
    #[error("{} contains no pages", .0.display())]
    Empty(PathBuf),
}

/// Failure to rasterize a single page
#[derive(Debug, Error)]
#[error("failed to render page {}: {reason}", page + 1)]
pub struct RenderError {
    /// Zero-based page index
    pub page: usize,
    pub reason: String,
}

impl RenderError {
    pub fn new(page: usize, reason: impl Into<String>) -> Self {
        Self { page, reason: reason.into() }
    }
}

/// Anything that prevents the viewer window from opening
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("PDF engine unavailable: {0}")]
    Engine(String),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("the first page could not be displayed: {0}")]
    FirstPage(#[source] RenderError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_error_reports_one_based_page() {
        let err = RenderError::new(2, "bad content stream");
        assert_eq!(err.to_string(), "failed to render page 3: bad content stream");
    }

    #[test]
    fn load_error_converts_into_startup_error() {
        let err: StartupError = LoadError::NotFound(PathBuf::from("missing.pdf")).into();
        assert!(matches!(err, StartupError::Load(LoadError::NotFound(_))));
        assert_eq!(err.to_string(), "file not found: missing.pdf");
    }
}
