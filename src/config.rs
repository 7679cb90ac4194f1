use std::path::PathBuf;

/// Resolution used when no override is given
pub const DEFAULT_DPI: f32 = 150.0;

/// PDF user space unit: 1 point = 1/72 inch
pub const POINTS_PER_INCH: f32 = 72.0;

/// Runtime settings for the viewer
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Rasterization resolution in dots per inch
    pub dpi: f32,
    /// Initial inner window size in logical pixels
    pub window_size: [f32; 2],
    /// Horizontal space kept free around the page
    pub margin_x: f32,
    /// Vertical space kept free around the page (status line included)
    pub margin_y: f32,
    /// Directory containing the Pdfium shared library, if not installed system-wide
    pub pdfium_dir: Option<PathBuf>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            window_size: [800.0, 600.0],
            margin_x: 20.0,
            margin_y: 50.0,
            pdfium_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_resolution_is_150_dpi() {
        let config = ViewerConfig::default();
        assert_eq!(config.dpi, 150.0);
        assert_eq!(config.window_size, [800.0, 600.0]);
        assert!(config.pdfium_dir.is_none());
    }
}
