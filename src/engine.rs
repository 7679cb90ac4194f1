//! The PDF engine seam.
//!
//! Parsing and rasterization are delegated entirely to Pdfium. The rest of the
//! crate only sees the two traits below, which keeps the session logic testable
//! without a native library or a display.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use log::{debug, info};
use pdfium_render::prelude::*;

use crate::config::{ViewerConfig, POINTS_PER_INCH};
use crate::error::{LoadError, RenderError, StartupError};

/// A rasterized page, straight RGBA
pub type Bitmap = RgbaImage;

/// An open document that can be rasterized page by page
pub trait PageSource {
    fn page_count(&self) -> usize;

    /// Rasterize page `index` (zero-based) at `dpi` dots per inch
    fn render_page(&self, index: usize, dpi: f32) -> Result<Bitmap, RenderError>;
}

/// Opens documents from disk
pub trait DocumentLoader {
    type Document: PageSource;

    fn load(&self, path: &Path) -> Result<Self::Document, LoadError>;
}

/// Bind to the Pdfium shared library.
///
/// Looks in the configured directory first, then next to the executable and in
/// the working directory, and finally falls back to the system library.
pub fn bind_pdfium(config: &ViewerConfig) -> Result<Pdfium, StartupError> {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(dir) = &config.pdfium_dir {
        candidates.push(dir.clone());
    }
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        candidates.push(exe_dir);
    }
    candidates.push(PathBuf::from("./"));

    for dir in &candidates {
        match Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir)) {
            Ok(bindings) => {
                info!("Bound to Pdfium in {}", dir.display());
                return Ok(Pdfium::new(bindings));
            }
            Err(err) => debug!("No usable Pdfium in {}: {:?}", dir.display(), err),
        }
    }

    Pdfium::bind_to_system_library()
        .map(|bindings| {
            info!("Bound to system Pdfium library");
            Pdfium::new(bindings)
        })
        .map_err(|err| StartupError::Engine(err.to_string()))
}

/// Loads documents through a bound Pdfium instance
pub struct PdfiumLoader<'a> {
    pdfium: &'a Pdfium,
}

impl<'a> PdfiumLoader<'a> {
    pub fn new(pdfium: &'a Pdfium) -> Self {
        Self { pdfium }
    }
}

impl<'a> DocumentLoader for PdfiumLoader<'a> {
    type Document = PdfiumDocument<'a>;

    fn load(&self, path: &Path) -> Result<Self::Document, LoadError> {
        let document = self
            .pdfium
            .load_pdf_from_file(path, None)
            .map_err(|err| LoadError::Unreadable {
                path: path.to_path_buf(),
                reason: err.to_string(),
            })?;
        Ok(PdfiumDocument { document })
    }
}

/// A document opened by Pdfium. Closed when dropped.
pub struct PdfiumDocument<'a> {
    document: PdfDocument<'a>,
}

impl<'a> PageSource for PdfiumDocument<'a> {
    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    fn render_page(&self, index: usize, dpi: f32) -> Result<Bitmap, RenderError> {
        let page_index = u16::try_from(index)
            .map_err(|_| RenderError::new(index, "page number too large"))?;
        let page = self
            .document
            .pages()
            .get(page_index)
            .map_err(|err| RenderError::new(index, err.to_string()))?;

        let config = PdfRenderConfig::new().scale_page_by_factor(dpi / POINTS_PER_INCH);

        let bitmap = page
            .render_with_config(&config)
            .map_err(|err| RenderError::new(index, err.to_string()))?;

        let width = bitmap.width() as u32;
        let height = bitmap.height() as u32;

        RgbaImage::from_raw(width, height, bitmap.as_rgba_bytes())
            .ok_or_else(|| RenderError::new(index, "bitmap buffer has unexpected size"))
    }
}
