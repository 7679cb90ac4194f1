// Shared fakes: an in-memory document that rasterizes to tiny solid bitmaps
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use pdfview::{Bitmap, DocumentLoader, LoadError, PageSource, RenderError};

pub struct FakeDocument {
    pub pages: usize,
    pub failing: RefCell<HashSet<usize>>,
    pub renders: Cell<usize>,
    pub last_dpi: Cell<f32>,
}

impl FakeDocument {
    pub fn new(pages: usize) -> Self {
        Self {
            pages,
            failing: RefCell::new(HashSet::new()),
            renders: Cell::new(0),
            last_dpi: Cell::new(0.0),
        }
    }

    pub fn failing_on(self, page: usize) -> Self {
        self.failing.borrow_mut().insert(page);
        self
    }
}

impl PageSource for FakeDocument {
    fn page_count(&self) -> usize {
        self.pages
    }

    fn render_page(&self, index: usize, dpi: f32) -> Result<Bitmap, RenderError> {
        assert!(index < self.pages, "rendered out-of-range page {}", index);
        self.renders.set(self.renders.get() + 1);
        self.last_dpi.set(dpi);
        if self.failing.borrow().contains(&index) {
            return Err(RenderError::new(index, "broken content stream"));
        }
        // Encode the page index in the pixel so tests can tell frames apart
        Ok(RgbaImage::from_pixel(4, 6, Rgba([index as u8, 0, 0, 255])))
    }
}

pub enum FakeLoader {
    Pages(usize, Option<usize>),
    Corrupt,
}

impl DocumentLoader for FakeLoader {
    type Document = FakeDocument;

    fn load(&self, path: &Path) -> Result<FakeDocument, LoadError> {
        match self {
            FakeLoader::Pages(pages, failing) => {
                let document = FakeDocument::new(*pages);
                Ok(match failing {
                    Some(page) => document.failing_on(*page),
                    None => document,
                })
            }
            FakeLoader::Corrupt => Err(LoadError::Unreadable {
                path: path.to_path_buf(),
                reason: "FormatError".to_string(),
            }),
        }
    }
}

/// A path that exists on disk so loading reaches the fake loader
pub fn existing_file() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml")
}
