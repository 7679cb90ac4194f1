use std::path::Path;

use log::{debug, error, info};

use crate::config::ViewerConfig;
use crate::engine::{Bitmap, DocumentLoader, PageSource};
use crate::error::{LoadError, RenderError, StartupError};
use crate::navigation::{NavStep, PageNavigator};

/// The bitmap currently on screen and the page it came from
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub index: usize,
    pub bitmap: Bitmap,
}

/// One open document and what is being shown of it.
///
/// The document is owned exclusively and closed when the session is dropped.
pub struct ViewerSession<D: PageSource> {
    document: D,
    navigator: PageNavigator,
    frame: Option<RenderedPage>,
    dpi: f32,
    title: String,
}

impl<D: PageSource> ViewerSession<D> {
    /// Wrap an already opened document. Nothing is rendered yet.
    pub fn new(document: D, title: impl Into<String>, dpi: f32) -> Self {
        let navigator = PageNavigator::new(document.page_count());
        Self {
            document,
            navigator,
            frame: None,
            dpi,
            title: title.into(),
        }
    }

    pub fn current_page(&self) -> usize {
        self.navigator.current()
    }

    pub fn page_count(&self) -> usize {
        self.navigator.page_count()
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// Last successfully rendered page
    pub fn frame(&self) -> Option<&RenderedPage> {
        self.frame.as_ref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Clamp `requested` into the document and display that page.
    ///
    /// On a render failure the error is logged and the previous page stays on
    /// screen with the index unchanged.
    pub fn show_page(&mut self, requested: i64) -> Result<usize, RenderError> {
        let index = self.navigator.clamp(requested);

        if self.frame.as_ref().map(|frame| frame.index) == Some(index) {
            debug!("Page {} already displayed", index + 1);
            return Ok(index);
        }

        match self.document.render_page(index, self.dpi) {
            Ok(bitmap) => {
                debug!(
                    "Rendered page {} at {}x{}",
                    index + 1,
                    bitmap.width(),
                    bitmap.height()
                );
                self.frame = Some(RenderedPage { index, bitmap });
                self.navigator.set(index);
                Ok(index)
            }
            Err(err) => {
                error!("{}", err);
                Err(err)
            }
        }
    }

    pub fn step(&mut self, step: NavStep) -> Result<usize, RenderError> {
        let target = self.navigator.target(step);
        self.show_page(target as i64)
    }
}

/// Open `path` and render its first page.
///
/// Every failure here is fatal for startup: the caller reports it and exits
/// without ever opening a window.
pub fn open_session<L: DocumentLoader>(
    loader: &L,
    path: &Path,
    config: &ViewerConfig,
) -> Result<ViewerSession<L::Document>, StartupError> {
    if !path.is_file() {
        return Err(LoadError::NotFound(path.to_path_buf()).into());
    }

    let document = loader.load(path)?;
    let page_count = document.page_count();
    if page_count == 0 {
        return Err(LoadError::Empty(path.to_path_buf()).into());
    }

    let title = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    info!("Opened {} ({} pages)", path.display(), page_count);

    let mut session = ViewerSession::new(document, title, config.dpi);
    session.show_page(0).map_err(StartupError::FirstPage)?;
    Ok(session)
}
