mod app;
pub mod dialog;
pub mod page_view;
mod theme;
pub mod utils;

pub use app::PdfViewerApp;
pub use page_view::{fit_to_bounds, PageView};
