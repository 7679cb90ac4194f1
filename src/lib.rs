//! A minimal desktop PDF viewer.
//!
//! One page is shown at a time, rasterized by Pdfium and displayed in an egui
//! window. Arrow keys, Page Up/Down, Home/End and the scroll wheel move between
//! pages; resizing the window refits the current page.

pub mod config;
pub mod engine;
pub mod error;
pub mod gui;
pub mod navigation;
pub mod session;

pub use config::ViewerConfig;
pub use engine::{Bitmap, DocumentLoader, PageSource};
pub use error::{LoadError, RenderError, StartupError};
pub use navigation::{NavStep, PageNavigator};
pub use session::{open_session, RenderedPage, ViewerSession};
