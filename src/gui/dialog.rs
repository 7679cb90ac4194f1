//! Native dialogs used before the viewer window exists.

use std::path::PathBuf;

use log::debug;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};

/// Ask the user for a PDF file
pub fn open_file_dialog() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Open PDF")
        .add_filter("PDF Files", &["pdf"])
        .pick_file()
}

/// Blocking error box
pub fn show_error(message: &str) {
    let result = MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("PDF Viewer")
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
    debug!("Message dialog closed with {:?}", result);
}
