use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, Context as _, Result};
use clap::Parser;
use eframe::{run_native, NativeOptions};
use egui::ViewportBuilder;
use log::{error, info, warn};
use pdfium_render::prelude::Pdfium;

use pdfview::config::ViewerConfig;
use pdfview::engine::{bind_pdfium, PdfiumLoader};
use pdfview::gui::{dialog, utils, PdfViewerApp};
use pdfview::open_session;

#[derive(Parser)]
#[command(author, version, about = "Minimal PDF viewer")]
struct Cli {
    /// PDF file to open; a file picker is shown when omitted
    file: Option<PathBuf>,

    /// Directory containing the Pdfium shared library
    #[arg(long)]
    pdfium_dir: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> ViewerConfig {
        ViewerConfig {
            pdfium_dir: self.pdfium_dir.clone(),
            ..ViewerConfig::default()
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.config();

    let Some(path) = cli.file.or_else(dialog::open_file_dialog) else {
        info!("No file selected, exiting");
        dialog::show_error("No file selected. Closing the application.");
        return ExitCode::SUCCESS;
    };

    match run(&path, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            dialog::show_error(&format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}

fn run(path: &Path, config: ViewerConfig) -> Result<()> {
    if !utils::is_pdf(path) {
        warn!("{} does not have a .pdf extension", path.display());
    }

    // Pdfium stays bound for the lifetime of the process
    let pdfium: &'static Pdfium = Box::leak(Box::new(bind_pdfium(&config)?));
    let loader = PdfiumLoader::new(pdfium);

    let session = open_session(&loader, path, &config)
        .with_context(|| format!("Unable to open {}", path.display()))?;

    let options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([200.0, 150.0])
            .with_title("PDF Viewer"),
        ..Default::default()
    };

    run_native(
        "PDF Viewer",
        options,
        Box::new(move |cc| Box::new(PdfViewerApp::new(cc, session, config))),
    )
    .map_err(|err| anyhow!("window system error: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_without_arguments_uses_defaults() {
        let cli = Cli::try_parse_from(["pdfview"]).unwrap();
        assert!(cli.file.is_none());
        assert_eq!(cli.config(), ViewerConfig::default());
    }

    #[test]
    fn resolution_cannot_be_overridden() {
        assert!(Cli::try_parse_from(["pdfview", "--dpi", "96"]).is_err());

        let cli = Cli::try_parse_from(["pdfview", "book.pdf", "--pdfium-dir", "/opt/pdfium"]).unwrap();
        let config = cli.config();
        assert_eq!(config.dpi, 150.0);
        assert_eq!(cli.file, Some(PathBuf::from("book.pdf")));
        assert_eq!(config.pdfium_dir, Some(PathBuf::from("/opt/pdfium")));
    }
}
