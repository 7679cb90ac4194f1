use eframe::CreationContext;
use egui::{Context, RichText, ViewportCommand};
use log::debug;

use super::page_view::{self, PageView};
use super::utils::{page_label, window_title};
use crate::config::ViewerConfig;
use crate::engine::PageSource;
use crate::session::ViewerSession;

/// The viewer window: one document, one page at a time
pub struct PdfViewerApp<D: PageSource> {
    session: ViewerSession<D>,
    page_view: PageView,
    config: ViewerConfig,
    title: String,
}

impl<D: PageSource> PdfViewerApp<D> {
    pub fn new(cc: &CreationContext, session: ViewerSession<D>, config: ViewerConfig) -> Self {
        super::theme::setup_custom_theme(&cc.egui_ctx);

        Self {
            session,
            page_view: PageView::new(),
            config,
            title: String::new(),
        }
    }

    /// Keep the window title in step with the displayed page
    fn update_title(&mut self, ctx: &Context) {
        let title = window_title(
            self.session.title(),
            self.session.current_page(),
            self.session.page_count(),
        );
        if title != self.title {
            ctx.send_viewport_cmd(ViewportCommand::Title(title.clone()));
            self.title = title;
        }
    }
}

impl<D: PageSource> eframe::App for PdfViewerApp<D> {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        for step in page_view::read_navigation(ctx) {
            // The session logs the failure and keeps the last good page up
            if let Err(err) = self.session.step(step) {
                debug!(
                    "Staying on page {} after page {} failed",
                    self.session.current_page() + 1,
                    err.page + 1
                );
            }
        }

        if self.page_view.sync(ctx, self.session.frame()) {
            ctx.request_repaint();
        }
        self.update_title(ctx);

        egui::TopBottomPanel::bottom("status_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(page_label(
                        self.session.current_page(),
                        self.session.page_count(),
                    )));
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.page_view.show(ui, &self.config);
        });
    }
}
