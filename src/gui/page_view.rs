use egui::{pos2, vec2, Color32, Context, Event, Key, Rect, Sense, TextureHandle, Ui, Vec2};
use log::debug;

use crate::config::ViewerConfig;
use crate::navigation::NavStep;
use crate::session::RenderedPage;

/// Displays the current page bitmap, scaled to fit the window
pub struct PageView {
    texture: Option<(usize, TextureHandle)>,
}

impl PageView {
    pub fn new() -> Self {
        Self { texture: None }
    }

    /// Page whose texture is currently uploaded
    pub fn texture_page(&self) -> Option<usize> {
        self.texture.as_ref().map(|(index, _)| *index)
    }

    /// Upload the frame's bitmap if it is not the one already on the GPU.
    /// Returns `true` when a new texture was created.
    pub fn sync(&mut self, ctx: &Context, frame: Option<&RenderedPage>) -> bool {
        let Some(frame) = frame else {
            return false;
        };
        if self.texture_page() == Some(frame.index) {
            return false;
        }

        let size = [frame.bitmap.width() as usize, frame.bitmap.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, frame.bitmap.as_raw());
        let texture = ctx.load_texture(
            format!("pdf_page_{}", frame.index),
            color_image,
            egui::TextureOptions::LINEAR,
        );
        debug!("Uploaded texture for page {}", frame.index + 1);

        self.texture = Some((frame.index, texture));
        true
    }

    /// Paint the page centered in the remaining space of `ui`
    pub fn show(&self, ui: &mut Ui, config: &ViewerConfig) {
        let available = ui.available_rect_before_wrap();
        let response = ui.allocate_rect(available, Sense::hover());

        let Some((_, texture)) = &self.texture else {
            ui.painter().text(
                available.center(),
                egui::Align2::CENTER_CENTER,
                "No page to display",
                egui::FontId::proportional(16.0),
                ui.visuals().weak_text_color(),
            );
            return;
        };

        let bounds = display_bounds(ui.ctx().screen_rect().size(), available.size(), config);
        let [width, height] = texture.size();
        let size = fit_to_bounds([width, height], bounds);
        if size == Vec2::ZERO {
            return;
        }

        let rect = Rect::from_center_size(response.rect.center(), size);
        ui.painter().image(
            texture.id(),
            rect,
            Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
            Color32::WHITE,
        );
    }
}

impl Default for PageView {
    fn default() -> Self {
        Self::new()
    }
}

/// Room for the page: the window minus margins, limited to the panel's free space
pub fn display_bounds(window: Vec2, available: Vec2, config: &ViewerConfig) -> Vec2 {
    vec2(window.x - config.margin_x, window.y - config.margin_y).min(available)
}

/// Largest size with the image's aspect ratio that fits inside `bounds`.
///
/// The image is scaled both down and up. Empty images or non-positive bounds
/// give a zero size.
pub fn fit_to_bounds(image: [usize; 2], bounds: Vec2) -> Vec2 {
    let [width, height] = image;
    if width == 0 || height == 0 || bounds.x <= 0.0 || bounds.y <= 0.0 {
        return Vec2::ZERO;
    }

    let width = width as f32;
    let height = height as f32;
    let scale = (bounds.x / width).min(bounds.y / height);
    vec2(width * scale, height * scale)
}

/// Navigation bound to a key, if any
pub fn step_for_key(key: Key) -> Option<NavStep> {
    match key {
        Key::ArrowLeft | Key::PageUp => Some(NavStep::Previous),
        Key::ArrowRight | Key::PageDown => Some(NavStep::Next),
        Key::Home => Some(NavStep::First),
        Key::End => Some(NavStep::Last),
        _ => None,
    }
}

/// Turn this frame's input events into navigation steps, in arrival order.
///
/// Every key press bound to navigation and every vertical scroll event yields
/// one step, so input queued up while a page was rendering is not lost.
pub fn navigation_from_events(events: &[Event]) -> Vec<NavStep> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Key { key, pressed: true, .. } => step_for_key(*key),
            Event::Scroll(delta) => NavStep::from_scroll(delta.y),
            _ => None,
        })
        .collect()
}

pub fn read_navigation(ctx: &Context) -> Vec<NavStep> {
    ctx.input(|input| navigation_from_events(&input.events))
}
