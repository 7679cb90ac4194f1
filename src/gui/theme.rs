use egui::{Color32, Context, Rounding, Stroke, Visuals};

/// Backdrop shown around the page
pub const PAGE_BACKDROP: Color32 = Color32::from_rgb(48, 48, 52);

/// Set up the viewer theme: a dark frame so the page stands out
pub fn setup_custom_theme(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.panel_fill = PAGE_BACKDROP;
    visuals.window_fill = Color32::from_rgb(30, 30, 35);

    // Status line text
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, Color32::from_rgb(190, 190, 200));

    visuals.selection.bg_fill = Color32::from_rgb(0, 92, 128);
    visuals.selection.stroke = Stroke::new(1.0, Color32::from_rgb(0, 140, 230));

    let rounding = Rounding::same(4.0);
    visuals.window_rounding = rounding;
    visuals.menu_rounding = rounding;

    ctx.set_visuals(visuals);
}
