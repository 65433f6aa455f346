//! Dark storage theme
//!
//! Near-black panels, gray outlines and a single blue accent. Kind colors
//! (green, red, purple, yellow) are reserved for file icons and badges.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// The fixed color set every view draws with.
pub struct Palette;

impl Palette {
    pub const BACKGROUND: Color32 = Color32::from_rgb(3, 7, 18);
    pub const PANEL: Color32 = Color32::from_rgb(10, 14, 26);
    pub const SURFACE: Color32 = Color32::from_rgb(17, 24, 39);
    pub const SURFACE_RAISED: Color32 = Color32::from_rgb(31, 41, 55);
    pub const OUTLINE: Color32 = Color32::from_rgb(55, 65, 81);
    pub const DIVIDER: Color32 = Color32::from_rgb(31, 41, 55);

    pub const TEXT: Color32 = Color32::from_rgb(255, 255, 255);
    pub const TEXT_SOFT: Color32 = Color32::from_rgb(209, 213, 219);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(156, 163, 175);
    pub const TEXT_FAINT: Color32 = Color32::from_rgb(107, 114, 128);

    pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);
    pub const ACCENT_HOVER: Color32 = Color32::from_rgb(29, 78, 216);
    pub const ACCENT_RING: Color32 = Color32::from_rgb(59, 130, 246);
    pub const ACCENT_SOFT: Color32 = Color32::from_rgb(96, 165, 250);
    pub const ACCENT_DEEP: Color32 = Color32::from_rgb(30, 58, 138);

    pub const GREEN: Color32 = Color32::from_rgb(74, 222, 128);
    pub const RED: Color32 = Color32::from_rgb(248, 113, 113);
    pub const PURPLE: Color32 = Color32::from_rgb(192, 132, 252);
    pub const YELLOW: Color32 = Color32::from_rgb(250, 204, 21);
}

/// Theme configuration for the storage window
pub struct CanvasTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub rounding: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for CanvasTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_heading: 22.0,
            font_size_small: 12.0,
            rounding: 8.0,
            window_padding: 8.0,
            item_spacing: 6.0,
        }
    }
}

impl CanvasTheme {
    /// Apply the theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::dark();

        visuals.window_fill = Palette::SURFACE;
        visuals.panel_fill = Palette::BACKGROUND;
        visuals.faint_bg_color = Palette::SURFACE;
        visuals.extreme_bg_color = Palette::SURFACE_RAISED;
        visuals.override_text_color = Some(Palette::TEXT_SOFT);

        let rounding = Rounding::same(self.rounding);
        visuals.window_rounding = rounding;
        visuals.menu_rounding = rounding;
        visuals.window_stroke = Stroke::new(1.0, Palette::OUTLINE);

        let tone = |ws: &mut egui::style::WidgetVisuals, fill: Color32, stroke: Color32| {
            ws.bg_fill = fill;
            ws.weak_bg_fill = fill;
            ws.bg_stroke = Stroke::new(1.0, stroke);
            ws.fg_stroke = Stroke::new(1.0, Palette::TEXT_SOFT);
            ws.rounding = Rounding::same(6.0);
        };
        tone(&mut visuals.widgets.noninteractive, Palette::PANEL, Palette::DIVIDER);
        tone(&mut visuals.widgets.inactive, Palette::PANEL, Palette::OUTLINE);
        tone(&mut visuals.widgets.hovered, Palette::SURFACE_RAISED, Palette::OUTLINE);
        tone(&mut visuals.widgets.active, Palette::SURFACE_RAISED, Palette::TEXT_FAINT);
        tone(&mut visuals.widgets.open, Palette::SURFACE_RAISED, Palette::OUTLINE);

        visuals.selection.bg_fill = Palette::ACCENT_DEEP;
        visuals.selection.stroke = Stroke::new(1.0, Palette::ACCENT_SOFT);

        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(10.0, 5.0);

        ctx.set_style(style);
    }

    /// Header strip: panel fill with a divider underneath
    pub fn header_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(Palette::PANEL)
            .stroke(Stroke::new(1.0, Palette::DIVIDER))
            .inner_margin(egui::Margin::symmetric(24.0, 14.0))
    }

    /// Sidebar column
    pub fn sidebar_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(Palette::PANEL)
            .stroke(Stroke::new(1.0, Palette::DIVIDER))
            .inner_margin(egui::Margin::same(24.0))
    }

    /// Main content area
    pub fn content_frame() -> egui::Frame {
        egui::Frame::none().fill(Palette::BACKGROUND)
    }
}

/// Swallow zoom shortcuts (Cmd+Plus / Cmd+Minus / Cmd+Equals) so the
/// canvas geometry never rescales under an active gesture.
/// Call at the start of the app's update().
pub fn consume_zoom_keys(ctx: &egui::Context) {
    ctx.input_mut(|i| {
        i.events.retain(|event| {
            !matches!(event,
                egui::Event::Key { key, modifiers, .. }
                    if modifiers.command
                        && matches!(key, egui::Key::Plus | egui::Key::Minus | egui::Key::Equals))
        });
    });
}
