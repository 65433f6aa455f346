//! Custom widgets — rounded dark buttons, count badges and usage bars

use crate::theme::Palette;
use egui::{Response, Rounding, Sense, Stroke, Ui, Widget};

/// How a [`ToolbarButton`] is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonTone {
    /// Outlined, transparent body.
    Outline,
    /// Solid accent fill.
    Primary,
    /// No outline until hovered or selected.
    Ghost,
}

/// A header/toolbar button with an optional leading glyph.
pub struct ToolbarButton<'a> {
    glyph: Option<&'a str>,
    text: &'a str,
    tone: ButtonTone,
    selected: bool,
}

impl<'a> ToolbarButton<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { glyph: None, text, tone: ButtonTone::Outline, selected: false }
    }

    pub fn glyph(mut self, glyph: &'a str) -> Self {
        self.glyph = Some(glyph);
        self
    }

    pub fn tone(mut self, tone: ButtonTone) -> Self {
        self.tone = tone;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    fn label(&self) -> String {
        match self.glyph {
            Some(glyph) => format!("{glyph}  {}", self.text),
            None => self.text.to_string(),
        }
    }
}

impl<'a> Widget for ToolbarButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let font = egui::FontId::proportional(13.0);
        let label = self.label();
        let galley = ui.painter().layout_no_wrap(label, font, Palette::TEXT);
        let padding = egui::vec2(12.0, 6.0);
        let desired_size = egui::vec2(
            galley.size().x + padding.x * 2.0,
            (galley.size().y + padding.y * 2.0).max(ui.spacing().interact_size.y),
        );
        let (rect, response) = ui.allocate_exact_size(desired_size, Sense::click());

        if ui.is_rect_visible(rect) {
            let hovered = response.hovered();
            let (fill, stroke, text_color) = match self.tone {
                ButtonTone::Primary => (
                    if hovered { Palette::ACCENT_HOVER } else { Palette::ACCENT },
                    Stroke::NONE,
                    Palette::TEXT,
                ),
                ButtonTone::Outline => (
                    if hovered { Palette::SURFACE_RAISED } else { Palette::PANEL },
                    Stroke::new(1.0, Palette::OUTLINE),
                    Palette::TEXT_SOFT,
                ),
                ButtonTone::Ghost if self.selected => (
                    Palette::SURFACE_RAISED,
                    Stroke::NONE,
                    Palette::TEXT,
                ),
                ButtonTone::Ghost => (
                    if hovered { Palette::SURFACE } else { egui::Color32::TRANSPARENT },
                    Stroke::NONE,
                    if hovered { Palette::TEXT } else { Palette::TEXT_MUTED },
                ),
            };

            let painter = ui.painter();
            painter.rect(rect, Rounding::same(6.0), fill, stroke);
            let text_pos = rect.center() - galley.size() / 2.0;
            painter.galley_with_override_text_color(text_pos, galley, text_color);
        }

        response
    }
}

/// A small rounded pill holding a number.
pub struct CountBadge {
    count: u32,
}

impl CountBadge {
    pub fn new(count: u32) -> Self {
        Self { count }
    }
}

impl Widget for CountBadge {
    fn ui(self, ui: &mut Ui) -> Response {
        let galley = ui.painter().layout_no_wrap(
            self.count.to_string(),
            egui::FontId::proportional(11.0),
            Palette::TEXT_SOFT,
        );
        let size = egui::vec2(galley.size().x + 12.0, galley.size().y + 4.0);
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.rect_filled(rect, Rounding::same(rect.height() / 2.0), Palette::OUTLINE);
            painter.galley(rect.center() - galley.size() / 2.0, galley, Palette::TEXT_SOFT);
        }
        response
    }
}

/// Horizontal usage bar; `fraction` is clamped to 0..=1.
pub struct UsageBar {
    fraction: f32,
    height: f32,
}

impl UsageBar {
    pub fn new(fraction: f32) -> Self {
        Self { fraction: fraction.clamp(0.0, 1.0), height: 8.0 }
    }
}

impl Widget for UsageBar {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), self.height),
            Sense::hover(),
        );
        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let rounding = Rounding::same(self.height / 2.0);
            painter.rect_filled(rect, rounding, Palette::SURFACE_RAISED);
            let mut filled = rect;
            filled.set_width(rect.width() * self.fraction);
            painter.rect_filled(filled, rounding, Palette::ACCENT);
        }
        response
    }
}

/// Uppercase gray label above a sidebar section
pub fn section_label(ui: &mut Ui, text: &str) {
    ui.label(
        egui::RichText::new(text.to_uppercase())
            .size(11.0)
            .color(Palette::TEXT_FAINT),
    );
}

/// Thin horizontal divider in the outline color
pub fn divider(ui: &mut Ui) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), 1.0), Sense::hover());
    if ui.is_rect_visible(rect) {
        ui.painter().hline(rect.x_range(), rect.center().y, Stroke::new(1.0, Palette::DIVIDER));
    }
}
