//! List view — one row per record, canvas coordinates ignored.

use crate::menu::{self, RecordAction};
use crate::registry::{FileId, FileRecord};
use canvascore::Palette;
use egui::{Align2, Color32, FontId, Pos2, Rect, Rounding, Sense, Stroke, Vec2};

const ROW_HEIGHT: f32 = 56.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ListRow<'a> {
    pub record: &'a FileRecord,
    /// "size • modified"
    pub detail: String,
    pub highlighted: bool,
}

/// Rows in registry order.
pub fn rows(records: &[FileRecord]) -> Vec<ListRow<'_>> {
    records
        .iter()
        .map(|record| ListRow {
            record,
            detail: format!("{} • {}", record.size, record.modified),
            highlighted: record.pinned,
        })
        .collect()
}

/// Draw the list; returns the menu action picked this frame, if any.
pub fn show(ui: &mut egui::Ui, records: &[FileRecord]) -> Option<(FileId, RecordAction)> {
    let mut picked = None;

    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        egui::Frame::none().inner_margin(egui::Margin::same(24.0)).show(ui, |ui| {
            ui.spacing_mut().item_spacing.y = 4.0;
            for row in rows(records) {
                if let Some(action) = show_row(ui, &row) {
                    picked = Some((row.record.id, action));
                }
            }
        });
    });

    picked
}

fn show_row(ui: &mut egui::Ui, row: &ListRow<'_>) -> Option<RecordAction> {
    let (rect, response) = ui.allocate_exact_size(
        Vec2::new(ui.available_width(), ROW_HEIGHT),
        Sense::hover(),
    );
    let record = row.record;

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let rounding = Rounding::same(8.0);

        if row.highlighted {
            painter.rect(
                rect,
                rounding,
                Color32::from_rgb(17, 27, 54),
                Stroke::new(1.0, Palette::ACCENT_RING.gamma_multiply(0.3)),
            );
        } else if response.hovered() {
            painter.rect_filled(rect, rounding, Palette::SURFACE);
        }

        let icon = record.kind.icon();
        painter.text(
            Pos2::new(rect.min.x + 14.0, rect.center().y),
            Align2::LEFT_CENTER,
            icon.glyph,
            FontId::proportional(20.0),
            icon.color,
        );

        let text_x = rect.min.x + 52.0;
        let name =
            painter.layout_no_wrap(record.name.clone(), FontId::proportional(14.0), Palette::TEXT);
        let name_width = name.size().x;
        let name_pos = Pos2::new(text_x, rect.center().y - 9.0 - name.size().y / 2.0);
        painter.galley(name_pos, name, Palette::TEXT);

        let mut badge_x = text_x + name_width + 8.0;
        if record.starred {
            painter.text(
                Pos2::new(badge_x, rect.center().y - 9.0),
                Align2::LEFT_CENTER,
                "★",
                FontId::proportional(14.0),
                Palette::YELLOW,
            );
            badge_x += 20.0;
        }
        if record.pinned {
            painter.text(
                Pos2::new(badge_x, rect.center().y - 9.0),
                Align2::LEFT_CENTER,
                "📌",
                FontId::proportional(13.0),
                Palette::ACCENT_SOFT,
            );
        }

        painter.text(
            Pos2::new(text_x, rect.center().y + 11.0),
            Align2::LEFT_CENTER,
            &row.detail,
            FontId::proportional(12.0),
            Palette::TEXT_MUTED,
        );
    }

    let menu_rect = Rect::from_center_size(
        Pos2::new(rect.max.x - 28.0, rect.center().y),
        Vec2::new(28.0, 24.0),
    );
    let mut menu_ui = ui.child_ui_with_id_source(
        menu_rect,
        egui::Layout::right_to_left(egui::Align::Center),
        ("row_menu", record.id.0),
    );
    if !response.hovered() {
        menu_ui.visuals_mut().override_text_color = Some(Palette::TEXT_FAINT);
    }
    menu_ui
        .menu_button("⋯", |ui| menu::record_menu(ui, record))
        .inner
        .flatten()
}
