//! Category and storage sidebar.
//!
//! Everything here is fixed display data; nothing is derived from the
//! registry and clicking a category does not filter.

use canvascore::widgets::{divider, section_label, CountBadge, UsageBar};
use canvascore::Palette;
use egui::{RichText, Sense};

pub struct Category {
    pub name: &'static str,
    pub count: u32,
    pub active: bool,
}

pub const CATEGORIES: &[Category] = &[
    Category { name: "All Files", count: 1247, active: true },
    Category { name: "Documents", count: 432, active: false },
    Category { name: "Images", count: 289, active: false },
    Category { name: "Videos", count: 156, active: false },
    Category { name: "Audio", count: 78, active: false },
    Category { name: "Archives", count: 45, active: false },
    Category { name: "Favorites", count: 23, active: false },
];

pub struct StorageUsage {
    pub used: &'static str,
    pub total: &'static str,
    pub fraction: f32,
}

pub const STORAGE: StorageUsage = StorageUsage { used: "2.4 GB", total: "5 GB", fraction: 0.45 };

impl StorageUsage {
    pub fn summary(&self) -> String {
        format!("{} of {} used", self.used, self.total)
    }
}

pub fn show(ui: &mut egui::Ui) {
    for category in CATEGORIES {
        category_row(ui, category);
    }

    ui.add_space(20.0);
    divider(ui);
    ui.add_space(20.0);

    section_label(ui, "Storage");
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new("Used").color(Palette::TEXT_MUTED));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(STORAGE.used).color(Palette::TEXT));
        });
    });
    ui.add(UsageBar::new(STORAGE.fraction));
    ui.label(RichText::new(STORAGE.summary()).size(11.0).color(Palette::TEXT_FAINT));
}

fn category_row(ui: &mut egui::Ui, category: &Category) {
    let height = 36.0;
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), height), Sense::click());
    if response.clicked() {
        tracing::trace!(category = category.name, "category filters are not wired");
    }
    if !ui.is_rect_visible(rect) {
        return;
    }

    let painter = ui.painter();
    let text_color = if category.active {
        painter.rect_filled(rect, 8.0, Palette::SURFACE_RAISED);
        Palette::TEXT
    } else if response.hovered() {
        painter.rect_filled(rect, 8.0, Palette::SURFACE);
        Palette::TEXT
    } else {
        Palette::TEXT_MUTED
    };
    painter.text(
        egui::pos2(rect.min.x + 12.0, rect.center().y),
        egui::Align2::LEFT_CENTER,
        category.name,
        egui::FontId::proportional(14.0),
        text_color,
    );

    let badge_rect = egui::Rect::from_min_max(
        egui::pos2(rect.max.x - 64.0, rect.min.y),
        egui::pos2(rect.max.x - 8.0, rect.max.y),
    );
    let mut badge_ui = ui.child_ui(badge_rect, egui::Layout::right_to_left(egui::Align::Center));
    badge_ui.add(CountBadge::new(category.count));
}
