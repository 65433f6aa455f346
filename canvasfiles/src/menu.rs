//! Per-record actions shared by the canvas and the list.

use crate::registry::FileRecord;
use canvascore::Palette;
use egui::RichText;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordAction {
    TogglePin,
    Download,
    Share,
    Delete,
}

impl RecordAction {
    /// Only pinning changes state; the rest are placeholders.
    pub fn is_wired(self) -> bool {
        matches!(self, RecordAction::TogglePin)
    }
}

pub fn pin_label(pinned: bool) -> &'static str {
    if pinned { "Unpin" } else { "Pin to position" }
}

/// Menu body; call inside `ui.menu_button`.
pub fn record_menu(ui: &mut egui::Ui, record: &FileRecord) -> Option<RecordAction> {
    let mut action = None;
    ui.set_min_width(170.0);

    if ui.button(format!("📌  {}", pin_label(record.pinned))).clicked() {
        action = Some(RecordAction::TogglePin);
    }
    ui.separator();
    if ui.button("⬇  Download").clicked() {
        action = Some(RecordAction::Download);
    }
    if ui.button("🔗  Share").clicked() {
        action = Some(RecordAction::Share);
    }
    ui.separator();
    if ui.button(RichText::new("🗑  Delete").color(Palette::RED)).clicked() {
        action = Some(RecordAction::Delete);
    }

    if action.is_some() {
        ui.close_menu();
    }
    action
}
