//! Canvas view — file cards placed freely over a grid.

use crate::menu::{self, RecordAction};
use crate::registry::{FileId, FileRecord, Registry};
use canvascore::grid::draw_grid;
use canvascore::text::ellipsize;
use canvascore::Palette;
use egui::{Align2, Color32, CursorIcon, FontId, Painter, Pos2, Rect, Rounding, Sense, Stroke, Vec2};

/// Visual scale of the card being dragged.
pub const LIFT_SCALE: f32 = 1.05;

const CARD_PADDING: f32 = 16.0;
const CARD_ROUNDING: f32 = 10.0;
const MENU_SIZE: Vec2 = Vec2::new(28.0, 24.0);

/// Where and how one card is drawn this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CardLayout {
    pub id: FileId,
    /// Screen rect, already scaled when lifted.
    pub rect: Rect,
    pub lifted: bool,
}

/// Cards in paint order: registry order, with the dragged card moved to
/// the end so it is drawn (and hit-tested) above everything else.
pub fn layout_cards(
    records: &[FileRecord],
    active: Option<FileId>,
    origin: Pos2,
    footprint: Vec2,
) -> Vec<CardLayout> {
    let mut cards: Vec<CardLayout> = records
        .iter()
        .map(|record| {
            let lifted = active == Some(record.id);
            let base = Rect::from_min_size(origin + record.position().to_vec2(), footprint);
            let rect = if lifted {
                Rect::from_center_size(base.center(), footprint * LIFT_SCALE)
            } else {
                base
            };
            CardLayout { id: record.id, rect, lifted }
        })
        .collect();
    // stable: unlifted cards keep registry order
    cards.sort_by_key(|card| card.lifted);
    cards
}

#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    /// Primary button went down on a card and started dragging.
    Pressed { id: FileId, pointer: Pos2 },
    Action { id: FileId, action: RecordAction },
}

pub struct CanvasView<'a> {
    pub registry: &'a Registry,
    pub active: Option<FileId>,
    pub footprint: Vec2,
    pub grid_spacing: f32,
    pub show_hint: bool,
}

pub struct CanvasOutput {
    /// The measured canvas rect for this frame.
    pub rect: Rect,
    pub events: Vec<CanvasEvent>,
}

impl<'a> CanvasView<'a> {
    pub fn show(&self, ui: &mut egui::Ui) -> CanvasOutput {
        let (rect, _) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, Palette::BACKGROUND);
        let grid_stroke = Stroke::new(1.0, Color32::from_white_alpha(6));
        draw_grid(&painter, rect, self.grid_spacing, grid_stroke);

        let mut events = Vec::new();
        for card in layout_cards(self.registry.records(), self.active, rect.min, self.footprint) {
            let Some(record) = self.registry.get(card.id) else { continue };
            let trigger = menu_rect(card.rect);

            let response = ui
                .interact(card.rect, ui.id().with(("card", record.id.0)), Sense::drag())
                .on_hover_cursor(CursorIcon::Grab);
            paint_card(&painter, &card, record, response.hovered());

            if response.drag_started() {
                let pointer = ui
                    .input(|i| i.pointer.press_origin())
                    .or(response.interact_pointer_pos());
                match pointer {
                    // the menu trigger sits on the card but never picks it up
                    Some(pointer) if trigger.contains(pointer) => {}
                    Some(pointer) => events.push(CanvasEvent::Pressed { id: record.id, pointer }),
                    None => {}
                }
            }

            let mut menu_ui = ui.child_ui_with_id_source(
                trigger,
                egui::Layout::right_to_left(egui::Align::Center),
                ("card_menu", record.id.0),
            );
            let picked = menu_ui
                .menu_button("⋯", |ui| menu::record_menu(ui, record))
                .inner
                .flatten();
            if let Some(action) = picked {
                events.push(CanvasEvent::Action { id: record.id, action });
            }
        }

        if self.active.is_some() {
            ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
        }

        if self.show_hint {
            painter.text(
                rect.left_bottom() + Vec2::new(24.0, -24.0),
                Align2::LEFT_BOTTOM,
                "✥  Drag files to arrange them freely on the canvas",
                FontId::proportional(13.0),
                Palette::TEXT_FAINT,
            );
        }

        CanvasOutput { rect, events }
    }
}

/// Screen rect of the "⋯" trigger in a card's top-right corner.
pub(crate) fn menu_rect(card: Rect) -> Rect {
    Rect::from_min_size(
        Pos2::new(card.max.x - CARD_PADDING - MENU_SIZE.x, card.min.y + 10.0),
        MENU_SIZE,
    )
}

fn card_style(pinned: bool, hovered: bool) -> (Color32, Stroke) {
    if pinned {
        (
            Color32::from_rgb(21, 33, 64),
            Stroke::new(2.0, Palette::ACCENT_RING.gamma_multiply(0.5)),
        )
    } else if hovered {
        (Palette::SURFACE_RAISED, Stroke::new(1.0, Palette::OUTLINE))
    } else {
        (Palette::SURFACE, Stroke::new(1.0, Palette::OUTLINE))
    }
}

fn paint_card(painter: &Painter, card: &CardLayout, record: &FileRecord, hovered: bool) {
    let rect = card.rect;
    let rounding = Rounding::same(CARD_ROUNDING);

    // shadow
    if card.lifted {
        painter.rect_filled(
            rect.translate(Vec2::new(0.0, 10.0)).expand(6.0),
            rounding,
            Palette::ACCENT_RING.gamma_multiply(0.15),
        );
    } else {
        painter.rect_filled(
            rect.translate(Vec2::new(0.0, 3.0)),
            rounding,
            Color32::from_black_alpha(90),
        );
    }

    let (fill, stroke) = card_style(record.pinned, hovered || card.lifted);
    painter.rect(rect, rounding, fill, stroke);

    // icon row
    let icon = record.kind.icon();
    let mut x = rect.min.x + CARD_PADDING;
    let icon_y = rect.min.y + CARD_PADDING + 10.0;
    let badge = |x: f32, glyph: &str, size: f32, color: Color32| {
        painter.text(
            Pos2::new(x, icon_y),
            Align2::LEFT_CENTER,
            glyph,
            FontId::proportional(size),
            color,
        );
    };
    badge(x, icon.glyph, 20.0, icon.color);
    x += 30.0;
    if record.starred {
        badge(x, "★", 15.0, Palette::YELLOW);
        x += 22.0;
    }
    if record.pinned {
        badge(x, "📌", 14.0, Palette::ACCENT_SOFT);
    }

    // name and metadata
    let max_chars = ((rect.width() - CARD_PADDING * 2.0) / 8.0).floor().max(1.0) as usize;
    painter.text(
        Pos2::new(rect.min.x + CARD_PADDING, rect.min.y + CARD_PADDING + 44.0),
        Align2::LEFT_TOP,
        ellipsize(&record.name, max_chars),
        FontId::proportional(15.0),
        Palette::TEXT,
    );
    let meta_y = rect.max.y - CARD_PADDING;
    painter.text(
        Pos2::new(rect.min.x + CARD_PADDING, meta_y),
        Align2::LEFT_BOTTOM,
        &record.size,
        FontId::proportional(12.0),
        Palette::TEXT_MUTED,
    );
    painter.text(
        Pos2::new(rect.max.x - CARD_PADDING, meta_y),
        Align2::RIGHT_BOTTOM,
        &record.modified,
        FontId::proportional(12.0),
        Palette::TEXT_MUTED,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::tests::record;

    const CARD: Vec2 = Vec2::new(280.0, 150.0);

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    fn records() -> Vec<FileRecord> {
        vec![record(1, 50.0, 50.0), record(2, 300.0, 80.0), record(3, 150.0, 200.0)]
    }

    #[test]
    fn test_cards_follow_registry_order_when_idle() {
        let cards = layout_cards(&records(), None, Pos2::ZERO, CARD);
        let ids: Vec<u32> = cards.iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(cards.iter().all(|c| !c.lifted));
    }

    #[test]
    fn test_cards_sit_at_record_position() {
        let origin = Pos2::new(256.0, 140.0);
        let cards = layout_cards(&records(), None, origin, CARD);
        assert_eq!(cards[1].rect, Rect::from_min_size(Pos2::new(556.0, 220.0), CARD));
    }

    #[test]
    fn test_active_card_is_painted_last_and_scaled() {
        let cards = layout_cards(&records(), Some(FileId(1)), Pos2::ZERO, CARD);
        let ids: Vec<u32> = cards.iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![2, 3, 1]);

        let lifted = cards.last().unwrap();
        assert!(lifted.lifted);
        assert!(close(lifted.rect.size(), CARD * LIFT_SCALE));
        let base = Rect::from_min_size(Pos2::new(50.0, 50.0), CARD);
        assert!(close(lifted.rect.center().to_vec2(), base.center().to_vec2()));
    }

    #[test]
    fn test_unknown_active_id_lifts_nothing() {
        let cards = layout_cards(&records(), Some(FileId(77)), Pos2::ZERO, CARD);
        assert!(cards.iter().all(|c| !c.lifted && c.rect.size() == CARD));
    }

    #[test]
    fn test_menu_trigger_inside_card_corner() {
        let card = Rect::from_min_size(Pos2::new(50.0, 50.0), CARD);
        let menu = menu_rect(card);
        assert!(card.contains_rect(menu));
        assert!(menu.center().x > card.center().x);
        assert!(menu.center().y < card.center().y);
    }

    #[test]
    fn test_hover_raises_fill_except_pinned() {
        assert_eq!(card_style(false, false).0, Palette::SURFACE);
        assert_eq!(card_style(false, true).0, Palette::SURFACE_RAISED);
        assert_eq!(card_style(true, false), card_style(true, true));
    }
}
