//! Card drag gestures.
//!
//! A press on a card opens a [`DragSession`]; every pointer move while it is
//! open writes a clamped position into the registry; release, cancel, or the
//! record disappearing closes it. The canvas rect and the card footprint are
//! captured at press time and used for the whole gesture.

use crate::registry::{FileId, Registry};
use egui::{Pos2, Rect, Vec2};

/// Clamp one axis of a card's top-left to `[0, extent - card]`.
/// When the card is larger than the extent the lower bound wins.
pub fn clamp_axis(candidate: f32, extent: f32, card: f32) -> f32 {
    candidate.min(extent - card).max(0.0)
}

/// An open press-move-release gesture on one card.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    id: FileId,
    /// Pointer position relative to the card's top-left at press time.
    grab_offset: Vec2,
    /// Canvas rect measured at press time.
    canvas: Rect,
    footprint: Vec2,
}

impl DragSession {
    pub fn id(&self) -> FileId {
        self.id
    }

    /// Clamped top-left, relative to the canvas origin, for a pointer
    /// position in screen space.
    pub fn target(&self, pointer: Pos2) -> Pos2 {
        let candidate = pointer - self.canvas.min - self.grab_offset;
        Pos2::new(
            clamp_axis(candidate.x, self.canvas.width(), self.footprint.x),
            clamp_axis(candidate.y, self.canvas.height(), self.footprint.y),
        )
    }
}

#[derive(Debug)]
pub struct DragController {
    footprint: Vec2,
    session: Option<DragSession>,
}

impl DragController {
    pub fn new(footprint: Vec2) -> Self {
        Self { footprint, session: None }
    }

    pub fn footprint(&self) -> Vec2 {
        self.footprint
    }

    pub fn active_id(&self) -> Option<FileId> {
        self.session.as_ref().map(DragSession::id)
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Start a gesture on `id` with the pointer at `pointer` (screen space).
    ///
    /// Ignored when the canvas has not been measured yet or the record is
    /// unknown. A press while another gesture is open replaces it.
    pub fn press(
        &mut self,
        registry: &Registry,
        id: FileId,
        pointer: Pos2,
        canvas: Option<Rect>,
    ) -> bool {
        let Some(canvas) = canvas else {
            tracing::debug!(%id, "canvas not measured, ignoring press");
            return false;
        };
        let Some(record) = registry.get(id) else {
            tracing::debug!(%id, "press on unknown file");
            return false;
        };
        if let Some(previous) = &self.session {
            tracing::debug!(previous = %previous.id, %id, "replacing open drag");
        }

        let card_origin = canvas.min + record.position().to_vec2();
        self.session = Some(DragSession {
            id,
            grab_offset: pointer - card_origin,
            canvas,
            footprint: self.footprint,
        });
        tracing::debug!(
            %id,
            kind = record.kind.label(),
            x = record.x,
            y = record.y,
            "drag started"
        );
        true
    }

    /// Follow the pointer. Returns the position written, if any; a pointer
    /// that lands the card where it already is writes nothing.
    pub fn drag_to(&mut self, pointer: Pos2, registry: &mut Registry) -> Option<Pos2> {
        let session = self.session.as_ref()?;
        let target = session.target(pointer);
        let Some(record) = registry.get(session.id) else {
            tracing::debug!(id = %session.id, "dragged file is gone, closing drag");
            self.session = None;
            return None;
        };
        if record.position() == target {
            return None;
        }
        registry.update_position(session.id, target.x, target.y);
        Some(target)
    }

    /// End the gesture. Returns the id that was being dragged.
    pub fn release(&mut self) -> Option<FileId> {
        let session = self.session.take()?;
        tracing::debug!(id = %session.id, "drag released");
        Some(session.id)
    }

    /// Drop the gesture without a release (the canvas went away).
    pub fn cancel(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::debug!(id = %session.id, "drag cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::tests::record;

    const CARD: Vec2 = Vec2::new(280.0, 150.0);

    fn canvas_at(x: f32, y: f32, w: f32, h: f32) -> Option<Rect> {
        Some(Rect::from_min_size(Pos2::new(x, y), Vec2::new(w, h)))
    }

    #[test]
    fn test_clamp_axis() {
        assert_eq!(clamp_axis(-40.0, 800.0, 280.0), 0.0);
        assert_eq!(clamp_axis(100.0, 800.0, 280.0), 100.0);
        assert_eq!(clamp_axis(520.0, 800.0, 280.0), 520.0);
        assert_eq!(clamp_axis(990.0, 800.0, 280.0), 520.0);
        // card wider than the canvas
        assert_eq!(clamp_axis(50.0, 200.0, 280.0), 0.0);
    }

    #[test]
    fn test_drag_far_outside_clamps_to_corner() {
        let mut reg = Registry::new(vec![record(1, 50.0, 50.0)]).unwrap();
        let mut ctl = DragController::new(CARD);
        let canvas = canvas_at(0.0, 0.0, 800.0, 600.0);

        assert!(ctl.press(&reg, FileId(1), Pos2::new(60.0, 60.0), canvas));
        let written = ctl.drag_to(Pos2::new(1000.0, 1000.0), &mut reg);

        assert_eq!(written, Some(Pos2::new(520.0, 450.0)));
        assert_eq!(reg.get(FileId(1)).unwrap().position(), Pos2::new(520.0, 450.0));
    }

    #[test]
    fn test_grab_offset_prevents_jump() {
        let mut reg = Registry::new(vec![record(1, 100.0, 100.0)]).unwrap();
        let mut ctl = DragController::new(CARD);
        // canvas sits below a header and beside a sidebar
        let canvas = canvas_at(256.0, 140.0, 900.0, 700.0);

        // grab the card 30px right and 20px down from its corner
        let press = Pos2::new(256.0 + 130.0, 140.0 + 120.0);
        ctl.press(&reg, FileId(1), press, canvas);
        ctl.drag_to(press, &mut reg);
        assert_eq!(reg.get(FileId(1)).unwrap().position(), Pos2::new(100.0, 100.0));

        ctl.drag_to(press + Vec2::new(15.0, -5.0), &mut reg);
        assert_eq!(reg.get(FileId(1)).unwrap().position(), Pos2::new(115.0, 95.0));
    }

    #[test]
    fn test_result_always_in_bounds() {
        let mut reg = Registry::new(vec![record(1, 0.0, 0.0)]).unwrap();
        let mut ctl = DragController::new(CARD);
        let canvas = canvas_at(40.0, 60.0, 640.0, 480.0);
        ctl.press(&reg, FileId(1), Pos2::new(45.0, 70.0), canvas);

        for px in (-2000..=2000).step_by(125) {
            for py in (-2000..=2000).step_by(125) {
                ctl.drag_to(Pos2::new(px as f32, py as f32), &mut reg);
                let p = reg.get(FileId(1)).unwrap().position();
                assert!((0.0..=640.0 - CARD.x).contains(&p.x), "x out of range: {}", p.x);
                assert!((0.0..=480.0 - CARD.y).contains(&p.y), "y out of range: {}", p.y);
            }
        }
    }

    #[test]
    fn test_unmeasured_canvas_ignores_press() {
        let mut reg = Registry::new(vec![record(1, 50.0, 50.0)]).unwrap();
        let mut ctl = DragController::new(CARD);

        assert!(!ctl.press(&reg, FileId(1), Pos2::new(60.0, 60.0), None));
        assert!(!ctl.is_active());
        assert_eq!(ctl.drag_to(Pos2::new(300.0, 300.0), &mut reg), None);
        assert_eq!(reg.get(FileId(1)).unwrap().position(), Pos2::new(50.0, 50.0));
        assert_eq!(reg.version(), 0);
    }

    #[test]
    fn test_press_on_unknown_file_is_ignored() {
        let reg = Registry::new(vec![record(1, 50.0, 50.0)]).unwrap();
        let mut ctl = DragController::new(CARD);
        assert!(!ctl.press(&reg, FileId(9), Pos2::ZERO, canvas_at(0.0, 0.0, 800.0, 600.0)));
        assert_eq!(ctl.active_id(), None);
    }

    #[test]
    fn test_release_ends_gesture() {
        let mut reg = Registry::new(vec![record(1, 50.0, 50.0)]).unwrap();
        let mut ctl = DragController::new(CARD);
        ctl.press(&reg, FileId(1), Pos2::new(60.0, 60.0), canvas_at(0.0, 0.0, 800.0, 600.0));
        ctl.drag_to(Pos2::new(110.0, 60.0), &mut reg);

        assert_eq!(ctl.release(), Some(FileId(1)));
        assert_eq!(ctl.release(), None);
        assert_eq!(ctl.drag_to(Pos2::new(400.0, 400.0), &mut reg), None);
        assert_eq!(reg.get(FileId(1)).unwrap().position(), Pos2::new(100.0, 50.0));
    }

    #[test]
    fn test_dragging_one_card_leaves_others_alone() {
        let mut reg = Registry::new(vec![record(1, 50.0, 50.0), record(2, 300.0, 80.0)]).unwrap();
        let b_before = reg.get(FileId(2)).unwrap().clone();
        let mut ctl = DragController::new(CARD);
        ctl.press(&reg, FileId(1), Pos2::new(55.0, 55.0), canvas_at(0.0, 0.0, 800.0, 600.0));

        for step in 0..40 {
            let p = Pos2::new(55.0 + step as f32 * 17.0, 55.0 + step as f32 * 9.0);
            ctl.drag_to(p, &mut reg);
            assert_eq!(reg.get(FileId(2)).unwrap(), &b_before);
        }
        ctl.release();
        assert_eq!(reg.get(FileId(2)).unwrap(), &b_before);
    }

    #[test]
    fn test_second_press_replaces_first() {
        let mut reg = Registry::new(vec![record(1, 50.0, 50.0), record(2, 300.0, 80.0)]).unwrap();
        let mut ctl = DragController::new(CARD);
        let canvas = canvas_at(0.0, 0.0, 800.0, 600.0);

        ctl.press(&reg, FileId(1), Pos2::new(60.0, 60.0), canvas);
        ctl.drag_to(Pos2::new(70.0, 60.0), &mut reg);
        // no release before the next press
        ctl.press(&reg, FileId(2), Pos2::new(310.0, 90.0), canvas);
        assert_eq!(ctl.active_id(), Some(FileId(2)));

        ctl.drag_to(Pos2::new(410.0, 190.0), &mut reg);
        assert_eq!(reg.get(FileId(1)).unwrap().position(), Pos2::new(60.0, 50.0));
        assert_eq!(reg.get(FileId(2)).unwrap().position(), Pos2::new(400.0, 180.0));
        assert_eq!(reg.len(), 2);

        assert_eq!(ctl.release(), Some(FileId(2)));
    }

    #[test]
    fn test_bounds_fixed_at_press() {
        let mut reg = Registry::new(vec![record(1, 0.0, 0.0)]).unwrap();
        let mut ctl = DragController::new(CARD);
        ctl.press(&reg, FileId(1), Pos2::new(0.0, 0.0), canvas_at(0.0, 0.0, 500.0, 400.0));

        // a window resize mid-drag does not reach the open session
        let p = ctl.drag_to(Pos2::new(2000.0, 2000.0), &mut reg).unwrap();
        assert_eq!(p, Pos2::new(220.0, 250.0));
    }

    #[test]
    fn test_cancel_closes_session() {
        let reg = Registry::new(vec![record(1, 0.0, 0.0)]).unwrap();
        let mut ctl = DragController::new(CARD);
        ctl.press(&reg, FileId(1), Pos2::new(5.0, 5.0), canvas_at(0.0, 0.0, 800.0, 600.0));
        ctl.cancel();
        assert!(!ctl.is_active());
    }

    #[test]
    fn test_holding_still_writes_nothing() {
        let mut reg = Registry::new(vec![record(1, 50.0, 50.0)]).unwrap();
        let mut ctl = DragController::new(CARD);
        ctl.press(&reg, FileId(1), Pos2::new(60.0, 60.0), canvas_at(0.0, 0.0, 800.0, 600.0));

        for _ in 0..100 {
            assert_eq!(ctl.drag_to(Pos2::new(60.0, 60.0), &mut reg), None);
        }
        assert!(ctl.is_active());
        assert_eq!(reg.version(), 0);

        assert_eq!(ctl.drag_to(Pos2::new(61.0, 60.0), &mut reg), Some(Pos2::new(51.0, 50.0)));
        assert_eq!(ctl.drag_to(Pos2::new(61.0, 60.0), &mut reg), None);
        assert_eq!(reg.version(), 1);
    }

    #[test]
    fn test_pinned_at_edge_stops_writing() {
        let mut reg = Registry::new(vec![record(1, 50.0, 50.0)]).unwrap();
        let mut ctl = DragController::new(CARD);
        ctl.press(&reg, FileId(1), Pos2::new(60.0, 60.0), canvas_at(0.0, 0.0, 800.0, 600.0));

        assert!(ctl.drag_to(Pos2::new(3000.0, 3000.0), &mut reg).is_some());
        // still past the corner: the clamped target does not move
        assert_eq!(ctl.drag_to(Pos2::new(4000.0, 3500.0), &mut reg), None);
        assert_eq!(reg.version(), 1);
    }

    #[test]
    fn test_record_gone_closes_session() {
        let reg = Registry::new(vec![record(1, 50.0, 50.0)]).unwrap();
        let mut other = Registry::new(vec![record(2, 0.0, 0.0)]).unwrap();
        let mut ctl = DragController::new(CARD);
        ctl.press(&reg, FileId(1), Pos2::new(60.0, 60.0), canvas_at(0.0, 0.0, 800.0, 600.0));

        assert_eq!(ctl.drag_to(Pos2::new(90.0, 90.0), &mut other), None);
        assert!(!ctl.is_active());
    }
}
