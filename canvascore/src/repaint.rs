//! Repaint controller
//!
//! egui repaints on input by itself. State that changes *outside* the
//! input that caused it (a pin toggled from a closed menu, a drag position
//! written after the frame's widgets were laid out) needs one more frame
//! to show up. `RepaintController` collects those requests and issues at
//! most one repaint per frame, so an idle window stays asleep.

/// Why this frame is being painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepaintReason {
    /// First frame — always paint.
    Init,
    /// Pointer or keyboard input arrived.
    Input,
    /// The app marked its state dirty on the previous frame.
    StateChange,
}

/// Decide why a frame runs from what the previous frames left behind.
pub fn classify(frame: u64, had_input: bool, needs_repaint: bool) -> RepaintReason {
    if frame == 0 {
        RepaintReason::Init
    } else if needs_repaint && !had_input {
        RepaintReason::StateChange
    } else {
        RepaintReason::Input
    }
}

/// Call [`begin_frame`](Self::begin_frame) at the top of `update()` and
/// [`end_frame`](Self::end_frame) at the bottom.
#[derive(Debug, Default)]
pub struct RepaintController {
    needs_repaint: bool,
    frame: u64,
}

impl RepaintController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request one more frame after this one.
    pub fn mark_needs_repaint(&mut self) {
        self.needs_repaint = true;
    }

    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    pub fn begin_frame(&mut self, ctx: &egui::Context) {
        let had_input = ctx.input(|i| {
            !i.events.is_empty()
                || i.pointer.any_pressed()
                || i.pointer.any_released()
                || i.pointer.is_moving()
                || i.raw_scroll_delta != egui::Vec2::ZERO
        });
        let reason = classify(self.frame, had_input, self.needs_repaint);
        tracing::trace!(frame = self.frame, ?reason, "frame begin");
        self.needs_repaint = false;
    }

    pub fn end_frame(&mut self, ctx: &egui::Context) {
        self.frame += 1;
        if self.needs_repaint {
            ctx.request_repaint();
        }
    }
}
