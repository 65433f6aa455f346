//! Storage window: header, sidebar, and the canvas/list content area.

use crate::canvas::{CanvasEvent, CanvasView};
use crate::interaction::DragController;
use crate::list;
use crate::menu::RecordAction;
use crate::registry::{FileId, Registry};
use crate::settings::AppSettings;
use crate::sidebar;
use canvascore::repaint::RepaintController;
use canvascore::theme::consume_zoom_keys;
use canvascore::widgets::{ButtonTone, ToolbarButton};
use canvascore::{CanvasTheme, Palette};
use egui::{Context, Key, Rect, RichText};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Canvas,
    List,
}

pub struct CanvasFilesApp {
    settings: AppSettings,
    registry: Registry,
    drag: DragController,
    view_mode: ViewMode,
    /// Held for the text field only; never applied to the records.
    search_query: String,
    /// Canvas rect from the last canvas frame; `None` while the canvas is
    /// not on screen.
    canvas_rect: Option<Rect>,
    repaint: RepaintController,
}

impl CanvasFilesApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        settings: AppSettings,
        registry: Registry,
    ) -> Self {
        Self::with_state(settings, registry)
    }

    pub fn with_state(settings: AppSettings, registry: Registry) -> Self {
        Self {
            drag: DragController::new(settings.card_footprint()),
            view_mode: settings.default_view,
            settings,
            registry,
            search_query: String::new(),
            canvas_rect: None,
            repaint: RepaintController::new(),
        }
    }

    /// Switch views. Leaving the canvas tears down any open drag.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if mode == self.view_mode {
            return;
        }
        if mode != ViewMode::Canvas {
            self.drag.cancel();
            self.canvas_rect = None;
        }
        tracing::debug!(?mode, "view mode changed");
        self.view_mode = mode;
    }

    fn apply_action(&mut self, id: FileId, action: RecordAction) {
        if !action.is_wired() {
            tracing::debug!(%id, ?action, "menu action is not wired");
            return;
        }
        if self.registry.toggle_pinned(id) {
            let pinned = self.registry.get(id).map(|r| r.pinned);
            tracing::debug!(%id, ?pinned, version = self.registry.version(), "toggled pin");
            self.repaint.mark_needs_repaint();
        }
    }

    fn handle_canvas_events(&mut self, events: Vec<CanvasEvent>) {
        for event in events {
            match event {
                CanvasEvent::Pressed { id, pointer } => {
                    self.drag.press(&self.registry, id, pointer, self.canvas_rect);
                }
                CanvasEvent::Action { id, action } => self.apply_action(id, action),
            }
        }
    }

    /// Feed pointer state into an open drag; release it once the primary
    /// button is up.
    fn track_pointer(&mut self, ctx: &Context) {
        if !self.drag.is_active() {
            return;
        }
        let (down, pos) = ctx.input(|i| (i.pointer.primary_down(), i.pointer.latest_pos()));
        if down {
            if let Some(pos) = pos {
                if self.drag.drag_to(pos, &mut self.registry).is_some() {
                    self.repaint.mark_needs_repaint();
                }
            }
        } else {
            self.drag.release();
            self.repaint.mark_needs_repaint();
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        consume_zoom_keys(ctx);
        if ctx.wants_keyboard_input() {
            return;
        }
        let (canvas, list) = ctx.input(|i| (i.key_pressed(Key::Num1), i.key_pressed(Key::Num2)));
        if canvas {
            self.set_view_mode(ViewMode::Canvas);
        }
        if list {
            self.set_view_mode(ViewMode::List);
        }
    }

    fn render_header(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("header")
            .frame(CanvasTheme::header_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let (logo, _) =
                        ui.allocate_exact_size(egui::vec2(32.0, 32.0), egui::Sense::hover());
                    ui.painter().rect_filled(logo, 8.0, Palette::TEXT);
                    ui.painter().rect_filled(
                        Rect::from_center_size(logo.center(), egui::vec2(20.0, 20.0)),
                        3.0,
                        Palette::SURFACE,
                    );
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(&self.settings.title)
                            .size(20.0)
                            .strong()
                            .color(Palette::TEXT),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let inert = [
                            ui.add(ToolbarButton::new("New Folder").glyph("📁")),
                            ui.add(
                                ToolbarButton::new("Upload")
                                    .glyph("⬆")
                                    .tone(ButtonTone::Primary),
                            ),
                            ui.add(ToolbarButton::new("Filter").glyph("⏷")),
                        ];
                        if inert.iter().any(|r| r.clicked()) {
                            tracing::debug!("header control is not wired");
                        }
                        ui.add(
                            egui::TextEdit::singleline(&mut self.search_query)
                                .hint_text("🔍  Search files...")
                                .desired_width(320.0),
                        );
                    });
                });
            });
    }

    fn render_content_header(&mut self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .inner_margin(egui::Margin::same(24.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new("All Files")
                                .size(24.0)
                                .strong()
                                .color(Palette::TEXT),
                        );
                        ui.label(
                            RichText::new("1,247 items • Drag files to arrange freely")
                                .color(Palette::TEXT_MUTED),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let list = ui.add(
                            ToolbarButton::new("List")
                                .glyph("☰")
                                .tone(ButtonTone::Ghost)
                                .selected(self.view_mode == ViewMode::List),
                        );
                        let canvas = ui.add(
                            ToolbarButton::new("Canvas")
                                .glyph("✥")
                                .tone(ButtonTone::Ghost)
                                .selected(self.view_mode == ViewMode::Canvas),
                        );
                        if canvas.clicked() {
                            self.set_view_mode(ViewMode::Canvas);
                        }
                        if list.clicked() {
                            self.set_view_mode(ViewMode::List);
                        }
                    });
                });
            });
        canvascore::widgets::divider(ui);
    }

    /// One frame of the whole window.
    fn show(&mut self, ctx: &Context) {
        self.repaint.begin_frame(ctx);
        self.handle_keys(ctx);

        self.render_header(ctx);
        egui::SidePanel::left("sidebar")
            .exact_width(256.0)
            .resizable(false)
            .frame(CanvasTheme::sidebar_frame())
            .show(ctx, sidebar::show);

        egui::CentralPanel::default()
            .frame(CanvasTheme::content_frame())
            .show(ctx, |ui| {
                self.render_content_header(ui);
                match self.view_mode {
                    ViewMode::Canvas => {
                        let output = CanvasView {
                            registry: &self.registry,
                            active: self.drag.active_id(),
                            footprint: self.drag.footprint(),
                            grid_spacing: self.settings.grid_spacing,
                            show_hint: self.settings.show_canvas_hint,
                        }
                        .show(ui);
                        self.canvas_rect = Some(output.rect);
                        self.handle_canvas_events(output.events);
                    }
                    ViewMode::List => {
                        let records = self.registry.snapshot();
                        if let Some((id, action)) = list::show(ui, &records) {
                            self.apply_action(id, action);
                        }
                    }
                }
            });

        self.track_pointer(ctx);
        self.repaint.end_frame(ctx);
    }
}

impl eframe::App for CanvasFilesApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
