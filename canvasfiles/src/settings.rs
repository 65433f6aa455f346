//! User settings, read once at startup.

use crate::app::ViewMode;
use serde::{Deserialize, Serialize};

pub const APP_NAME: &str = "canvasfiles";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub title: String,
    pub default_view: ViewMode,
    /// Footprint used to keep cards inside the canvas while dragging.
    pub card_width: f32,
    pub card_height: f32,
    pub grid_spacing: f32,
    pub show_canvas_hint: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            title: "Yeon's Storage".to_string(),
            default_view: ViewMode::Canvas,
            card_width: 280.0,
            card_height: 150.0,
            grid_spacing: 20.0,
            show_canvas_hint: true,
        }
    }
}

impl AppSettings {
    pub fn load() -> Self {
        canvascore::config::load_or_default::<Self>(APP_NAME).sanitized()
    }

    /// Replace nonsensical sizes with the defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.card_width > 0.0) {
            self.card_width = defaults.card_width;
        }
        if !(self.card_height > 0.0) {
            self.card_height = defaults.card_height;
        }
        if !(self.grid_spacing >= 4.0) {
            self.grid_spacing = defaults.grid_spacing;
        }
        self
    }

    pub fn card_footprint(&self) -> egui::Vec2 {
        egui::vec2(self.card_width, self.card_height)
    }
}
