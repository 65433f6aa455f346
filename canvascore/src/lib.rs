//! canvascore — shared plumbing for the canvasfiles app

pub mod config;
pub mod grid;
pub mod repaint;
pub mod text;
pub mod theme;
pub mod widgets;

pub use repaint::RepaintController;
pub use theme::{CanvasTheme, Palette};
