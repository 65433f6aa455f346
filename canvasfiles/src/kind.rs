//! File kinds and their icons

use canvascore::Palette;
use egui::Color32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Document,
    Image,
    Video,
    Audio,
    Archive,
    Folder,
}

/// Glyph and tint used wherever a record is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindIcon {
    pub glyph: &'static str,
    pub color: Color32,
}

impl FileKind {
    pub fn icon(self) -> KindIcon {
        let (glyph, color) = match self {
            FileKind::Folder => ("📁", Palette::ACCENT_SOFT),
            FileKind::Image => ("🖼", Palette::GREEN),
            FileKind::Video => ("🎞", Palette::RED),
            FileKind::Audio => ("🎵", Palette::PURPLE),
            FileKind::Archive => ("📦", Palette::YELLOW),
            FileKind::Document => ("📄", Palette::TEXT_MUTED),
        };
        KindIcon { glyph, color }
    }

    pub fn label(self) -> &'static str {
        match self {
            FileKind::Document => "document",
            FileKind::Image => "image",
            FileKind::Video => "video",
            FileKind::Audio => "audio",
            FileKind::Archive => "archive",
            FileKind::Folder => "folder",
        }
    }
}
