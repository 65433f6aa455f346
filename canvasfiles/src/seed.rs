//! The files every session starts with.

use crate::kind::FileKind;
use crate::registry::{FileId, FileRecord};

struct Seed {
    id: u32,
    name: &'static str,
    kind: FileKind,
    size: &'static str,
    modified: &'static str,
    starred: bool,
    pinned: bool,
    x: f32,
    y: f32,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: 1,
        name: "Project Presentation.pptx",
        kind: FileKind::Document,
        size: "2.4 MB",
        modified: "2 hours ago",
        starred: true,
        pinned: false,
        x: 50.0,
        y: 50.0,
    },
    Seed {
        id: 2,
        name: "Design Assets",
        kind: FileKind::Folder,
        size: "156 items",
        modified: "1 day ago",
        starred: false,
        pinned: false,
        x: 300.0,
        y: 80.0,
    },
    Seed {
        id: 3,
        name: "Screenshot 2024.png",
        kind: FileKind::Image,
        size: "1.2 MB",
        modified: "3 hours ago",
        starred: false,
        pinned: true,
        x: 150.0,
        y: 200.0,
    },
    Seed {
        id: 4,
        name: "Meeting Recording.mp4",
        kind: FileKind::Video,
        size: "45.6 MB",
        modified: "1 week ago",
        starred: true,
        pinned: false,
        x: 450.0,
        y: 150.0,
    },
    Seed {
        id: 5,
        name: "Budget Report.xlsx",
        kind: FileKind::Document,
        size: "890 KB",
        modified: "2 days ago",
        starred: false,
        pinned: false,
        x: 200.0,
        y: 350.0,
    },
    Seed {
        id: 6,
        name: "Music Collection",
        kind: FileKind::Folder,
        size: "78 items",
        modified: "1 month ago",
        starred: false,
        pinned: false,
        x: 500.0,
        y: 300.0,
    },
    Seed {
        id: 7,
        name: "App Mockups.fig",
        kind: FileKind::Document,
        size: "3.1 MB",
        modified: "5 hours ago",
        starred: false,
        pinned: false,
        x: 350.0,
        y: 250.0,
    },
    Seed {
        id: 8,
        name: "Archive_2024.zip",
        kind: FileKind::Archive,
        size: "12.3 MB",
        modified: "1 week ago",
        starred: false,
        pinned: false,
        x: 100.0,
        y: 450.0,
    },
];

pub fn default_records() -> Vec<FileRecord> {
    SEEDS
        .iter()
        .map(|s| FileRecord {
            id: FileId(s.id),
            name: s.name.to_string(),
            kind: s.kind,
            size: s.size.to_string(),
            modified: s.modified.to_string(),
            starred: s.starred,
            pinned: s.pinned,
            x: s.x,
            y: s.y,
        })
        .collect()
}
