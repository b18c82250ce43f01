//! ノート永続化モジュール
//!
//! 追記専用のノートログとその周辺機能

pub mod log;
pub mod path;
pub mod timestamp;

// 公開API
pub use log::{NotesLog, DEFAULT_NOTES_FILE};
pub use path::{expand_path, DEFAULT_EXPORT_FILE};
