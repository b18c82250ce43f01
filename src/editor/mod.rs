//! 編集モジュール
//!
//! ノート入力エリアの編集機能

pub mod input_area;

// 公開API
pub use input_area::{CursorPosition, InputArea};
