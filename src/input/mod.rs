//! 入力処理モジュール
//!
//! キーバインドとアクション解決

pub mod keybinding;

// 公開API
pub use keybinding::{format_key_event, Action, KeyMap, KeyProcessResult};
