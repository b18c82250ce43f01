//! kiroku - ターミナルで動くミニマルなノートアプリケーション
//!
//! タイムスタンプ付きノートの追記・閲覧・エクスポート機能の実装

// コアモジュール
pub mod app;
pub mod error;
pub mod logging;

// データ層
pub mod notes;

// 編集層
pub mod editor;

// ロジック層
pub mod input;
pub mod minibuffer;

// 表示層
pub mod ui;

// 公開API
pub use app::App;
pub use error::{KirokuError, Result};
pub use notes::NotesLog;
