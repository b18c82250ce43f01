//! UIモジュール
//!
//! ratatuiベースのターミナルUI機能

pub mod layout;
pub mod renderer;
pub mod theme;

// 公開API
pub use layout::{AppLayout, LayoutManager};
pub use renderer::{DisplayState, Renderer, StatusLineInfo};
pub use theme::ColorScheme;
