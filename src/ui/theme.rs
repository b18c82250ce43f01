//! 配色設定
//!
//! 16色ターミナルを前提とした配色スキーム

use crate::minibuffer::MessageLevel;
use ratatui::style::{Color, Modifier, Style};

/// 配色スキーム
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // 基本色
    pub foreground: Color,

    // ペイン境界色
    pub border_normal: Color,
    pub border_focus: Color,

    // ステータスライン色
    pub status_bg: Color,
    pub status_fg: Color,

    // ミニバッファ色
    pub minibuffer_prompt: Color,

    // メッセージ色
    pub error_message: Color,
    pub warning_message: Color,
    pub info_message: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            foreground: Color::Reset,
            border_normal: Color::DarkGray,
            border_focus: Color::Cyan,
            status_bg: Color::DarkGray,
            status_fg: Color::White,
            minibuffer_prompt: Color::Cyan,
            error_message: Color::Red,
            warning_message: Color::Yellow,
            info_message: Color::Green,
        }
    }
}

impl ColorScheme {
    /// ペイン境界のスタイル
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focus)
        } else {
            Style::default().fg(self.border_normal)
        }
    }

    /// ステータスラインのスタイル
    pub fn status_style(&self) -> Style {
        Style::default().bg(self.status_bg).fg(self.status_fg)
    }

    /// プロンプトのスタイル
    pub fn prompt_style(&self) -> Style {
        Style::default().fg(self.minibuffer_prompt)
    }

    /// メッセージ種別ごとのスタイル
    pub fn message_style(&self, level: MessageLevel) -> Style {
        let color = match level {
            MessageLevel::Info => self.info_message,
            MessageLevel::Warning => self.warning_message,
            MessageLevel::Error => self.error_message,
        };
        let style = Style::default().fg(color);
        if level == MessageLevel::Error {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_styles_differ_by_level() {
        let theme = ColorScheme::default();
        assert_ne!(
            theme.message_style(MessageLevel::Info),
            theme.message_style(MessageLevel::Error)
        );
        assert_ne!(
            theme.message_style(MessageLevel::Warning),
            theme.message_style(MessageLevel::Info)
        );
    }

    #[test]
    fn focused_border_is_highlighted() {
        let theme = ColorScheme::default();
        assert_ne!(theme.border_style(true), theme.border_style(false));
    }
}
