//! ミニバッファシステム
//!
//! 画面下部1行でのプロンプト入力とメッセージ表示の統合機能

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

/// メッセージの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// ミニバッファの状態
#[derive(Debug, Clone)]
pub enum MinibufferMode {
    /// 非アクティブ
    Inactive,
    /// エクスポート先パスの入力待ち
    ExportPrompt { input: String },
    /// メッセージ表示
    Message {
        text: String,
        level: MessageLevel,
        shown_at: Instant,
        duration: Duration,
    },
}

/// ミニバッファの設定
#[derive(Debug, Clone)]
pub struct MinibufferConfig {
    /// エラー・警告メッセージの表示時間
    pub error_display_duration: Duration,
    /// 情報メッセージの表示時間
    pub info_display_duration: Duration,
}

impl Default for MinibufferConfig {
    fn default() -> Self {
        Self {
            error_display_duration: Duration::from_secs(5),
            info_display_duration: Duration::from_secs(3),
        }
    }
}

/// プロンプトのキー処理結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResult {
    /// 入力継続
    Continue,
    /// 入力確定
    Submit(String),
    /// キャンセル
    Cancel,
    /// ミニバッファの処理対象外
    Pass,
}

/// ミニバッファ
///
/// プロンプト（エクスポート先パス入力）と時限メッセージの表示を担う。
/// 同時にアクティブになるのはどちらか一方のみ。
#[derive(Debug)]
pub struct Minibuffer {
    mode: MinibufferMode,
    config: MinibufferConfig,
}

impl Minibuffer {
    /// 新しいミニバッファを作成
    pub fn new() -> Self {
        Self::with_config(MinibufferConfig::default())
    }

    /// 設定付きでミニバッファを作成
    pub fn with_config(config: MinibufferConfig) -> Self {
        Self {
            mode: MinibufferMode::Inactive,
            config,
        }
    }

    /// 現在の状態を取得
    pub fn mode(&self) -> &MinibufferMode {
        &self.mode
    }

    /// プロンプト入力中かどうか
    pub fn is_prompting(&self) -> bool {
        matches!(self.mode, MinibufferMode::ExportPrompt { .. })
    }

    /// メッセージ表示中かどうか
    pub fn is_message_displayed(&self) -> bool {
        matches!(self.mode, MinibufferMode::Message { .. })
    }

    /// エクスポート先パスのプロンプトを開始
    pub fn start_export_prompt(&mut self, initial: &str) {
        self.mode = MinibufferMode::ExportPrompt {
            input: initial.to_string(),
        };
    }

    /// プロンプト入力中のキーを処理
    pub fn handle_prompt_key(&mut self, key_event: KeyEvent) -> PromptResult {
        let input = match &mut self.mode {
            MinibufferMode::ExportPrompt { input } => input,
            _ => return PromptResult::Pass,
        };

        match (key_event.code, key_event.modifiers) {
            (KeyCode::Enter, _) => {
                let submitted = input.clone();
                self.mode = MinibufferMode::Inactive;
                PromptResult::Submit(submitted)
            }
            (KeyCode::Esc, _) | (KeyCode::Char('g'), KeyModifiers::CONTROL) => {
                self.mode = MinibufferMode::Inactive;
                PromptResult::Cancel
            }
            (KeyCode::Backspace, _) => {
                input.pop();
                PromptResult::Continue
            }
            (KeyCode::Char(ch), modifiers)
                if modifiers.is_empty() || modifiers == KeyModifiers::SHIFT =>
            {
                input.push(ch);
                PromptResult::Continue
            }
            _ => PromptResult::Continue,
        }
    }

    /// 情報メッセージを表示
    pub fn show_info(&mut self, message: impl Into<String>) {
        self.show_message(message.into(), MessageLevel::Info);
    }

    /// 警告メッセージを表示
    pub fn show_warning(&mut self, message: impl Into<String>) {
        self.show_message(message.into(), MessageLevel::Warning);
    }

    /// エラーメッセージを表示
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.show_message(message.into(), MessageLevel::Error);
    }

    fn show_message(&mut self, text: String, level: MessageLevel) {
        let duration = match level {
            MessageLevel::Info => self.config.info_display_duration,
            MessageLevel::Warning | MessageLevel::Error => self.config.error_display_duration,
        };
        self.mode = MinibufferMode::Message {
            text,
            level,
            shown_at: Instant::now(),
            duration,
        };
    }

    /// 表示時間を過ぎたメッセージを消去（毎フレーム呼び出し）
    pub fn tick(&mut self) {
        if let MinibufferMode::Message {
            shown_at, duration, ..
        } = &self.mode
        {
            if shown_at.elapsed() >= *duration {
                self.mode = MinibufferMode::Inactive;
            }
        }
    }

    /// 表示中のメッセージを即座に消去
    pub fn dismiss_message(&mut self) {
        if self.is_message_displayed() {
            self.mode = MinibufferMode::Inactive;
        }
    }
}

impl Default for Minibuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn prompt_collects_input_and_submits() {
        let mut mb = Minibuffer::new();
        mb.start_export_prompt("out");
        assert!(mb.is_prompting());

        assert_eq!(mb.handle_prompt_key(key(KeyCode::Char('.'))), PromptResult::Continue);
        assert_eq!(mb.handle_prompt_key(key(KeyCode::Char('t'))), PromptResult::Continue);
        assert_eq!(mb.handle_prompt_key(key(KeyCode::Backspace)), PromptResult::Continue);

        let result = mb.handle_prompt_key(key(KeyCode::Enter));
        assert_eq!(result, PromptResult::Submit("out.".to_string()));
        assert!(!mb.is_prompting());
    }

    #[test]
    fn escape_cancels_prompt() {
        let mut mb = Minibuffer::new();
        mb.start_export_prompt("my_notes_export.txt");

        let result = mb.handle_prompt_key(key(KeyCode::Esc));
        assert_eq!(result, PromptResult::Cancel);
        assert!(!mb.is_prompting());
    }

    #[test]
    fn ctrl_g_cancels_prompt() {
        let mut mb = Minibuffer::new();
        mb.start_export_prompt("");

        let result =
            mb.handle_prompt_key(KeyEvent::new(KeyCode::Char('g'), KeyModifiers::CONTROL));
        assert_eq!(result, PromptResult::Cancel);
    }

    #[test]
    fn keys_pass_through_when_not_prompting() {
        let mut mb = Minibuffer::new();
        assert_eq!(mb.handle_prompt_key(key(KeyCode::Char('a'))), PromptResult::Pass);
    }

    #[test]
    fn message_expires_after_duration() {
        let mut mb = Minibuffer::with_config(MinibufferConfig {
            error_display_duration: Duration::from_millis(0),
            info_display_duration: Duration::from_millis(0),
        });

        mb.show_info("saved");
        assert!(mb.is_message_displayed());

        mb.tick();
        assert!(!mb.is_message_displayed());
    }

    #[test]
    fn message_levels_choose_duration() {
        let mut mb = Minibuffer::new();

        mb.show_error("failed");
        match mb.mode() {
            MinibufferMode::Message { level, duration, .. } => {
                assert_eq!(*level, MessageLevel::Error);
                assert_eq!(*duration, Duration::from_secs(5));
            }
            _ => panic!("Expected message mode"),
        }

        mb.show_info("ok");
        match mb.mode() {
            MinibufferMode::Message { level, duration, .. } => {
                assert_eq!(*level, MessageLevel::Info);
                assert_eq!(*duration, Duration::from_secs(3));
            }
            _ => panic!("Expected message mode"),
        }
    }

    #[test]
    fn dismiss_clears_message_immediately() {
        let mut mb = Minibuffer::new();
        mb.show_warning("empty note");
        mb.dismiss_message();
        assert!(!mb.is_message_displayed());
    }
}
