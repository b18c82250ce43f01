//! キーバインドシステム
//!
//! Emacsスタイルのプレフィックスキー対応キーマップ

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// アプリケーションのアクション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// ノートを保存（C-x C-s）
    SaveNote,
    /// 入力エリアを消去（C-x k）
    ClearInput,
    /// ノートをエクスポート（C-x C-e）
    ExportNotes,
    /// アプリケーションを終了（C-x C-c）
    Quit,
    /// 文字を挿入
    InsertChar(char),
    /// 改行を挿入
    InsertNewline,
    /// 直前の文字を削除
    Backspace,
    /// カーソル位置の文字を削除
    DeleteForward,
    /// カーソル移動
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    MoveLineStart,
    MoveLineEnd,
    /// ノート表示エリアのスクロール
    ScrollDisplayUp,
    ScrollDisplayDown,
}

/// キー処理の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyProcessResult {
    /// アクションが確定した
    Action(Action),
    /// プレフィックスキーの途中
    PartialMatch,
    /// 対応するバインドがない
    NoMatch,
}

/// プレフィックスキーの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prefix {
    CtrlX,
}

/// キーマップ
///
/// `C-x` プレフィックスからの2打鍵シーケンスと単打鍵の両方を解決する。
#[derive(Debug, Default)]
pub struct KeyMap {
    pending_prefix: Option<Prefix>,
}

impl KeyMap {
    /// 新しいキーマップを作成
    pub fn new() -> Self {
        Self {
            pending_prefix: None,
        }
    }

    /// プレフィックス入力中かどうか
    pub fn is_partial_match(&self) -> bool {
        self.pending_prefix.is_some()
    }

    /// プレフィックス状態をリセット
    pub fn reset_partial_match(&mut self) {
        self.pending_prefix = None;
    }

    /// 現在のプレフィックス表示ラベル
    pub fn current_prefix_label(&self) -> Option<&'static str> {
        match self.pending_prefix {
            Some(Prefix::CtrlX) => Some("C-x"),
            None => None,
        }
    }

    /// キーイベントを処理してアクションへ解決
    pub fn process_key_event(&mut self, key_event: KeyEvent) -> KeyProcessResult {
        if let Some(prefix) = self.pending_prefix {
            self.pending_prefix = None;
            return self.resolve_with_prefix(prefix, key_event);
        }

        self.resolve_root(key_event)
    }

    fn resolve_root(&mut self, key_event: KeyEvent) -> KeyProcessResult {
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

        match key_event.code {
            KeyCode::Char('x') if ctrl => {
                self.pending_prefix = Some(Prefix::CtrlX);
                KeyProcessResult::PartialMatch
            }
            KeyCode::Char(ch) if !ctrl => KeyProcessResult::Action(Action::InsertChar(ch)),
            KeyCode::Enter => KeyProcessResult::Action(Action::InsertNewline),
            KeyCode::Backspace => KeyProcessResult::Action(Action::Backspace),
            KeyCode::Delete => KeyProcessResult::Action(Action::DeleteForward),
            KeyCode::Left => KeyProcessResult::Action(Action::MoveLeft),
            KeyCode::Right => KeyProcessResult::Action(Action::MoveRight),
            KeyCode::Up => KeyProcessResult::Action(Action::MoveUp),
            KeyCode::Down => KeyProcessResult::Action(Action::MoveDown),
            KeyCode::Home => KeyProcessResult::Action(Action::MoveLineStart),
            KeyCode::End => KeyProcessResult::Action(Action::MoveLineEnd),
            KeyCode::PageUp => KeyProcessResult::Action(Action::ScrollDisplayUp),
            KeyCode::PageDown => KeyProcessResult::Action(Action::ScrollDisplayDown),
            KeyCode::Tab => KeyProcessResult::Action(Action::InsertChar('\t')),
            _ => KeyProcessResult::NoMatch,
        }
    }

    fn resolve_with_prefix(&self, prefix: Prefix, key_event: KeyEvent) -> KeyProcessResult {
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

        match prefix {
            Prefix::CtrlX => match key_event.code {
                KeyCode::Char('s') if ctrl => KeyProcessResult::Action(Action::SaveNote),
                KeyCode::Char('e') if ctrl => KeyProcessResult::Action(Action::ExportNotes),
                KeyCode::Char('c') if ctrl => KeyProcessResult::Action(Action::Quit),
                KeyCode::Char('k') if !ctrl => KeyProcessResult::Action(Action::ClearInput),
                _ => KeyProcessResult::NoMatch,
            },
        }
    }
}

/// キーイベントを人間が読みやすい形式に変換
pub fn format_key_event(key_event: &KeyEvent) -> String {
    let mut parts = Vec::new();

    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("C");
    }
    if key_event.modifiers.contains(KeyModifiers::ALT) {
        parts.push("M");
    }

    let key_name = match key_event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Enter => "RET".to_string(),
        KeyCode::Tab => "TAB".to_string(),
        KeyCode::Esc => "ESC".to_string(),
        KeyCode::Backspace => "BS".to_string(),
        KeyCode::Delete => "DEL".to_string(),
        other => format!("{:?}", other),
    };

    if parts.is_empty() {
        key_name
    } else {
        format!("{}-{}", parts.join("-"), key_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn plain(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_x_ctrl_s_saves() {
        let mut keymap = KeyMap::new();

        assert_eq!(keymap.process_key_event(ctrl('x')), KeyProcessResult::PartialMatch);
        assert!(keymap.is_partial_match());
        assert_eq!(keymap.current_prefix_label(), Some("C-x"));

        assert_eq!(
            keymap.process_key_event(ctrl('s')),
            KeyProcessResult::Action(Action::SaveNote)
        );
        assert!(!keymap.is_partial_match());
    }

    #[test]
    fn ctrl_x_sequences() {
        let mut keymap = KeyMap::new();

        keymap.process_key_event(ctrl('x'));
        assert_eq!(
            keymap.process_key_event(ctrl('e')),
            KeyProcessResult::Action(Action::ExportNotes)
        );

        keymap.process_key_event(ctrl('x'));
        assert_eq!(
            keymap.process_key_event(ctrl('c')),
            KeyProcessResult::Action(Action::Quit)
        );

        keymap.process_key_event(ctrl('x'));
        assert_eq!(
            keymap.process_key_event(plain(KeyCode::Char('k'))),
            KeyProcessResult::Action(Action::ClearInput)
        );
    }

    #[test]
    fn unknown_sequence_resets_prefix() {
        let mut keymap = KeyMap::new();

        keymap.process_key_event(ctrl('x'));
        assert_eq!(
            keymap.process_key_event(plain(KeyCode::Char('z'))),
            KeyProcessResult::NoMatch
        );
        assert!(!keymap.is_partial_match());

        // プレフィックス解除後は通常の文字入力に戻る
        assert_eq!(
            keymap.process_key_event(plain(KeyCode::Char('z'))),
            KeyProcessResult::Action(Action::InsertChar('z'))
        );
    }

    #[test]
    fn plain_characters_insert() {
        let mut keymap = KeyMap::new();
        assert_eq!(
            keymap.process_key_event(plain(KeyCode::Char('a'))),
            KeyProcessResult::Action(Action::InsertChar('a'))
        );
        assert_eq!(
            keymap.process_key_event(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            KeyProcessResult::Action(Action::InsertChar('A'))
        );
    }

    #[test]
    fn editing_and_navigation_keys() {
        let mut keymap = KeyMap::new();
        assert_eq!(
            keymap.process_key_event(plain(KeyCode::Enter)),
            KeyProcessResult::Action(Action::InsertNewline)
        );
        assert_eq!(
            keymap.process_key_event(plain(KeyCode::Backspace)),
            KeyProcessResult::Action(Action::Backspace)
        );
        assert_eq!(
            keymap.process_key_event(plain(KeyCode::PageDown)),
            KeyProcessResult::Action(Action::ScrollDisplayDown)
        );
        assert_eq!(
            keymap.process_key_event(plain(KeyCode::Home)),
            KeyProcessResult::Action(Action::MoveLineStart)
        );
    }

    #[test]
    fn format_key_event_renders_modifiers() {
        assert_eq!(format_key_event(&ctrl('x')), "C-x");
        assert_eq!(format_key_event(&plain(KeyCode::Enter)), "RET");
    }
}
