//! ノート入力エリア
//!
//! 新規ノートを入力する小規模な複数行エディタ

use unicode_width::UnicodeWidthStr;

/// カーソル位置（行と文字単位の列）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

/// ノート入力エリア
///
/// 保存前のノート本文を保持する。改行を含む入力に対応し、
/// カーソル移動は文字単位で行う。
#[derive(Debug, Clone)]
pub struct InputArea {
    /// 入力中の行
    lines: Vec<String>,
    /// カーソル位置
    cursor: CursorPosition,
}

impl InputArea {
    /// 空の入力エリアを作成
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cursor: CursorPosition::default(),
        }
    }

    /// 現在の入力内容を1つの文字列として取得
    pub fn contents(&self) -> String {
        self.lines.join("\n")
    }

    /// 入力が空白のみかどうか
    pub fn is_blank(&self) -> bool {
        self.contents().trim().is_empty()
    }

    /// カーソル位置を取得
    pub fn cursor(&self) -> CursorPosition {
        self.cursor
    }

    /// 表示用の行スライスを取得
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// 画面上のカーソル列（表示幅基準）を計算
    pub fn cursor_display_column(&self) -> usize {
        let line = &self.lines[self.cursor.line];
        let prefix: String = line.chars().take(self.cursor.column).collect();
        UnicodeWidthStr::width(prefix.as_str())
    }

    /// カーソル位置に文字を挿入
    pub fn insert_char(&mut self, ch: char) {
        let line = &mut self.lines[self.cursor.line];
        let byte_idx = char_to_byte_index(line, self.cursor.column);
        line.insert(byte_idx, ch);
        self.cursor.column += 1;
    }

    /// カーソル位置に文字列を挿入（改行を含んでもよい）
    pub fn insert_str(&mut self, s: &str) {
        for ch in s.chars() {
            if ch == '\n' {
                self.insert_newline();
            } else {
                self.insert_char(ch);
            }
        }
    }

    /// カーソル位置で改行
    pub fn insert_newline(&mut self) {
        let line = &mut self.lines[self.cursor.line];
        let byte_idx = char_to_byte_index(line, self.cursor.column);
        let rest = line.split_off(byte_idx);
        self.lines.insert(self.cursor.line + 1, rest);
        self.cursor.line += 1;
        self.cursor.column = 0;
    }

    /// カーソル直前の文字を削除（行頭では前の行と結合）
    pub fn backspace(&mut self) {
        if self.cursor.column > 0 {
            self.cursor.column -= 1;
            let line = &mut self.lines[self.cursor.line];
            let byte_idx = char_to_byte_index(line, self.cursor.column);
            line.remove(byte_idx);
        } else if self.cursor.line > 0 {
            let removed = self.lines.remove(self.cursor.line);
            self.cursor.line -= 1;
            let prev = &mut self.lines[self.cursor.line];
            self.cursor.column = prev.chars().count();
            prev.push_str(&removed);
        }
    }

    /// カーソル位置の文字を削除（行末では次の行と結合）
    pub fn delete_forward(&mut self) {
        let line_char_count = self.current_line_chars();
        if self.cursor.column < line_char_count {
            let line = &mut self.lines[self.cursor.line];
            let byte_idx = char_to_byte_index(line, self.cursor.column);
            line.remove(byte_idx);
        } else if self.cursor.line + 1 < self.lines.len() {
            let next = self.lines.remove(self.cursor.line + 1);
            self.lines[self.cursor.line].push_str(&next);
        }
    }

    /// カーソルを左へ移動
    pub fn move_left(&mut self) {
        if self.cursor.column > 0 {
            self.cursor.column -= 1;
        } else if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.column = self.current_line_chars();
        }
    }

    /// カーソルを右へ移動
    pub fn move_right(&mut self) {
        if self.cursor.column < self.current_line_chars() {
            self.cursor.column += 1;
        } else if self.cursor.line + 1 < self.lines.len() {
            self.cursor.line += 1;
            self.cursor.column = 0;
        }
    }

    /// カーソルを上の行へ移動
    pub fn move_up(&mut self) {
        if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.column = self.cursor.column.min(self.current_line_chars());
        }
    }

    /// カーソルを下の行へ移動
    pub fn move_down(&mut self) {
        if self.cursor.line + 1 < self.lines.len() {
            self.cursor.line += 1;
            self.cursor.column = self.cursor.column.min(self.current_line_chars());
        }
    }

    /// 行頭へ移動
    pub fn move_line_start(&mut self) {
        self.cursor.column = 0;
    }

    /// 行末へ移動
    pub fn move_line_end(&mut self) {
        self.cursor.column = self.current_line_chars();
    }

    /// 入力内容を消去してカーソルを先頭へ戻す
    pub fn clear(&mut self) {
        self.lines = vec![String::new()];
        self.cursor = CursorPosition::default();
    }

    fn current_line_chars(&self) -> usize {
        self.lines[self.cursor.line].chars().count()
    }
}

impl Default for InputArea {
    fn default() -> Self {
        Self::new()
    }
}

/// 文字単位の列位置をバイト位置に変換
fn char_to_byte_index(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map(|(idx, _)| idx)
        .unwrap_or(line.len())
}
