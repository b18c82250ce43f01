//! 画面描画
//!
//! 入力エリア・ノート表示エリア・ステータスライン・ミニバッファの描画

use crate::editor::InputArea;
use crate::minibuffer::{Minibuffer, MinibufferMode};
use crate::ui::layout::{AppLayout, LayoutManager};
use crate::ui::theme::ColorScheme;
use ratatui::{
    backend::Backend,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use unicode_width::UnicodeWidthStr;

/// エクスポートプロンプトの表示ラベル
const EXPORT_PROMPT_LABEL: &str = "エクスポート先: ";

/// キーバインドのヒント表示
const KEY_HINTS: &str = "C-x C-s: 保存  C-x k: クリア  C-x C-e: エクスポート  C-x C-c: 終了";

/// ステータスラインに表示する情報
#[derive(Debug, Clone)]
pub struct StatusLineInfo<'a> {
    /// バッキングファイルのパス表示
    pub notes_path: &'a str,
    /// 未保存の入力があるか
    pub has_unsaved_input: bool,
    /// 入力途中のプレフィックスキー
    pub prefix_label: Option<&'a str>,
}

/// ノート表示エリアの状態
///
/// スクロール位置は描画時に内容へ合わせてクランプされる。
#[derive(Debug, Clone, Default)]
pub struct DisplayState {
    /// 表示する全ノート内容
    pub content: String,
    /// 先頭から何行スクロールしているか
    pub scroll: usize,
    /// 末尾（最新エントリ）へ追従するか
    pub follow_tail: bool,
    /// 直近の描画での表示可能行数（スクロール量の計算に使う）
    pub viewport_height: usize,
}

impl DisplayState {
    /// 内容を置き換えて末尾追従に戻す
    pub fn replace_content(&mut self, content: String) {
        self.content = content;
        self.follow_tail = true;
    }

    /// 上方向へスクロール
    pub fn scroll_up(&mut self, amount: usize) {
        self.follow_tail = false;
        self.scroll = self.scroll.saturating_sub(amount);
    }

    /// 下方向へスクロール
    pub fn scroll_down(&mut self, amount: usize) {
        self.scroll = self.scroll.saturating_add(amount);
    }
}

/// 画面描画器
#[derive(Debug)]
pub struct Renderer {
    layout: LayoutManager,
    theme: ColorScheme,
}

impl Renderer {
    /// 新しい描画器を作成
    pub fn new() -> Self {
        Self {
            layout: LayoutManager::new(),
            theme: ColorScheme::default(),
        }
    }

    /// 1フレームを描画
    pub fn render<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        input: &InputArea,
        display: &mut DisplayState,
        minibuffer: &Minibuffer,
        status: StatusLineInfo<'_>,
    ) -> std::io::Result<()> {
        terminal.draw(|frame| {
            self.draw(frame, input, display, minibuffer, &status);
        })?;
        Ok(())
    }

    fn draw(
        &self,
        frame: &mut Frame<'_>,
        input: &InputArea,
        display: &mut DisplayState,
        minibuffer: &Minibuffer,
        status: &StatusLineInfo<'_>,
    ) {
        let area = frame.area();

        if !self.layout.check_minimum_size(area) {
            let (min_w, min_h) = self.layout.minimum_size();
            let warning = Paragraph::new(format!(
                "画面サイズが小さすぎます（最小 {}x{}）",
                min_w, min_h
            ))
            .style(Style::default().fg(Color::Red));
            frame.render_widget(warning, area);
            return;
        }

        let layout = self.layout.calculate_layout(area);

        self.draw_input_pane(frame, &layout, input, !minibuffer.is_prompting());
        self.draw_display_pane(frame, &layout, display);
        self.draw_status_line(frame, &layout, status);
        self.draw_minibuffer(frame, &layout, minibuffer);
    }

    fn draw_input_pane(
        &self,
        frame: &mut Frame<'_>,
        layout: &AppLayout,
        input: &InputArea,
        focused: bool,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("新規ノート")
            .border_style(self.theme.border_style(focused));
        let inner = block.inner(layout.input);

        // カーソル行が常に見えるように入力側もスクロール
        let inner_height = inner.height as usize;
        let cursor = input.cursor();
        let scroll = if inner_height == 0 {
            0
        } else {
            cursor.line.saturating_sub(inner_height - 1)
        };

        let lines: Vec<Line<'_>> = input
            .lines()
            .iter()
            .map(|line| Line::from(line.as_str()))
            .collect();
        let paragraph = Paragraph::new(lines)
            .block(block)
            .scroll((scroll as u16, 0));
        frame.render_widget(paragraph, layout.input);

        if focused && inner_height > 0 {
            let cursor_x = inner.x + input.cursor_display_column().min(inner.width as usize - 1) as u16;
            let cursor_y = inner.y + (cursor.line - scroll).min(inner_height - 1) as u16;
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }

    fn draw_display_pane(&self, frame: &mut Frame<'_>, layout: &AppLayout, display: &mut DisplayState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("ノート一覧")
            .border_style(self.theme.border_style(false));
        let inner = block.inner(layout.display);

        let line_count = display.content.lines().count();
        let inner_height = inner.height as usize;
        display.viewport_height = inner_height;

        let max_scroll = line_count.saturating_sub(inner_height);
        if display.follow_tail {
            display.scroll = max_scroll;
        } else {
            display.scroll = display.scroll.min(max_scroll);
        }

        let scroll_offset = u16::try_from(display.scroll).unwrap_or(u16::MAX);
        let paragraph = Paragraph::new(display.content.as_str())
            .block(block)
            .scroll((scroll_offset, 0));
        frame.render_widget(paragraph, layout.display);
    }

    fn draw_status_line(&self, frame: &mut Frame<'_>, layout: &AppLayout, status: &StatusLineInfo<'_>) {
        let modified_marker = if status.has_unsaved_input { " [+]" } else { "" };
        let prefix = match status.prefix_label {
            Some(label) => format!("  {} -", label),
            None => String::new(),
        };
        let text = format!(" {}{}{}", status.notes_path, modified_marker, prefix);

        let paragraph = Paragraph::new(text).style(self.theme.status_style());
        frame.render_widget(paragraph, layout.status);
    }

    fn draw_minibuffer(&self, frame: &mut Frame<'_>, layout: &AppLayout, minibuffer: &Minibuffer) {
        let (line, style) = match minibuffer.mode() {
            MinibufferMode::Inactive => (
                Line::from(KEY_HINTS),
                Style::default().fg(Color::DarkGray),
            ),
            MinibufferMode::ExportPrompt { input } => {
                let text = format!("{}{}", EXPORT_PROMPT_LABEL, input);
                let cursor_x = layout.minibuffer.x
                    + UnicodeWidthStr::width(text.as_str()).min(layout.minibuffer.width as usize - 1)
                        as u16;
                frame.set_cursor_position((cursor_x, layout.minibuffer.y));
                (Line::from(text), self.theme.prompt_style())
            }
            MinibufferMode::Message { text, level, .. } => {
                (Line::from(text.clone()), self.theme.message_style(*level))
            }
        };

        let paragraph = Paragraph::new(line).style(style);
        frame.render_widget(paragraph, layout.minibuffer);
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
