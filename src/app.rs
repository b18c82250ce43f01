//! メインアプリケーション構造体
//!
//! アプリケーション全体の状態管理とメインループを実装

use crate::editor::InputArea;
use crate::error::{KirokuError, Result, UiError};
use crate::input::{format_key_event, Action, KeyMap, KeyProcessResult};
use crate::logging::Logger;
use crate::minibuffer::{Minibuffer, PromptResult};
use crate::notes::{expand_path, NotesLog, DEFAULT_EXPORT_FILE, DEFAULT_NOTES_FILE};
use crate::ui::{DisplayState, Renderer, StatusLineInfo};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// メインアプリケーション構造体
///
/// 全てのコンポーネントを統合し、アプリケーションのライフサイクルを管理
pub struct App {
    /// アプリケーション実行状態
    running: bool,
    /// ノート永続化ログ
    notes: NotesLog,
    /// ノート入力エリア
    input: InputArea,
    /// ノート表示エリアの状態
    display: DisplayState,
    /// ミニバッファ
    minibuffer: Minibuffer,
    /// キーマップ
    keymap: KeyMap,
    /// 描画器
    renderer: Renderer,
    /// 開発者向けロガー
    logger: Logger,
}

impl App {
    /// デフォルトのバッキングファイルでアプリケーションを作成
    pub fn new() -> Result<Self> {
        Self::with_notes_path(DEFAULT_NOTES_FILE)
    }

    /// 指定したバッキングファイルでアプリケーションを作成
    ///
    /// ファイルが存在しなければヘッダ付きで作成し、表示エリアを
    /// 現在の内容で初期化する。
    pub fn with_notes_path<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let notes = NotesLog::new(path);
        notes.ensure_initialized()?;

        let mut app = App {
            running: true,
            notes,
            input: InputArea::new(),
            display: DisplayState::default(),
            minibuffer: Minibuffer::new(),
            keymap: KeyMap::new(),
            renderer: Renderer::new(),
            logger: Logger::for_development(),
        };

        app.refresh_display()?;
        Ok(app)
    }

    /// メインイベントループを実行
    pub fn run(&mut self) -> Result<()> {
        self.enter_terminal()?;

        let backend = CrosstermBackend::new(stdout());
        let mut terminal =
            Terminal::new(backend).map_err(|err| Self::terminal_error("terminal init", err))?;

        let loop_result = self.event_loop(&mut terminal);
        let show_cursor_result = terminal
            .show_cursor()
            .map_err(|err| Self::terminal_error("show cursor", err));
        drop(terminal);
        let cleanup_result = self.leave_terminal();

        loop_result.and(show_cursor_result).and(cleanup_result)
    }

    /// アプリケーションが実行中かどうかを確認
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// アプリケーションを終了状態にする
    pub fn shutdown(&mut self) {
        self.running = false;
    }

    /// バッキングファイルのパスを取得
    pub fn notes_path(&self) -> &Path {
        self.notes.path()
    }

    /// 入力エリアの現在の内容を取得
    pub fn input_contents(&self) -> String {
        self.input.contents()
    }

    /// 表示エリアの現在の内容を取得
    pub fn display_contents(&self) -> &str {
        &self.display.content
    }

    /// 入力エリアに文字列を挿入
    pub fn insert_str(&mut self, s: &str) {
        self.input.insert_str(s);
    }

    /// 入力エリアを消去
    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// 保存アクションを実行
    ///
    /// 空白のみの入力は警告となり、ログは変更されない。保存成功時は
    /// 入力を消去し、表示エリアを最新の内容へ更新する。
    pub fn save_note(&mut self) {
        if self.input.is_blank() {
            self.minibuffer
                .show_warning("保存する前にテキストを入力してください");
            return;
        }

        let text = self.input.contents();
        if let Err(err) = self.notes.append_entry(&text) {
            self.report_error("save", err);
            return;
        }

        self.minibuffer.show_info("ノートを保存しました");
        self.input.clear();

        if let Err(err) = self.refresh_display() {
            self.report_error("reload", err);
        }
    }

    /// エクスポートアクションを実行（プロンプト確定後）
    pub fn export_notes_to(&mut self, raw_path: &str) {
        if raw_path.trim().is_empty() {
            self.minibuffer.show_warning("ファイル名を入力してください");
            return;
        }

        let destination = match expand_path(raw_path) {
            Ok(path) => path,
            Err(err) => {
                self.report_error("export", err);
                return;
            }
        };

        match self.notes.export_to(&destination) {
            Ok(()) => {
                self.minibuffer
                    .show_info(format!("エクスポートしました: {}", destination.display()));
            }
            Err(err) => self.report_error("export", err),
        }
    }

    /// 表示エリアをバッキングファイルの現在の内容で置き換え
    fn refresh_display(&mut self) -> Result<()> {
        let content = self.notes.read_all()?;
        self.display.replace_content(content);
        Ok(())
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<()> {
        while self.running {
            self.minibuffer.tick();
            self.render(terminal)?;

            if event::poll(Duration::from_millis(16))
                .map_err(|err| Self::terminal_error("event poll", err))?
            {
                match event::read().map_err(|err| Self::terminal_error("event read", err))? {
                    Event::Key(key_event) => self.handle_key_event(key_event)?,
                    Event::Resize(_, _) => {
                        // 次回描画で自動的に反映されるため処理不要
                    }
                    Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
                }
            }
        }

        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        // メッセージ表示中はキー入力で消去してから通常処理へ進む
        if self.minibuffer.is_message_displayed() {
            self.minibuffer.dismiss_message();
        }

        // エクスポートプロンプト入力中の処理
        if self.minibuffer.is_prompting() {
            match self.minibuffer.handle_prompt_key(key_event) {
                PromptResult::Submit(path) => self.export_notes_to(&path),
                PromptResult::Cancel | PromptResult::Continue | PromptResult::Pass => {}
            }
            return Ok(());
        }

        // 特殊キー処理（C-g, ESC：プレフィックスのキャンセル）
        if self.handle_special_keys(&key_event) {
            return Ok(());
        }

        match self.keymap.process_key_event(key_event) {
            KeyProcessResult::Action(action) => self.handle_action(action),
            KeyProcessResult::PartialMatch => {
                // プレフィックス状態はステータスラインに表示される
            }
            KeyProcessResult::NoMatch => {
                self.minibuffer
                    .show_info(format!("未対応のキー: {}", format_key_event(&key_event)));
            }
        }

        Ok(())
    }

    /// 特殊キーの処理（キーマップを迂回）
    fn handle_special_keys(&mut self, key_event: &KeyEvent) -> bool {
        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('g'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => {
                self.keymap.reset_partial_match();
                true
            }
            _ => false,
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::SaveNote => self.save_note(),
            Action::ClearInput => self.input.clear(),
            Action::ExportNotes => self.minibuffer.start_export_prompt(DEFAULT_EXPORT_FILE),
            Action::Quit => self.shutdown(),
            Action::InsertChar(ch) => self.input.insert_char(ch),
            Action::InsertNewline => self.input.insert_newline(),
            Action::Backspace => self.input.backspace(),
            Action::DeleteForward => self.input.delete_forward(),
            Action::MoveLeft => self.input.move_left(),
            Action::MoveRight => self.input.move_right(),
            Action::MoveUp => self.input.move_up(),
            Action::MoveDown => self.input.move_down(),
            Action::MoveLineStart => self.input.move_line_start(),
            Action::MoveLineEnd => self.input.move_line_end(),
            Action::ScrollDisplayUp => {
                let step = self.page_step();
                self.display.scroll_up(step);
            }
            Action::ScrollDisplayDown => {
                let step = self.page_step();
                self.display.scroll_down(step);
            }
        }
    }

    fn page_step(&self) -> usize {
        if self.display.viewport_height > 1 {
            self.display.viewport_height - 1
        } else {
            10
        }
    }

    /// エラーをログへ記録し、ミニバッファに表示する
    ///
    /// いずれのエラーも致命的には扱わず、ウィンドウは操作可能なまま残る。
    fn report_error(&mut self, context: &str, error: KirokuError) {
        self.logger.log_error_message(error.to_string(), Some(context));

        let message = match context {
            "save" => format!("保存に失敗しました: {}", error),
            "reload" => format!("ノートの読み込みに失敗しました: {}", error),
            "export" => format!("エクスポートに失敗しました: {}", error),
            _ => format!("エラーが発生しました: {}", error),
        };
        self.minibuffer.show_error(message);
    }

    fn render<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let path_label = self.notes.path().display().to_string();
        let status = StatusLineInfo {
            notes_path: &path_label,
            has_unsaved_input: !self.input.is_blank(),
            prefix_label: self.keymap.current_prefix_label(),
        };

        self.renderer
            .render(
                terminal,
                &self.input,
                &mut self.display,
                &self.minibuffer,
                status,
            )
            .map_err(|err| Self::terminal_error("render", err))
    }

    fn enter_terminal(&self) -> Result<()> {
        enable_raw_mode().map_err(|err| Self::terminal_error("enable raw mode", err))?;
        let mut out = stdout();
        execute!(out, EnterAlternateScreen)
            .map_err(|err| Self::terminal_error("enter alternate screen", err))?;
        Ok(())
    }

    fn leave_terminal(&self) -> Result<()> {
        let mut out = stdout();
        execute!(out, LeaveAlternateScreen)
            .map_err(|err| Self::terminal_error("leave alternate screen", err))?;
        disable_raw_mode().map_err(|err| Self::terminal_error("disable raw mode", err))?;
        Ok(())
    }

    fn terminal_error(context: &str, err: impl std::fmt::Display) -> KirokuError {
        KirokuError::Ui(UiError::RenderingFailed {
            component: format!("{}: {}", context, err),
        })
    }

    #[cfg(test)]
    pub(crate) fn minibuffer(&self) -> &Minibuffer {
        &self.minibuffer
    }

    #[cfg(test)]
    pub(crate) fn dispatch(&mut self, key_event: KeyEvent) -> Result<()> {
        self.handle_key_event(key_event)
    }
}
