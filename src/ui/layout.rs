//! TUIレイアウト管理
//!
//! ratatuiベースの画面レイアウト計算と管理

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 入力ペインの高さ（境界線込み）
const INPUT_PANE_HEIGHT: u16 = 8;

/// アプリケーション全体のレイアウト
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// ノート入力エリア（上部）
    pub input: Rect,
    /// ノート表示エリア（中央、可変）
    pub display: Rect,
    /// ステータスライン（下部、1行）
    pub status: Rect,
    /// ミニバッファ（最下部、1行）
    pub minibuffer: Rect,
    /// 全体エリア
    pub total: Rect,
}

/// レイアウトマネージャー
#[derive(Debug)]
pub struct LayoutManager {
    /// 最小必要サイズ
    min_width: u16,
    min_height: u16,
}

impl LayoutManager {
    /// 新しいレイアウトマネージャーを作成
    pub fn new() -> Self {
        Self {
            min_width: 60,
            min_height: 15,
        }
    }

    /// 最小サイズをチェック
    pub fn check_minimum_size(&self, area: Rect) -> bool {
        area.width >= self.min_width && area.height >= self.min_height
    }

    /// 最小サイズ要件を取得
    pub fn minimum_size(&self) -> (u16, u16) {
        (self.min_width, self.min_height)
    }

    /// 画面サイズからレイアウトを計算
    pub fn calculate_layout(&self, area: Rect) -> AppLayout {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(INPUT_PANE_HEIGHT), // 入力エリア（上部）
                Constraint::Min(1),                    // 表示エリア（中央）
                Constraint::Length(1),                 // ステータスライン
                Constraint::Length(1),                 // ミニバッファ（最下部）
            ])
            .split(area);

        AppLayout {
            input: chunks[0],
            display: chunks[1],
            status: chunks[2],
            minibuffer: chunks[3],
            total: area,
        }
    }
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self::new()
    }
}
