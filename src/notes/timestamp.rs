//! タイムスタンプとエントリ整形
//!
//! ノートログのヘッダ・エントリブロックの文字列整形機能

use chrono::Local;

/// タイムスタンプ書式（YYYY-MM-DD HH:MM:SS）
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 区切り線の幅
pub const SEPARATOR_WIDTH: usize = 50;

/// 現在時刻のタイムスタンプ文字列を取得
pub fn current_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// ヘッダ用区切り線（`=` x 50）
pub fn header_separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

/// エントリ用区切り線（`-` x 50）
pub fn entry_separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// ファイル作成時に一度だけ書き込むヘッダブロックを整形
pub fn format_header(timestamp: &str) -> String {
    format!(
        "Notes File - Created: {}\n{}\n\n",
        timestamp,
        header_separator()
    )
}

/// 追記する1エントリ分のブロックを整形
///
/// タイムスタンプ行、本文、区切り線、空行の順。本文は呼び出し側で
/// トリム済みであることを前提とする。
pub fn format_entry(timestamp: &str, text: &str) -> String {
    format!("[{}]\n{}\n{}\n\n", timestamp, text, entry_separator())
}
