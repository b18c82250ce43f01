//! ノート永続化ログ
//!
//! 追記専用テキストファイルに対するヘッダ初期化・追記・全読み込み・
//! エクスポート機能の実装

use crate::error::{FileError, InputError, KirokuError, Result};
use crate::notes::timestamp;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// デフォルトのバッキングファイル名
pub const DEFAULT_NOTES_FILE: &str = "notes.txt";

/// ノートログ
///
/// 単一の追記専用ファイルを管理する。ロックやアトミックリネームは
/// 行わない。追記途中のクラッシュは不完全なエントリを残しうる。
#[derive(Debug, Clone)]
pub struct NotesLog {
    /// バッキングファイルのパス
    path: PathBuf,
}

impl NotesLog {
    /// 指定パスのノートログを作成（ファイル操作はまだ行わない）
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// バッキングファイルのパスを取得
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// バッキングファイルが存在するか確認
    pub fn exists(&self) -> bool {
        self.path.exists() && self.path.is_file()
    }

    /// ファイルが存在しなければ作成し、ヘッダを書き込む
    ///
    /// 既存ファイルに対しては何もしない（冪等）。ヘッダは作成時刻を
    /// 使って一度だけ書き込まれる。
    pub fn ensure_initialized(&self) -> Result<()> {
        if self.exists() {
            return Ok(());
        }

        let header = timestamp::format_header(&timestamp::current_timestamp());
        std::fs::write(&self.path, header).map_err(|e| self.file_error(e))?;

        log::debug!("notes file created: {}", self.path.display());
        Ok(())
    }

    /// トリム済みの非空テキストを1エントリとして追記
    ///
    /// ファイルが外部から削除されていた場合は（ヘッダなしで）作り直して
    /// 追記を継続する。
    pub fn append_entry(&self, text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(KirokuError::Input(InputError::EmptyNote));
        }

        let entry = timestamp::format_entry(&timestamp::current_timestamp(), text.trim());

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.file_error(e))?;
        file.write_all(entry.as_bytes())
            .map_err(|e| self.file_error(e))?;

        Ok(())
    }

    /// ファイル全体を1つの文字列として読み込み
    pub fn read_all(&self) -> Result<String> {
        if !self.path.exists() {
            return Err(KirokuError::File(FileError::NotFound {
                path: self.path.display().to_string(),
            }));
        }

        std::fs::read_to_string(&self.path).map_err(|e| self.file_error(e))
    }

    /// 現在の内容を指定パスへそのまま書き出し
    ///
    /// 出力先は呼び出し側が選んだ任意のパス。読み込みと書き込みの
    /// いずれの失敗もそのまま返す。
    pub fn export_to<P: AsRef<Path>>(&self, destination: P) -> Result<()> {
        let destination = destination.as_ref();
        let content = self.read_all()?;

        if destination.exists() {
            log::warn!("export destination overwritten: {}", destination.display());
        }

        std::fs::write(destination, content.as_bytes()).map_err(|e| {
            KirokuError::File(FileError::Io {
                message: format!("{}: {}", destination.display(), e),
            })
        })
    }

    fn file_error(&self, error: std::io::Error) -> KirokuError {
        match error.kind() {
            std::io::ErrorKind::NotFound => KirokuError::File(FileError::NotFound {
                path: self.path.display().to_string(),
            }),
            std::io::ErrorKind::PermissionDenied => {
                KirokuError::File(FileError::PermissionDenied {
                    path: self.path.display().to_string(),
                })
            }
            _ => KirokuError::File(FileError::Io {
                message: error.to_string(),
            }),
        }
    }
}

impl Default for NotesLog {
    fn default() -> Self {
        Self::new(DEFAULT_NOTES_FILE)
    }
}
