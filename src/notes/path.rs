//! パス処理ユーティリティ
//!
//! エクスポート先パスの展開と正規化機能

use crate::error::{KirokuError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// エクスポート既定のファイル名
pub const DEFAULT_EXPORT_FILE: &str = "my_notes_export.txt";

/// ユーザー入力のパスを展開する
///
/// `~` と環境変数を展開し、相対パスは現在のディレクトリ基準の
/// 絶対パスへ変換する。
pub fn expand_path(input: &str) -> Result<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(KirokuError::Path("パスが入力されていません".to_string()));
    }

    let expanded = shellexpand::full(trimmed)
        .map_err(|e| KirokuError::Path(format!("パス展開エラー: {}", e)))?;

    to_absolute(Path::new(expanded.as_ref()))
}

/// 相対パスを絶対パスに変換
fn to_absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    let current_dir = env::current_dir()
        .map_err(|e| KirokuError::Path(format!("現在のディレクトリが取得できません: {}", e)))?;
    Ok(current_dir.join(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_rejected() {
        assert!(expand_path("").is_err());
        assert!(expand_path("   ").is_err());
    }

    #[test]
    fn absolute_path_passes_through() {
        let path = expand_path("/tmp/export.txt").unwrap();
        assert_eq!(path, PathBuf::from("/tmp/export.txt"));
    }

    #[test]
    fn relative_path_becomes_absolute() {
        let path = expand_path("export.txt").unwrap();
        assert!(path.is_absolute());
        assert!(path.ends_with("export.txt"));
    }

    #[test]
    fn tilde_expands_to_home() {
        if env::var("HOME").is_ok() {
            let path = expand_path("~/export.txt").unwrap();
            assert!(!path.to_string_lossy().contains('~'));
            assert!(path.is_absolute());
        }
    }

    #[test]
    fn env_var_is_expanded() {
        env::set_var("KIROKU_TEST_DIR", "/tmp/kiroku");
        let path = expand_path("$KIROKU_TEST_DIR/out.txt").unwrap();
        assert_eq!(path, PathBuf::from("/tmp/kiroku/out.txt"));
    }
}
