//! エラーハンドリングシステム
//!
//! kiroku 全体で使用される統一されたエラー型とユーティリティを定義

use thiserror::Error;

/// アプリケーション全体のエラー型
#[derive(Error, Debug, Clone)]
pub enum KirokuError {
    /// ファイル操作エラー
    #[error("File operation failed: {0}")]
    File(#[from] FileError),

    /// UI操作エラー
    #[error("UI operation failed: {0}")]
    Ui(#[from] UiError),

    /// 入力処理エラー
    #[error("Input processing failed: {0}")]
    Input(#[from] InputError),

    /// パスエラー
    #[error("Path error: {0}")]
    Path(String),
}

/// ファイル操作固有のエラー
#[derive(Error, Debug, Clone)]
pub enum FileError {
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("IO error: {message}")]
    Io { message: String },
}

/// UI操作固有のエラー
#[derive(Error, Debug, Clone)]
pub enum UiError {
    #[error("Rendering failed: {component}")]
    RenderingFailed { component: String },
}

/// 入力処理固有のエラー
#[derive(Error, Debug, Clone)]
pub enum InputError {
    #[error("Empty note text")]
    EmptyNote,
}

// std::io::Error から KirokuError への変換
impl From<std::io::Error> for KirokuError {
    fn from(error: std::io::Error) -> Self {
        KirokuError::File(FileError::from(error))
    }
}

// std::io::Error から FileError への変換（種別を保持）
impl From<std::io::Error> for FileError {
    fn from(error: std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => FileError::NotFound {
                path: error.to_string(),
            },
            std::io::ErrorKind::PermissionDenied => FileError::PermissionDenied {
                path: error.to_string(),
            },
            _ => FileError::Io {
                message: error.to_string(),
            },
        }
    }
}

/// パニックハンドラの設定
pub fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        let location = panic_info
            .location()
            .unwrap_or_else(|| std::panic::Location::caller());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s
        } else {
            "Unknown panic payload"
        };

        eprintln!("PANIC at {}:{}: {}", location.file(), location.line(), message);
        eprintln!("Stack trace: {}", std::backtrace::Backtrace::capture());

        std::process::exit(1);
    }));
}

/// プロジェクト標準のResult型
pub type Result<T> = std::result::Result<T, KirokuError>;
