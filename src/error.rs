use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 轉換流程中所有具名錯誤
///
/// 單一檔案轉換失敗不屬於此列，會以 `ConversionOutcome` 計入統計。
#[derive(Debug, Error)]
pub enum ConversionError {
    // 設定錯誤
    #[error("尚未設定輸出目錄")]
    NoOutputLocation,

    #[error("無法建立輸出目錄 \"{path}\"：{source}")]
    DirectoryCreate {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("輸出目錄 \"{path}\" 不存在")]
    OutputDirectoryMissing { path: String },

    // 加入檔案時的錯誤
    #[error("檔案 {} 不存在", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("無法加入 \"{file}\"，不支援此格式")]
    UnsupportedFormat { file: String },

    // 轉換前檔案已被移除
    #[error("檔案 \"{}\" 不存在", .path.display())]
    FileMissing { path: PathBuf },

    #[error("不支援的作業系統：{os}，本程式僅能在 Linux 上執行")]
    UnsupportedPlatform { os: String },

    #[error("找不到執行環境：{program}")]
    MissingRuntime { program: String },

    #[error("輸入路徑 '{}' 不存在", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("IO 錯誤：{0}")]
    Io(#[from] io::Error),
}

impl From<ConversionError> for io::Error {
    fn from(e: ConversionError) -> Self {
        let kind = match &e {
            ConversionError::Io(inner) => inner.kind(),
            ConversionError::FileNotFound { .. }
            | ConversionError::FileMissing { .. }
            | ConversionError::InputNotFound { .. }
            | ConversionError::OutputDirectoryMissing { .. }
            | ConversionError::MissingRuntime { .. } => io::ErrorKind::NotFound,
            ConversionError::NoOutputLocation | ConversionError::UnsupportedFormat { .. } => {
                io::ErrorKind::InvalidInput
            }
            ConversionError::DirectoryCreate { source, .. } => source.kind(),
            ConversionError::UnsupportedPlatform { .. } => io::ErrorKind::Unsupported,
        };
        io::Error::new(kind, e.to_string())
    }
}
