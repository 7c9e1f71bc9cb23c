use std::path::{Path, PathBuf};
use crate::error::ConversionError;
use crate::models::conversion::ConversionOutcome;
use crate::models::file::{FileCollectInput, FileCollectOutput, FileEntry};
use crate::models::output::OutputLocation;

// File 服務接口，負責檔案驗證與收集
pub trait FileServiceTrait: Send + Sync {
    /// 驗證單一檔案並建立 FileEntry
    /// # 參數
    /// - path: 待轉換檔案路徑
    /// # 回傳
    /// - 檔案不存在時返回 FileNotFound，格式不支援時返回 UnsupportedFormat
    fn admit(&self, path: &Path) -> Result<FileEntry, ConversionError>;

    /// 依序驗證多個檔案，任一失敗即中止，不回傳部分結果
    fn admit_many(&self, paths: &[PathBuf]) -> Result<Vec<FileEntry>, ConversionError> {
        paths.iter().map(|path| self.admit(path)).collect()
    }

    /// 從輸入路徑（檔案或目錄）收集候選檔案
    /// # 參數
    /// - input: 檔案收集的輸入參數
    /// # 回傳
    /// - 成功時返回收集的檔案列表與略過數量
    fn collect_files(&self, input: FileCollectInput) -> Result<FileCollectOutput, ConversionError>;
}

// 外部轉換程式接口
pub trait ConverterInvokerTrait: Send + Sync {
    /// 將單一檔案轉換為 PDF
    /// # 參數
    /// - source: 來源檔案
    /// - output_dir: 已建立的輸出目錄
    /// # 回傳
    /// - 轉換結果，外部程式失敗不視為錯誤
    fn invoke(&self, source: &Path, output_dir: &OutputLocation) -> ConversionOutcome;
}

// 執行環境檢查接口
pub trait EnvironmentServiceTrait: Send + Sync {
    fn check_requirements(&self, converter: &str, require_java: bool) -> Result<(), ConversionError>;
}
