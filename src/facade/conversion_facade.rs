use std::path::{Path, PathBuf};
use log::{error, info, warn};
use crate::error::ConversionError;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::ConversionSummary;
use crate::models::file::FileEntry;
use crate::models::output::OutputLocation;
use crate::service::converter_service::LibreOfficeInvoker;
use crate::service::file_service::FileService;
use crate::service::output_service::resolve_output_location;
use crate::service::traits::i_service::{ConverterInvokerTrait, FileServiceTrait};
use crate::utils::utils::{create_progress_bar, format_duration};

/// 批次轉換協調者
///
/// 持有已驗證的檔案清單與輸出目錄，逐一呼叫轉換程式並彙整結果。
/// 加入檔案時任一失敗即整批拒絕；轉換時單一檔案失敗只計入統計。
pub struct ConversionOrchestrator {
    file_service: Box<dyn FileServiceTrait>,
    invoker: Box<dyn ConverterInvokerTrait>,
    files: Vec<FileEntry>,
    output: Option<OutputLocation>,
    show_progress: bool,
}

impl ConversionOrchestrator {
    pub fn new(
        file_service: Box<dyn FileServiceTrait>,
        invoker: Box<dyn ConverterInvokerTrait>,
    ) -> Self {
        ConversionOrchestrator {
            file_service,
            invoker,
            files: Vec::new(),
            output: None,
            show_progress: false,
        }
    }

    /// 使用預設格式與 LibreOffice 建立，並加入初始檔案
    pub fn with_files(paths: &[PathBuf]) -> Result<Self, ConversionError> {
        let mut orchestrator = ConversionOrchestrator::new(
            Box::new(FileService::default()),
            Box::new(LibreOfficeInvoker::default()),
        );
        orchestrator.add_files(paths)?;
        Ok(orchestrator)
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn add_file(&mut self, path: &Path) -> Result<&FileEntry, ConversionError> {
        let entry = self.file_service.admit(path)?;
        info!("加入檔案：{}", entry.path().display());
        self.files.push(entry);
        Ok(&self.files[self.files.len() - 1])
    }

    /// 整批加入，任一檔案驗證失敗時不加入任何檔案
    pub fn add_files(&mut self, paths: &[PathBuf]) -> Result<(), ConversionError> {
        let entries = self.file_service.admit_many(paths)?;
        info!("加入 {} 個檔案", entries.len());
        self.files.extend(entries);
        Ok(())
    }

    pub fn set_output_dir(&mut self, path: &str) -> Result<&OutputLocation, ConversionError> {
        let location = resolve_output_location(path)?;
        Ok(self.output.insert(location))
    }

    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    pub fn output_location(&self) -> Option<&OutputLocation> {
        self.output.as_ref()
    }
}

impl ConversionFacadeTrait for ConversionOrchestrator {
    fn convert(&mut self, destination: Option<&str>) -> Result<ConversionSummary, ConversionError> {
        if let Some(dest) = destination.filter(|d| !d.is_empty()) {
            self.set_output_dir(dest)?;
        }

        let output = self.output.clone().ok_or(ConversionError::NoOutputLocation)?;
        if !output.as_path().is_dir() {
            error!("輸出目錄不存在：{}", output.as_str());
            return Err(ConversionError::OutputDirectoryMissing {
                path: output.as_str().to_string(),
            });
        }

        let total = self.files.len();
        info!("開始轉換 {} 個檔案，輸出目錄：{}", total, output.as_str());

        let mut summary = ConversionSummary::default();
        let pm = create_progress_bar(total as u64, !self.show_progress);
        for (i, entry) in self.files.iter().enumerate() {
            if !entry.path().exists() {
                error!("檔案已不存在，中止轉換：{}", entry.path().display());
                return Err(ConversionError::FileMissing { path: entry.path().to_path_buf() });
            }

            pm.set_message(format!("轉換檔案 {}/{}：{}", i + 1, total, entry.path().display()));
            let outcome = self.invoker.invoke(entry.path(), &output);
            if outcome.success {
                info!("轉換成功：{}", outcome.destination.display());
            } else {
                warn!(
                    "轉換失敗：{}，{}",
                    entry.path().display(),
                    outcome.detail.as_deref().unwrap_or("未知原因")
                );
            }
            summary.record(outcome);
            pm.inc();
        }
        pm.finish(summary.success, summary.failed);

        info!(
            "轉換完成，成功 {} 個，失敗 {} 個，耗時 {}",
            summary.success,
            summary.failed,
            format_duration(pm.elapsed())
        );
        Ok(summary)
    }
}
