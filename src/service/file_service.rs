use std::path::Path;
use log::{info, warn};
use walkdir::WalkDir;
use crate::error::ConversionError;
use crate::models::file::{FileCollectInput, FileCollectOutput, FileEntry};
use crate::models::format::FormatRegistry;
use crate::service::traits::i_service::FileServiceTrait;
use crate::utils::utils::create_regex_sets;

/// 檔案服務，負責驗證待轉換檔案及掃描輸入目錄
pub struct FileService {
    registry: FormatRegistry,
}

impl FileService {
    pub fn new(registry: FormatRegistry) -> Self {
        FileService { registry }
    }

    fn is_supported_path(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map_or(false, |e| self.registry.is_supported(e))
    }
}

impl Default for FileService {
    fn default() -> Self {
        FileService::new(FormatRegistry::default())
    }
}

impl FileServiceTrait for FileService {
    fn admit(&self, path: &Path) -> Result<FileEntry, ConversionError> {
        if !path.is_file() {
            return Err(ConversionError::FileNotFound { path: path.to_path_buf() });
        }

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        if !self.registry.is_supported(extension) {
            let file = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());
            return Err(ConversionError::UnsupportedFormat { file });
        }

        Ok(FileEntry::new(path.to_path_buf(), extension.to_string()))
    }

    fn collect_files(&self, input: FileCollectInput) -> Result<FileCollectOutput, ConversionError> {
        let exclude = input.exclude_patterns.clone().unwrap_or_default();
        let (include_set, exclude_set) = create_regex_sets(&input.include_patterns, &exclude);
        let max_depth = if input.recursive { usize::MAX } else { 1 };

        let mut files = Vec::new();
        let mut skipped = 0;

        for root in &input.inputs {
            if root.is_file() {
                files.push(root.clone());
                continue;
            }
            if !root.is_dir() {
                return Err(ConversionError::InputNotFound { path: root.clone() });
            }

            for entry in WalkDir::new(root)
                .min_depth(1)
                .max_depth(max_depth)
                .sort_by_file_name()
            {
                let entry = entry.map_err(|e| ConversionError::Io(e.into()))?;
                if !entry.file_type().is_file() {
                    continue;
                }
                let name = entry.file_name().to_string_lossy();
                if !include_set.is_match(&name) || exclude_set.is_match(&name) {
                    continue;
                }
                if input.skip_unsupported && !self.is_supported_path(entry.path()) {
                    warn!("略過不支援的檔案：{}", entry.path().display());
                    skipped += 1;
                    continue;
                }
                files.push(entry.into_path());
            }
        }

        info!("共收集 {} 個檔案，略過 {} 個", files.len(), skipped);
        Ok(FileCollectOutput { files, skipped })
    }
}
