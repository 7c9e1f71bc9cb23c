use std::io;
use std::path::PathBuf;
use log::{info, warn};
use crate::config::ports::{AppConfig, ConversionPort};
use crate::facade::conversion_facade::ConversionOrchestrator;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::ConversionOutput;
use crate::models::file::FileCollectInput;
use crate::models::format::FormatRegistry;
use crate::service::converter_service::LibreOfficeInvoker;
use crate::service::environment_service::EnvironmentService;
use crate::service::file_service::FileService;
use crate::service::traits::i_service::{EnvironmentServiceTrait, FileServiceTrait};

// 轉換執行適配器：環境檢查 -> 收集檔案 -> 加入 -> 轉換
pub struct ConversionAdapter {
    environment: Box<dyn EnvironmentServiceTrait>,
}

impl ConversionAdapter {
    pub fn new(environment: Box<dyn EnvironmentServiceTrait>) -> Self {
        ConversionAdapter { environment }
    }
}

impl Default for ConversionAdapter {
    fn default() -> Self {
        ConversionAdapter::new(Box::new(EnvironmentService::new()))
    }
}

impl ConversionPort for ConversionAdapter {
    fn execute(&self, config: AppConfig) -> io::Result<ConversionOutput> {
        if config.skip_checks {
            warn!("已略過執行環境檢查");
        } else {
            self.environment.check_requirements(&config.converter, config.require_java)?;
        }

        let registry = FormatRegistry::new(config.formats.iter().cloned());
        let file_service = FileService::new(registry);
        let collected = file_service.collect_files(FileCollectInput {
            inputs: config.inputs.iter().map(PathBuf::from).collect(),
            recursive: config.recursive,
            include_patterns: config.include.clone(),
            exclude_patterns: config.exclude.clone(),
            skip_unsupported: config.skip_unsupported,
        })?;

        if collected.files.is_empty() {
            warn!("無符合條件的檔案可處理");
        }

        let mut orchestrator = ConversionOrchestrator::new(
            Box::new(file_service),
            Box::new(LibreOfficeInvoker::new(config.converter.clone())),
        )
        .with_progress(!config.no_progress);
        orchestrator.add_files(&collected.files)?;

        let summary = orchestrator.convert(Some(&config.output))?;
        let output_path = orchestrator
            .output_location()
            .map(|o| o.as_str().to_string())
            .unwrap_or_else(|| config.output.clone());
        info!("輸出目錄：{}", output_path);

        Ok(ConversionOutput { output_path, summary })
    }
}
