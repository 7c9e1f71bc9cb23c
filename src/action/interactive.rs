use dialoguer::{Input, Select, Confirm};
use std::io;
use std::path::Path;

use crate::utils::utils::setup_logging;
use crate::config::ports::{AppConfig, ConfigPort, ConversionPort};
use crate::models::conversion::ConversionOutput;
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::utils::convert::ConversionAdapter;

pub fn process_interactive_mode() -> io::Result<ConversionOutput> {
    println!("=== 歡迎使用互動模式 ===");
    let use_default_config = get_default_config_option()?;
    let input = get_input_path()?;
    let output = get_output_path()?;

    let config_port: Box<dyn ConfigPort> = if use_default_config {
        println!("使用預設配置：LibreOffice，支援全部格式，不遞迴掃描");
        setup_logging("info")?;
        Box::new(DefaultConfigAdapter::new(vec![input], output))
    } else {
        Box::new(InteractiveConfigAdapter::new(input, output))
    };

    let config = ConfigService::new(config_port).get_config()?;
    let conversion_port: Box<dyn ConversionPort> = Box::new(ConversionAdapter::default());
    conversion_port.execute(config)
}

pub fn get_default_config_option() -> io::Result<bool> {
    Confirm::new()
        .with_prompt("是否使用預設配置？（僅需指定輸入和輸出路徑）")
        .default(true)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("預設配置選擇失敗: {}", e)))
}

pub fn get_input_path() -> io::Result<String> {
    Input::new()
        .with_prompt("請輸入檔案或目錄路徑（例如：./report.docx 或 ./source_docs）")
        .validate_with(|input: &String| -> Result<(), String> {
            if Path::new(input).exists() { Ok(()) } else { Err(format!("路徑 '{}' 不存在", input)) }
        })
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

pub fn get_output_path() -> io::Result<String> {
    Input::new()
        .with_prompt("輸入輸出目錄（例如：./output，預設為 output）")
        .default("output".to_string())
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

pub fn get_recursive_option() -> io::Result<bool> {
    Confirm::new()
        .with_prompt("是否遞迴掃描子目錄？")
        .default(false)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("遞迴選項輸入失敗: {}", e)))
}

pub fn get_skip_unsupported_option() -> io::Result<bool> {
    Confirm::new()
        .with_prompt("是否略過不支援格式的檔案？（否則遇到時中止）")
        .default(true)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("略過選項輸入失敗: {}", e)))
}

pub fn get_converter_option() -> io::Result<String> {
    Input::new()
        .with_prompt("輸入轉換程式（預設為 libreoffice）")
        .default("libreoffice".to_string())
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("轉換程式輸入失敗: {}", e)))
}

pub fn get_log_level_option() -> io::Result<String> {
    let levels = ["info", "warn", "error", "debug"];
    let level = Select::new()
        .with_prompt("選擇日誌等級（使用方向鍵選擇，按 Enter 確認）")
        .items(&levels)
        .default(0)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("日誌等級選擇失敗: {}", e)))?;
    Ok(levels[level].to_string())
}

// 交互配置適配器
pub struct InteractiveConfigAdapter {
    input: String,
    output: String,
}

impl InteractiveConfigAdapter {
    pub fn new(input: String, output: String) -> Self {
        InteractiveConfigAdapter { input, output }
    }
}

impl ConfigPort for InteractiveConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        let recursive = get_recursive_option()?;
        let skip_unsupported = get_skip_unsupported_option()?;
        let converter = get_converter_option()?;
        let log_level = get_log_level_option()?;

        setup_logging(&log_level)?;

        let defaults = DefaultConfigAdapter::new(vec![self.input.clone()], self.output.clone())
            .get_config()?;
        Ok(AppConfig {
            converter,
            recursive,
            skip_unsupported,
            ..defaults
        })
    }
}
