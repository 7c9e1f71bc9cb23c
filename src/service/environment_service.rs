use std::process::{Command, Stdio};
use log::{info, warn};
use crate::error::ConversionError;
use crate::service::traits::i_service::EnvironmentServiceTrait;

/// 檢查作業系統與外部程式是否可用
pub struct EnvironmentService;

impl EnvironmentService {
    pub fn new() -> Self {
        EnvironmentService
    }
}

impl Default for EnvironmentService {
    fn default() -> Self {
        EnvironmentService::new()
    }
}

impl EnvironmentServiceTrait for EnvironmentService {
    fn check_requirements(&self, converter: &str, require_java: bool) -> Result<(), ConversionError> {
        check_platform(std::env::consts::OS)?;

        if require_java && !program_runs("java", "-version") {
            warn!("找不到 Java 執行環境");
            return Err(ConversionError::MissingRuntime { program: "java".to_string() });
        }

        if !program_runs(converter, "--version") {
            warn!("找不到轉換程式：{}", converter);
            return Err(ConversionError::MissingRuntime { program: converter.to_string() });
        }

        info!("執行環境檢查通過，轉換程式：{}", converter);
        Ok(())
    }
}

fn check_platform(os: &str) -> Result<(), ConversionError> {
    if os != "linux" {
        return Err(ConversionError::UnsupportedPlatform { os: os.to_string() });
    }
    Ok(())
}

fn program_runs(program: &str, version_flag: &str) -> bool {
    Command::new(program)
        .arg(version_flag)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
