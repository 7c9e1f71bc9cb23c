use std::io;
use crate::models::conversion::ConversionOutput;

// 應用配置結構體，封裝所有參數
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub inputs: Vec<String>,
    pub output: String,
    pub converter: String,
    pub formats: Vec<String>,
    pub recursive: bool,
    pub include: Vec<String>,
    pub exclude: Option<Vec<String>>,
    pub skip_unsupported: bool,
    pub no_progress: bool,
    pub skip_checks: bool,
    pub require_java: bool,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}

// 轉換執行的 Port
pub trait ConversionPort {
    fn execute(&self, config: AppConfig) -> io::Result<ConversionOutput>;
}
