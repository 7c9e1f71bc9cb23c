use std::io;
use crate::config::ports::{AppConfig, ConfigPort};
use crate::models::format::FORMATS;
use crate::service::converter_service::DEFAULT_CONVERTER;

// 配置服務，負責選擇適當的配置適配器
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<AppConfig> {
        self.config_port.get_config()
    }
}

// 預設配置適配器
pub struct DefaultConfigAdapter {
    inputs: Vec<String>,
    output: String,
}

impl DefaultConfigAdapter {
    pub fn new(inputs: Vec<String>, output: String) -> Self {
        DefaultConfigAdapter { inputs, output }
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        Ok(AppConfig {
            inputs: self.inputs.clone(),
            output: self.output.clone(),
            converter: DEFAULT_CONVERTER.to_string(),
            formats: FORMATS.iter().map(|f| f.to_string()).collect(),
            recursive: false,
            include: vec!["*".to_string()],
            exclude: None,
            skip_unsupported: false, // 與逐一加入相同：遇到不支援的檔案即失敗
            no_progress: false,
            skip_checks: false,
            require_java: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_adapter_uses_libreoffice_and_all_formats() {
        let service = ConfigService::new(Box::new(DefaultConfigAdapter::new(
            vec!["docs".to_string()],
            "output".to_string(),
        )));
        let config = service.get_config().unwrap();

        assert_eq!(config.inputs, vec!["docs"]);
        assert_eq!(config.output, "output");
        assert_eq!(config.converter, "libreoffice");
        assert_eq!(config.formats.len(), FORMATS.len());
        assert!(!config.recursive);
    }
}
