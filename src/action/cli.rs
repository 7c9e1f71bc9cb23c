use std::io;
use clap::Parser;
use crate::config::config::{Cli, validate_input_path, validate_file_patterns, validate_formats};
use crate::action::interactive::process_interactive_mode;
use crate::utils::utils::setup_logging;
use crate::config::ports::{AppConfig, ConfigPort, ConversionPort};
use crate::models::conversion::ConversionOutput;
use crate::models::format::FORMATS;
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::service::converter_service::DEFAULT_CONVERTER;
use crate::utils::convert::ConversionAdapter;

pub fn process_args(args: Vec<String>) -> io::Result<ConversionOutput> {
    if args.len() == 1 {
        process_interactive_mode()
    } else {
        process_cli_mode()
    }
}

pub fn process_cli_mode() -> io::Result<ConversionOutput> {
    let cli = Cli::parse();
    setup_logging(cli.log_level.as_deref().unwrap_or("info"))?;

    // 僅提供輸入與輸出時使用預設配置
    let config_port: Box<dyn ConfigPort> = if cli.is_default_config() {
        log::info!("未提供選項參數，使用預設配置：{}，支援全部格式", DEFAULT_CONVERTER);
        Box::new(DefaultConfigAdapter::new(cli.inputs.clone(), cli.output.clone()))
    } else {
        Box::new(CliConfigAdapter::new(cli.clone()))
    };

    let config_service = ConfigService::new(config_port);
    let config = config_service.get_config()?;

    let conversion_port: Box<dyn ConversionPort> = Box::new(ConversionAdapter::default());
    let output = conversion_port.execute(config.clone())?;

    if cli.show_config {
        println!("實際使用的配置：{:#?}", config);
    }

    Ok(output)
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        for input in &self.cli.inputs {
            validate_input_path(input)?;
        }

        let include = self.cli.include.clone().unwrap_or(vec!["*".to_string()]);
        validate_file_patterns(&include, &self.cli.exclude)?;

        let formats = self
            .cli
            .formats
            .clone()
            .unwrap_or_else(|| FORMATS.iter().map(|f| f.to_string()).collect());
        validate_formats(&formats)?;

        let config = AppConfig {
            inputs: self.cli.inputs.clone(),
            output: self.cli.output.clone(),
            converter: self.cli.converter.clone().unwrap_or(DEFAULT_CONVERTER.to_string()),
            formats,
            recursive: self.cli.recursive.unwrap_or(false),
            include,
            exclude: self.cli.exclude.clone(),
            skip_unsupported: self.cli.skip_unsupported.unwrap_or(false),
            no_progress: self.cli.no_progress.unwrap_or(false),
            skip_checks: self.cli.skip_checks.unwrap_or(false),
            require_java: self.cli.require_java.unwrap_or(false),
        };

        log::info!("使用自訂配置：converter={}, formats={:?}, recursive={}, include={:?}, exclude={:?}, skip_unsupported={}",
            config.converter, config.formats, config.recursive, config.include, config.exclude, config.skip_unsupported);

        Ok(config)
    }
}
