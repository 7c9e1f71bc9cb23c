use clap::Parser;
use std::io;
use std::path::Path;

#[derive(Parser, Clone, Debug)]
#[command(
    name = "office-to-pdf",
    about = "透過 LibreOffice 將 Office 文件批次轉換為 PDF",
    long_about = "批次將 Office 文件（dwg、doc、docx、wps、pdf、xlsx、xls、ppt、pptx）轉換為 PDF。\n輸入可為檔案或目錄，目錄預設僅掃描一層，使用 --recursive 遞迴掃描。\n任何一個檔案轉換失敗不會中斷其他檔案的轉換。\n不帶參數執行時進入互動模式。",
    arg_required_else_help = true
)]
pub struct Cli {
    #[arg(required = true)]
    pub inputs: Vec<String>,
    #[arg(short, long, default_value = "output")]
    pub output: String,
    #[arg(long)]
    pub converter: Option<String>,
    #[arg(long, value_delimiter = ',')]
    pub formats: Option<Vec<String>>,
    #[arg(short, long)]
    pub recursive: Option<bool>,
    #[arg(long, value_delimiter = ',')]
    pub include: Option<Vec<String>>,
    #[arg(long, value_delimiter = ',')]
    pub exclude: Option<Vec<String>>,
    #[arg(long)]
    pub skip_unsupported: Option<bool>,
    #[arg(long)]
    pub no_progress: Option<bool>,
    #[arg(long)]
    pub skip_checks: Option<bool>,
    #[arg(long)]
    pub require_java: Option<bool>,
    #[arg(long, value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: Option<String>,
    #[arg(long, default_value_t = false)]
    pub show_config: bool,
}

impl Cli {
    /// 是否僅提供輸入與輸出路徑
    pub fn is_default_config(&self) -> bool {
        self.converter.is_none()
            && self.formats.is_none()
            && self.recursive.is_none()
            && self.include.is_none()
            && self.exclude.is_none()
            && self.skip_unsupported.is_none()
            && self.no_progress.is_none()
            && self.skip_checks.is_none()
            && self.require_java.is_none()
    }
}

pub fn validate_input_path(input: &str) -> io::Result<&Path> {
    let path = Path::new(input);
    if !path.exists() {
        log::error!("輸入路徑不存在：{}", input);
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("輸入路徑 '{}' 不存在", input)
        ));
    }
    Ok(path)
}

pub fn is_valid_pattern(pattern: &str) -> bool {
    let invalid_chars = ['/', '\\', ':', '?', '"', '<', '>', '|'];
    !pattern.is_empty() && !pattern.contains(&invalid_chars[..])
}

pub fn validate_file_patterns(include: &[String], exclude: &Option<Vec<String>>) -> io::Result<()> {
    for pattern in include {
        if !is_valid_pattern(pattern) {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, format!("無效的包含模式: {}", pattern)));
        }
    }
    if let Some(exclude_patterns) = exclude {
        for pattern in exclude_patterns {
            if !is_valid_pattern(pattern) {
                return Err(io::Error::new(io::ErrorKind::InvalidInput, format!("無效的排除模式: {}", pattern)));
            }
        }
    }
    Ok(())
}

pub fn validate_formats(formats: &[String]) -> io::Result<()> {
    if formats.is_empty() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "支援格式清單不可為空"));
    }
    for format in formats {
        if format.is_empty() || format.starts_with('.') || !is_valid_pattern(format) || format.contains('*') {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, format!("無效的格式: {}", format)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_inputs_and_options() {
        let cli = Cli::try_parse_from([
            "office-to-pdf", "a.doc", "docs", "-o", "/tmp/out", "--recursive", "true",
            "--exclude", "draft*,tmp*",
        ])
        .unwrap();
        assert_eq!(cli.inputs, vec!["a.doc", "docs"]);
        assert_eq!(cli.output, "/tmp/out");
        assert_eq!(cli.recursive, Some(true));
        assert_eq!(cli.exclude, Some(vec!["draft*".to_string(), "tmp*".to_string()]));
        assert!(!cli.is_default_config());
    }

    #[test]
    fn only_paths_means_default_config() {
        let cli = Cli::try_parse_from(["office-to-pdf", "docs"]).unwrap();
        assert_eq!(cli.output, "output");
        assert!(cli.is_default_config());
    }

    #[test]
    fn rejects_bad_patterns_and_formats() {
        assert!(validate_file_patterns(&["*.doc".to_string()], &None).is_ok());
        assert!(validate_file_patterns(&["a/b".to_string()], &None).is_err());
        assert!(validate_file_patterns(&[], &Some(vec!["".to_string()])).is_err());

        assert!(validate_formats(&["docx".to_string()]).is_ok());
        assert!(validate_formats(&[".docx".to_string()]).is_err());
        assert!(validate_formats(&[]).is_err());
    }
}
