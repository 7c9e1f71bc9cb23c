use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use log::{debug, info};
use crate::models::conversion::ConversionOutcome;
use crate::models::output::OutputLocation;
use crate::service::traits::i_service::ConverterInvokerTrait;

pub const DEFAULT_CONVERTER: &str = "libreoffice";

/// 透過外部辦公軟體（預設為 LibreOffice）將檔案轉為 PDF
pub struct LibreOfficeInvoker {
    program: String,
}

impl LibreOfficeInvoker {
    pub fn new(program: impl Into<String>) -> Self {
        LibreOfficeInvoker { program: program.into() }
    }

    /// 建立轉換指令：`<program> --invisible --convert-to pdf <source> --outdir <dir>`
    pub fn build_command(&self, source: &Path, output_dir: &OutputLocation) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg("--invisible")
            .arg("--convert-to")
            .arg("pdf")
            .arg(source)
            .arg("--outdir")
            .arg(output_dir.as_str())
            .stdin(Stdio::null());
        command
    }
}

impl Default for LibreOfficeInvoker {
    fn default() -> Self {
        LibreOfficeInvoker::new(DEFAULT_CONVERTER)
    }
}

impl ConverterInvokerTrait for LibreOfficeInvoker {
    fn invoke(&self, source: &Path, output_dir: &OutputLocation) -> ConversionOutcome {
        let destination = destination_path(source, output_dir);
        info!("轉換檔案：{} -> {}", source.display(), destination.display());

        let output = match self.build_command(source, output_dir).output() {
            Ok(output) => output,
            Err(e) => {
                return ConversionOutcome::failed(
                    destination,
                    format!("無法啟動轉換程式 {}：{}", self.program, e),
                );
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.trim().is_empty() {
            debug!("{} 輸出：{}", self.program, stdout.trim());
        }

        if output.status.success() {
            ConversionOutcome::succeeded(destination)
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let status = match output.status.code() {
                Some(code) => format!("結束代碼 {}", code),
                None => "程式被中止".to_string(),
            };
            ConversionOutcome::failed(destination, format!("{}：{}", status, stderr.trim()))
        }
    }
}

/// 預期的輸出路徑：輸出目錄 + 去除副檔名的檔名 + ".pdf"
pub fn destination_path(source: &Path, output_dir: &OutputLocation) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    PathBuf::from(format!("{}{}.pdf", output_dir.as_str(), stem))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_strips_extension_and_directory() {
        let out = OutputLocation::normalized("/tmp/out");
        assert_eq!(
            destination_path(Path::new("docs/report.docx"), &out),
            PathBuf::from("/tmp/out/report.pdf")
        );
        assert_eq!(
            destination_path(Path::new("archive.v2.xls"), &out),
            PathBuf::from("/tmp/out/archive.v2.pdf")
        );
    }

    #[test]
    fn command_matches_converter_interface() {
        let invoker = LibreOfficeInvoker::default();
        let out = OutputLocation::normalized("/tmp/out");
        let command = invoker.build_command(Path::new("a.doc"), &out);

        assert_eq!(command.get_program(), "libreoffice");
        let args: Vec<_> = command.get_args().map(|a| a.to_string_lossy().to_string()).collect();
        assert_eq!(args, ["--invisible", "--convert-to", "pdf", "a.doc", "--outdir", "/tmp/out/"]);
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_is_success() {
        let out = OutputLocation::normalized("/tmp/out");
        let outcome = LibreOfficeInvoker::new("true").invoke(Path::new("a.doc"), &out);
        assert!(outcome.success);
        assert_eq!(outcome.destination, PathBuf::from("/tmp/out/a.pdf"));
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_failure_with_destination() {
        let out = OutputLocation::normalized("/tmp/out");
        let outcome = LibreOfficeInvoker::new("false").invoke(Path::new("b.pdf"), &out);
        assert!(!outcome.success);
        assert_eq!(outcome.destination, PathBuf::from("/tmp/out/b.pdf"));
        assert!(outcome.detail.unwrap().contains("1"));
    }

    #[test]
    fn launch_failure_is_failure() {
        let out = OutputLocation::normalized("/tmp/out");
        let outcome = LibreOfficeInvoker::new("office-to-pdf-no-such-converter")
            .invoke(Path::new("c.ppt"), &out);
        assert!(!outcome.success);
        assert_eq!(outcome.destination, PathBuf::from("/tmp/out/c.pdf"));
    }
}
