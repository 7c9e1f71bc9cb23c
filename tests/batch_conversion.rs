use std::fs;
use std::path::{Path, PathBuf};

use office_to_pdf::models::output::OutputLocation;
use office_to_pdf::service::converter_service::destination_path;
use office_to_pdf::service::file_service::FileService;
use office_to_pdf::service::traits::i_service::ConverterInvokerTrait;
use office_to_pdf::{
    ConversionError, ConversionFacadeTrait, ConversionOrchestrator, ConversionOutcome, FormatRegistry,
};
use tempfile::TempDir;

/// Fails every file whose extension is listed, succeeds the rest.
struct ByExtension(&'static [&'static str]);

impl ConverterInvokerTrait for ByExtension {
    fn invoke(&self, source: &Path, output_dir: &OutputLocation) -> ConversionOutcome {
        let destination = destination_path(source, output_dir);
        let ext = source.extension().and_then(|e| e.to_str()).unwrap_or_default();
        if self.0.iter().any(|e| *e == ext) {
            ConversionOutcome::failed(destination, "simulated failure")
        } else {
            ConversionOutcome::succeeded(destination)
        }
    }
}

fn orchestrator(failing: &'static [&'static str]) -> ConversionOrchestrator {
    ConversionOrchestrator::new(Box::new(FileService::default()), Box::new(ByExtension(failing)))
}

fn write_files(dir: &Path, names: &[&str]) -> Vec<PathBuf> {
    names
        .iter()
        .map(|name| {
            let path = dir.join(name);
            fs::write(&path, b"document").unwrap();
            path
        })
        .collect()
}

#[test]
fn mixed_batch_with_unsupported_image_is_rejected() {
    let temp = TempDir::new().unwrap();
    let files = write_files(temp.path(), &["report.docx", "sheet.xlsx", "image.png"]);
    let mut orch = orchestrator(&[]);

    let err = orch.add_files(&files).unwrap_err();
    assert!(matches!(err, ConversionError::UnsupportedFormat { ref file } if file == "image.png"));
    assert!(orch.files().is_empty());
}

#[test]
fn one_success_one_failure() {
    let temp = TempDir::new().unwrap();
    let files = write_files(temp.path(), &["a.doc", "b.pdf"]);
    let out = temp.path().join("out");
    let mut orch = orchestrator(&["pdf"]);
    orch.add_files(&files).unwrap();

    let summary = orch.convert(Some(out.to_str().unwrap())).unwrap();
    assert_eq!(summary.success, 1);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.converted_files, vec![out.join("a.pdf"), out.join("b.pdf")]);
}

#[test]
fn every_supported_format_is_attempted_once() {
    let temp = TempDir::new().unwrap();
    let names = ["a.dwg", "b.doc", "c.docx", "d.wps", "e.pdf", "f.xlsx", "g.xls", "h.ppt", "i.pptx"];
    let files = write_files(temp.path(), &names);
    let out = temp.path().join("out");
    let mut orch = orchestrator(&["wps", "ppt"]);
    orch.add_files(&files).unwrap();

    let summary = orch.convert(Some(out.to_str().unwrap())).unwrap();
    assert_eq!(summary.success + summary.failed, names.len());
    assert_eq!(summary.failed, 2);
    assert_eq!(summary.converted_files.len(), names.len());
    assert_eq!(summary.converted_files[3], out.join("d.pdf"));
}

#[test]
fn trailing_separators_in_destination_are_collapsed() {
    let temp = TempDir::new().unwrap();
    let files = write_files(temp.path(), &["a.doc"]);
    let out = format!("{}/out//", temp.path().display());
    let mut orch = orchestrator(&[]);
    orch.add_files(&files).unwrap();

    let summary = orch.convert(Some(&out)).unwrap();
    assert_eq!(summary.converted_files, vec![temp.path().join("out").join("a.pdf")]);
    assert!(orch.output_location().unwrap().as_str().ends_with("out/"));
}

#[test]
fn alternate_format_set_can_be_injected() {
    let temp = TempDir::new().unwrap();
    let files = write_files(temp.path(), &["notes.odt", "report.docx"]);
    let registry = FormatRegistry::new(["odt"]);
    let mut orch = ConversionOrchestrator::new(
        Box::new(FileService::new(registry)),
        Box::new(ByExtension(&[])),
    );

    assert!(orch.add_file(&files[0]).is_ok());
    assert!(matches!(
        orch.add_file(&files[1]),
        Err(ConversionError::UnsupportedFormat { .. })
    ));
}
