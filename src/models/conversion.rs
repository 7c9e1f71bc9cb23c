use std::path::PathBuf;

/// 單一檔案的轉換結果
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOutcome {
    pub destination: PathBuf,
    pub success: bool,
    pub detail: Option<String>,
}

impl ConversionOutcome {
    pub fn succeeded(destination: PathBuf) -> Self {
        ConversionOutcome { destination, success: true, detail: None }
    }

    pub fn failed(destination: PathBuf, detail: impl Into<String>) -> Self {
        ConversionOutcome { destination, success: false, detail: Some(detail.into()) }
    }
}

/// 一次轉換的統計，`converted_files` 依處理順序記錄預期輸出路徑
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionSummary {
    pub success: usize,
    pub failed: usize,
    pub converted_files: Vec<PathBuf>,
}

impl ConversionSummary {
    pub fn record(&mut self, outcome: ConversionOutcome) {
        if outcome.success {
            self.success += 1;
        } else {
            self.failed += 1;
        }
        self.converted_files.push(outcome.destination);
    }

    pub fn attempted(&self) -> usize {
        self.success + self.failed
    }
}

#[derive(Debug)]
pub struct ConversionOutput {
    pub output_path: String,
    pub summary: ConversionSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_counts_both_outcomes_and_keeps_order() {
        let mut summary = ConversionSummary::default();
        summary.record(ConversionOutcome::succeeded(PathBuf::from("/tmp/out/a.pdf")));
        summary.record(ConversionOutcome::failed(PathBuf::from("/tmp/out/b.pdf"), "exit 1"));

        assert_eq!(summary.success, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.attempted(), 2);
        assert_eq!(
            summary.converted_files,
            vec![PathBuf::from("/tmp/out/a.pdf"), PathBuf::from("/tmp/out/b.pdf")]
        );
    }
}
