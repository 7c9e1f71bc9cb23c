use std::path::{Path, MAIN_SEPARATOR};

/// 輸出目錄，路徑結尾恰有一個分隔符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLocation {
    path: String,
}

impl OutputLocation {
    pub(crate) fn normalized(path: &str) -> Self {
        let trimmed = path.trim_end_matches(|c| c == '/' || c == MAIN_SEPARATOR);
        let mut path = trimmed.to_string();
        path.push(MAIN_SEPARATOR);
        OutputLocation { path }
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.path)
    }
}
