use std::path::{Path, PathBuf};

/// 已通過驗證的待轉換檔案
#[derive(Debug, Clone, PartialEq)]
pub struct FileEntry {
    path: PathBuf,
    extension: String,
}

impl FileEntry {
    pub(crate) fn new(path: PathBuf, extension: String) -> Self {
        FileEntry { path, extension }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }
}

#[derive(Clone, Debug)]
pub struct FileCollectInput {
    pub inputs: Vec<PathBuf>,
    pub recursive: bool,
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Option<Vec<String>>,
    pub skip_unsupported: bool,
}

#[derive(Debug)]
pub struct FileCollectOutput {
    pub files: Vec<PathBuf>,
    pub skipped: usize,
}
