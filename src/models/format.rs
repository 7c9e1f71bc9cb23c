/// 預設支援的輸入格式
pub const FORMATS: [&str; 9] = ["dwg", "doc", "docx", "wps", "pdf", "xlsx", "xls", "ppt", "pptx"];

/// 支援格式清單，預設為 `FORMATS`，可另行注入
#[derive(Debug, Clone, PartialEq)]
pub struct FormatRegistry {
    formats: Vec<String>,
}

impl FormatRegistry {
    pub fn new<I, S>(formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FormatRegistry {
            formats: formats.into_iter().map(Into::into).collect(),
        }
    }

    /// 副檔名需完全相符（區分大小寫）
    pub fn is_supported(&self, extension: &str) -> bool {
        self.formats.iter().any(|f| f == extension)
    }

    pub fn formats(&self) -> &[String] {
        &self.formats
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        FormatRegistry::new(FORMATS)
    }
}
