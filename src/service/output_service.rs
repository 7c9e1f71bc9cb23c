use std::fs;
use std::path::Path;
use log::info;
use crate::error::ConversionError;
use crate::models::output::OutputLocation;

/// 確認輸出目錄存在（必要時建立單層目錄），並正規化路徑結尾
pub fn resolve_output_location(path: &str) -> Result<OutputLocation, ConversionError> {
    if path.is_empty() {
        return Err(ConversionError::NoOutputLocation);
    }

    let dir = Path::new(path);
    if !dir.is_dir() {
        fs::create_dir(dir).map_err(|source| ConversionError::DirectoryCreate {
            path: path.to_string(),
            source,
        })?;
        info!("建立輸出目錄：{}", path);
    }

    Ok(OutputLocation::normalized(path))
}
