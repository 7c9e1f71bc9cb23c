use crate::error::ConversionError;
use crate::models::conversion::ConversionSummary;

// Facade 接口，負責協調批次轉換流程
pub trait ConversionFacadeTrait: Send + Sync {
    /// 依加入順序轉換所有檔案
    /// # 參數
    /// - destination: 非空時重新設定輸出目錄
    /// # 回傳
    /// - 成功時返回本次轉換統計；設定錯誤或檔案消失時返回錯誤，不回傳部分結果
    fn convert(&mut self, destination: Option<&str>) -> Result<ConversionSummary, ConversionError>;
}
