// ==========================================
// 装箱预测系统 - 引擎错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// 无出货计划记录（调用方应提示先上传文件,不渲染预测表）
    #[error("出货计划记录为空,无法计算预测")]
    EmptyInput,

    #[error("销售见込数量无效 ({field}): {value}")]
    InvalidQuantity { field: String, value: f64 },
}

/// Result 类型别名
pub type ForecastResult<T> = Result<T, ForecastError>;
