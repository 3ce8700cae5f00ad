// ==========================================
// 装箱预测系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 字段类型转换失败不属于错误（统一降级为 0）
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("文件格式不支持: {0}（仅支持 .csv / .xlsx）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileRead(String),

    #[error("CSV 解析失败: {0}")]
    CsvParse(String),

    #[error("Excel 解析失败: {0}")]
    WorkbookParse(String),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileRead(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParse(err.to_string())
    }
}

impl From<calamine::XlsxError> for ImportError {
    fn from(err: calamine::XlsxError) -> Self {
        ImportError::WorkbookParse(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
