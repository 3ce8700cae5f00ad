// ==========================================
// 装箱预测系统 - API 层
// ==========================================
// 职责: 提供预测 API 接口,供画面/命令行调用
// ==========================================

pub mod error;
pub mod forecast_api;
pub mod report;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use forecast_api::ForecastApi;
pub use report::{ForecastReport, ForecastRowView, SourceInfo};
