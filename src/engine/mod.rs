// ==========================================
// 装箱预测系统 - 引擎层
// ==========================================
// 职责: 出货画像聚合 + 荷姿分配 + 产能比较
// 红线: 纯内存计算,不做 I/O,无共享可变状态
// ==========================================

pub mod error;
pub mod forecast_calculator;
pub mod shipment_profile;

// 重导出核心引擎
pub use error::{ForecastError, ForecastResult};
pub use forecast_calculator::{
    round_one_decimal, ForecastCalculator, MonthlyForecast, UnitAllocation,
};
pub use shipment_profile::build_profile;
