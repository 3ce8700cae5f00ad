// ==========================================
// 装箱预测系统 - 配置层
// ==========================================
// 职责: 业务常数（字段名/分配比例/换算常数）集中管理
// 存储: JSON 文件,缺省时使用内置默认值
// ==========================================

pub mod forecast_config;

// 重导出核心配置
pub use forecast_config::{AllocationRatios, ConfigError, FieldNames, ForecastConfig};
