// ==========================================
// 装箱预测系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含文件解析逻辑,不含计算逻辑
// ==========================================

pub mod forecast;
pub mod shipment;

// 重导出核心类型
pub use forecast::{CapacityBound, ForecastRow, Overflow, PackingMethod, SalesVolumeInput};
pub use shipment::{ShipmentProfile, ShipmentRecord};
