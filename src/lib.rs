// ==========================================
// 集装箱装箱（バンニング）预测 - 核心库
// ==========================================
// 输入: WIG 出货计划（CSV / Excel）+ MOD/VCA 月度销售见込
// 输出: 荷姿别（PBST / FCST / PB）必要本数、产能、超出
// 系统定位: 纯计算核心,画面与外部服务由调用方负责
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "ja");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 外部数据
pub mod importer;

// 引擎层 - 业务规则
pub mod engine;

// 配置层 - 业务常数
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 调用边界
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    CapacityBound, ForecastRow, Overflow, PackingMethod, SalesVolumeInput, ShipmentProfile,
    ShipmentRecord,
};

// 导入
pub use importer::{ImportError, ShipmentImporter, SourceFormat};

// 引擎
pub use engine::{ForecastCalculator, ForecastError, MonthlyForecast};

// 配置
pub use config::ForecastConfig;

// API
pub use api::{ApiError, ForecastApi, ForecastReport};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "バンニング見込み予測";
