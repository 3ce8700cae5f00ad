// ==========================================
// 装箱预测系统 - 导入层
// ==========================================
// 职责: 外部表格数据 → ShipmentRecord 序列
// 支持: CSV, Excel (.xlsx)
// 红线: 不做文件 I/O（字节由调用方读入内存）
// ==========================================

// 模块声明
pub mod data_cleaner;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod shipment_importer;
pub mod source_format;

// 重导出核心类型
pub use data_cleaner::{CountCoercion, DataCleaner};
pub use error::{ImportError, ImportResult};
pub use field_mapper::{FieldMapper, MappedRow};
pub use file_parser::{rows_from_range, CsvParser, ExcelParser, FileParser, RawRow};
pub use shipment_importer::{ImportOutcome, ImportSummary, ShipmentImporter};
pub use source_format::SourceFormat;
