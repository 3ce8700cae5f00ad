// ==========================================
// 装箱预测系统 - 出货计划导入器
// ==========================================
// 流程: 解析 → 映射（含本数降级转换）→ 汇总
// 输入: 已读入内存的字节 + 源格式
// 输出: 按源行顺序的 ShipmentRecord 序列
// ==========================================

use crate::config::FieldNames;
use crate::domain::shipment::ShipmentRecord;
use crate::importer::data_cleaner::CountCoercion;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::{parser_for, RawRow};
use crate::importer::source_format::SourceFormat;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// 导入汇总
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSummary {
    pub batch_id: String,
    pub format: SourceFormat,
    pub total_rows: usize,      // 导入记录数（已跳过空白行）
    pub degraded_counts: usize, // 本数非空但未能完整解析的行数
    pub missing_counts: usize,  // 本数缺失/为空的行数
    pub missing_dates: usize,   // 日期缺失的行数
    pub elapsed_ms: u64,
}

/// 导入结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportOutcome {
    pub records: Vec<ShipmentRecord>,
    pub summary: ImportSummary,
}

// ==========================================
// ShipmentImporter - 出货计划导入器
// ==========================================
pub struct ShipmentImporter {
    field_mapper: FieldMapper,
}

impl ShipmentImporter {
    pub fn new(fields: FieldNames) -> Self {
        Self {
            field_mapper: FieldMapper::new(fields),
        }
    }

    /// 按格式名导入（"delimited" / "workbook" 及其扩展名别名）
    pub fn ingest_as(&self, bytes: &[u8], format_name: &str) -> ImportResult<ImportOutcome> {
        let format: SourceFormat = format_name.parse()?;
        self.ingest(bytes, format)
    }

    /// 导入出货计划
    ///
    /// # 返回
    /// - Ok(ImportOutcome): 记录序列（可能为空）+ 导入汇总
    /// - Err: 源数据无法读取
    #[instrument(skip(self, bytes), fields(bytes = bytes.len(), batch_id))]
    pub fn ingest(&self, bytes: &[u8], format: SourceFormat) -> ImportResult<ImportOutcome> {
        let start_time = Instant::now();
        let batch_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("batch_id", batch_id.as_str());

        // === 步骤 1: 解析 ===
        debug!(format = %format, "步骤 1: 解析文件");
        let raw_rows = parser_for(format).parse_bytes(bytes)?;

        // === 步骤 2: 映射 ===
        debug!(rows = raw_rows.len(), "步骤 2: 字段映射");
        let (records, tally) = self.map_rows(&raw_rows);

        let summary = ImportSummary {
            batch_id,
            format,
            total_rows: records.len(),
            degraded_counts: tally.degraded_counts,
            missing_counts: tally.missing_counts,
            missing_dates: tally.missing_dates,
            elapsed_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            total_rows = summary.total_rows,
            degraded_counts = summary.degraded_counts,
            missing_counts = summary.missing_counts,
            missing_dates = summary.missing_dates,
            elapsed_ms = summary.elapsed_ms,
            "出货计划导入完成"
        );

        Ok(ImportOutcome { records, summary })
    }

    /// 原始行 → 记录（1:1,保持源顺序）
    fn map_rows(&self, raw_rows: &[RawRow]) -> (Vec<ShipmentRecord>, MappingTally) {
        let mut records = Vec::with_capacity(raw_rows.len());
        let mut tally = MappingTally::default();

        for (idx, row) in raw_rows.iter().enumerate() {
            let mapped = self.field_mapper.map_row(row, idx + 1);

            match mapped.count_coercion {
                CountCoercion::Lenient(_) | CountCoercion::Invalid => {
                    tally.degraded_counts += 1;
                    debug!(
                        row = idx + 1,
                        raw = ?row.get(&self.field_mapper.fields().unit_count),
                        value = mapped.record.unit_count,
                        "本数降级转换"
                    );
                }
                CountCoercion::Missing => tally.missing_counts += 1,
                CountCoercion::Parsed(_) => {}
            }

            if mapped.record.date.is_none() {
                tally.missing_dates += 1;
            }

            records.push(mapped.record);
        }

        (records, tally)
    }
}

impl Default for ShipmentImporter {
    fn default() -> Self {
        Self::new(FieldNames::default())
    }
}

#[derive(Debug, Default)]
struct MappingTally {
    degraded_counts: usize,
    missing_counts: usize,
    missing_dates: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::error::ImportError;

    #[test]
    fn test_ingest_delimited_preserves_order_and_duplicates() {
        let content = "日付,WIG本数（40HQ換算）\n4/2,5\n4/1,3\n4/1,2\n";

        let outcome = ShipmentImporter::default()
            .ingest(content.as_bytes(), SourceFormat::Delimited)
            .unwrap();

        let labels: Vec<&str> = outcome.records.iter().map(|r| r.date_label()).collect();
        assert_eq!(labels, vec!["4/2", "4/1", "4/1"]);
        assert_eq!(outcome.summary.total_rows, 3);
        assert_eq!(outcome.summary.format, SourceFormat::Delimited);
    }

    #[test]
    fn test_ingest_tallies_coercions() {
        let content = "日付,WIG本数（40HQ換算）\n4/1,abc\n4/2,\n,4\n4/4,6本\n";

        let outcome = ShipmentImporter::default()
            .ingest(content.as_bytes(), SourceFormat::Delimited)
            .unwrap();

        let counts: Vec<f64> = outcome.records.iter().map(|r| r.unit_count).collect();
        assert_eq!(counts, vec![0.0, 0.0, 4.0, 6.0]);
        assert_eq!(outcome.summary.degraded_counts, 2);
        assert_eq!(outcome.summary.missing_counts, 1);
        assert_eq!(outcome.summary.missing_dates, 1);
    }

    #[test]
    fn test_ingest_as_unsupported_format() {
        let result = ShipmentImporter::default().ingest_as(b"%PDF-1.4", "pdf");
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(f)) if f == "pdf"));
    }

    #[test]
    fn test_ingest_empty_dataset() {
        let outcome = ShipmentImporter::default()
            .ingest_as("日付,WIG本数（40HQ換算）\n".as_bytes(), "delimited")
            .unwrap();
        assert!(outcome.records.is_empty());
    }
}
