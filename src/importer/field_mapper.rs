// ==========================================
// 装箱预测系统 - 字段映射器实现
// ==========================================
// 职责: 原始行记录 → ShipmentRecord
// 规则: 按列名精确匹配;映射永不失败
// ==========================================

use crate::config::FieldNames;
use crate::domain::shipment::ShipmentRecord;
use crate::importer::data_cleaner::{CountCoercion, DataCleaner};
use crate::importer::file_parser::RawRow;

/// 单行映射结果（记录 + 本数转换明细,用于导入汇总）
#[derive(Debug, Clone, PartialEq)]
pub struct MappedRow {
    pub record: ShipmentRecord,
    pub count_coercion: CountCoercion,
}

pub struct FieldMapper {
    fields: FieldNames,
    cleaner: DataCleaner,
}

impl FieldMapper {
    pub fn new(fields: FieldNames) -> Self {
        Self {
            fields,
            cleaner: DataCleaner,
        }
    }

    pub fn fields(&self) -> &FieldNames {
        &self.fields
    }

    /// 映射单行
    ///
    /// # 参数
    /// - row: 原始行记录
    /// - row_number: 导入序号（跳过空白行后从 1 开始）
    pub fn map_row(&self, row: &RawRow, row_number: usize) -> MappedRow {
        let date = self
            .cleaner
            .normalize_text(row.get(&self.fields.date_label).map(String::as_str));

        let count_coercion = self
            .cleaner
            .coerce_unit_count(row.get(&self.fields.unit_count).map(String::as_str));

        MappedRow {
            record: ShipmentRecord::new(date, count_coercion.value(), row_number),
            count_coercion,
        }
    }
}

impl Default for FieldMapper {
    fn default() -> Self {
        Self::new(FieldNames::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>()
    }

    #[test]
    fn test_field_mapper_basic() {
        let mapper = FieldMapper::default();
        let mapped = mapper.map_row(
            &row(&[("日付", "2025/04/01"), ("WIG本数（40HQ換算）", "12")]),
            1,
        );

        assert_eq!(mapped.record.date.as_deref(), Some("2025/04/01"));
        assert_eq!(mapped.record.unit_count, 12.0);
        assert_eq!(mapped.record.row_number, 1);
        assert_eq!(mapped.count_coercion, CountCoercion::Parsed(12.0));
    }

    #[test]
    fn test_field_mapper_missing_fields_still_map() {
        let mapper = FieldMapper::default();
        let mapped = mapper.map_row(&row(&[("備考", "休日")]), 4);

        assert_eq!(mapped.record.date, None);
        assert_eq!(mapped.record.unit_count, 0.0);
        assert_eq!(mapped.count_coercion, CountCoercion::Missing);
    }

    #[test]
    fn test_field_mapper_matches_by_name_not_position() {
        let mapper = FieldMapper::new(FieldNames {
            date_label: "date".to_string(),
            unit_count: "count".to_string(),
        });
        let mapped = mapper.map_row(&row(&[("count", "x"), ("date", "d1")]), 2);

        assert_eq!(mapped.record.date.as_deref(), Some("d1"));
        assert_eq!(mapped.record.unit_count, 0.0);
        assert!(mapped.count_coercion.is_degraded());
    }
}
