// ==========================================
// 装箱预测系统 - 出货计划领域模型
// ==========================================
// 职责: WIG 出货计划记录 + 月度出货画像
// 红线: 日期仅作为不透明标签,不解析为日历值
// ==========================================

use serde::{Deserialize, Serialize};

/// 缺失日期标签的显示占位符
pub const MISSING_DATE_LABEL: &str = "-";

// ==========================================
// ShipmentRecord - 出货计划记录
// ==========================================
// 用途: 导入层写入,引擎层只读
// 一行源数据对应一条记录,同日期不合并
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRecord {
    pub date: Option<String>, // 日期标签（源字段原文,缺失为 None）
    pub unit_count: f64,      // WIG 本数（40HQ 换算,>= 0）
    pub row_number: usize,    // 导入序号（跳过空白行后从 1 开始,非文件物理行号）
}

impl ShipmentRecord {
    pub fn new(date: Option<String>, unit_count: f64, row_number: usize) -> Self {
        Self {
            date,
            unit_count,
            row_number,
        }
    }

    /// 是否为有效出货日（本数 > 0）
    pub fn is_active_day(&self) -> bool {
        self.unit_count > 0.0
    }

    /// 日期标签（缺失时返回占位符）
    pub fn date_label(&self) -> &str {
        self.date.as_deref().unwrap_or(MISSING_DATE_LABEL)
    }
}

// ==========================================
// ShipmentProfile - 月度出货画像
// ==========================================
// 由 engine::shipment_profile 聚合得出,每次预测重新计算
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentProfile {
    pub record_count: usize,          // 记录总数（含 0 本记录）
    pub wig_total: f64,               // WIG 本数合计
    pub active_days: usize,           // 有效出货日数（本数 > 0）
    pub idle_days: usize,             // 0 本记录数
    pub peak_daily: f64,              // 单日最大本数
    pub average_per_active_day: f64,  // 有效出货日平均本数
}

impl ShipmentProfile {
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_day_requires_positive_count() {
        assert!(ShipmentRecord::new(Some("2025/04/01".into()), 3.0, 1).is_active_day());
        assert!(!ShipmentRecord::new(Some("2025/04/02".into()), 0.0, 2).is_active_day());
    }

    #[test]
    fn test_missing_date_label() {
        let record = ShipmentRecord::new(None, 1.0, 1);
        assert_eq!(record.date_label(), MISSING_DATE_LABEL);
    }
}
