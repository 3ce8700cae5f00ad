// ==========================================
// 装箱预测系统 - 预测报告
// ==========================================
// 职责: 计算结果 → 调用方可直接渲染的视图（文案已本地化）
// ==========================================

use crate::domain::forecast::{format_units, ForecastRow, PackingMethod, SalesVolumeInput};
use crate::domain::shipment::ShipmentProfile;
use crate::engine::{MonthlyForecast, UnitAllocation};
use crate::i18n;
use crate::importer::{ImportSummary, SourceFormat};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 预测行视图
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastRowView {
    pub method: PackingMethod,
    pub label: String,
    pub required_units: f64,
    pub capacity: String,
    pub overflow: String,
    pub has_overflow: bool,
}

impl ForecastRowView {
    pub fn from_row(row: &ForecastRow, locale: &str) -> Self {
        Self {
            method: row.method,
            label: row.method.label_in(locale),
            required_units: row.required_units,
            capacity: row.capacity.describe_in(locale),
            overflow: row.overflow.describe_in(locale),
            has_overflow: row.has_overflow(),
        }
    }
}

/// 数据来源信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceInfo {
    pub file_name: Option<String>,
    pub batch_id: String,
    pub format: SourceFormat,
    pub total_rows: usize,
    pub degraded_counts: usize,
}

impl SourceInfo {
    pub fn from_summary(file_name: Option<String>, summary: &ImportSummary) -> Self {
        Self {
            file_name,
            batch_id: summary.batch_id.clone(),
            format: summary.format,
            total_rows: summary.total_rows,
            degraded_counts: summary.degraded_counts,
        }
    }
}

// ==========================================
// ForecastReport - 月度预测报告
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastReport {
    pub generated_at: DateTime<Utc>,
    pub locale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceInfo>,
    pub input: SalesVolumeInput,
    pub profile: ShipmentProfile,
    pub allocation: UnitAllocation,
    pub rows: Vec<ForecastRowView>,
}

impl ForecastReport {
    pub fn new(forecast: &MonthlyForecast, input: SalesVolumeInput, locale: &str) -> Self {
        Self {
            generated_at: Utc::now(),
            locale: locale.to_string(),
            source: None,
            input,
            profile: forecast.profile.clone(),
            allocation: forecast.allocation,
            rows: forecast
                .rows
                .iter()
                .map(|row| ForecastRowView::from_row(row, locale))
                .collect(),
        }
    }

    pub fn with_source(mut self, source: SourceInfo) -> Self {
        self.source = Some(source);
        self
    }

    pub fn has_overflow(&self) -> bool {
        self.rows.iter().any(|r| r.has_overflow)
    }

    /// 文本表格（荷姿 | 必要本数 | キャパ | 超過本数）
    pub fn render_table(&self) -> String {
        let locale = self.locale.as_str();
        let mut out = String::new();

        if let Some(file) = self.source.as_ref().and_then(|s| s.file_name.as_deref()) {
            out.push_str(&i18n::t_in_with_args("forecast.loaded", locale, &[("file", file)]));
            out.push('\n');
        }
        out.push_str(&i18n::t_in_with_args(
            "forecast.profile.summary",
            locale,
            &[
                ("records", self.profile.record_count.to_string().as_str()),
                ("total", format_units(self.profile.wig_total).as_str()),
                ("days", self.profile.active_days.to_string().as_str()),
            ],
        ));
        out.push_str("\n\n");

        out.push_str(&i18n::t_in("forecast.title", locale));
        out.push('\n');
        out.push_str(&join_cells(&[
            i18n::t_in("forecast.table.method", locale),
            i18n::t_in("forecast.table.required", locale),
            i18n::t_in("forecast.table.capacity", locale),
            i18n::t_in("forecast.table.overflow", locale),
        ]));
        out.push('\n');

        for row in &self.rows {
            let overflow = if row.has_overflow {
                format!("!! {}", row.overflow)
            } else {
                row.overflow.clone()
            };
            out.push_str(&join_cells(&[
                row.label.clone(),
                format_units(row.required_units),
                row.capacity.clone(),
                overflow,
            ]));
            out.push('\n');
        }

        out
    }
}

fn join_cells(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}
