// ==========================================
// 装箱预测系统 - 荷姿预测领域模型
// ==========================================
// 职责: 销售见込输入 / 荷姿 / 产能上限 / 超出量 / 预测行
// 红线: 预测行固定 3 行,顺序 PBST → FCST → PB
// ==========================================

use crate::i18n;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// SalesVolumeInput - 月度销售见込数量
// ==========================================
// 单位: MT（公吨）;两条产品线互相独立,均可为 0
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SalesVolumeInput {
    pub mod_quantity_t: f64, // MOD 销售见込（MT）
    pub vca_quantity_t: f64, // VCA 销售见込（MT）
}

impl SalesVolumeInput {
    pub fn new(mod_quantity_t: f64, vca_quantity_t: f64) -> Self {
        Self {
            mod_quantity_t,
            vca_quantity_t,
        }
    }
}

// ==========================================
// PackingMethod - 荷姿
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PackingMethod {
    Pbst, // 纸袋托盘化
    Fcst, // 吨袋托盘化
    Pb,   // 散装
}

impl PackingMethod {
    /// 固定输出顺序
    pub const ALL: [PackingMethod; 3] = [
        PackingMethod::Pbst,
        PackingMethod::Fcst,
        PackingMethod::Pb,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            PackingMethod::Pbst => "PBST",
            PackingMethod::Fcst => "FCST",
            PackingMethod::Pb => "PB",
        }
    }

    /// 本地化显示名称（如 "PBST（紙袋パレタイズ）"）
    pub fn label_in(&self, locale: &str) -> String {
        let key = match self {
            PackingMethod::Pbst => "forecast.method.pbst",
            PackingMethod::Fcst => "forecast.method.fcst",
            PackingMethod::Pb => "forecast.method.pb",
        };
        i18n::t_in(key, locale)
    }
}

impl fmt::Display for PackingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ==========================================
// CapacityBound - 产能上限
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CapacityBound {
    /// 以 WIG 出货计划合计为上限
    ShipmentTotal { wig_total: f64 },

    /// 不设物理上限
    Unconstrained,

    /// 有效出货日数 × 每日散装本数
    LooseLoading {
        capacity: f64,
        active_days: usize,
        units_per_day: f64,
    },
}

impl CapacityBound {
    /// 数值上限（不受限时为 None）
    pub fn limit(&self) -> Option<f64> {
        match self {
            CapacityBound::ShipmentTotal { wig_total } => Some(*wig_total),
            CapacityBound::Unconstrained => None,
            CapacityBound::LooseLoading { capacity, .. } => Some(*capacity),
        }
    }

    pub fn describe_in(&self, locale: &str) -> String {
        match self {
            CapacityBound::ShipmentTotal { wig_total } => i18n::t_in_with_args(
                "forecast.capacity.shipment_total",
                locale,
                &[("total", format_units(*wig_total).as_str())],
            ),
            CapacityBound::Unconstrained => i18n::t_in("forecast.capacity.unconstrained", locale),
            CapacityBound::LooseLoading {
                capacity,
                active_days,
                units_per_day,
            } => i18n::t_in_with_args(
                "forecast.capacity.loose_loading",
                locale,
                &[
                    ("capacity", format_units(*capacity).as_str()),
                    ("per_day", format_units(*units_per_day).as_str()),
                    ("days", active_days.to_string().as_str()),
                ],
            ),
        }
    }
}

// ==========================================
// Overflow - 超出量
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "units", rename_all = "snake_case")]
pub enum Overflow {
    None,
    Excess(f64), // 超出本数（> 0,已四舍五入至 1 位小数）
}

impl Overflow {
    /// 由已四舍五入的差值构造（<= 0 视为无超出）
    pub fn from_excess(excess: f64) -> Self {
        if excess > 0.0 {
            Overflow::Excess(excess)
        } else {
            Overflow::None
        }
    }

    pub fn units(&self) -> f64 {
        match self {
            Overflow::None => 0.0,
            Overflow::Excess(units) => *units,
        }
    }

    pub fn describe_in(&self, locale: &str) -> String {
        match self {
            Overflow::None => i18n::t_in("forecast.overflow.none", locale),
            Overflow::Excess(units) => i18n::t_in_with_args(
                "forecast.overflow.excess",
                locale,
                &[("units", format_units(*units).as_str())],
            ),
        }
    }
}

// ==========================================
// ForecastRow - 月度荷姿预测行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRow {
    pub method: PackingMethod,
    pub required_units: f64, // 必要本数（1 位小数）
    pub capacity: CapacityBound,
    pub overflow: Overflow,
}

impl ForecastRow {
    pub fn has_overflow(&self) -> bool {
        matches!(self.overflow, Overflow::Excess(_))
    }

    /// 上限说明（默认语言 ja）
    pub fn capacity_description(&self) -> String {
        self.capacity.describe_in(i18n::DEFAULT_LOCALE)
    }

    /// 超出说明（默认语言 ja）
    pub fn overflow_description(&self) -> String {
        self.overflow.describe_in(i18n::DEFAULT_LOCALE)
    }
}

/// 本数显示格式（整数不带小数点: 100 / 12.5）
pub fn format_units(value: f64) -> String {
    format!("{}", value)
}
