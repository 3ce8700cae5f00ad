// ==========================================
// 装箱预测系统 - 月度荷姿预测引擎
// ==========================================
// 输入: 出货计划记录 + MOD/VCA 月度销售见込（MT）
// 输出: 3 行 ForecastRow（PBST → FCST → PB）
// 红线: 纯函数;不修改输入,不依赖时钟,同输入同输出
// ==========================================
// 计算步骤:
// 1) WIG 合计 / 有效出货日数 → 散装上限 = 日数 × 每日本数
// 2) MT → 本: 数量 / tons_per_unit
// 3) 按比例分配到荷姿,各分配额先四舍五入至 1 位小数
// 4) PB = round(round(MOD×PB比例) + round(VCA×PB比例))
// 5) PBST 上限 = WIG 合计;FCST 无上限;PB 上限 = 散装上限
// 6) 超出 = max(0, round(必要 - 上限))
// ==========================================

use crate::config::{ConfigError, ForecastConfig};
use crate::domain::forecast::{
    CapacityBound, ForecastRow, Overflow, PackingMethod, SalesVolumeInput,
};
use crate::domain::shipment::{ShipmentProfile, ShipmentRecord};
use crate::engine::error::{ForecastError, ForecastResult};
use crate::engine::shipment_profile::build_profile;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// 四舍五入至 1 位小数（.5 远离 0 舍入,f64::round 语义）
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// 产能差额 → 超出量（已四舍五入,<= 0 为无超出）
fn overflow_against(required: f64, limit: f64) -> Overflow {
    Overflow::from_excess(round_one_decimal(required - limit))
}

// ==========================================
// UnitAllocation - 荷姿分配明细
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitAllocation {
    pub mod_units: f64, // MOD 换算本数（未舍入）
    pub vca_units: f64, // VCA 换算本数（未舍入）
    pub mod_pbst: f64,
    pub mod_pb: f64,
    pub vca_fcst: f64,
    pub vca_pb: f64,
}

// ==========================================
// MonthlyForecast - 月度预测结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyForecast {
    pub profile: ShipmentProfile,
    pub allocation: UnitAllocation,
    pub rows: Vec<ForecastRow>,
}

impl MonthlyForecast {
    pub fn row(&self, method: PackingMethod) -> Option<&ForecastRow> {
        self.rows.iter().find(|r| r.method == method)
    }

    pub fn has_overflow(&self) -> bool {
        self.rows.iter().any(ForecastRow::has_overflow)
    }
}

// ==========================================
// ForecastCalculator - 荷姿预测引擎
// ==========================================
#[derive(Debug, Clone)]
pub struct ForecastCalculator {
    config: ForecastConfig,
}

impl ForecastCalculator {
    /// 构造函数（配置先校验）
    pub fn new(config: ForecastConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// 计算 3 行预测
    ///
    /// # 返回
    /// - Ok(Vec<ForecastRow>): 固定顺序 PBST, FCST, PB
    /// - Err(EmptyInput): 无记录
    /// - Err(InvalidQuantity): 数量为负或非有限值
    pub fn calculate(
        &self,
        records: &[ShipmentRecord],
        mod_quantity_t: f64,
        vca_quantity_t: f64,
    ) -> ForecastResult<Vec<ForecastRow>> {
        let input = SalesVolumeInput::new(mod_quantity_t, vca_quantity_t);
        Ok(self.forecast(records, &input)?.rows)
    }

    /// 计算月度预测（含出货画像与分配明细）
    #[instrument(skip(self, records), fields(
        records = records.len(),
        mod_t = input.mod_quantity_t,
        vca_t = input.vca_quantity_t
    ))]
    pub fn forecast(
        &self,
        records: &[ShipmentRecord],
        input: &SalesVolumeInput,
    ) -> ForecastResult<MonthlyForecast> {
        if records.is_empty() {
            return Err(ForecastError::EmptyInput);
        }
        check_quantity("mod_quantity_t", input.mod_quantity_t)?;
        check_quantity("vca_quantity_t", input.vca_quantity_t)?;

        // === 步骤 1: 出货画像 ===
        let profile = build_profile(records);
        let loose_capacity = profile.active_days as f64 * self.config.loose_units_per_day;

        // === 步骤 2-3: 换算与分配 ===
        let allocation = self.allocate(input);

        // === 步骤 4: 荷姿必要本数 ===
        let pbst_required = allocation.mod_pbst;
        let fcst_required = allocation.vca_fcst;
        let pb_required = round_one_decimal(allocation.mod_pb + allocation.vca_pb);

        debug!(
            wig_total = profile.wig_total,
            active_days = profile.active_days,
            loose_capacity,
            pbst_required,
            fcst_required,
            pb_required,
            "荷姿必要本数计算完成"
        );

        // === 步骤 5-6: 产能比较 ===
        let rows = vec![
            ForecastRow {
                method: PackingMethod::Pbst,
                required_units: pbst_required,
                capacity: CapacityBound::ShipmentTotal {
                    wig_total: profile.wig_total,
                },
                overflow: overflow_against(pbst_required, profile.wig_total),
            },
            ForecastRow {
                method: PackingMethod::Fcst,
                required_units: fcst_required,
                capacity: CapacityBound::Unconstrained,
                overflow: Overflow::None,
            },
            ForecastRow {
                method: PackingMethod::Pb,
                required_units: pb_required,
                capacity: CapacityBound::LooseLoading {
                    capacity: loose_capacity,
                    active_days: profile.active_days,
                    units_per_day: self.config.loose_units_per_day,
                },
                overflow: overflow_against(pb_required, loose_capacity),
            },
        ];

        for row in rows.iter().filter(|r| r.has_overflow()) {
            warn!(
                method = %row.method,
                required = row.required_units,
                capacity = ?row.capacity.limit(),
                overflow = row.overflow.units(),
                "荷姿产能超出"
            );
        }

        Ok(MonthlyForecast {
            profile,
            allocation,
            rows,
        })
    }

    /// MT → 本 换算并按比例分配（各分配额独立舍入）
    fn allocate(&self, input: &SalesVolumeInput) -> UnitAllocation {
        let ratios = &self.config.allocation;
        let mod_units = input.mod_quantity_t / self.config.tons_per_unit;
        let vca_units = input.vca_quantity_t / self.config.tons_per_unit;

        UnitAllocation {
            mod_units,
            vca_units,
            mod_pbst: round_one_decimal(mod_units * ratios.mod_to_pbst),
            mod_pb: round_one_decimal(mod_units * ratios.mod_to_pb),
            vca_fcst: round_one_decimal(vca_units * ratios.vca_to_fcst),
            vca_pb: round_one_decimal(vca_units * ratios.vca_to_pb),
        }
    }
}

impl Default for ForecastCalculator {
    fn default() -> Self {
        Self {
            config: ForecastConfig::default(),
        }
    }
}

fn check_quantity(field: &str, value: f64) -> ForecastResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ForecastError::InvalidQuantity {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}
