// ==========================================
// 装箱预测系统 - 预测配置
// ==========================================
// 职责: 字段名 / 分配比例 / 换算常数的集中定义与校验
// 存储: JSON 文件（可选,缺省时使用内置默认值）
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// 配置目录名（位于用户配置目录下）
pub const CONFIG_DIR_NAME: &str = "vanning-forecast";

/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "config.json";

/// 比例合计允许误差
const RATIO_SUM_TOLERANCE: f64 = 1e-9;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {message}")]
    Read { path: String, message: String },

    #[error("配置文件解析失败 ({path}): {message}")]
    Parse { path: String, message: String },

    #[error("配置值无效 (key: {key}): {message}")]
    Invalid { key: String, message: String },
}

// ==========================================
// FieldNames - 源数据字段名
// ==========================================
// 按列名精确匹配（不按列位置）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldNames {
    pub date_label: String, // 日期标签列
    pub unit_count: String, // WIG 本数列
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            date_label: "日付".to_string(),
            unit_count: "WIG本数（40HQ換算）".to_string(),
        }
    }
}

// ==========================================
// AllocationRatios - 荷姿分配比例
// ==========================================
// MOD: PBST 90% / PB 10%
// VCA: FCST 80% / PB 20%
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationRatios {
    pub mod_to_pbst: f64,
    pub mod_to_pb: f64,
    pub vca_to_fcst: f64,
    pub vca_to_pb: f64,
}

impl Default for AllocationRatios {
    fn default() -> Self {
        Self {
            mod_to_pbst: 0.9,
            mod_to_pb: 0.1,
            vca_to_fcst: 0.8,
            vca_to_pb: 0.2,
        }
    }
}

// ==========================================
// ForecastConfig - 预测配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    pub fields: FieldNames,
    pub allocation: AllocationRatios,
    pub tons_per_unit: f64,       // MT → 本 换算常数（每本 20 MT）
    pub loose_units_per_day: f64, // 散装每个出货日可装本数
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            fields: FieldNames::default(),
            allocation: AllocationRatios::default(),
            tons_per_unit: 20.0,
            loose_units_per_day: 8.0,
        }
    }
}

impl ForecastConfig {
    /// 默认配置文件路径: <用户配置目录>/vanning-forecast/config.json
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// 从 JSON 文件加载配置并校验
    ///
    /// 文件中缺省的键使用默认值
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

        let config: ForecastConfig =
            serde_json::from_str(&raw).map_err(|e| ConfigError::Parse {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        config.validate()?;
        info!(path = %path_str, "预测配置已加载");
        Ok(config)
    }

    /// 加载默认路径下的配置;文件不存在时返回默认配置
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => {
                debug!("未找到配置文件,使用默认配置");
                Ok(Self::default())
            }
        }
    }

    /// 配置校验
    ///
    /// 规则:
    /// 1) 字段名非空
    /// 2) 每条产品线的比例在 [0, 1] 内且合计为 1
    /// 3) tons_per_unit > 0
    /// 4) loose_units_per_day >= 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty("fields.date_label", &self.fields.date_label)?;
        require_non_empty("fields.unit_count", &self.fields.unit_count)?;

        let a = &self.allocation;
        for (key, value) in [
            ("allocation.mod_to_pbst", a.mod_to_pbst),
            ("allocation.mod_to_pb", a.mod_to_pb),
            ("allocation.vca_to_fcst", a.vca_to_fcst),
            ("allocation.vca_to_pb", a.vca_to_pb),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(invalid(key, format!("比例必须在 [0, 1] 范围内: {}", value)));
            }
        }
        require_unit_sum("allocation.mod_*", a.mod_to_pbst + a.mod_to_pb)?;
        require_unit_sum("allocation.vca_*", a.vca_to_fcst + a.vca_to_pb)?;

        if !self.tons_per_unit.is_finite() || self.tons_per_unit <= 0.0 {
            return Err(invalid(
                "tons_per_unit",
                format!("必须大于 0: {}", self.tons_per_unit),
            ));
        }
        if !self.loose_units_per_day.is_finite() || self.loose_units_per_day < 0.0 {
            return Err(invalid(
                "loose_units_per_day",
                format!("不能为负数: {}", self.loose_units_per_day),
            ));
        }

        Ok(())
    }
}

fn invalid(key: &str, message: String) -> ConfigError {
    ConfigError::Invalid {
        key: key.to_string(),
        message,
    }
}

fn require_non_empty(key: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(invalid(key, "字段名不能为空".to_string()));
    }
    Ok(())
}

fn require_unit_sum(key: &str, sum: f64) -> Result<(), ConfigError> {
    if (sum - 1.0).abs() > RATIO_SUM_TOLERANCE {
        return Err(invalid(key, format!("比例合计必须为 1: {}", sum)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = ForecastConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tons_per_unit, 20.0);
        assert_eq!(config.loose_units_per_day, 8.0);
        assert_eq!(config.fields.date_label, "日付");
    }

    #[test]
    fn test_load_partial_file_uses_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, r#"{{ "loose_units_per_day": 10 }}"#).unwrap();

        let config = ForecastConfig::load(temp_file.path()).unwrap();
        assert_eq!(config.loose_units_per_day, 10.0);
        assert_eq!(config.tons_per_unit, 20.0);
        assert_eq!(config.allocation, AllocationRatios::default());
    }

    #[test]
    fn test_ratio_sum_must_be_one() {
        let mut config = ForecastConfig::default();
        config.allocation.mod_to_pb = 0.2;

        match config.validate() {
            Err(ConfigError::Invalid { key, .. }) => assert_eq!(key, "allocation.mod_*"),
            other => panic!("期望 Invalid 错误, 实际: {:?}", other),
        }
    }

    #[test]
    fn test_non_positive_conversion_rejected() {
        let config = ForecastConfig {
            tons_per_unit: 0.0,
            ..ForecastConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_malformed_json() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "not json").unwrap();

        let result = ForecastConfig::load(temp_file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let result = ForecastConfig::load("does/not/exist.json");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
