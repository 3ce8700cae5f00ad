// ==========================================
// 装箱预测系统 - 数据清洗器实现
// ==========================================
// 职责: 单元格文本 → 类型化值 的唯一转换点
// 红线: 转换失败不报错,统一降级为安全默认值（本数为 0）
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// CountCoercion - 本数转换结果
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CountCoercion {
    /// 完整解析为非负数值
    Parsed(f64),

    /// 仅前缀为数值（如 "12本"）,取前缀
    Lenient(f64),

    /// 字段缺失或为空 → 0
    Missing,

    /// 无法解析 / 非有限值 / 负数 → 0
    Invalid,
}

impl CountCoercion {
    pub fn value(&self) -> f64 {
        match self {
            CountCoercion::Parsed(v) | CountCoercion::Lenient(v) => *v,
            CountCoercion::Missing | CountCoercion::Invalid => 0.0,
        }
    }

    /// 是否发生了降级（源值非空但未能完整解析）
    pub fn is_degraded(&self) -> bool {
        matches!(self, CountCoercion::Lenient(_) | CountCoercion::Invalid)
    }
}

pub struct DataCleaner;

impl DataCleaner {
    /// 清洗文本（TRIM + 空串标准化为 None）
    pub fn normalize_text(&self, value: Option<&str>) -> Option<String> {
        value.and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }

    /// 本数转换
    ///
    /// 规则:
    /// 1) TRIM,去除千分位逗号
    /// 2) 取最长的数值前缀（符号/数字/小数点/指数）
    /// 3) 空值 / 无数值前缀 / 非有限值 / 负数 → 0
    pub fn coerce_unit_count(&self, value: Option<&str>) -> CountCoercion {
        let text = match self.normalize_text(value) {
            Some(t) => t.replace(',', ""),
            None => return CountCoercion::Missing,
        };

        let prefix_len = numeric_prefix_len(&text);
        if prefix_len == 0 {
            return CountCoercion::Invalid;
        }

        let parsed = match text[..prefix_len].parse::<f64>() {
            // "-0" 归一为 0.0
            Ok(v) if v.is_finite() && v >= 0.0 => v.abs(),
            _ => return CountCoercion::Invalid,
        };

        if prefix_len == text.len() {
            CountCoercion::Parsed(parsed)
        } else {
            CountCoercion::Lenient(parsed)
        }
    }
}

/// 数值前缀长度（字节）;不含任何数字时返回 0
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut idx = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        idx += 1;
    }

    let int_start = idx;
    while idx < bytes.len() && bytes[idx].is_ascii_digit() {
        idx += 1;
    }
    let mut digits = idx - int_start;

    if idx < bytes.len() && bytes[idx] == b'.' {
        let frac_start = idx + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            idx = frac_end;
        }
    }

    if digits == 0 {
        return 0;
    }

    // 指数部分仅在后随数字时有效
    if idx < bytes.len() && (bytes[idx] == b'e' || bytes[idx] == b'E') {
        let mut exp_end = idx + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            idx = exp_end;
        }
    }

    idx
}
