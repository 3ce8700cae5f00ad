// ==========================================
// 装箱预测系统 - 源数据格式
// ==========================================
// 扩展名/格式名只在边界处判定一次,之后按枚举分派
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Delimited, // CSV 文本（首行为表头）
    Workbook,  // Excel .xlsx（仅读取第一个工作表）
}

impl SourceFormat {
    /// 根据文件扩展名判定格式（不区分大小写）
    pub fn from_path<P: AsRef<Path>>(path: P) -> ImportResult<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        Self::from_extension(&ext)
    }

    pub fn from_extension(ext: &str) -> ImportResult<Self> {
        match ext.trim_start_matches('.').to_lowercase().as_str() {
            "csv" => Ok(SourceFormat::Delimited),
            "xlsx" => Ok(SourceFormat::Workbook),
            other => Err(ImportError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::Delimited => "delimited",
            SourceFormat::Workbook => "workbook",
        }
    }
}

impl FromStr for SourceFormat {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "delimited" | "csv" => Ok(SourceFormat::Delimited),
            "workbook" | "xlsx" => Ok(SourceFormat::Workbook),
            other => Err(ImportError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
