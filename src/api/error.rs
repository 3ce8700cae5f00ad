// ==========================================
// 装箱预测系统 - API层错误类型
// ==========================================
// 职责: 汇总各层错误,转换为面向用户的提示文案
// 说明: 所有错误均作为显式结果返回,由调用方渲染
// ==========================================

use crate::config::ConfigError;
use crate::engine::ForecastError;
use crate::i18n;
use crate::importer::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("导入失败: {0}")]
    Import(#[from] ImportError),

    #[error("预测失败: {0}")]
    Forecast(#[from] ForecastError),

    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// 是否为引导类错误（提示用户操作,而非系统故障）
    pub fn is_guidance(&self) -> bool {
        matches!(
            self,
            ApiError::Import(ImportError::UnsupportedFormat(_))
                | ApiError::Forecast(ForecastError::EmptyInput)
                | ApiError::Forecast(ForecastError::InvalidQuantity { .. })
        )
    }

    /// 面向用户的提示文案（默认语言 ja）
    pub fn user_message(&self) -> String {
        self.user_message_in(i18n::DEFAULT_LOCALE)
    }

    /// 面向用户的提示文案（指定语言）
    pub fn user_message_in(&self, locale: &str) -> String {
        match self {
            ApiError::Import(ImportError::UnsupportedFormat(format)) => i18n::t_in_with_args(
                "error.unsupported_format",
                locale,
                &[("format", format.as_str())],
            ),
            ApiError::Import(ImportError::WorkbookParse(_)) => {
                i18n::t_in("error.workbook_read", locale)
            }
            ApiError::Import(err @ (ImportError::FileRead(_) | ImportError::CsvParse(_))) => {
                let detail = err.to_string();
                i18n::t_in_with_args("error.file_read", locale, &[("detail", detail.as_str())])
            }
            ApiError::Forecast(ForecastError::EmptyInput) => {
                i18n::t_in("error.empty_input", locale)
            }
            ApiError::Forecast(ForecastError::InvalidQuantity { field, value }) => {
                i18n::t_in_with_args(
                    "error.invalid_quantity",
                    locale,
                    &[
                        ("field", quantity_label(field)),
                        ("value", value.to_string().as_str()),
                    ],
                )
            }
            ApiError::Config(err) => {
                let detail = err.to_string();
                i18n::t_in_with_args("error.config", locale, &[("detail", detail.as_str())])
            }
        }
    }
}

fn quantity_label(field: &str) -> &str {
    match field {
        "mod_quantity_t" => "MOD",
        "vca_quantity_t" => "VCA",
        other => other,
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
