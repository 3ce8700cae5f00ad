// ==========================================
// 装箱预测 API
// ==========================================
// 职责: 画面/命令行调用的预测入口
// 流程: 判定格式 → 读取文件（异步）→ 导入 → 计算 → 报告
// ==========================================

use crate::api::error::ApiResult;
use crate::api::report::{ForecastReport, SourceInfo};
use crate::config::ForecastConfig;
use crate::domain::forecast::SalesVolumeInput;
use crate::domain::shipment::ShipmentRecord;
use crate::engine::ForecastCalculator;
use crate::i18n;
use crate::importer::{ImportOutcome, ShipmentImporter, SourceFormat};
use std::path::Path;
use tracing::{info, instrument, warn};

/// 预测API
pub struct ForecastApi {
    importer: ShipmentImporter,
    calculator: ForecastCalculator,
    locale: String,
}

impl ForecastApi {
    /// 创建新的ForecastApi实例（配置先校验）
    pub fn new(config: ForecastConfig) -> ApiResult<Self> {
        let importer = ShipmentImporter::new(config.fields.clone());
        let calculator = ForecastCalculator::new(config)?;

        Ok(Self {
            importer,
            calculator,
            locale: i18n::DEFAULT_LOCALE.to_string(),
        })
    }

    /// 指定报告语言（不支持的语言保持默认）
    pub fn with_locale(mut self, locale: &str) -> Self {
        if i18n::is_supported(locale) {
            self.locale = locale.to_string();
        } else {
            warn!(locale = %locale, "不支持的语言,使用默认语言");
        }
        self
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// 读取并导入出货计划文件
    ///
    /// # 参数
    /// - file_path: .csv / .xlsx 文件路径
    ///
    /// # 返回
    /// - Ok(ImportOutcome): 记录序列 + 导入汇总
    /// - Err(ApiError): 格式不支持 / 文件读取失败 / 解析失败
    #[instrument(skip(self, file_path), fields(file = %file_path.as_ref().display()))]
    pub async fn load_shipments<P: AsRef<Path>>(&self, file_path: P) -> ApiResult<ImportOutcome> {
        let path = file_path.as_ref();

        // 格式在读取前判定,不支持的格式不读文件
        let format = SourceFormat::from_path(path)?;
        let bytes = tokio::fs::read(path)
            .await
            .map_err(crate::importer::ImportError::from)?;

        self.load_shipments_from_bytes(&bytes, format)
    }

    /// 导入已读入内存的出货计划
    pub fn load_shipments_from_bytes(
        &self,
        bytes: &[u8],
        format: SourceFormat,
    ) -> ApiResult<ImportOutcome> {
        Ok(self.importer.ingest(bytes, format)?)
    }

    /// 执行月度预测
    ///
    /// # 返回
    /// - Ok(ForecastReport): 3 行预测报告
    /// - Err(ApiError::Forecast(EmptyInput)): 无记录,调用方应提示先上传文件
    pub fn run_forecast(
        &self,
        records: &[ShipmentRecord],
        input: SalesVolumeInput,
    ) -> ApiResult<ForecastReport> {
        let forecast = self.calculator.forecast(records, &input)?;
        Ok(ForecastReport::new(&forecast, input, &self.locale))
    }

    /// 读取文件并执行预测
    pub async fn forecast_file<P: AsRef<Path>>(
        &self,
        file_path: P,
        input: SalesVolumeInput,
    ) -> ApiResult<ForecastReport> {
        let path = file_path.as_ref();
        let outcome = self.load_shipments(path).await?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string());
        let source = SourceInfo::from_summary(file_name, &outcome.summary);

        let report = self.run_forecast(&outcome.records, input)?.with_source(source);
        info!(
            batch_id = %outcome.summary.batch_id,
            has_overflow = report.has_overflow(),
            "月度预测完成"
        );
        Ok(report)
    }
}

impl Default for ForecastApi {
    fn default() -> Self {
        Self {
            importer: ShipmentImporter::default(),
            calculator: ForecastCalculator::default(),
            locale: i18n::DEFAULT_LOCALE.to_string(),
        }
    }
}
