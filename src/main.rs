// ==========================================
// 集装箱装箱（バンニング）预测 - 命令行入口
// ==========================================
// 用法:
//   vanning-forecast wig_2025_04.xlsx --mod 2500 --vca 3000
//   vanning-forecast wig.csv --mod 2500 --output json --locale en
// ==========================================

use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use vanning_forecast::{i18n, logging, ForecastApi, ForecastConfig, SalesVolumeInput};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "vanning-forecast")]
#[command(about = "WIG 出货计划 + 月度销售见込 → 荷姿别装箱预测")]
#[command(version)]
struct Args {
    /// WIG 出货计划文件（.csv / .xlsx）
    file: PathBuf,

    /// MOD 月度销售见込（MT）
    #[arg(long = "mod", default_value_t = 0.0)]
    mod_quantity: f64,

    /// VCA 月度销售见込（MT）
    #[arg(long = "vca", default_value_t = 0.0)]
    vca_quantity: f64,

    /// 配置文件（JSON）;缺省时读取用户配置目录
    #[arg(short, long, env = "VANNING_FORECAST_CONFIG")]
    config: Option<PathBuf>,

    /// 输出格式
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,

    /// 报告语言（ja / en）
    #[arg(short, long, default_value = i18n::DEFAULT_LOCALE)]
    locale: String,

    /// JSON 格式日志
    #[arg(long)]
    json_log: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    if args.json_log {
        logging::init_json();
    } else {
        logging::init();
    }
    i18n::set_locale(&args.locale);

    tracing::info!(version = vanning_forecast::VERSION, "{}", vanning_forecast::APP_NAME);

    let config = match &args.config {
        Some(path) => ForecastConfig::load(path),
        None => ForecastConfig::load_or_default(),
    }
    .context("加载预测配置失败")?;

    let api = ForecastApi::new(config)?.with_locale(&args.locale);
    let input = SalesVolumeInput::new(args.mod_quantity, args.vca_quantity);

    let report = match api.forecast_file(&args.file, input).await {
        Ok(report) => report,
        Err(err) if err.is_guidance() => {
            tracing::warn!(error = %err, "预测未执行");
            eprintln!("{}", err.user_message_in(api.locale()));
            return Ok(ExitCode::from(2));
        }
        Err(err) => {
            tracing::error!(error = %err, "预测失败");
            eprintln!("{}", err.user_message_in(api.locale()));
            return Ok(ExitCode::FAILURE);
        }
    };

    match args.output {
        OutputFormat::Table => print!("{}", report.render_table()),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).context("报告序列化失败")?;
            println!("{}", json);
        }
    }

    Ok(ExitCode::SUCCESS)
}
