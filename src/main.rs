// ==========================================
// 成衣供应链物料测算 - 命令行入口
// ==========================================
// 子命令:
//   calc [SIZES...]   供应链物料测算（默认 10000 15000 20000）
//   cpu-usage FILE    CPU 日志汇总
//   trace FILE        回放批次追溯记录并输出批次重量偏差
// ==========================================

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use garment_supply_chain::config;
use garment_supply_chain::domain::OrderSize;
use garment_supply_chain::engine::{
    CpuUsageAnalyzer, LotRegistry, SupplyChainCalculator, DEFAULT_ORDER_SIZES,
};
use garment_supply_chain::i18n;
use garment_supply_chain::importer::{CpuLogParser, TraceManifestLoader};
use garment_supply_chain::logging;
use garment_supply_chain::report::{export_lot_schedule, to_pretty_json, TextRenderer};
use std::path::PathBuf;

/// 成衣供应链物料测算
#[derive(Parser)]
#[command(name = "garment-supply-chain")]
#[command(about = "Garment supply chain quantity calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// 报表语言 (zh-CN / en)
    #[arg(long, global = true, env = "GARMENT_SC_LOCALE", default_value = i18n::DEFAULT_LOCALE)]
    locale: String,

    /// 以 JSON 格式输出日志
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 按订单量测算全链路物料需求
    Calc {
        /// 订单量（件），可多个
        #[arg(name = "SIZES")]
        sizes: Vec<OrderSize>,

        /// 得率配置文件 (JSON)
        #[arg(long)]
        config: Option<PathBuf>,

        /// 以 JSON 输出报表
        #[arg(long)]
        json: bool,

        /// 导出批次计划 CSV
        #[arg(long)]
        lots_csv: Option<PathBuf>,
    },

    /// 汇总 pidstat CPU 日志
    CpuUsage {
        /// 日志文件路径
        #[arg(name = "FILE")]
        file: PathBuf,

        /// 以 JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 回放批次追溯记录 (JSON)
    Trace {
        /// 追溯记录文件路径
        #[arg(name = "FILE")]
        file: PathBuf,

        /// 以 JSON 输出
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_json);

    if !i18n::is_supported(&cli.locale) {
        bail!(
            "unsupported locale: {} (expected one of {:?})",
            cli.locale,
            i18n::SUPPORTED_LOCALES
        );
    }
    i18n::set_locale(&cli.locale);

    tracing::debug!(
        app = garment_supply_chain::APP_NAME,
        version = garment_supply_chain::VERSION,
        "starting"
    );

    let renderer = TextRenderer::new(cli.locale.clone());

    match cli.command {
        Commands::Calc {
            sizes,
            config: config_path,
            json,
            lots_csv,
        } => {
            let (profile, origin) = config::resolve(config_path.as_deref())
                .context("failed to load yield profile")?;
            tracing::info!(%origin, "yield profile resolved");

            let calculator =
                SupplyChainCalculator::new(profile).context("invalid yield profile")?;

            let orders = if sizes.is_empty() {
                DEFAULT_ORDER_SIZES
                    .iter()
                    .map(|&size| OrderSize::new(size as i64))
                    .collect::<Result<Vec<_>, _>>()?
            } else {
                sizes
            };

            let reports = calculator.calculate_many(&orders);

            if json {
                println!("{}", to_pretty_json(&reports)?);
            } else {
                for report in &reports {
                    println!();
                    print!("{}", renderer.render_supply_chain(report));
                }
            }

            if let Some(path) = lots_csv {
                export_lot_schedule(&reports, &path)
                    .with_context(|| format!("failed to export lots to {}", path.display()))?;
            }
        }
        Commands::CpuUsage { file, json } => {
            let samples = CpuLogParser
                .parse_file(&file)
                .with_context(|| format!("failed to parse {}", file.display()))?;
            let summary = CpuUsageAnalyzer::new().summarize(&samples)?;

            if json {
                println!("{}", to_pretty_json(&summary)?);
            } else {
                print!("{}", renderer.render_cpu_usage(&summary));
            }
        }
        Commands::Trace { file, json } => {
            let events = TraceManifestLoader
                .load_file(&file)
                .with_context(|| format!("failed to load {}", file.display()))?;
            let registry = LotRegistry::replay(&events).context("trace replay rejected")?;

            if json {
                let lots: Vec<_> = registry.lots().collect();
                println!("{}", to_pretty_json(&lots)?);
            } else {
                print!("{}", renderer.render_traced_lots(registry.lots()));
            }
        }
    }

    Ok(())
}
