// ==========================================
// 成衣供应链物料测算 - 文本报表
// ==========================================
// 精度: 重量保留 2 位小数，单片裁片重量保留 4 位小数
// 标签走 i18n，语言由渲染器显式指定（不依赖全局语言）
// ==========================================

use crate::domain::cpu_log::CpuUsageSummary;
use crate::domain::report::{LotStage, SupplyChainReport};
use crate::domain::traceability::TracedLot;
use crate::i18n::{current_locale, t_in};

/// 文本渲染器
pub struct TextRenderer {
    locale: String,
}

impl TextRenderer {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// 渲染供应链测算报表（13 项，逐行）
    pub fn render_supply_chain(&self, report: &SupplyChainReport) -> String {
        let parts = report
            .cut_parts
            .quantities
            .iter()
            .map(|(kind, qty)| format!("{}={}", kind, qty))
            .collect::<Vec<_>>()
            .join(", ");

        let lines = [
            self.line("report.order_size", &[("order_size", report.order_size.to_string().as_str())]),
            self.stage_line("report.cotton_bales", &report.cotton_bales, report.cotton_bales.total_weight_lbs),
            self.line("report.cotton_lots", &[("lots", format_lots(&report.cotton_bales).as_str())]),
            self.stage_line("report.yarn_cones", &report.yarn_cones, report.yarn_cones.unit_weight_lbs),
            self.line("report.yarn_lots", &[("lots", format_lots(&report.yarn_cones).as_str())]),
            self.stage_line(
                "report.unfinished_fabric",
                &report.unfinished_fabric,
                report.unfinished_fabric.unit_weight_lbs,
            ),
            self.line("report.unfinished_lots", &[("lots", format_lots(&report.unfinished_fabric).as_str())]),
            self.stage_line(
                "report.finished_fabric",
                &report.finished_fabric,
                report.finished_fabric.unit_weight_lbs,
            ),
            self.line("report.finished_lots", &[("lots", format_lots(&report.finished_fabric).as_str())]),
            self.line(
                "report.cut_parts",
                &[
                    ("parts", parts.as_str()),
                    ("weight", format!("{:.4}", report.cut_parts.weight_per_part_lbs).as_str()),
                ],
            ),
            self.line("report.buttons", &[("needed", report.buttons.needed.to_string().as_str())]),
            self.line("report.shirts", &[("count", report.shirts_produced.to_string().as_str())]),
            self.line(
                "report.cartons",
                &[
                    ("needed", report.cartons.needed.to_string().as_str()),
                    ("weight", format!("{:.2}", report.cartons.unit_weight_lbs).as_str()),
                ],
            ),
            self.line(
                "report.containers",
                &[
                    ("needed", report.containers.needed.to_string().as_str()),
                    ("weight", format!("{:.2}", report.containers.unit_weight_lbs).as_str()),
                ],
            ),
        ];

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// 渲染 CPU 使用汇总
    pub fn render_cpu_usage(&self, summary: &CpuUsageSummary) -> String {
        let excluding = match summary.avg_cpu_excluding_zeros {
            Some(pct) => self.line(
                "cpu.avg_excluding_zeros",
                &[("pct", format!("{:.2}", pct).as_str())],
            ),
            None => self.line("cpu.avg_excluding_zeros_none", &[]),
        };

        let lines = [
            self.line("cpu.total_time", &[("secs", summary.total_time_secs.to_string().as_str())]),
            self.line(
                "cpu.avg_including_zeros",
                &[("pct", format!("{:.2}", summary.avg_cpu_including_zeros).as_str())],
            ),
            excluding,
        ];

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// 渲染批次追溯结果（每批一行，偏差保留 2 位小数）
    pub fn render_traced_lots<'a>(&self, lots: impl IntoIterator<Item = &'a TracedLot>) -> String {
        let mut out = String::new();
        for lot in lots {
            let kind = t_in(&self.locale, lot.asset_kind.i18n_key(), &[]);
            let quantity = lot.quantity.to_string();
            let declared = format!("{:.2}", lot.total_weight_lbs);
            let content = format!("{:.2}", lot.content_weight_lbs);
            let diff = format!("{:.2}", lot.weight_difference_pct);
            let mut args = vec![
                ("id", lot.id.as_str()),
                ("kind", kind.as_str()),
                ("quantity", quantity.as_str()),
                ("declared", declared.as_str()),
                ("content", content.as_str()),
                ("diff", diff.as_str()),
            ];

            let key = if lot.flag.is_flagged {
                args.push(("reason", lot.flag.reason.as_str()));
                "trace.lot_flagged"
            } else {
                "trace.lot"
            };
            out.push_str(&self.line(key, &args));
            out.push('\n');
        }
        out
    }

    fn line(&self, key: &str, args: &[(&str, &str)]) -> String {
        t_in(&self.locale, key, args)
    }

    fn stage_line(&self, key: &str, stage: &LotStage, weight_lbs: f64) -> String {
        self.line(
            key,
            &[
                ("needed", stage.units_needed.to_string().as_str()),
                ("weight", format!("{:.2}", weight_lbs).as_str()),
            ],
        )
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(current_locale())
    }
}

/// 批次格式: "4, 4, 3 → 1920.00, 1920.00, 1440.00"
fn format_lots(stage: &LotStage) -> String {
    let units = stage
        .lots
        .iter()
        .map(|lot| lot.units.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let weights = stage
        .lots
        .iter()
        .map(|lot| format!("{:.2}", lot.weight_lbs))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{} → {}", units, weights)
}
