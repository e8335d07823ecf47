// ==========================================
// 成衣供应链物料测算 - 批次计划 CSV 导出
// ==========================================
// 列: order_size, stage, lot_no, units, unit_weight_lbs, weight_lbs
// 每个订单 × 四个分批阶段 × 各批次 一行
// ==========================================

use crate::domain::report::SupplyChainReport;
use crate::report::error::ReportResult;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// CSV 行
#[derive(Debug, Serialize)]
struct LotScheduleRow {
    order_size: u64,
    stage: String,
    lot_no: usize,
    units: u64,
    unit_weight_lbs: String,
    weight_lbs: String,
}

/// 写出批次计划
///
/// # 返回
/// 写出的数据行数（不含表头）
pub fn write_lot_schedule<W: Write>(
    reports: &[SupplyChainReport],
    writer: W,
) -> ReportResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut rows = 0;

    for report in reports {
        for stage in report.lot_stages() {
            for lot in &stage.lots {
                csv_writer.serialize(LotScheduleRow {
                    order_size: report.order_size,
                    stage: stage.stage.to_string(),
                    lot_no: lot.seq_no,
                    units: lot.units,
                    unit_weight_lbs: format!("{:.2}", stage.unit_weight_lbs),
                    weight_lbs: format!("{:.2}", lot.weight_lbs),
                })?;
                rows += 1;
            }
        }
    }

    csv_writer.flush()?;
    Ok(rows)
}

/// 导出批次计划到文件
pub fn export_lot_schedule<P: AsRef<Path>>(
    reports: &[SupplyChainReport],
    path: P,
) -> ReportResult<usize> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let rows = write_lot_schedule(reports, file)?;

    tracing::info!(path = %path.display(), rows, "lot schedule exported");
    Ok(rows)
}
