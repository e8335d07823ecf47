// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的引擎构造、临时文件、日志样本生成
// ==========================================

#![allow(dead_code)]

use garment_supply_chain::domain::{OrderSize, SupplyChainReport};
use garment_supply_chain::engine::SupplyChainCalculator;
use garment_supply_chain::logging;
use std::io::Write;
use tempfile::NamedTempFile;

/// pidstat 日志表头（3 行）
pub const PIDSTAT_HEADER: &str = "Linux 5.15.0-91-generic (peer0.org1) \t01/15/2024 \t_x86_64_\t(8 CPU)\n\
\n\
09:59:59 AM   UID       PID    %usr %system  %guest   %wait    %CPU   CPU  Command\n";

/// 使用参考参数计算单个订单
pub fn calculate(order_size: i64) -> SupplyChainReport {
    logging::init_test();
    SupplyChainCalculator::default()
        .calculate(OrderSize::new(order_size).expect("order size must be positive"))
}

/// 写入临时文件
pub fn write_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    write!(temp_file, "{}", content).expect("Failed to write temp file");
    temp_file
}

/// 生成一行 pidstat 采样
///
/// time 形如 "10:15:02 AM"
pub fn pidstat_row(time: &str, cpu_pct: f64) -> String {
    format!(
        "{}  1000      4242    {:.2}    0.00    0.00    0.00  {:>6.2}     3  peer\n",
        time, cpu_pct, cpu_pct
    )
}

/// 生成完整的 pidstat 日志
pub fn pidstat_log(rows: &[(&str, f64)]) -> String {
    let mut content = PIDSTAT_HEADER.to_string();
    for (time, cpu) in rows {
        content.push_str(&pidstat_row(time, *cpu));
    }
    content
}

/// 浮点近似相等
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}
