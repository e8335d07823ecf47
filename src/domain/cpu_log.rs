// ==========================================
// 成衣供应链物料测算 - CPU 采样日志
// ==========================================
// 来源: pidstat 风格日志（3 行表头 + 11 列定宽数据）
// 列: Time Period UID PID %usr %system %guest %wait %CPU CPU Command
// ==========================================

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// 单条 CPU 采样
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuSample {
    pub time: NaiveTime,   // 采样时刻（已合并 AM/PM）
    pub uid: u32,
    pub pid: u32,
    pub usr_pct: f64,
    pub system_pct: f64,
    pub guest_pct: f64,
    pub wait_pct: f64,
    pub cpu_pct: f64,      // 汇总 %CPU
    pub cpu_core: u32,     // 所在核
    pub command: String,
}

/// CPU 使用汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuUsageSummary {
    pub sample_count: usize,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,

    /// 首末采样间隔 + 1 秒（首末两点都计入）
    pub total_time_secs: f64,

    pub avg_cpu_including_zeros: f64,

    /// 仅统计 %CPU > 0 的采样；全部为 0 时为 None
    pub avg_cpu_excluding_zeros: Option<f64>,
}
