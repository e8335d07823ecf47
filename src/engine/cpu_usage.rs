// ==========================================
// 成衣供应链物料测算 - CPU 使用汇总
// ==========================================
// 总耗时 = 末次采样 - 首次采样 + 1 秒（首末两点均计入）
// 末次早于首次时视为跨越午夜，补 24 小时
// ==========================================

use crate::domain::cpu_log::{CpuSample, CpuUsageSummary};
use crate::engine::error::{EngineError, EngineResult};
use tracing::instrument;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

pub struct CpuUsageAnalyzer {
    // 无状态
}

impl CpuUsageAnalyzer {
    pub fn new() -> Self {
        Self {}
    }

    /// 汇总采样
    ///
    /// # 错误
    /// - 采样为空: EngineError::EmptySamples
    #[instrument(skip_all, fields(samples = samples.len()))]
    pub fn summarize(&self, samples: &[CpuSample]) -> EngineResult<CpuUsageSummary> {
        let (first, last) = match (samples.first(), samples.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(EngineError::EmptySamples),
        };

        let mut elapsed_secs = last.time.signed_duration_since(first.time).num_seconds();
        if elapsed_secs < 0 {
            tracing::debug!(start = %first.time, end = %last.time, "log crosses midnight");
            elapsed_secs += SECONDS_PER_DAY;
        }
        let total_time_secs = (elapsed_secs + 1) as f64;

        let total_cpu: f64 = samples.iter().map(|s| s.cpu_pct).sum();
        let avg_cpu_including_zeros = total_cpu / samples.len() as f64;

        let busy: Vec<f64> = samples
            .iter()
            .map(|s| s.cpu_pct)
            .filter(|&cpu| cpu > 0.0)
            .collect();
        let avg_cpu_excluding_zeros = if busy.is_empty() {
            None
        } else {
            Some(busy.iter().sum::<f64>() / busy.len() as f64)
        };

        tracing::info!(
            total_time_secs,
            avg_cpu_including_zeros,
            busy_samples = busy.len(),
            "cpu usage summarized"
        );

        Ok(CpuUsageSummary {
            sample_count: samples.len(),
            start_time: first.time,
            end_time: last.time,
            total_time_secs,
            avg_cpu_including_zeros,
            avg_cpu_excluding_zeros,
        })
    }
}

impl Default for CpuUsageAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
