use std::cell::Cell;
use std::sync::OnceLock;
use std::time::Instant;

/// 打开耗时日志的环境变量
pub const PERF_ENV_VAR: &str = "GARMENT_SC_PERF";

static PERF_ENABLED: OnceLock<bool> = OnceLock::new();

thread_local! {
    static PERF_DEPTH: Cell<u32> = Cell::new(0);
}

fn is_true(v: &str) -> bool {
    matches!(
        v.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

/// 是否以 info 级别输出耗时
///
/// 开关：
/// - Debug 默认开启；Release 默认关闭
/// - `GARMENT_SC_PERF=1` 强制开启，`GARMENT_SC_PERF=0` 强制关闭
pub fn perf_enabled() -> bool {
    *PERF_ENABLED.get_or_init(|| match std::env::var(PERF_ENV_VAR) {
        Ok(v) => is_true(&v),
        Err(_) => cfg!(debug_assertions),
    })
}

/// 耗时统计 Guard：记录 elapsed_us + 嵌套深度
///
/// 使用方式：
/// ```ignore
/// let _perf = garment_supply_chain::perf::PerfGuard::new("calculate_supply_chain");
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
    depth: u32,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        let depth = PERF_DEPTH.with(|d| {
            let next = d.get().saturating_add(1);
            d.set(next);
            next
        });
        Self {
            op,
            start: Instant::now(),
            depth,
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        let elapsed_us = self.start.elapsed().as_micros() as u64;

        if perf_enabled() {
            tracing::info!(
                target: "perf",
                op = self.op,
                elapsed_us,
                depth = self.depth,
                "done"
            );
        } else {
            tracing::debug!(
                target: "perf",
                op = self.op,
                elapsed_us,
                depth = self.depth,
                "done"
            );
        }

        PERF_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}
