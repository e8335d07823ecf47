// ==========================================
// 成衣供应链物料测算 - JSON 输出
// ==========================================

use crate::report::error::ReportResult;
use serde::Serialize;

/// 序列化为带缩进的 JSON
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> ReportResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
