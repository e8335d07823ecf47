// ==========================================
// 成衣供应链物料测算 - 报表层
// ==========================================
// 职责: 文本 / JSON / CSV 三种输出
// ==========================================

pub mod csv_export;
pub mod error;
pub mod json;
pub mod text;

pub use csv_export::{export_lot_schedule, write_lot_schedule};
pub use error::{ReportError, ReportResult};
pub use json::to_pretty_json;
pub use text::TextRenderer;
