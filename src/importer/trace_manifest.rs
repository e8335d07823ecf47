// ==========================================
// 成衣供应链物料测算 - 追溯记录导入
// ==========================================
// 格式: JSON 数组，每个元素一条记录，按 "op" 区分:
//   register_asset / create_lot / set_flag
// 顺序即回放顺序（下游物料引用的批次必须先出现）
// ==========================================

use crate::domain::traceability::TraceEvent;
use crate::importer::error::{ImportError, ImportResult};
use std::fs;
use std::path::Path;

pub struct TraceManifestLoader;

impl TraceManifestLoader {
    pub fn load_file<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<Vec<TraceEvent>> {
        let path = file_path.as_ref();
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;
        let events = self.parse_str(&content).map_err(|err| match err {
            ImportError::ManifestParseError { message, .. } => ImportError::ManifestParseError {
                source_name: path.display().to_string(),
                message,
            },
            other => other,
        })?;

        tracing::debug!(path = %path.display(), events = events.len(), "trace manifest loaded");
        Ok(events)
    }

    pub fn parse_str(&self, content: &str) -> ImportResult<Vec<TraceEvent>> {
        serde_json::from_str(content).map_err(|e| ImportError::ManifestParseError {
            source_name: "<input>".to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::traceability::AssetKind;

    #[test]
    fn test_parse_events() {
        let events = TraceManifestLoader
            .parse_str(
                r#"[
                    {"op": "register_asset", "id": "cottonbale_1", "kind": "cotton_bale",
                     "total_weight_lbs": 480.0, "approved": true},
                    {"op": "create_lot", "id": "lot_1", "asset_kind": "cotton_bale",
                     "content": ["cottonbale_1"], "total_weight_lbs": 481.0},
                    {"op": "set_flag", "id": "lot_1",
                     "flag": {"is_flagged": true, "reason": "torn wrap"}}
                ]"#,
            )
            .unwrap();

        assert_eq!(events.len(), 3);
        match &events[0] {
            TraceEvent::RegisterAsset(record) => {
                assert_eq!(record.kind, AssetKind::CottonBale);
                assert!(record.source_lots.is_empty());
                assert!(!record.flag.is_flagged);
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert!(matches!(&events[2], TraceEvent::SetFlag { id, .. } if id == "lot_1"));
    }

    #[test]
    fn test_unknown_op_is_rejected() {
        let err = TraceManifestLoader
            .parse_str(r#"[{"op": "transfer_owner", "id": "lot_1"}]"#)
            .unwrap_err();
        assert!(matches!(err, ImportError::ManifestParseError { .. }));
    }
}
