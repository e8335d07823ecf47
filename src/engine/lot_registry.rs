// ==========================================
// 成衣供应链物料测算 - 批次追溯登记表
// ==========================================
// 内存登记表: 物料登记 → 组建批次 → 下游物料引用上游批次
// 校验顺序:
//  批次: 前缀 → 新 ID → 标记 → 内容未标记 → 批内不重复
//        → 内容非空且类型一致 → 不跨批次 → 全部已审批
//  物料: 前缀 → 新 ID → 标记 → 来源批次不重复 → 来源批次类型
// 任一校验失败时登记表不变
// ==========================================

use crate::domain::traceability::{
    percentage_difference, Asset, AssetKind, AssetRecord, Flag, LotRequest, TraceEvent,
    TracedLot, LOT_ID_PREFIX,
};
use crate::engine::error::{TraceError, TraceResult};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::instrument;

/// 批次追溯登记表
#[derive(Debug, Default, Clone)]
pub struct LotRegistry {
    assets: BTreeMap<String, Asset>,
    lots: BTreeMap<String, TracedLot>,
    // 物料 ID → 所在批次 ID
    lot_of_asset: HashMap<String, String>,
}

impl LotRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按顺序回放追溯记录，遇到第一条失败即停止
    pub fn replay(events: &[TraceEvent]) -> TraceResult<Self> {
        let mut registry = Self::new();
        for (index, event) in events.iter().enumerate() {
            registry
                .apply(event.clone())
                .map_err(|source| TraceError::AtEvent {
                    index,
                    source: Box::new(source),
                })?;
        }
        tracing::info!(
            assets = registry.assets.len(),
            lots = registry.lots.len(),
            "trace events replayed"
        );
        Ok(registry)
    }

    pub fn apply(&mut self, event: TraceEvent) -> TraceResult<()> {
        match event {
            TraceEvent::RegisterAsset(record) => self.register_asset(record).map(|_| ()),
            TraceEvent::CreateLot(request) => self.create_lot(request).map(|_| ()),
            TraceEvent::SetFlag { id, flag } => self.set_flag(&id, flag),
        }
    }

    // ==========================================
    // 物料登记
    // ==========================================

    #[instrument(skip_all, fields(asset_id = %record.id))]
    pub fn register_asset(&mut self, record: AssetRecord) -> TraceResult<&Asset> {
        check_prefix(&record.id, record.kind.id_prefix())?;
        self.ensure_new(&record.id)?;
        check_flag(&record.id, &record.flag)?;

        let (content_weight, weight_difference) = if record.source_lots.is_empty() {
            (None, None)
        } else {
            let upstream = record
                .kind
                .upstream()
                .ok_or_else(|| TraceError::NoUpstream(record.kind.to_string()))?;
            check_unique(&record.source_lots)?;

            let mut content_weight = 0.0;
            for lot_id in &record.source_lots {
                let lot = self.lot_or_err(lot_id)?;
                if lot.asset_kind != upstream {
                    return Err(TraceError::WrongLotKind {
                        lot_id: lot_id.clone(),
                        expected: upstream.to_string(),
                        actual: lot.asset_kind.to_string(),
                    });
                }
                content_weight += lot.total_weight_lbs;
            }
            (
                Some(content_weight),
                Some(percentage_difference(content_weight, record.total_weight_lbs)),
            )
        };

        let asset = Asset {
            id: record.id.clone(),
            kind: record.kind,
            total_weight_lbs: record.total_weight_lbs,
            approved: record.approved,
            flag: record.flag,
            source_lots: record.source_lots,
            content_weight_lbs: content_weight,
            weight_difference_pct: weight_difference,
        };
        tracing::debug!(kind = %asset.kind, weight = asset.total_weight_lbs, "asset registered");

        Ok(&*self.assets.entry(record.id).or_insert(asset))
    }

    // ==========================================
    // 组建批次
    // ==========================================

    #[instrument(skip_all, fields(lot_id = %request.id))]
    pub fn create_lot(&mut self, request: LotRequest) -> TraceResult<&TracedLot> {
        check_prefix(&request.id, LOT_ID_PREFIX)?;
        self.ensure_new(&request.id)?;
        check_flag(&request.id, &request.flag)?;

        for asset_id in &request.content {
            if self.asset_or_err(asset_id)?.flag.is_flagged {
                return Err(TraceError::AssetFlagged(asset_id.clone()));
            }
        }
        check_unique(&request.content)?;

        if request.content.is_empty() {
            return Err(TraceError::EmptyContent(request.id));
        }
        for asset_id in &request.content {
            check_prefix(asset_id, request.asset_kind.id_prefix())?;
        }

        for asset_id in &request.content {
            if let Some(existing_lot) = self.lot_of_asset.get(asset_id) {
                return Err(TraceError::AssetAlreadyInLot {
                    asset_id: asset_id.clone(),
                    lot_id: request.id.clone(),
                    existing_lot: existing_lot.clone(),
                });
            }
        }

        let mut content_weight = 0.0;
        for asset_id in &request.content {
            let asset = self.asset_or_err(asset_id)?;
            if !asset.approved {
                return Err(TraceError::AssetNotApproved(asset_id.clone()));
            }
            content_weight += asset.total_weight_lbs;
        }

        let lot = TracedLot {
            id: request.id.clone(),
            asset_kind: request.asset_kind,
            quantity: request.content.len(),
            content: request.content,
            total_weight_lbs: request.total_weight_lbs,
            content_weight_lbs: content_weight,
            weight_difference_pct: percentage_difference(content_weight, request.total_weight_lbs),
            all_assets_approved: true,
            flag: request.flag,
        };

        for asset_id in &lot.content {
            self.lot_of_asset.insert(asset_id.clone(), lot.id.clone());
        }
        tracing::info!(
            kind = %lot.asset_kind,
            quantity = lot.quantity,
            weight_difference_pct = lot.weight_difference_pct,
            "lot created"
        );

        Ok(&*self.lots.entry(request.id).or_insert(lot))
    }

    // ==========================================
    // 标记
    // ==========================================

    /// 对物料或批次设置 / 清除标记
    pub fn set_flag(&mut self, id: &str, flag: Flag) -> TraceResult<()> {
        check_flag(id, &flag)?;
        if let Some(asset) = self.assets.get_mut(id) {
            asset.flag = flag;
        } else if let Some(lot) = self.lots.get_mut(id) {
            lot.flag = flag;
        } else {
            return Err(TraceError::NotFound(id.to_string()));
        }
        tracing::debug!(id, "flag updated");
        Ok(())
    }

    // ==========================================
    // 查询
    // ==========================================

    pub fn asset(&self, id: &str) -> Option<&Asset> {
        self.assets.get(id)
    }

    pub fn lot(&self, id: &str) -> Option<&TracedLot> {
        self.lots.get(id)
    }

    /// 物料所在批次
    pub fn lot_of(&self, asset_id: &str) -> Option<&str> {
        self.lot_of_asset.get(asset_id).map(String::as_str)
    }

    /// 全部批次（按 ID 排序）
    pub fn lots(&self) -> impl Iterator<Item = &TracedLot> {
        self.lots.values()
    }

    /// 装某类物料的批次数
    pub fn lot_count_of(&self, kind: AssetKind) -> usize {
        self.lots.values().filter(|lot| lot.asset_kind == kind).count()
    }

    fn ensure_new(&self, id: &str) -> TraceResult<()> {
        if self.assets.contains_key(id) || self.lots.contains_key(id) {
            return Err(TraceError::AlreadyExists(id.to_string()));
        }
        Ok(())
    }

    fn asset_or_err(&self, id: &str) -> TraceResult<&Asset> {
        self.assets
            .get(id)
            .ok_or_else(|| TraceError::NotFound(id.to_string()))
    }

    fn lot_or_err(&self, id: &str) -> TraceResult<&TracedLot> {
        self.lots
            .get(id)
            .ok_or_else(|| TraceError::NotFound(id.to_string()))
    }
}

fn check_prefix(id: &str, prefix: &str) -> TraceResult<()> {
    if !id.starts_with(prefix) {
        return Err(TraceError::IdPrefix {
            id: id.to_string(),
            prefix: prefix.to_string(),
        });
    }
    Ok(())
}

fn check_flag(id: &str, flag: &Flag) -> TraceResult<()> {
    if !flag.is_consistent() {
        return Err(TraceError::InvalidFlag { id: id.to_string() });
    }
    Ok(())
}

fn check_unique(ids: &[String]) -> TraceResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id.as_str()) {
            return Err(TraceError::DuplicateInContent(id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bale(id: &str, weight: f64) -> AssetRecord {
        AssetRecord {
            id: id.to_string(),
            kind: AssetKind::CottonBale,
            total_weight_lbs: weight,
            approved: true,
            flag: Flag::default(),
            source_lots: Vec::new(),
        }
    }

    fn lot(id: &str, content: &[&str], weight: f64) -> LotRequest {
        LotRequest {
            id: id.to_string(),
            asset_kind: AssetKind::CottonBale,
            content: content.iter().map(|s| s.to_string()).collect(),
            total_weight_lbs: weight,
            flag: Flag::default(),
        }
    }

    #[test]
    fn test_lot_content_weight() {
        let mut registry = LotRegistry::new();
        registry.register_asset(bale("cottonbale_1", 480.0)).unwrap();
        registry.register_asset(bale("cottonbale_2", 470.0)).unwrap();

        let created = registry
            .create_lot(lot("lot_1", &["cottonbale_1", "cottonbale_2"], 969.0))
            .unwrap();
        assert_eq!(created.quantity, 2);
        assert_eq!(created.content_weight_lbs, 950.0);
        assert!((created.weight_difference_pct - 2.0).abs() < 1e-9);
        assert!(created.all_assets_approved);
        assert_eq!(registry.lot_of("cottonbale_2"), Some("lot_1"));
    }

    #[test]
    fn test_failed_lot_leaves_registry_unchanged() {
        let mut registry = LotRegistry::new();
        registry.register_asset(bale("cottonbale_1", 480.0)).unwrap();
        let mut pending = bale("cottonbale_2", 480.0);
        pending.approved = false;
        registry.register_asset(pending).unwrap();

        let err = registry
            .create_lot(lot("lot_1", &["cottonbale_1", "cottonbale_2"], 960.0))
            .unwrap_err();
        assert_eq!(err, TraceError::AssetNotApproved("cottonbale_2".to_string()));
        assert!(registry.lot("lot_1").is_none());
        assert_eq!(registry.lot_of("cottonbale_1"), None);
    }

    #[test]
    fn test_check_unique() {
        let ids = vec!["a".to_string(), "b".to_string(), "a".to_string()];
        assert_eq!(
            check_unique(&ids),
            Err(TraceError::DuplicateInContent("a".to_string()))
        );
        assert!(check_unique(&ids[..2]).is_ok());
    }
}
