// ==========================================
// 成衣供应链物料测算 - 批次追溯领域模型
// ==========================================
// 物料实体按 ID 前缀区分类型 (cottonbale_ / cottonyarn_ / ...)
// 批次 (lot_) 只装同一类型的物料，每件物料最多属于一个批次
// 下游物料由上游批次加工而来，内容重量 = 来源批次申报重量之和
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// 批次 ID 前缀
pub const LOT_ID_PREFIX: &str = "lot_";

/// 表示"未标记"的占位原因
pub const NO_FLAG_REASON: &str = "N/A";

// ==========================================
// 物料类型 (Asset Kind)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    CottonBale,       // 棉包
    CottonYarn,       // 纱线
    UnfinishedFabric, // 坯布
    FinishedFabric,   // 成品布
    CutPart,          // 裁片
    Button,           // 纽扣
    AssembledGarment, // 成衣
}

impl AssetKind {
    /// 物料 ID 必须带的前缀
    pub fn id_prefix(&self) -> &'static str {
        match self {
            AssetKind::CottonBale => "cottonbale_",
            AssetKind::CottonYarn => "cottonyarn_",
            AssetKind::UnfinishedFabric => "unfinishedfabric_",
            AssetKind::FinishedFabric => "finishedfabric_",
            AssetKind::CutPart => "cutpart_",
            AssetKind::Button => "button_",
            AssetKind::AssembledGarment => "assembledgarment_",
        }
    }

    /// 来源批次应装的上游物料类型
    ///
    /// 棉包 / 纽扣没有上游；成衣由裁片和纽扣直接组装，不经批次
    pub fn upstream(&self) -> Option<AssetKind> {
        match self {
            AssetKind::CottonYarn => Some(AssetKind::CottonBale),
            AssetKind::UnfinishedFabric => Some(AssetKind::CottonYarn),
            AssetKind::FinishedFabric => Some(AssetKind::UnfinishedFabric),
            AssetKind::CutPart => Some(AssetKind::FinishedFabric),
            AssetKind::CottonBale | AssetKind::Button | AssetKind::AssembledGarment => None,
        }
    }

    /// 报表标签的 i18n key
    pub fn i18n_key(&self) -> &'static str {
        match self {
            AssetKind::CottonBale => "asset.cotton_bale",
            AssetKind::CottonYarn => "asset.cotton_yarn",
            AssetKind::UnfinishedFabric => "asset.unfinished_fabric",
            AssetKind::FinishedFabric => "asset.finished_fabric",
            AssetKind::CutPart => "asset.cut_part",
            AssetKind::Button => "asset.button",
            AssetKind::AssembledGarment => "asset.assembled_garment",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id_prefix().trim_end_matches('_'))
    }
}

// ==========================================
// Flag - 异常标记
// ==========================================
// 标记时必须给出原因；未标记时原因只能为空或 "N/A"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    #[serde(default)]
    pub is_flagged: bool,
    #[serde(default)]
    pub reason: String,
}

impl Flag {
    pub fn flagged(reason: impl Into<String>) -> Self {
        Self {
            is_flagged: true,
            reason: reason.into(),
        }
    }

    fn has_reason(&self) -> bool {
        !self.reason.is_empty() && self.reason != NO_FLAG_REASON
    }

    /// 标记与原因是否一致
    pub fn is_consistent(&self) -> bool {
        self.is_flagged == self.has_reason()
    }
}

// ==========================================
// AssetRecord - 物料登记请求
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub id: String,
    pub kind: AssetKind,
    pub total_weight_lbs: f64, // 申报重量
    #[serde(default)]
    pub approved: bool,
    #[serde(default)]
    pub flag: Flag,
    #[serde(default)]
    pub source_lots: Vec<String>, // 上游批次 ID
}

// ==========================================
// Asset - 已登记物料
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub kind: AssetKind,
    pub total_weight_lbs: f64,
    pub approved: bool,
    pub flag: Flag,
    pub source_lots: Vec<String>,
    pub content_weight_lbs: Option<f64>,     // 来源批次申报重量之和
    pub weight_difference_pct: Option<f64>, // 申报重量相对内容重量的偏差
}

// ==========================================
// LotRequest - 批次组建请求
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotRequest {
    pub id: String,
    pub asset_kind: AssetKind,
    pub content: Vec<String>,
    pub total_weight_lbs: f64,
    #[serde(default)]
    pub flag: Flag,
}

// ==========================================
// TracedLot - 已组建批次
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TracedLot {
    pub id: String,
    pub asset_kind: AssetKind,
    pub content: Vec<String>,
    pub quantity: usize,
    pub total_weight_lbs: f64,   // 申报重量
    pub content_weight_lbs: f64, // 内容物料申报重量之和
    pub weight_difference_pct: f64,
    pub all_assets_approved: bool,
    pub flag: Flag,
}

// ==========================================
// TraceEvent - 追溯记录（按发生顺序回放）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TraceEvent {
    RegisterAsset(AssetRecord),
    CreateLot(LotRequest),
    SetFlag { id: String, flag: Flag },
}

/// (new - original) / original × 100；original 为 0 时返回 0
pub fn percentage_difference(original: f64, new: f64) -> f64 {
    if original == 0.0 {
        return 0.0;
    }
    (new - original) / original * 100.0
}
