use serde::{Deserialize, Serialize};

use super::sales::ItemName;

/// 库存状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    Ok,
    NeedsReorder,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Ok => "ok",
            StockStatus::NeedsReorder => "needs_reorder",
        }
    }
}

/// 库存状态判定策略
///
/// - `Simple`: 始终为 `Ok`
/// - `ReorderAware`: 用估算库存与再订货点比较
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatusMode {
    #[default]
    Simple,
    ReorderAware,
}

/// 单个商品的汇总指标
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemMetrics {
    pub item: ItemName,
    pub total_sold: f64,
    pub daily_average: f64,
    pub weekly_average: f64, // 恒等于 daily_average * 7
    pub reorder_point: f64,
    pub stock_status: StockStatus,
}

/// 库存消耗曲线上的一个点
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StockLevel {
    pub day: u32,
    pub level: f64,
}
