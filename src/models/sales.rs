use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 商品名 (如 "Apel")
pub type ItemName = String;

/// 单日销售记录 (一行表单提交)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    /// 商品 -> 销量 (kg), 未出现的商品按 0 计
    #[serde(default)]
    pub quantities: IndexMap<ItemName, f64>,
}

impl SalesRecord {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            quantities: IndexMap::new(),
        }
    }

    /// 追加一个商品销量 (builder 风格)
    pub fn with_quantity(mut self, item: impl Into<ItemName>, quantity: f64) -> Self {
        self.quantities.insert(item.into(), quantity);
        self
    }

    /// 某商品的销量, 缺失时为 0.0
    pub fn quantity(&self, item: &str) -> f64 {
        self.quantities.get(item).copied().unwrap_or(0.0)
    }
}
