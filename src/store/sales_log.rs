use crate::error::{MetricsError, MetricsResult};
use crate::models::{ItemName, SalesRecord};
use indexmap::IndexSet;
use std::sync::Arc;
use tokio::sync::RwLock;

/// 应用层持有的共享销售日志 (单写者, 读者取快照)
pub type SharedSalesLog = Arc<RwLock<SalesLog>>;

/// 销售日志: 只追加, 插入顺序即录入顺序 (不保证按日期排序)
#[derive(Debug, Clone, Default)]
pub struct SalesLog {
    items: IndexSet<ItemName>, // 保序去重, 顺序即商品列顺序
    records: Vec<SalesRecord>,
}

impl SalesLog {
    pub fn new<I, S>(tracked_items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ItemName>,
    {
        Self {
            items: tracked_items.into_iter().map(Into::into).collect(),
            records: Vec::new(),
        }
    }

    /// 包装为可注入的共享存储
    pub fn into_shared(self) -> SharedSalesLog {
        Arc::new(RwLock::new(self))
    }

    pub fn tracked_items(&self) -> &IndexSet<ItemName> {
        &self.items
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_tracked(&self, item: &str) -> bool {
        self.items.contains(item)
    }

    /// 追加一条记录, 返回追加后的记录数
    ///
    /// 整条记录先校验再写入, 任何一个商品不合法都不会留下部分数据.
    pub fn append(&mut self, record: SalesRecord) -> MetricsResult<usize> {
        for (item, &quantity) in &record.quantities {
            if !self.items.contains(item.as_str()) {
                return Err(MetricsError::UnknownItem(item.clone()));
            }
            if !quantity.is_finite() {
                return Err(MetricsError::InvalidQuantity { item: item.clone() });
            }
            if quantity < 0.0 {
                return Err(MetricsError::NegativeQuantity {
                    item: item.clone(),
                    quantity,
                });
            }
        }

        tracing::debug!(
            "Appending sales record for {} ({} items)",
            record.date,
            record.quantities.len()
        );
        self.records.push(record);
        Ok(self.records.len())
    }

    /// 跟踪一个新商品列, 已存在时返回 false
    ///
    /// 旧记录对新列的销量按 0 计.
    pub fn track_item(&mut self, name: &str) -> MetricsResult<bool> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MetricsError::InvalidItemName);
        }
        Ok(self.items.insert(name.to_string()))
    }
}
