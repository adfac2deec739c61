use crate::error::{MetricsError, MetricsResult};
use crate::models::{ItemMetrics, StockLevel, StockStatus, StockStatusMode};
use crate::store::SalesLog;

/// 周均值 = 日均值 * 7
pub const DAYS_PER_WEEK: f64 = 7.0;

/// 估算库存覆盖天数
///
/// 没有真实库存数据, 估算库存 = 日均销量 * 3. 这是占位启发式, 保持原样.
pub const ESTIMATED_STOCK_DAYS: f64 = 3.0;

/// 计算参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculatorConfig {
    /// 提前期 (天), 必须 >= 1
    pub lead_time_days: u32,
    pub status_mode: StockStatusMode,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            lead_time_days: 2,
            status_mode: StockStatusMode::Simple,
        }
    }
}

/// 指标计算器: 无状态, 每次对传入的日志快照全量重算
#[derive(Debug, Clone, Default)]
pub struct MetricsCalculator {
    config: CalculatorConfig,
}

impl MetricsCalculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// 按商品列顺序计算每个商品的指标
    ///
    /// 空日志返回 `DivisionUndefined`, 调用方应先判断是否有数据.
    pub fn compute_metrics(&self, log: &SalesLog) -> MetricsResult<Vec<ItemMetrics>> {
        if self.config.lead_time_days == 0 {
            return Err(MetricsError::invalid_parameter(
                "lead_time_days must be a positive integer",
            ));
        }
        if log.is_empty() {
            return Err(MetricsError::DivisionUndefined);
        }

        let record_count = log.len() as f64;
        let lead_time = f64::from(self.config.lead_time_days);

        let metrics = log
            .tracked_items()
            .iter()
            .map(|item| {
                let total_sold: f64 = log.records().iter().map(|r| r.quantity(item)).sum();
                let daily_average = total_sold / record_count;
                let reorder_point = lead_time * daily_average;

                ItemMetrics {
                    item: item.clone(),
                    total_sold,
                    daily_average,
                    weekly_average: daily_average * DAYS_PER_WEEK,
                    reorder_point,
                    stock_status: self.stock_status(total_sold, record_count, reorder_point),
                }
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            "Computed metrics for {} items over {} records",
            metrics.len(),
            log.len()
        );
        Ok(metrics)
    }

    fn stock_status(&self, total_sold: f64, record_count: f64, reorder_point: f64) -> StockStatus {
        match self.config.status_mode {
            StockStatusMode::Simple => StockStatus::Ok,
            StockStatusMode::ReorderAware => {
                if estimated_current_stock(total_sold, record_count) < reorder_point {
                    StockStatus::NeedsReorder
                } else {
                    StockStatus::Ok
                }
            }
        }
    }
}

/// 估算当前库存 (占位): (total_sold / record_count) * ESTIMATED_STOCK_DAYS
pub fn estimated_current_stock(total_sold: f64, record_count: f64) -> f64 {
    (total_sold / record_count) * ESTIMATED_STOCK_DAYS
}

/// 经济订货量 EOQ = sqrt(2 * D * S / H)
pub fn compute_eoq(weekly_demand: f64, ordering_cost: f64, holding_cost: f64) -> MetricsResult<f64> {
    if !(weekly_demand.is_finite() && ordering_cost.is_finite() && holding_cost.is_finite()) {
        return Err(MetricsError::invalid_parameter("EOQ inputs must be finite numbers"));
    }
    if holding_cost <= 0.0 {
        return Err(MetricsError::invalid_parameter(format!(
            "holding_cost must be positive, got {}",
            holding_cost
        )));
    }
    if ordering_cost < 0.0 {
        return Err(MetricsError::invalid_parameter(format!(
            "ordering_cost must be non-negative, got {}",
            ordering_cost
        )));
    }
    if weekly_demand < 0.0 {
        return Err(MetricsError::invalid_parameter(format!(
            "weekly_demand must be non-negative, got {}",
            weekly_demand
        )));
    }

    Ok(((2.0 * weekly_demand * ordering_cost) / holding_cost).sqrt())
}

/// 库存消耗曲线: day 取 0..horizon_days, level = max(0, eoq - daily_average * day)
///
/// 返回的迭代器可 clone 后重新遍历.
pub fn project_stock_levels(
    eoq: f64,
    daily_average: f64,
    horizon_days: u32,
) -> impl ExactSizeIterator<Item = StockLevel> + Clone {
    (0..horizon_days).map(move |day| StockLevel {
        day,
        level: (eoq - daily_average * f64::from(day)).max(0.0),
    })
}

/// 按 total_sold 降序排列, 相同值保持商品列顺序 (稳定排序)
pub fn rank_by_total_sold(metrics: &[ItemMetrics]) -> Vec<&ItemMetrics> {
    let mut ranked: Vec<&ItemMetrics> = metrics.iter().collect();
    ranked.sort_by(|a, b| b.total_sold.total_cmp(&a.total_sold));
    ranked
}

/// 销量最高的商品
pub fn top_item(metrics: &[ItemMetrics]) -> Option<&ItemMetrics> {
    rank_by_total_sold(metrics).into_iter().next()
}
