use crate::error::{MetricsError, MetricsResult};
use crate::models::{ItemMetrics, ItemName, StockLevel};
use crate::service::calculator::{
    compute_eoq, project_stock_levels, rank_by_total_sold, CalculatorConfig, MetricsCalculator,
};
use crate::store::SalesLog;
use serde::Serialize;

/// 柱状图的一根柱子
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    pub item: ItemName,
    pub total_sold: f64,
}

/// 分析页视图
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisView {
    /// 没有任何记录, 前端显示 "请先录入数据"
    NoData,
    Ready {
        record_count: usize,
        /// 商品列顺序
        metrics: Vec<ItemMetrics>,
        top_item: Option<ItemMetrics>,
        /// 按销量升序 (横向柱状图自下而上)
        chart: Vec<ChartBar>,
    },
}

/// EOQ 面板参数 (用户可调)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EoqParams {
    pub lead_time_days: u32,
    pub ordering_cost: f64,
    pub holding_cost: f64,
    pub horizon_days: u32,
}

/// EOQ 面板结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EoqPanel {
    pub item: ItemName,
    pub weekly_demand: f64,
    pub eoq: f64,
    pub reorder_point: f64,
    pub projection: Vec<StockLevel>,
}

/// 库存曲线默认最大天数
pub const DEFAULT_MAX_HORIZON_DAYS: u32 = 365;

/// 看板服务: 把日志快照交给计算器, 组装前端需要的视图
pub struct DashboardService {
    calculator: MetricsCalculator,
    /// 曲线天数上限, 曲线会整体收集到内存
    max_horizon_days: u32,
}

impl DashboardService {
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            calculator: MetricsCalculator::new(config),
            max_horizon_days: DEFAULT_MAX_HORIZON_DAYS,
        }
    }

    pub fn with_max_horizon_days(mut self, max_horizon_days: u32) -> Self {
        self.max_horizon_days = max_horizon_days;
        self
    }

    pub fn calculator(&self) -> &MetricsCalculator {
        &self.calculator
    }

    /// 分析页: 空日志直接返回 NoData, 不调用计算器
    pub fn analysis(&self, log: &SalesLog) -> MetricsResult<AnalysisView> {
        if log.is_empty() {
            tracing::info!("Analysis requested on empty sales log");
            return Ok(AnalysisView::NoData);
        }

        let metrics = self.calculator.compute_metrics(log)?;
        let ranked = rank_by_total_sold(&metrics);
        let top_item = ranked.first().map(|m| (*m).clone());

        // 降序稳定排序后反转, 相同销量时靠前的商品排在图的上方
        let chart = ranked
            .iter()
            .rev()
            .map(|m| ChartBar {
                item: m.item.clone(),
                total_sold: m.total_sold,
            })
            .collect();

        tracing::info!(
            "Analysis computed: {} records, {} items, top item: {}",
            log.len(),
            metrics.len(),
            top_item.as_ref().map(|m| m.item.as_str()).unwrap_or("-")
        );

        Ok(AnalysisView::Ready {
            record_count: log.len(),
            metrics,
            top_item,
            chart,
        })
    }

    /// 单个商品的 EOQ 面板
    pub fn eoq_panel(&self, log: &SalesLog, item: &str, params: EoqParams) -> MetricsResult<EoqPanel> {
        if !log.is_tracked(item) {
            return Err(MetricsError::UnknownItem(item.to_string()));
        }
        if params.horizon_days > self.max_horizon_days {
            return Err(MetricsError::invalid_parameter(format!(
                "horizon_days must be at most {}, got {}",
                self.max_horizon_days, params.horizon_days
            )));
        }

        // 面板里的提前期可单独调整
        let calculator = MetricsCalculator::new(CalculatorConfig {
            lead_time_days: params.lead_time_days,
            ..*self.calculator.config()
        });
        let metrics = calculator
            .compute_metrics(log)?
            .into_iter()
            .find(|m| m.item == item)
            .ok_or_else(|| MetricsError::UnknownItem(item.to_string()))?;

        let eoq = compute_eoq(metrics.weekly_average, params.ordering_cost, params.holding_cost)?;
        let projection = project_stock_levels(eoq, metrics.daily_average, params.horizon_days).collect();

        tracing::info!(
            "EOQ for {}: weekly_demand={:.2}, ordering_cost={}, holding_cost={}, eoq={:.2}",
            item,
            metrics.weekly_average,
            params.ordering_cost,
            params.holding_cost,
            eoq
        );

        Ok(EoqPanel {
            item: metrics.item,
            weekly_demand: metrics.weekly_average,
            eoq,
            reorder_point: metrics.reorder_point,
            projection,
        })
    }
}
