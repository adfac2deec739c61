use crate::models::{ItemMetrics, SalesRecord, StockLevel, StockStatus};
use crate::service::{AnalysisView, ChartBar, EoqPanel};
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 页面显示保留两位小数
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 录入表单: 日期缺省为今天
#[derive(Debug, Deserialize)]
pub struct SalesEntryRequest {
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub quantities: IndexMap<String, f64>,
}

#[derive(Debug, Serialize)]
pub struct SalesEntryResponse {
    pub success: bool,
    pub message: String,
    pub record_count: usize,
}

#[derive(Debug, Serialize)]
pub struct SalesHistoryResponse {
    pub items: Vec<String>,
    pub records: Vec<SalesRecord>,
}

#[derive(Debug, Deserialize)]
pub struct TrackItemRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct ItemsResponse {
    pub items: Vec<String>,
}

/// EOQ 面板查询参数, 缺省值取自配置
#[derive(Debug, Default, Deserialize)]
pub struct EoqQuery {
    pub lead_time_days: Option<u32>,
    pub ordering_cost: Option<f64>,
    pub holding_cost: Option<f64>,
    pub horizon_days: Option<u32>,
}

/// 指标表的一行
#[derive(Debug, Serialize)]
pub struct MetricsRow {
    pub item: String,
    pub total_sold: f64,
    pub daily_average: f64,
    pub weekly_average: f64,
    pub reorder_point: f64,
    pub stock_status: StockStatus,
}

impl From<&ItemMetrics> for MetricsRow {
    fn from(m: &ItemMetrics) -> Self {
        Self {
            item: m.item.clone(),
            total_sold: round2(m.total_sold),
            daily_average: round2(m.daily_average),
            weekly_average: round2(m.weekly_average),
            reorder_point: round2(m.reorder_point),
            stock_status: m.stock_status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChartBarRow {
    pub item: String,
    pub total_sold: f64,
}

impl From<&ChartBar> for ChartBarRow {
    fn from(b: &ChartBar) -> Self {
        Self {
            item: b.item.clone(),
            total_sold: round2(b.total_sold),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisResponse {
    NoData { message: String },
    Ready {
        record_count: usize,
        metrics: Vec<MetricsRow>,
        top_item: Option<MetricsRow>,
        chart: Vec<ChartBarRow>,
    },
}

impl From<AnalysisView> for AnalysisResponse {
    fn from(view: AnalysisView) -> Self {
        match view {
            AnalysisView::NoData => AnalysisResponse::NoData {
                message: "no sales data yet, submit an entry first".to_string(),
            },
            AnalysisView::Ready {
                record_count,
                metrics,
                top_item,
                chart,
            } => AnalysisResponse::Ready {
                record_count,
                metrics: metrics.iter().map(MetricsRow::from).collect(),
                top_item: top_item.as_ref().map(MetricsRow::from),
                chart: chart.iter().map(ChartBarRow::from).collect(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EoqResponse {
    pub item: String,
    pub weekly_demand: f64,
    pub eoq: f64,
    pub reorder_point: f64,
    pub projection: Vec<StockLevel>,
}

impl From<EoqPanel> for EoqResponse {
    fn from(panel: EoqPanel) -> Self {
        Self {
            item: panel.item,
            weekly_demand: round2(panel.weekly_demand),
            eoq: round2(panel.eoq),
            reorder_point: round2(panel.reorder_point),
            projection: panel
                .projection
                .into_iter()
                .map(|p| StockLevel {
                    day: p.day,
                    level: round2(p.level),
                })
                .collect(),
        }
    }
}
