pub mod calculator;
pub mod dashboard;
pub mod export;

pub use calculator::{
    compute_eoq, project_stock_levels, rank_by_total_sold, top_item, CalculatorConfig,
    MetricsCalculator,
};
pub use dashboard::{
    AnalysisView, ChartBar, DashboardService, EoqPanel, EoqParams, DEFAULT_MAX_HORIZON_DAYS,
};
