pub mod dto;
pub mod error;
pub mod handlers;

pub use error::ApiError;
pub use handlers::*;

use crate::service::{DashboardService, EoqParams};
use crate::store::SharedSalesLog;
use axum::{routing::get, Router};
use std::sync::Arc;

/// 共享状态: 销售日志 + 看板服务
#[derive(Clone)]
pub struct AppState {
    pub log: SharedSalesLog,
    pub dashboard: Arc<DashboardService>,
    pub eoq_defaults: EoqParams,
}

/// 构建路由
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/items", get(list_items).post(track_item))
        .route("/api/sales", get(sales_history).post(submit_sales))
        .route("/api/sales/export", get(export_sales))
        .route("/api/analysis", get(analysis))
        .route("/api/analysis/export", get(export_analysis))
        .route("/api/analysis/:item/eoq", get(item_eoq))
        .with_state(state)
}
