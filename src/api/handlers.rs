use super::dto::{
    AnalysisResponse, EoqQuery, EoqResponse, ItemsResponse, SalesEntryRequest,
    SalesEntryResponse, SalesHistoryResponse, TrackItemRequest,
};
use super::error::ApiError;
use super::AppState;
use crate::error::MetricsError;
use crate::models::SalesRecord;
use crate::service::{export, EoqParams};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Json, Path, Query, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Local;

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 当前跟踪的商品列
pub async fn list_items(State(state): State<AppState>) -> Json<ItemsResponse> {
    let log = state.log.read().await;
    Json(ItemsResponse {
        items: log.tracked_items().iter().cloned().collect(),
    })
}

/// 新增商品列
pub async fn track_item(
    State(state): State<AppState>,
    payload: Result<Json<TrackItemRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;
    let mut log = state.log.write().await;
    let added = log.track_item(&req.name)?;
    let items = ItemsResponse {
        items: log.tracked_items().iter().cloned().collect(),
    };

    if added {
        tracing::info!("Now tracking item {}", req.name.trim());
        Ok((StatusCode::CREATED, Json(items)).into_response())
    } else {
        Ok((StatusCode::OK, Json(items)).into_response())
    }
}

/// 录入一天的销售数据
pub async fn submit_sales(
    State(state): State<AppState>,
    payload: Result<Json<SalesEntryRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;
    let date = req.date.unwrap_or_else(|| Local::now().date_naive());
    let record = SalesRecord {
        date,
        quantities: req.quantities,
    };

    let record_count = state.log.write().await.append(record)?;
    tracing::info!("Sales entry for {} saved, {} records in log", date, record_count);

    let response = SalesEntryResponse {
        success: true,
        message: format!("Saved sales entry for {}", date),
        record_count,
    };
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

/// 销售历史
pub async fn sales_history(State(state): State<AppState>) -> Json<SalesHistoryResponse> {
    let log = state.log.read().await;
    Json(SalesHistoryResponse {
        items: log.tracked_items().iter().cloned().collect(),
        records: log.records().to_vec(),
    })
}

/// 销售历史 CSV
pub async fn export_sales(State(state): State<AppState>) -> Result<Response, ApiError> {
    let snapshot = state.log.read().await.clone();
    let body = export::sales_log_csv(&snapshot).map_err(|e| ApiError::Export(e.to_string()))?;
    Ok(csv_response(body, "sales.csv"))
}

/// 分析页: 指标表, 最畅销商品, 柱状图
pub async fn analysis(State(state): State<AppState>) -> Result<Json<AnalysisResponse>, ApiError> {
    // 取快照后释放锁, 计算不阻塞写入
    let snapshot = state.log.read().await.clone();
    let view = state.dashboard.analysis(&snapshot)?;
    Ok(Json(view.into()))
}

/// 指标表 CSV, 空日志返回 409
pub async fn export_analysis(State(state): State<AppState>) -> Result<Response, ApiError> {
    let snapshot = state.log.read().await.clone();
    if snapshot.is_empty() {
        return Err(MetricsError::DivisionUndefined.into());
    }
    let metrics = state.dashboard.calculator().compute_metrics(&snapshot)?;
    let body = export::metrics_csv(&metrics).map_err(|e| ApiError::Export(e.to_string()))?;
    Ok(csv_response(body, "metrics.csv"))
}

/// EOQ 面板
pub async fn item_eoq(
    State(state): State<AppState>,
    Path(item): Path<String>,
    query: Result<Query<EoqQuery>, QueryRejection>,
) -> Result<Json<EoqResponse>, ApiError> {
    let Query(query) = query?;
    let defaults = state.eoq_defaults;
    let params = EoqParams {
        lead_time_days: query.lead_time_days.unwrap_or(defaults.lead_time_days),
        ordering_cost: query.ordering_cost.unwrap_or(defaults.ordering_cost),
        holding_cost: query.holding_cost.unwrap_or(defaults.holding_cost),
        horizon_days: query.horizon_days.unwrap_or(defaults.horizon_days),
    };

    let snapshot = state.log.read().await.clone();
    let panel = state.dashboard.eoq_panel(&snapshot, &item, params)?;
    Ok(Json(panel.into()))
}

fn csv_response(body: String, filename: &str) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    )
        .into_response()
}
