use fruit_sales_dashboard::{api, AppConfig, SalesLog};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置
    let config = AppConfig::load()?;
    info!("Starting server with config: {:?}", config);

    // 销售日志只存在内存中, 进程退出即丢失
    let log = SalesLog::new(config.analysis.tracked_items.iter().map(|s| s.trim().to_string()));
    if log.tracked_items().len() != config.analysis.tracked_items.len() {
        tracing::warn!("Duplicate names in analysis.tracked_items were merged");
    }
    info!(
        "Tracking {} items {:?}, stock status mode: {:?}",
        log.tracked_items().len(),
        log.tracked_items(),
        config.analysis.status_mode
    );
    let log = log.into_shared();

    let state = api::AppState {
        log,
        dashboard: Arc::new(config.dashboard_service()),
        eoq_defaults: config.eoq_defaults(),
    };
    let app = api::router(state);

    // 启动服务器
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  POST /api/sales              - submit a daily sales entry");
    info!("  GET  /api/analysis           - metrics table, top item, chart");
    info!("  GET  /api/analysis/:item/eoq - EOQ and stock projection");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
