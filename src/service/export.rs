use crate::models::ItemMetrics;
use crate::store::SalesLog;
use csv::Writer;

/// 导出错误
pub type ExportResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 销售历史导出为 CSV: date,<商品列...>
pub fn sales_log_csv(log: &SalesLog) -> ExportResult<String> {
    let mut wtr = Writer::from_writer(Vec::new());

    let mut header = vec!["date".to_string()];
    header.extend(log.tracked_items().iter().cloned());
    wtr.write_record(&header)?;

    for record in log.records() {
        let mut row = vec![record.date.format("%Y-%m-%d").to_string()];
        row.extend(
            log.tracked_items()
                .iter()
                .map(|item| record.quantity(item).to_string()),
        );
        wtr.write_record(&row)?;
    }

    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// 指标表导出为 CSV
pub fn metrics_csv(metrics: &[ItemMetrics]) -> ExportResult<String> {
    let mut wtr = Writer::from_writer(Vec::new());
    wtr.write_record([
        "item",
        "total_sold",
        "daily_average",
        "weekly_average",
        "reorder_point",
        "stock_status",
    ])?;

    for m in metrics {
        wtr.write_record([
            m.item.clone(),
            m.total_sold.to_string(),
            m.daily_average.to_string(),
            m.weekly_average.to_string(),
            m.reorder_point.to_string(),
            m.stock_status.as_str().to_string(),
        ])?;
    }

    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}
