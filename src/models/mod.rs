pub mod metrics;
pub mod sales;

pub use metrics::{ItemMetrics, StockLevel, StockStatus, StockStatusMode};
pub use sales::{ItemName, SalesRecord};
