pub mod sales_log;

pub use sales_log::{SalesLog, SharedSalesLog};
