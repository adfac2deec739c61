use thiserror::Error;

/// 指标计算与销售记录的结果类型
pub type MetricsResult<T> = Result<T, MetricsError>;

/// 指标计算错误
///
/// 纯计算错误, 不做重试也不自动修正, 直接返回给调用方.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MetricsError {
    /// 空销售记录上无法求平均值
    #[error("metrics are undefined over an empty sales log")]
    DivisionUndefined,

    /// 参数非法 (如 holding_cost <= 0)
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// 销量为负数
    #[error("quantity for {item} must be non-negative, got {quantity}")]
    NegativeQuantity { item: String, quantity: f64 },

    /// 销量为 NaN 或无穷大
    #[error("quantity for {item} must be a finite number")]
    InvalidQuantity { item: String },

    /// 未跟踪的商品
    #[error("unknown item: {0}")]
    UnknownItem(String),

    /// 商品名为空
    #[error("item name must not be blank")]
    InvalidItemName,
}

impl MetricsError {
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}
