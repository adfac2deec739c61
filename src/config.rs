use crate::models::StockStatusMode;
use crate::service::{CalculatorConfig, DashboardService, EoqParams, DEFAULT_MAX_HORIZON_DAYS};
use config::{ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// 默认跟踪的水果 (列顺序)
pub const DEFAULT_ITEMS: [&str; 6] = ["Apel", "Pisang", "Anggur", "Stroberi", "Mangga", "Jeruk"];

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// 指标计算默认参数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub tracked_items: Vec<String>,
    pub lead_time_days: u32,
    pub ordering_cost: f64, // 每次订货成本
    pub holding_cost: f64,  // 每 kg 每周持有成本
    pub horizon_days: u32,
    pub max_horizon_days: u32, // EOQ 面板曲线天数上限
    pub status_mode: StockStatusMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            analysis: AnalysisConfig {
                tracked_items: DEFAULT_ITEMS.iter().map(|s| s.to_string()).collect(),
                lead_time_days: 2,
                ordering_cost: 10000.0,
                holding_cost: 500.0,
                horizon_days: 14,
                max_horizon_days: DEFAULT_MAX_HORIZON_DAYS,
                status_mode: StockStatusMode::Simple,
            },
        }
    }
}

impl AppConfig {
    /// 加载配置: 默认值 -> config/fruit-sales.toml (可选) -> FRUIT_SALES__* 环境变量
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let config = config::Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("analysis.tracked_items", defaults.analysis.tracked_items)?
            .set_default("analysis.lead_time_days", i64::from(defaults.analysis.lead_time_days))?
            .set_default("analysis.ordering_cost", defaults.analysis.ordering_cost)?
            .set_default("analysis.holding_cost", defaults.analysis.holding_cost)?
            .set_default("analysis.horizon_days", i64::from(defaults.analysis.horizon_days))?
            .set_default("analysis.max_horizon_days", i64::from(defaults.analysis.max_horizon_days))?
            .set_default("analysis.status_mode", "simple")?
            .add_source(File::with_name("config/fruit-sales").required(false))
            .add_source(
                Environment::with_prefix("FRUIT_SALES")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("analysis.tracked_items")
                    .try_parsing(true),
            )
            .build()?;

        let app: Self = config.try_deserialize()?;
        app.validate()?;
        Ok(app)
    }

    /// 启动时校验, 非法配置直接拒绝
    pub fn validate(&self) -> Result<(), ConfigError> {
        let a = &self.analysis;
        if a.tracked_items.is_empty() {
            return Err(ConfigError::Message(
                "analysis.tracked_items must name at least one item".to_string(),
            ));
        }
        if a.tracked_items.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigError::Message(
                "analysis.tracked_items must not contain blank names".to_string(),
            ));
        }
        if a.lead_time_days == 0 {
            return Err(ConfigError::Message(
                "analysis.lead_time_days must be >= 1".to_string(),
            ));
        }
        if !(a.holding_cost.is_finite() && a.holding_cost > 0.0) {
            return Err(ConfigError::Message(
                "analysis.holding_cost must be positive".to_string(),
            ));
        }
        if !(a.ordering_cost.is_finite() && a.ordering_cost >= 0.0) {
            return Err(ConfigError::Message(
                "analysis.ordering_cost must be non-negative".to_string(),
            ));
        }
        if a.max_horizon_days == 0 || a.horizon_days > a.max_horizon_days {
            return Err(ConfigError::Message(format!(
                "analysis.max_horizon_days must be >= 1 and >= analysis.horizon_days ({} > {})",
                a.horizon_days, a.max_horizon_days
            )));
        }
        Ok(())
    }

    pub fn calculator_config(&self) -> CalculatorConfig {
        CalculatorConfig {
            lead_time_days: self.analysis.lead_time_days,
            status_mode: self.analysis.status_mode,
        }
    }

    pub fn dashboard_service(&self) -> DashboardService {
        DashboardService::new(self.calculator_config())
            .with_max_horizon_days(self.analysis.max_horizon_days)
    }

    /// EOQ 面板的默认参数
    pub fn eoq_defaults(&self) -> EoqParams {
        EoqParams {
            lead_time_days: self.analysis.lead_time_days,
            ordering_cost: self.analysis.ordering_cost,
            holding_cost: self.analysis.holding_cost,
            horizon_days: self.analysis.horizon_days,
        }
    }
}
