use chrono_tz::Tz;

use crate::utils::AppResult;
use crate::utils::time::parse_timezone;

/// 订单校验服务配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (`.env` 文件由 dotenv 预先加载)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | /var/lib/order-gate | 工作目录 |
/// | DATABASE_PATH | {WORK_DIR}/database | SurrealDB (RocksDB) 数据目录 |
/// | SURREAL_NAMESPACE | catering | SurrealDB namespace |
/// | SURREAL_DATABASE | orders | SurrealDB database |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_JSON | false | JSON 日志输出 |
/// | LOG_DIR | (无) | 日志文件目录，按天滚动 |
/// | BUSINESS_TIMEZONE | America/Santiago | 业务时区 (截单时间按此计算) |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/gate BUSINESS_TIMEZONE=America/Santiago order-gate seed
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录
    pub work_dir: String,
    /// 数据库目录
    pub database_path: String,
    pub surreal_namespace: String,
    pub surreal_database: String,
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    /// IANA 时区名
    pub business_timezone: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let work_dir =
            std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/order-gate".into());
        let database_path = std::env::var("DATABASE_PATH")
            .unwrap_or_else(|_| format!("{}/database", work_dir.trim_end_matches('/')));

        Self {
            work_dir,
            database_path,
            surreal_namespace: std::env::var("SURREAL_NAMESPACE")
                .unwrap_or_else(|_| "catering".into()),
            surreal_database: std::env::var("SURREAL_DATABASE")
                .unwrap_or_else(|_| "orders".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            business_timezone: std::env::var("BUSINESS_TIMEZONE")
                .unwrap_or_else(|_| "America/Santiago".into()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, business_timezone: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.database_path = format!("{}/database", config.work_dir.trim_end_matches('/'));
        config.business_timezone = business_timezone.into();
        config
    }

    /// 业务时区
    pub fn timezone(&self) -> AppResult<Tz> {
        parse_timezone(&self.business_timezone)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
