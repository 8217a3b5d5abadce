use std::path::PathBuf;

use chrono::NaiveDateTime;
use chrono_tz::Tz;

use crate::core::Config;
use crate::db::{DbService, SurrealCatalog};
use crate::utils::AppResult;
use crate::utils::time::business_now;
use crate::validation::ValidationContext;

/// 运行时状态 - 持有数据库连接与快照提供者
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | tz | Tz | 业务时区 (截单时间按此计算) |
/// | db | DbService | 嵌入式数据库 |
/// | catalog | SurrealCatalog | 菜单 + 订单规则快照 |
///
/// # 使用示例
///
/// ```ignore
/// let state = GateState::initialize(&config).await?;
/// let ctx = state.context();
/// validate_order_transition(&ctx, &order, &acting, &owner, date, &chain).await?;
/// ```
#[derive(Clone)]
pub struct GateState {
    /// 配置
    pub config: Config,
    /// 业务时区
    pub tz: Tz,
    /// 嵌入式数据库 (SurrealDB)
    pub db: DbService,
    /// 快照提供者
    pub catalog: SurrealCatalog,
}

impl GateState {
    /// 初始化运行时状态
    ///
    /// 按顺序初始化：
    /// 1. 业务时区 (无效时直接报错)
    /// 2. 数据库 (database_path/order-gate.db)
    /// 3. 快照提供者
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        // 1. 时区
        let tz = config.timezone()?;

        // 2. 数据库
        let db_path = PathBuf::from(&config.database_path).join("order-gate.db");
        let db = DbService::new(&db_path, &config.surreal_namespace, &config.surreal_database).await?;

        // 3. 快照提供者
        let catalog = SurrealCatalog::new(db.db.clone());

        tracing::info!(timezone = %tz, environment = %config.environment, "Gate state initialized");

        Ok(Self {
            config: config.clone(),
            tz,
            db,
            catalog,
        })
    }

    /// 业务时区下的当前时间
    pub fn now(&self) -> NaiveDateTime {
        business_now(self.tz)
    }

    /// 以当前时间构建校验上下文
    pub fn context(&self) -> ValidationContext<'_> {
        ValidationContext::new(&self.catalog, &self.catalog, self.now())
    }

    /// 以指定时间构建校验上下文 (重放/测试)
    pub fn context_at(&self, now: NaiveDateTime) -> ValidationContext<'_> {
        ValidationContext::new(&self.catalog, &self.catalog, now)
    }
}
