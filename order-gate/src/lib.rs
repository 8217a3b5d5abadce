//! Order Gate - 团餐订单校验规则引擎
//!
//! # 架构概述
//!
//! 判断一张订单能否进入下一个状态 (保存、处理、部分排程、导入)：
//!
//! - **校验链** (`validation`): 按顺序执行的无状态规则，首个拒绝即返回
//! - **订单规则** (`rules`): 按优先级/公司范围解析排斥与限额规则
//! - **菜单快照** (`catalog`): 派送日期对应的当前菜单与分类摆放
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储快照与规则
//!
//! # 模块结构
//!
//! ```text
//! order-gate/src/
//! ├── core/          # 配置、运行时状态
//! ├── catalog/       # 菜单快照访问
//! ├── rules/         # 订单规则解析与视图
//! ├── validation/    # 校验链与具体规则
//! ├── permissions.rs # 角色/权限判定
//! ├── utils/         # 日志、时区、金额
//! └── db/            # 数据库层
//! ```

pub mod catalog;
pub mod core;
pub mod db;
pub mod permissions;
pub mod rules;
pub mod utils;
pub mod validation;

// Re-export 公共类型
pub use catalog::{InMemoryCatalog, MenuSnapshotProvider};
pub use core::{Config, GateState};
pub use db::{CatalogSnapshot, DbService, SurrealCatalog};
pub use rules::OrderRuleProvider;
pub use utils::{AppError, AppResult, ErrorCode};
pub use validation::{
    OrderValidation, Preset, ValidationChain, ValidationContext, ValidationError,
    ValidationResult, validate_order_transition,
};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境
///
/// 1. 加载 `.env` (不存在时忽略)
/// 2. 按配置初始化日志 (级别、JSON、日志目录)
pub fn setup_environment() -> AppResult<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    if let Some(dir) = &config.log_dir {
        std::fs::create_dir_all(dir)
            .map_err(|e| AppError::config(format!("Failed to create log directory {dir}: {e}")))?;
    }
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.log_json),
        config.log_dir.as_deref(),
    );

    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
  ____          _             _____       _
 / __ \        | |           / ____|     | |
| |  | |_ __ __| | ___ _ __ | |  __  __ _| |_ ___
| |  | | '__/ _` |/ _ \ '__|| | |_ |/ _` | __/ _ \
| |__| | | | (_| |  __/ |   | |__| | (_| | ||  __/
 \____/|_|  \__,_|\___|_|    \_____|\__,_|\__\___|
    "#
    );
}
