//! 核心模块 - 配置与运行时状态
//!
//! # 模块结构
//!
//! - [`Config`] - 服务配置
//! - [`GateState`] - 数据库连接 + 校验上下文所需的快照提供者

pub mod config;
pub mod state;

pub use config::Config;
pub use state::GateState;
