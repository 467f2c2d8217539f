// ==========================================
// 销售合同数据装载系统 - 装载配置
// ==========================================
// 配置以显式值的形式传入各组件构造函数，
// 不使用全局可变连接参数，不在库代码中写死路径
// ==========================================

use crate::db::DEFAULT_BUSY_TIMEOUT_MS;
use serde::{Deserialize, Serialize};

/// 装载执行模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadMode {
    /// 依赖波次并行装载（默认）
    Parallel,
    /// 单连接单事务顺序装载（降级模式）
    Sequential,
}

/// 装载配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    pub database_path: String,       // 目标 SQLite 数据库路径
    pub mode: LoadMode,              // 并行 / 顺序
    pub busy_timeout_ms: u64,        // 每个连接的 busy_timeout
}

impl LoaderConfig {
    /// 以默认模式（并行）和默认超时构造
    pub fn new(database_path: impl Into<String>) -> Self {
        Self {
            database_path: database_path.into(),
            mode: LoadMode::Parallel,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }

    pub fn with_mode(mut self, mode: LoadMode) -> Self {
        self.mode = mode;
        self
    }
}
