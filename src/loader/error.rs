// ==========================================
// 销售合同数据装载系统 - 装载模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 任务级错误由调度器按波次收集；执行器内部不做重试
// ==========================================

use thiserror::Error;

/// 装载模块错误类型
#[derive(Error, Debug)]
pub enum LoadError {
    // ===== 连接错误（任务级致命）=====
    #[error("数据库连接失败: {0}")]
    Connection(String),

    // ===== 表装载错误（任务级，按波次聚合）=====
    #[error("表装载失败 (表 {table}, 已尝试 {rows_attempted} 行): {message}")]
    TableLoad {
        table: &'static str,
        rows_attempted: usize,
        message: String,
    },

    // ===== 任务调度错误 =====
    #[error("装载任务意外终止: {0}")]
    TaskJoin(String),

    // ===== 数据库错误 =====
    #[error("数据库错误: {0}")]
    Database(#[from] rusqlite::Error),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LoadError {
    /// 失败时已流入目标表的行数（非表装载错误为 0）
    pub fn rows_attempted(&self) -> usize {
        match self {
            LoadError::TableLoad { rows_attempted, .. } => *rows_attempted,
            _ => 0,
        }
    }
}

/// Result 类型别名
pub type LoadResult<T> = Result<T, LoadError>;
