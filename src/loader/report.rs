// ==========================================
// 销售合同数据装载系统 - 装载结果汇总
// ==========================================
// 执行器产出单表报告，调度器聚合为装载摘要；
// 部分成功（部分表已装载、某波次中止）必须显式体现，
// 不允许被当作干净退出吞掉
// ==========================================

use crate::loader::error::LoadError;
use crate::loader::tables::TableKind;
use serde::{Deserialize, Serialize};

/// 单表装载报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableLoadReport {
    pub table: TableKind,
    pub rows_streamed: usize, // 流经预编译语句的行数
    pub rows_inserted: usize, // 实际落库行数（差值为冲突跳过）
    pub elapsed_ms: u64,
}

/// 单表装载失败
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableFailure {
    pub table: TableKind,
    pub rows_attempted: usize, // 失败前已流入的行数
    pub message: String,
}

impl TableFailure {
    pub fn from_error(table: TableKind, error: &LoadError) -> Self {
        Self {
            table,
            rows_attempted: error.rows_attempted(),
            message: error.to_string(),
        }
    }
}

/// 一次装载阶段的完整摘要
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadSummary {
    pub table_reports: Vec<TableLoadReport>,
    pub failures: Vec<TableFailure>,
    pub aborted_after_wave: Option<usize>, // Some(n): 第 n 波存在失败任务，后续波次未执行
}

impl LoadSummary {
    pub fn success(table_reports: Vec<TableLoadReport>) -> Self {
        Self {
            table_reports,
            failures: Vec::new(),
            aborted_after_wave: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn rows_inserted_total(&self) -> usize {
        self.table_reports.iter().map(|r| r.rows_inserted).sum()
    }
}
