// ==========================================
// 销售合同数据装载系统 - 运行协调器
// ==========================================
// 职责: 串联解析 -> 规范化 -> 去重 -> 装载四个阶段，
//       产出带运行 ID、阶段耗时与逐表结果的运行报告
// 规则:
// - 导入侧错误与装载阶段整体性错误直接上抛（致命）
// - 表级失败不在这里上抛，体现在报告的 failures 中，
//   由调用方决定退出码
// ==========================================

use crate::config::{LoadMode, LoaderConfig};
use crate::domain::dataset::EntityCounts;
use crate::domain::record::ContractRecord;
use crate::importer::error::ImportError;
use crate::importer::{ContractCsvReader, EntityDeduplicator, FieldCleaner};
use crate::loader::error::LoadError;
use crate::loader::{
    BulkLoader, LoadSummary, SequentialLoader, SqliteTableLoader, WaveScheduler,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

/// 流水线错误（阶段级致命错误）
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("导入阶段失败: {0}")]
    Import(#[from] ImportError),

    #[error("装载阶段失败: {0}")]
    Load(#[from] LoadError),
}

pub type PipelineResult<T> = Result<T, PipelineError>;

/// 一次装载运行的完整报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: String,
    pub csv_path: String,
    pub mode: LoadMode,
    pub rows_read: usize,            // 读入的数据行数（空白行不计）
    pub entity_counts: EntityCounts, // 去重后的各集合大小
    pub load: LoadSummary,
    pub parse_elapsed_ms: u64,       // 解析 + 规范化 + 去重
    pub load_elapsed_ms: u64,        // 装载阶段
    pub total_elapsed_ms: u64,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.load.is_success()
    }
}

// ==========================================
// LoadCoordinator
// ==========================================
pub struct LoadCoordinator {
    config: LoaderConfig,
}

impl LoadCoordinator {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// 执行一次完整装载运行：一个文件进一个库
    pub async fn run(&self, csv_path: &Path) -> PipelineResult<RunReport> {
        let run_id = Uuid::new_v4().to_string();
        let total_started = Instant::now();
        info!(
            run_id = %run_id,
            file = %csv_path.display(),
            database = %self.config.database_path,
            mode = ?self.config.mode,
            "装载运行启动"
        );

        // === 步骤 1: 读取 CSV ===
        debug!("步骤 1: 读取 CSV");
        let parse_started = Instant::now();
        let raw_records = ContractCsvReader.read_records(csv_path)?;

        // === 步骤 2: 字段规范化 ===
        debug!("步骤 2: 字段规范化");
        let cleaner = FieldCleaner;
        let records: Vec<ContractRecord> =
            raw_records.iter().map(|raw| cleaner.normalize(raw)).collect();

        // === 步骤 3: 实体去重 ===
        debug!("步骤 3: 实体去重");
        let dataset = EntityDeduplicator.deduplicate(&records);
        let entity_counts = dataset.entity_counts();
        let parse_elapsed_ms = parse_started.elapsed().as_millis() as u64;
        info!(
            rows = records.len(),
            contracts = entity_counts.contracts,
            order_details = entity_counts.order_details,
            elapsed_ms = parse_elapsed_ms,
            "解析与去重完成"
        );

        // === 步骤 4: 批量装载 ===
        debug!("步骤 4: 批量装载");
        let load_started = Instant::now();
        let loader: Box<dyn BulkLoader> = match self.config.mode {
            LoadMode::Parallel => Box::new(WaveScheduler::new(Arc::new(SqliteTableLoader::new(
                self.config.clone(),
            )))),
            LoadMode::Sequential => Box::new(SequentialLoader::new(self.config.clone())),
        };
        let load = loader.load(Arc::new(dataset)).await?;
        let load_elapsed_ms = load_started.elapsed().as_millis() as u64;

        // === 步骤 5: 汇总报告 ===
        let total_elapsed_ms = total_started.elapsed().as_millis() as u64;
        info!(
            run_id = %run_id,
            tables_loaded = load.table_reports.len(),
            tables_failed = load.failures.len(),
            rows_inserted = load.rows_inserted_total(),
            parse_elapsed_ms,
            load_elapsed_ms,
            total_elapsed_ms,
            "装载运行结束"
        );

        Ok(RunReport {
            run_id,
            csv_path: csv_path.display().to_string(),
            mode: self.config.mode,
            rows_read: records.len(),
            entity_counts,
            load,
            parse_elapsed_ms,
            load_elapsed_ms,
            total_elapsed_ms,
        })
    }
}
