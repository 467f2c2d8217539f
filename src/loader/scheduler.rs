// ==========================================
// 销售合同数据装载系统 - 波次调度器
// ==========================================
// 职责: 按依赖波次并行装载目标表
// 规则:
// - 波内每张表一个阻塞任务，各自独立连接
// - 波间全屏障：本波全部任务到达终态后才进入下一波
// - 同波兄弟任务互不取消，失败按表收集；
//   本波存在失败则中止，后续波次不再执行
// ==========================================

use crate::domain::dataset::ContractDataset;
use crate::loader::bulk_loader::BulkLoader;
use crate::loader::error::LoadResult;
use crate::loader::executor::TableLoader;
use crate::loader::report::{LoadSummary, TableFailure, TableLoadReport};
use crate::loader::tables::TableKind;
use async_trait::async_trait;
use futures::future::join_all;
use std::sync::Arc;
use tracing::{error, info, warn};

pub struct WaveScheduler<L: TableLoader> {
    loader: Arc<L>,
}

impl<L: TableLoader> WaveScheduler<L> {
    pub fn new(loader: Arc<L>) -> Self {
        Self { loader }
    }

    /// 执行完整波次计划
    pub async fn run(&self, dataset: Arc<ContractDataset>) -> LoadSummary {
        let mut table_reports: Vec<TableLoadReport> = Vec::new();

        for (wave_idx, wave) in TableKind::wave_plan().into_iter().enumerate() {
            let wave_no = wave_idx + 1;
            let wave_tables: Vec<&'static str> =
                wave.iter().map(|t| t.table_name()).collect();
            info!(wave = wave_no, tables = ?wave_tables, "波次启动");

            // 波内任务并发执行，每个任务独立连接
            let handles: Vec<_> = wave
                .iter()
                .map(|&table| {
                    let loader = Arc::clone(&self.loader);
                    let dataset = Arc::clone(&dataset);
                    tokio::task::spawn_blocking(move || loader.load_table(table, &dataset))
                })
                .collect();

            // 全屏障：等待本波全部任务到达终态（成功或失败）
            let results = join_all(handles).await;

            let mut failures: Vec<TableFailure> = Vec::new();
            for (&table, joined) in wave.iter().zip(results) {
                match joined {
                    Ok(Ok(report)) => table_reports.push(report),
                    Ok(Err(load_err)) => {
                        warn!(wave = wave_no, table = %table, error = %load_err, "波内任务失败");
                        failures.push(TableFailure::from_error(table, &load_err));
                    }
                    Err(join_err) => {
                        warn!(wave = wave_no, table = %table, error = %join_err, "波内任务意外终止");
                        failures.push(TableFailure {
                            table,
                            rows_attempted: 0,
                            message: join_err.to_string(),
                        });
                    }
                }
            }

            if !failures.is_empty() {
                error!(
                    wave = wave_no,
                    failed = failures.len(),
                    "波次存在失败任务，装载中止"
                );
                return LoadSummary {
                    table_reports,
                    failures,
                    aborted_after_wave: Some(wave_no),
                };
            }

            info!(wave = wave_no, "波次完成");
        }

        LoadSummary::success(table_reports)
    }
}

#[async_trait]
impl<L: TableLoader> BulkLoader for WaveScheduler<L> {
    async fn load(&self, dataset: Arc<ContractDataset>) -> LoadResult<LoadSummary> {
        Ok(self.run(dataset).await)
    }
}
