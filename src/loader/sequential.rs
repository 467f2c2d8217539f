// ==========================================
// 销售合同数据装载系统 - 顺序降级装载器
// ==========================================
// 职责: 不支持安全并发写入的环境下的降级路径
// 规则:
// - 单连接单事务覆盖全部七张表，父表先于子表，最后一次性提交
// - 任何一张表失败即整体回滚，目标库保持装载前状态
// - 成功时最终库内容与并行模式完全一致
// ==========================================

use crate::config::LoaderConfig;
use crate::db::open_sqlite_connection_with_timeout;
use crate::domain::dataset::ContractDataset;
use crate::loader::bulk_loader::BulkLoader;
use crate::loader::error::{LoadError, LoadResult};
use crate::loader::executor::stream_table_into_tx;
use crate::loader::report::{LoadSummary, TableLoadReport};
use crate::loader::tables::TableKind;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

pub struct SequentialLoader {
    config: LoaderConfig,
}

impl SequentialLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    fn load_all(config: &LoaderConfig, dataset: &ContractDataset) -> LoadResult<Vec<TableLoadReport>> {
        let mut conn =
            open_sqlite_connection_with_timeout(&config.database_path, config.busy_timeout_ms)
                .map_err(|e| LoadError::Connection(e.to_string()))?;
        let tx = conn.transaction()?;

        let mut reports = Vec::new();
        for &table in TableKind::sequential_order() {
            let started = Instant::now();
            let (rows_streamed, rows_inserted) = stream_table_into_tx(&tx, table, dataset)?;
            let elapsed_ms = started.elapsed().as_millis() as u64;
            debug!(table = %table, rows_streamed, rows_inserted, elapsed_ms, "表写入完成");
            reports.push(TableLoadReport {
                table,
                rows_streamed,
                rows_inserted,
                elapsed_ms,
            });
        }

        // 单次提交；中途任何失败随事务 Drop 整体回滚
        tx.commit()?;
        info!(tables = reports.len(), "顺序装载提交完成");
        Ok(reports)
    }
}

#[async_trait]
impl BulkLoader for SequentialLoader {
    async fn load(&self, dataset: Arc<ContractDataset>) -> LoadResult<LoadSummary> {
        let config = self.config.clone();
        let reports = tokio::task::spawn_blocking(move || Self::load_all(&config, &dataset))
            .await
            .map_err(|e| LoadError::TaskJoin(e.to_string()))??;
        Ok(LoadSummary::success(reports))
    }
}
