// ==========================================
// 销售合同数据装载系统 - 批量 upsert 执行器
// ==========================================
// 职责: 单表装载任务的完整生命周期
//   打开连接 -> 开启事务 -> 预编译语句 -> 流式写入 -> 提交
// 规则:
// - 每个任务独立连接、独立事务，失败回滚自身事务后上抛，不做重试
// - 实体表 upsert-ignore（自然键冲突静默跳过），事实表普通 INSERT
// - 报告区分"流入行数"与"实际写入行数"，差值即冲突跳过
// ==========================================

use crate::config::LoaderConfig;
use crate::db::open_sqlite_connection_with_timeout;
use crate::domain::dataset::ContractDataset;
use crate::loader::error::{LoadError, LoadResult};
use crate::loader::report::TableLoadReport;
use crate::loader::tables::TableKind;
use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Transaction};
use std::time::Instant;
use tracing::{debug, error, info};

/// 单表装载操作（并行调度器经由该接口驱动执行器，测试注入替身）
pub trait TableLoader: Send + Sync + 'static {
    fn load_table(&self, table: TableKind, dataset: &ContractDataset) -> LoadResult<TableLoadReport>;
}

// ==========================================
// SqliteTableLoader
// ==========================================
pub struct SqliteTableLoader {
    config: LoaderConfig,
}

impl SqliteTableLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }
}

impl TableLoader for SqliteTableLoader {
    fn load_table(&self, table: TableKind, dataset: &ContractDataset) -> LoadResult<TableLoadReport> {
        let started = Instant::now();
        debug!(table = %table, "装载任务启动，打开连接");

        let mut conn =
            open_sqlite_connection_with_timeout(&self.config.database_path, self.config.busy_timeout_ms)
                .map_err(|e| LoadError::Connection(e.to_string()))?;

        let tx = conn.transaction().map_err(|e| LoadError::TableLoad {
            table: table.table_name(),
            rows_attempted: 0,
            message: e.to_string(),
        })?;

        debug!(table = %table, "事务开启，开始流式写入");
        match stream_table_into_tx(&tx, table, dataset) {
            Ok((rows_streamed, rows_inserted)) => {
                tx.commit().map_err(|e| LoadError::TableLoad {
                    table: table.table_name(),
                    rows_attempted: rows_streamed,
                    message: e.to_string(),
                })?;

                let elapsed_ms = started.elapsed().as_millis() as u64;
                info!(
                    table = %table,
                    rows_streamed,
                    rows_inserted,
                    skipped = rows_streamed - rows_inserted,
                    elapsed_ms,
                    "表装载提交完成"
                );
                Ok(TableLoadReport {
                    table,
                    rows_streamed,
                    rows_inserted,
                    elapsed_ms,
                })
            }
            Err(e) => {
                // 事务随 Transaction Drop 回滚
                error!(
                    table = %table,
                    rows_attempted = e.rows_attempted(),
                    error = %e,
                    "表装载失败，事务回滚"
                );
                Err(e)
            }
        }
    }
}

/// 在已开启的事务内把一张表的全部行流经预编译语句
///
/// 返回 (流入行数, 实际写入行数)。并行执行器与顺序装载器共用
pub(crate) fn stream_table_into_tx(
    tx: &Transaction,
    table: TableKind,
    dataset: &ContractDataset,
) -> LoadResult<(usize, usize)> {
    let sql = table.insert_sql();
    let mut stmt = tx.prepare(&sql).map_err(|e| LoadError::TableLoad {
        table: table.table_name(),
        rows_attempted: 0,
        message: e.to_string(),
    })?;

    let mut rows_streamed = 0;
    let mut rows_inserted = 0;
    for row in bind_rows(table, dataset) {
        let changed = stmt
            .execute(params_from_iter(row))
            .map_err(|e| LoadError::TableLoad {
                table: table.table_name(),
                rows_attempted: rows_streamed,
                message: e.to_string(),
            })?;
        rows_streamed += 1;
        rows_inserted += changed;
    }

    Ok((rows_streamed, rows_inserted))
}

fn text(value: &str) -> Value {
    Value::Text(value.to_string())
}

/// 日期以规范 YYYY-MM-DD 文本落库
fn date_text(date: NaiveDate) -> Value {
    Value::Text(date.format("%Y-%m-%d").to_string())
}

/// 按表元数据的列顺序产出绑定值行
fn bind_rows<'a>(
    table: TableKind,
    dataset: &'a ContractDataset,
) -> Box<dyn Iterator<Item = Vec<Value>> + 'a> {
    match table {
        TableKind::SupplyCenter => Box::new(
            dataset
                .supply_centers
                .iter()
                .map(|e| vec![text(&e.center_name), text(&e.director)]),
        ),
        TableKind::Client => Box::new(dataset.clients.iter().map(|e| {
            vec![
                text(&e.client_name),
                text(&e.country),
                text(&e.supply_center),
                text(&e.city),
                text(&e.industry),
            ]
        })),
        TableKind::Product => Box::new(
            dataset
                .products
                .iter()
                .map(|e| vec![text(&e.product_code), text(&e.product_name)]),
        ),
        TableKind::ProductModel => Box::new(dataset.product_models.iter().map(|e| {
            vec![
                text(&e.product_code),
                text(&e.product_model),
                Value::Integer(e.unit_price),
            ]
        })),
        TableKind::Salesperson => Box::new(dataset.salespersons.iter().map(|e| {
            vec![
                Value::Integer(e.salesman_number),
                text(&e.name),
                text(&e.gender),
                text(&e.mobile_number),
                Value::Integer(e.age),
            ]
        })),
        TableKind::Contract => Box::new(dataset.contracts.iter().map(|e| {
            vec![
                text(&e.contract_number),
                text(&e.client_name),
                date_text(e.contract_date),
            ]
        })),
        TableKind::OrderDetail => Box::new(dataset.order_details.iter().map(|e| {
            vec![
                text(&e.contract_number),
                text(&e.product_code),
                text(&e.product_model),
                Value::Integer(e.quantity),
                date_text(e.estimated_delivery_date),
                date_text(e.lodgement_date),
                Value::Integer(e.salesman_number),
            ]
        })),
    }
}
