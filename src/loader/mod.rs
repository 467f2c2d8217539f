// ==========================================
// 销售合同数据装载系统 - 装载层
// ==========================================
// 职责: 把内存实体集按依赖顺序批量写入目标库
// 组成: 表元数据 / upsert 执行器 / 波次调度器 / 顺序降级装载器
// ==========================================

// 模块声明
pub mod bulk_loader;
pub mod error;
pub mod executor;
pub mod report;
pub mod scheduler;
pub mod sequential;
pub mod tables;

// 重导出核心类型
pub use bulk_loader::BulkLoader;
pub use error::{LoadError, LoadResult};
pub use executor::{SqliteTableLoader, TableLoader};
pub use report::{LoadSummary, TableFailure, TableLoadReport};
pub use scheduler::WaveScheduler;
pub use sequential::SequentialLoader;
pub use tables::TableKind;
