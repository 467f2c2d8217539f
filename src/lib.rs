// ==========================================
// 销售合同数据装载系统 - 核心库
// ==========================================
// 技术栈: Rust + SQLite (rusqlite) + tokio
// 系统定位: 扁平销售合同 CSV 导出 -> 规范化七表的批量装载流水线
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 输入记录 / 目标实体 / 内存实体集
pub mod domain;

// 导入层 - CSV 读取 / 字段清洗 / 实体去重
pub mod importer;

// 装载层 - 波次调度 / 批量 upsert / 顺序降级
pub mod loader;

// 运行协调器 - 阶段串联与运行报告
pub mod coordinator;

// 配置层 - 装载配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 配置
pub use config::{LoadMode, LoaderConfig};

// 领域类型
pub use domain::{
    Client, Contract, ContractDataset, ContractRecord, EntityCounts, OrderDetail, Product,
    ProductModel, RawContractRecord, Salesperson, SupplyCenter,
};

// 导入层
pub use importer::{ContractCsvReader, EntityDeduplicator, FieldCleaner, ImportError, ImportResult};

// 装载层
pub use loader::{
    BulkLoader, LoadError, LoadResult, LoadSummary, SequentialLoader, SqliteTableLoader,
    TableFailure, TableKind, TableLoadReport, TableLoader, WaveScheduler,
};

// 协调器
pub use coordinator::{LoadCoordinator, PipelineError, PipelineResult, RunReport};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "销售合同数据装载系统";
