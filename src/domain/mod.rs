// ==========================================
// 销售合同数据装载系统 - 领域模型层
// ==========================================
// 职责: 定义输入记录、目标实体、内存实体集
// 红线: 不含文件解析逻辑,不含数据库访问逻辑
// ==========================================

pub mod dataset;
pub mod entities;
pub mod record;

// 重导出核心类型
pub use dataset::{ContractDataset, EntityCounts};
pub use entities::{
    Client, Contract, OrderDetail, Product, ProductModel, Salesperson, SupplyCenter,
};
pub use record::{ContractRecord, RawContractRecord, EXPECTED_COLUMNS};
