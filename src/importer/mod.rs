// ==========================================
// 销售合同数据装载系统 - 导入层
// ==========================================
// 职责: 读取扁平 CSV 导出，规范化字段，折叠为去重实体集
// 数据流: ContractCsvReader -> FieldCleaner -> EntityDeduplicator
// ==========================================

// 模块声明
pub mod csv_reader;
pub mod deduplicator;
pub mod error;
pub mod field_cleaner;

// 重导出核心类型
pub use csv_reader::ContractCsvReader;
pub use deduplicator::EntityDeduplicator;
pub use error::{ImportError, ImportResult};
pub use field_cleaner::{epoch_date, FieldCleaner};
