// ==========================================
// 销售合同数据装载系统 - 装载策略接口
// ==========================================
// 并行波次装载与顺序降级装载实现同一入口，
// 协调器按配置选择策略，测试可注入替身
// ==========================================

use crate::domain::dataset::ContractDataset;
use crate::loader::error::LoadResult;
use crate::loader::report::LoadSummary;
use async_trait::async_trait;
use std::sync::Arc;

/// 装载策略：把完整实体集写入目标库
///
/// Ok(summary) 中仍可能包含按表聚合的失败（部分成功）；
/// Err 表示装载阶段整体性失败（如顺序模式连接不可用）
#[async_trait]
pub trait BulkLoader: Send + Sync {
    async fn load(&self, dataset: Arc<ContractDataset>) -> LoadResult<LoadSummary>;
}
