// ==========================================
// 销售合同数据装载系统 - 内存实体集
// ==========================================
// 去重后的六个实体集合 + 订单明细事实列表。
// 集合使用 HashSet（结构化相等），成员资格即去重；
// 集合内部遍历顺序无意义，装载层不得依赖
// ==========================================

use crate::domain::entities::{
    Client, Contract, OrderDetail, Product, ProductModel, Salesperson, SupplyCenter,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 一次装载运行的全部待写数据
///
/// 写入阶段一次性构建（fold），装载阶段只读共享（Arc）
#[derive(Debug, Default)]
pub struct ContractDataset {
    pub supply_centers: HashSet<SupplyCenter>,
    pub clients: HashSet<Client>,
    pub products: HashSet<Product>,
    pub product_models: HashSet<ProductModel>,
    pub salespersons: HashSet<Salesperson>,
    pub contracts: HashSet<Contract>,
    pub order_details: Vec<OrderDetail>,
}

impl ContractDataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.order_details.is_empty()
            && self.supply_centers.is_empty()
            && self.clients.is_empty()
            && self.products.is_empty()
            && self.product_models.is_empty()
            && self.salespersons.is_empty()
            && self.contracts.is_empty()
    }

    /// 各集合的成员数量（用于运行报告与日志）
    pub fn entity_counts(&self) -> EntityCounts {
        EntityCounts {
            supply_centers: self.supply_centers.len(),
            clients: self.clients.len(),
            products: self.products.len(),
            product_models: self.product_models.len(),
            salespersons: self.salespersons.len(),
            contracts: self.contracts.len(),
            order_details: self.order_details.len(),
        }
    }
}

/// 实体集数量摘要
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCounts {
    pub supply_centers: usize,
    pub clients: usize,
    pub products: usize,
    pub product_models: usize,
    pub salespersons: usize,
    pub contracts: usize,
    pub order_details: usize,
}
