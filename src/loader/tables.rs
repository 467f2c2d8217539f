// ==========================================
// 销售合同数据装载系统 - 目标表元数据
// ==========================================
// 七张目标表的名称、列、冲突键，以及两种装载顺序：
// - 并行模式的依赖波次计划（波内并行，波间全屏障）
// - 顺序降级模式的单事务表顺序
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// 目标表标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableKind {
    SupplyCenter,
    Client,
    Product,
    ProductModel,
    Salesperson,
    Contract,
    OrderDetail,
}

impl TableKind {
    /// 目标表名
    pub fn table_name(&self) -> &'static str {
        match self {
            TableKind::SupplyCenter => "supply_center",
            TableKind::Client => "client",
            TableKind::Product => "product",
            TableKind::ProductModel => "product_model",
            TableKind::Salesperson => "salesperson",
            TableKind::Contract => "contract",
            TableKind::OrderDetail => "order_detail",
        }
    }

    /// 插入列（顺序与执行器的参数绑定一致）
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            TableKind::SupplyCenter => &["center_name", "director"],
            TableKind::Client => &["client_name", "country", "supply_center", "city", "industry"],
            TableKind::Product => &["product_code", "product_name"],
            TableKind::ProductModel => &["product_code", "product_model", "unit_price"],
            TableKind::Salesperson => {
                &["salesman_number", "name", "gender", "mobile_number", "age"]
            }
            TableKind::Contract => &["contract_number", "client_name", "contract_date"],
            TableKind::OrderDetail => &[
                "contract_number",
                "product_code",
                "product_model",
                "quantity",
                "estimated_delivery_date",
                "lodgement_date",
                "salesman_number",
            ],
        }
    }

    /// 冲突键（实体表为自然键；事实表无冲突键，走普通 INSERT）
    pub fn conflict_key(&self) -> Option<&'static [&'static str]> {
        match self {
            TableKind::SupplyCenter => Some(&["center_name"]),
            TableKind::Client => Some(&["client_name"]),
            TableKind::Product => Some(&["product_code"]),
            TableKind::ProductModel => Some(&["product_code", "product_model"]),
            TableKind::Salesperson => Some(&["salesman_number"]),
            TableKind::Contract => Some(&["contract_number"]),
            TableKind::OrderDetail => None,
        }
    }

    /// 生成插入语句
    ///
    /// 实体表: INSERT ... ON CONFLICT(自然键) DO NOTHING（upsert-ignore）
    /// 事实表: INSERT ...
    pub fn insert_sql(&self) -> String {
        let columns = self.columns();
        let placeholders = (1..=columns.len())
            .map(|i| format!("?{}", i))
            .collect::<Vec<_>>()
            .join(", ");

        let mut sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table_name(),
            columns.join(", "),
            placeholders
        );

        if let Some(key) = self.conflict_key() {
            sql.push_str(&format!(" ON CONFLICT({}) DO NOTHING", key.join(", ")));
        }

        sql
    }

    /// 并行模式的依赖波次计划
    ///
    /// 波 1: supply_center, product（无前置依赖）
    /// 波 2: client, product_model, salesperson（依赖波 1）
    /// 波 3: contract（依赖 client）
    /// 波 4: order_detail（依赖 contract / product_model / salesperson）
    pub fn wave_plan() -> Vec<Vec<TableKind>> {
        vec![
            vec![TableKind::SupplyCenter, TableKind::Product],
            vec![
                TableKind::Client,
                TableKind::ProductModel,
                TableKind::Salesperson,
            ],
            vec![TableKind::Contract],
            vec![TableKind::OrderDetail],
        ]
    }

    /// 顺序降级模式的单事务表顺序（父表先于子表）
    pub fn sequential_order() -> &'static [TableKind] {
        &[
            TableKind::SupplyCenter,
            TableKind::Client,
            TableKind::Product,
            TableKind::ProductModel,
            TableKind::Salesperson,
            TableKind::Contract,
            TableKind::OrderDetail,
        ]
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}
