// ==========================================
// 销售合同数据装载系统 - 实体去重器
// ==========================================
// 职责: 把规范化记录折叠进六个实体集合与事实列表
// 规则:
// - 实体按全元组结构化相等去重（键 + 属性），集合吸收重复成员
// - 同一自然键不同属性的两条元组都会保留，由装载层的
//   upsert-ignore 决定物理上哪条落库（已知数据质量缺口）
// - 订单明细是事实，不去重，每条记录恰好产出一行
// ==========================================

use crate::domain::dataset::ContractDataset;
use crate::domain::entities::{
    Client, Contract, OrderDetail, Product, ProductModel, Salesperson, SupplyCenter,
};
use crate::domain::record::ContractRecord;
use tracing::debug;

pub struct EntityDeduplicator;

impl EntityDeduplicator {
    /// 将一条记录折叠进实体集
    pub fn fold(&self, dataset: &mut ContractDataset, record: &ContractRecord) {
        dataset.supply_centers.insert(SupplyCenter {
            center_name: record.supply_center.clone(),
            director: record.director.clone(),
        });

        dataset.clients.insert(Client {
            client_name: record.client_enterprise.clone(),
            country: record.country.clone(),
            supply_center: record.supply_center.clone(),
            city: record.city.clone(),
            industry: record.industry.clone(),
        });

        dataset.products.insert(Product {
            product_code: record.product_code.clone(),
            product_name: record.product_name.clone(),
        });

        dataset.product_models.insert(ProductModel {
            product_code: record.product_code.clone(),
            product_model: record.product_model.clone(),
            unit_price: record.unit_price,
        });

        dataset.salespersons.insert(Salesperson {
            salesman_number: record.salesman_number,
            name: record.salesman.clone(),
            gender: record.gender.clone(),
            mobile_number: record.mobile_phone.clone(),
            age: record.age,
        });

        dataset.contracts.insert(Contract {
            contract_number: record.contract_number.clone(),
            client_name: record.client_enterprise.clone(),
            contract_date: record.contract_date,
        });

        dataset.order_details.push(OrderDetail {
            contract_number: record.contract_number.clone(),
            product_code: record.product_code.clone(),
            product_model: record.product_model.clone(),
            quantity: record.quantity,
            estimated_delivery_date: record.estimated_delivery_date,
            lodgement_date: record.lodgement_date,
            salesman_number: record.salesman_number,
        });
    }

    /// 折叠全部记录，返回完整实体集
    pub fn deduplicate(&self, records: &[ContractRecord]) -> ContractDataset {
        let mut dataset = ContractDataset::new();
        for record in records {
            self.fold(&mut dataset, record);
        }

        let counts = dataset.entity_counts();
        debug!(
            supply_centers = counts.supply_centers,
            clients = counts.clients,
            products = counts.products,
            product_models = counts.product_models,
            salespersons = counts.salespersons,
            contracts = counts.contracts,
            order_details = counts.order_details,
            "实体去重完成"
        );
        dataset
    }
}
