// ==========================================
// 销售合同数据装载系统 - 目标实体模型
// ==========================================
// 六张实体表 + 一张事实表，对应规范化后的目标库结构
// 红线: 实体的结构化相等覆盖全部字段（键 + 属性），
//       同键不同属性的两条元组视为两个不同成员
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// SupplyCenter - 供货中心（supply_center 表）
// ==========================================
// 自然键: center_name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupplyCenter {
    pub center_name: String, // 供货中心名称
    pub director: String,    // 负责人
}

// ==========================================
// Client - 客户企业（client 表）
// ==========================================
// 自然键: client_name；supply_center 引用 supply_center.center_name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Client {
    pub client_name: String,   // 客户企业名称
    pub country: String,       // 国家
    pub supply_center: String, // 所属供货中心（FK）
    pub city: String,          // 城市
    pub industry: String,      // 行业
}

// ==========================================
// Product - 产品（product 表）
// ==========================================
// 自然键: product_code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    pub product_code: String, // 产品代码
    pub product_name: String, // 产品名称
}

// ==========================================
// ProductModel - 产品型号（product_model 表）
// ==========================================
// 自然键: (product_code, product_model)；product_code 引用 product
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductModel {
    pub product_code: String,  // 产品代码（FK）
    pub product_model: String, // 型号
    pub unit_price: i64,       // 单价（整数最小货币单位）
}

// ==========================================
// Salesperson - 销售员（salesperson 表）
// ==========================================
// 自然键: salesman_number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Salesperson {
    pub salesman_number: i64,  // 销售员编号
    pub name: String,          // 姓名
    pub gender: String,        // 性别
    pub mobile_number: String, // 手机号（文本）
    pub age: i64,              // 年龄
}

// ==========================================
// Contract - 合同（contract 表）
// ==========================================
// 自然键: contract_number；client_name 引用 client
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contract {
    pub contract_number: String,  // 合同号
    pub client_name: String,      // 客户企业名称（FK）
    pub contract_date: NaiveDate, // 签约日期
}

// ==========================================
// OrderDetail - 订单明细事实（order_detail 表）
// ==========================================
// 每条输入记录恰好产出一行，不去重，无冲突键
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderDetail {
    pub contract_number: String,            // 合同号（FK）
    pub product_code: String,               // 产品代码（FK，联合引用 product_model）
    pub product_model: String,              // 型号
    pub quantity: i64,                      // 数量
    pub estimated_delivery_date: NaiveDate, // 预计交付日期
    pub lodgement_date: NaiveDate,          // 到货日期
    pub salesman_number: i64,               // 销售员编号（FK）
}
