// ==========================================
// 销售合同数据装载系统 - 输入记录模型
// ==========================================
// 一行扁平 CSV 导出对应一条记录：
// - RawContractRecord: 读取器产出的 20 列原始字符串
// - ContractRecord: 规范化后的类型化记录（日期/整数已清洗）
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 逻辑表头的 20 个列名（顺序固定，多余列忽略）
pub const EXPECTED_COLUMNS: &[&str] = &[
    "contract number",
    "client enterprise",
    "supply center",
    "country",
    "city",
    "industry",
    "product code",
    "product name",
    "product model",
    "unit price",
    "quantity",
    "contract date",
    "estimated delivery date",
    "lodgement date",
    "director",
    "salesman",
    "salesman number",
    "gender",
    "age",
    "mobile phone",
];

// ==========================================
// RawContractRecord - 原始记录
// ==========================================
// 用途: 读取层产出，规范化层消费
// row_number 为 1 基数据行号（不含表头），用于错误定位
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawContractRecord {
    pub row_number: usize,               // 数据行号（1 基，不含表头）

    pub contract_number: String,         // 合同号
    pub client_enterprise: String,       // 客户企业名称
    pub supply_center: String,           // 供货中心名称
    pub country: String,                 // 国家
    pub city: String,                    // 城市
    pub industry: String,                // 行业
    pub product_code: String,            // 产品代码
    pub product_name: String,            // 产品名称
    pub product_model: String,           // 产品型号
    pub unit_price: String,              // 单价（原始文本）
    pub quantity: String,                // 数量（原始文本）
    pub contract_date: String,           // 签约日期（原始文本）
    pub estimated_delivery_date: String, // 预计交付日期（原始文本）
    pub lodgement_date: String,          // 到货日期（原始文本）
    pub director: String,                // 供货中心负责人
    pub salesman: String,                // 销售员姓名
    pub salesman_number: String,         // 销售员编号（原始文本）
    pub gender: String,                  // 性别
    pub age: String,                     // 年龄（原始文本）
    pub mobile_phone: String,            // 手机号（保持文本，不做数值解析）
}

// ==========================================
// ContractRecord - 规范化记录
// ==========================================
// 日期已规约为 NaiveDate（无法解析时为 1970-01-01 哨兵值），
// 整数字段解析失败时为 0
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractRecord {
    pub row_number: usize,

    pub contract_number: String,
    pub client_enterprise: String,
    pub supply_center: String,
    pub country: String,
    pub city: String,
    pub industry: String,
    pub product_code: String,
    pub product_name: String,
    pub product_model: String,
    pub unit_price: i64,                     // 单价（整数最小货币单位）
    pub quantity: i64,                       // 数量
    pub contract_date: NaiveDate,            // 签约日期
    pub estimated_delivery_date: NaiveDate,  // 预计交付日期
    pub lodgement_date: NaiveDate,           // 到货日期
    pub director: String,
    pub salesman: String,
    pub salesman_number: i64,                // 销售员编号
    pub gender: String,
    pub age: i64,                            // 年龄
    pub mobile_phone: String,
}
