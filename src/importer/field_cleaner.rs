// ==========================================
// 销售合同数据装载系统 - 字段清洗器
// ==========================================
// 职责: 日期规约 / 整数解析，全部为全函数（不返回错误）
// 规则:
// - 日期按固定格式优先级匹配，无法解析回退纪元哨兵值 1970-01-01
// - 整数解析失败回退 0
// - 回退属于静默数据质量降级，只记 debug 日志，不作为错误上抛
// ==========================================

use crate::domain::record::{ContractRecord, RawContractRecord};
use chrono::NaiveDate;
use tracing::debug;

/// 日期格式优先级（第一个完整匹配的格式生效）
const DATE_FORMATS: &[&str] = &[
    "%Y/%m/%d",
    "%Y%m%d",
    "%Y-%m-%d",
    "%d/%m/%Y",
    "%m/%d/%Y",
    "%d-%m-%Y",
];

/// 纪元哨兵日期 1970-01-01（chrono 的 NaiveDate 默认值即为该日）
pub fn epoch_date() -> NaiveDate {
    NaiveDate::default()
}

pub struct FieldCleaner;

impl FieldCleaner {
    /// 清洗日期字段
    ///
    /// 空串与 "nan"（不区分大小写）直接回退哨兵值；
    /// 单元格可能带时间后缀，只取第一个空格前的日期部分参与匹配
    pub fn clean_date(&self, value: &str) -> NaiveDate {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
            return epoch_date();
        }

        let date_part = trimmed.split(' ').next().unwrap_or("");
        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(date_part, format) {
                return date;
            }
        }

        debug!(value = %value, "日期无法解析，回退为纪元哨兵值");
        epoch_date()
    }

    /// 清洗整数字段（单价/数量/销售员编号/年龄）
    pub fn clean_int(&self, value: &str) -> i64 {
        let trimmed = value.trim();
        match trimmed.parse::<i64>() {
            Ok(n) => n,
            Err(_) => {
                if !trimmed.is_empty() {
                    debug!(value = %value, "整数无法解析，回退为 0");
                }
                0
            }
        }
    }

    /// 将原始记录规范化为类型化记录
    pub fn normalize(&self, raw: &RawContractRecord) -> ContractRecord {
        ContractRecord {
            row_number: raw.row_number,
            contract_number: raw.contract_number.clone(),
            client_enterprise: raw.client_enterprise.clone(),
            supply_center: raw.supply_center.clone(),
            country: raw.country.clone(),
            city: raw.city.clone(),
            industry: raw.industry.clone(),
            product_code: raw.product_code.clone(),
            product_name: raw.product_name.clone(),
            product_model: raw.product_model.clone(),
            unit_price: self.clean_int(&raw.unit_price),
            quantity: self.clean_int(&raw.quantity),
            contract_date: self.clean_date(&raw.contract_date),
            estimated_delivery_date: self.clean_date(&raw.estimated_delivery_date),
            lodgement_date: self.clean_date(&raw.lodgement_date),
            director: raw.director.clone(),
            salesman: raw.salesman.clone(),
            salesman_number: self.clean_int(&raw.salesman_number),
            gender: raw.gender.clone(),
            age: self.clean_int(&raw.age),
            mobile_phone: raw.mobile_phone.clone(),
        }
    }
}
