// ==========================================
// 销售合同数据装载系统 - 合同 CSV 读取器
// ==========================================
// 职责: 按 20 列逻辑表头流式读取扁平合同导出文件
// 规则:
// - 逻辑列按名称在物理表头中定位，多余列容忍并忽略
// - 行宽必须与物理表头一致，不一致判定为记录格式错误
// - 完全空白的数据行跳过（行号仍然占用）
// ==========================================

use crate::domain::record::RawContractRecord;
use crate::importer::error::{ImportError, ImportResult};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;
use tracing::debug;

// ==========================================
// 逻辑列在物理表头中的位置
// ==========================================
struct ColumnIndex {
    contract_number: usize,
    client_enterprise: usize,
    supply_center: usize,
    country: usize,
    city: usize,
    industry: usize,
    product_code: usize,
    product_name: usize,
    product_model: usize,
    unit_price: usize,
    quantity: usize,
    contract_date: usize,
    estimated_delivery_date: usize,
    lodgement_date: usize,
    director: usize,
    salesman: usize,
    salesman_number: usize,
    gender: usize,
    age: usize,
    mobile_phone: usize,
}

impl ColumnIndex {
    fn resolve(headers: &[String]) -> ImportResult<Self> {
        let find = |name: &str| -> ImportResult<usize> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| ImportError::MissingColumn {
                    column: name.to_string(),
                })
        };

        Ok(Self {
            contract_number: find("contract number")?,
            client_enterprise: find("client enterprise")?,
            supply_center: find("supply center")?,
            country: find("country")?,
            city: find("city")?,
            industry: find("industry")?,
            product_code: find("product code")?,
            product_name: find("product name")?,
            product_model: find("product model")?,
            unit_price: find("unit price")?,
            quantity: find("quantity")?,
            contract_date: find("contract date")?,
            estimated_delivery_date: find("estimated delivery date")?,
            lodgement_date: find("lodgement date")?,
            director: find("director")?,
            salesman: find("salesman")?,
            salesman_number: find("salesman number")?,
            gender: find("gender")?,
            age: find("age")?,
            mobile_phone: find("mobile phone")?,
        })
    }
}

// ==========================================
// ContractCsvReader
// ==========================================
pub struct ContractCsvReader;

impl ContractCsvReader {
    /// 读取合同导出文件为原始记录列表
    ///
    /// 行号为 1 基数据行号（表头不计），错误信息用它定位问题行
    pub fn read_records(&self, file_path: &Path) -> ImportResult<Vec<RawContractRecord>> {
        // 检查文件存在
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        // 检查扩展名
        if let Some(ext) = file_path.extension() {
            if ext != "csv" {
                return Err(ImportError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(false) // 行宽与表头不一致即报错
            .from_reader(file);

        // 读取并整理表头
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        debug!(columns = ?headers, "CSV文件列名");

        let index = ColumnIndex::resolve(&headers)?;

        // 读取数据行
        let mut records = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let row_number = row_idx + 1;
            let record = result.map_err(|e| ImportError::MalformedRow {
                row: row_number,
                message: e.to_string(),
            })?;

            // 跳过完全空白的行
            if record.iter().all(|v| v.trim().is_empty()) {
                continue;
            }

            let field = |idx: usize| record.get(idx).unwrap_or("").trim().to_string();

            records.push(RawContractRecord {
                row_number,
                contract_number: field(index.contract_number),
                client_enterprise: field(index.client_enterprise),
                supply_center: field(index.supply_center),
                country: field(index.country),
                city: field(index.city),
                industry: field(index.industry),
                product_code: field(index.product_code),
                product_name: field(index.product_name),
                product_model: field(index.product_model),
                unit_price: field(index.unit_price),
                quantity: field(index.quantity),
                contract_date: field(index.contract_date),
                estimated_delivery_date: field(index.estimated_delivery_date),
                lodgement_date: field(index.lodgement_date),
                director: field(index.director),
                salesman: field(index.salesman),
                salesman_number: field(index.salesman_number),
                gender: field(index.gender),
                age: field(index.age),
                mobile_phone: field(index.mobile_phone),
            });
        }

        debug!(rows = records.len(), "CSV 记录读取完成");
        Ok(records)
    }
}
