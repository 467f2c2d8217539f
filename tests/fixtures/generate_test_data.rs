// ==========================================
// 测试数据生成器
// ==========================================
// 用途: 生成销售合同 CSV 测试数据集，供手工运行与联调使用
// 输出: tests/fixtures/datasets/*.csv
// ==========================================

use chrono::{Duration, NaiveDate};
use csv::Writer;
use sales_contract_loader::domain::EXPECTED_COLUMNS;
use std::error::Error;
use std::fs::File;

// 供货中心（中心名, 负责人），最后一个含逗号，覆盖引号字段
const CENTERS: &[(&str, &str)] = &[
    ("Asia", "David Robinson"),
    ("Europe", "Gaston Harris"),
    ("North America", "Sally Hansley"),
    (
        "Hong Kong, Macao and Taiwan regions of China",
        "Benjamin Wilson",
    ),
];

// 客户企业（名称, 国家, 城市, 行业）
const CLIENTS: &[(&str, &str, &str, &str)] = &[
    ("Acme Industrial", "China", "Shenzhen", "Manufacturing"),
    ("Globex Trading", "France", "Paris", "Retail"),
    ("Initech Systems", "Germany", "Berlin", "Software"),
    ("Umbrella Logistics", "China", "Shanghai", "Logistics"),
    ("Wayne Enterprises", "United States", "Chicago", "Energy"),
];

// 产品型号（产品代码, 产品名, 型号, 单价）
const MODELS: &[(&str, &str, &str, &str)] = &[
    ("P100", "Widget", "WX-1", "250"),
    ("P100", "Widget", "WX-2", "300"),
    ("P200", "Gadget", "G-1", "180"),
    ("P300", "Sprocket", "S-1", "95"),
    ("P300", "Sprocket", "S-2", "120"),
];

// 销售员（编号, 姓名, 性别, 年龄, 手机号）
const SALESMEN: &[(&str, &str, &str, &str, &str)] = &[
    ("3001", "Li Lei", "male", "35", "13800138000"),
    ("3002", "Han Mei", "female", "29", "13900139000"),
    ("3003", "Zhou Jie", "male", "41", "13700137000"),
];

// 合同记录结构（字段与 20 列模板一一对应）
#[derive(Clone)]
struct ContractRow {
    contract_number: String,
    client_enterprise: String,
    supply_center: String,
    country: String,
    city: String,
    industry: String,
    product_code: String,
    product_name: String,
    product_model: String,
    unit_price: String,
    quantity: String,
    contract_date: String,
    estimated_delivery_date: String,
    lodgement_date: String,
    director: String,
    salesman: String,
    salesman_number: String,
    gender: String,
    age: String,
    mobile_phone: String,
}

impl ContractRow {
    fn to_row(&self) -> Vec<String> {
        vec![
            self.contract_number.clone(),
            self.client_enterprise.clone(),
            self.supply_center.clone(),
            self.country.clone(),
            self.city.clone(),
            self.industry.clone(),
            self.product_code.clone(),
            self.product_name.clone(),
            self.product_model.clone(),
            self.unit_price.clone(),
            self.quantity.clone(),
            self.contract_date.clone(),
            self.estimated_delivery_date.clone(),
            self.lodgement_date.clone(),
            self.director.clone(),
            self.salesman.clone(),
            self.salesman_number.clone(),
            self.gender.clone(),
            self.age.clone(),
            self.mobile_phone.clone(),
        ]
    }
}

// 生成一条合同记录
//
// 客户、供货中心、销售员均由合同序号派生，保证同一实体键
// 在整个数据集内属性一致；型号由行序号派生
fn generate_contract_record(contract_idx: usize, model_idx: usize) -> ContractRow {
    let (client, country, city, industry) = CLIENTS[contract_idx % CLIENTS.len()];
    let (center, director) = CENTERS[contract_idx % CENTERS.len()];
    let (code, name, model, price) = MODELS[model_idx % MODELS.len()];
    let (number, salesman, gender, age, mobile) = SALESMEN[contract_idx % SALESMEN.len()];

    let base = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let contract_date = base + Duration::days((contract_idx % 300) as i64);
    let estimated = contract_date + Duration::days(30);
    let lodgement = contract_date + Duration::days(45);

    ContractRow {
        contract_number: format!("C{:04}", contract_idx + 1),
        client_enterprise: client.to_string(),
        supply_center: center.to_string(),
        country: country.to_string(),
        city: city.to_string(),
        industry: industry.to_string(),
        product_code: code.to_string(),
        product_name: name.to_string(),
        product_model: model.to_string(),
        unit_price: price.to_string(),
        quantity: format!("{}", 1 + (model_idx % 20)),
        contract_date: contract_date.format("%Y/%m/%d").to_string(),
        estimated_delivery_date: estimated.format("%Y/%m/%d").to_string(),
        lodgement_date: lodgement.format("%Y/%m/%d").to_string(),
        director: director.to_string(),
        salesman: salesman.to_string(),
        salesman_number: number.to_string(),
        gender: gender.to_string(),
        age: age.to_string(),
        mobile_phone: mobile.to_string(),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("开始生成测试数据集...");
    std::fs::create_dir_all("tests/fixtures/datasets")?;

    // 1. 生成干净数据 (200条)
    generate_clean_contracts()?;

    // 2. 生成重复实体数据 (6份合同各10条明细)
    generate_duplicate_entities()?;

    // 3. 生成脏日期数据
    generate_dirty_dates()?;

    println!("✓ 所有测试数据集生成完成！");
    Ok(())
}

fn generate_clean_contracts() -> Result<(), Box<dyn Error>> {
    let path = "tests/fixtures/datasets/01_clean_contracts.csv";
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(EXPECTED_COLUMNS)?;

    for i in 0..200 {
        let record = generate_contract_record(i, i);
        wtr.write_record(&record.to_row())?;
    }

    wtr.flush()?;
    println!("✓ 生成 01_clean_contracts.csv (200条)");
    Ok(())
}

fn generate_duplicate_entities() -> Result<(), Box<dyn Error>> {
    let path = "tests/fixtures/datasets/02_duplicate_entities.csv";
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(EXPECTED_COLUMNS)?;

    // 每份合同 10 条明细，实体高度重复，去重后只剩少量成员
    for i in 0..60 {
        let record = generate_contract_record(i / 10, i);
        wtr.write_record(&record.to_row())?;
    }

    wtr.flush()?;
    println!("✓ 生成 02_duplicate_entities.csv (60条)");
    Ok(())
}

fn generate_dirty_dates() -> Result<(), Box<dyn Error>> {
    let path = "tests/fixtures/datasets/03_dirty_dates.csv";
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(EXPECTED_COLUMNS)?;

    // 轮换各种待清洗的日期写法
    let dirty_dates = [
        "2023/05/01",
        "20230501",
        "2023-05-01",
        "31-12-2022",
        "01/02/2023",
        "2023/05/01 00:00:00",
        "nan",
        "NaN",
        "",
        "not-a-date",
    ];

    for i in 0..40 {
        let mut record = generate_contract_record(i, i);
        record.contract_date = dirty_dates[i % dirty_dates.len()].to_string();
        wtr.write_record(&record.to_row())?;
    }

    wtr.flush()?;
    println!("✓ 生成 03_dirty_dates.csv (40条)");
    Ok(())
}
