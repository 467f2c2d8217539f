// ==========================================
// 批量 upsert 执行器测试
// ==========================================
// 测试目标: 验证单表装载的 upsert-ignore 语义、
//           流入/落库行数统计与失败时的事务回滚
// ==========================================


use rusqlite::Connection;
use sales_contract_loader::config::LoaderConfig;
use sales_contract_loader::domain::{Client, ContractDataset, OrderDetail, SupplyCenter};
use sales_contract_loader::loader::{LoadError, SqliteTableLoader, TableKind, TableLoader};
use sales_contract_loader::logging;
use test_helpers::{count_rows, create_test_db, date, sample_dataset};

#[test]
fn test_upsert_ignore_skips_existing_key() {
    logging::init_test();
    let (_db_file, db_path) = create_test_db().expect("创建测试库失败");
    let loader = SqliteTableLoader::new(LoaderConfig::new(db_path.as_str()));

    let mut dataset = ContractDataset::new();
    dataset.supply_centers.insert(SupplyCenter {
        center_name: "Asia".to_string(),
        director: "David Robinson".to_string(),
    });

    let first = loader
        .load_table(TableKind::SupplyCenter, &dataset)
        .expect("首次装载失败");
    assert_eq!(first.rows_streamed, 1);
    assert_eq!(first.rows_inserted, 1);

    // 同键重放: 流入 1 行，落库 0 行
    let second = loader
        .load_table(TableKind::SupplyCenter, &dataset)
        .expect("重放装载失败");
    assert_eq!(second.rows_streamed, 1);
    assert_eq!(second.rows_inserted, 0);

    let conn = Connection::open(&db_path).expect("打开断言连接失败");
    assert_eq!(count_rows(&conn, "supply_center"), 1);
}

#[test]
fn test_same_key_different_attributes_keeps_single_row() {
    logging::init_test();
    let (_db_file, db_path) = create_test_db().expect("创建测试库失败");
    let loader = SqliteTableLoader::new(LoaderConfig::new(db_path.as_str()));

    // 去重阶段保留的同键不同属性元组，由冲突键裁决为一行
    let mut dataset = ContractDataset::new();
    dataset.supply_centers.insert(SupplyCenter {
        center_name: "Asia".to_string(),
        director: "David Robinson".to_string(),
    });
    dataset.clients.insert(Client {
        client_name: "Acme Industrial".to_string(),
        country: "China".to_string(),
        supply_center: "Asia".to_string(),
        city: "Shenzhen".to_string(),
        industry: "Manufacturing".to_string(),
    });
    dataset.clients.insert(Client {
        client_name: "Acme Industrial".to_string(),
        country: "China".to_string(),
        supply_center: "Asia".to_string(),
        city: "Guangzhou".to_string(),
        industry: "Manufacturing".to_string(),
    });

    loader
        .load_table(TableKind::SupplyCenter, &dataset)
        .expect("供货中心装载失败");
    let report = loader
        .load_table(TableKind::Client, &dataset)
        .expect("客户装载失败");
    assert_eq!(report.rows_streamed, 2);
    assert_eq!(report.rows_inserted, 1, "同键第二条应被冲突跳过");

    let conn = Connection::open(&db_path).expect("打开断言连接失败");
    assert_eq!(count_rows(&conn, "client"), 1);
}

#[test]
fn test_fact_rows_never_deduplicated_on_load() {
    logging::init_test();
    let (_db_file, db_path) = create_test_db().expect("创建测试库失败");
    let loader = SqliteTableLoader::new(LoaderConfig::new(db_path.as_str()));

    // 明细无冲突键，完全相同的两行都要落库
    let mut dataset = sample_dataset();
    let duplicate = dataset.order_details[0].clone();
    dataset.order_details.push(duplicate);

    for &table in TableKind::sequential_order() {
        loader.load_table(table, &dataset).expect("装载失败");
    }

    let report = loader
        .load_table(TableKind::OrderDetail, &ContractDataset::new())
        .expect("空数据集装载失败");
    assert_eq!(report.rows_streamed, 0);

    let conn = Connection::open(&db_path).expect("打开断言连接失败");
    assert_eq!(count_rows(&conn, "order_detail"), 4);
}

#[test]
fn test_failed_table_rolls_back_own_transaction() {
    logging::init_test();
    let (_db_file, db_path) = create_test_db().expect("创建测试库失败");
    let loader = SqliteTableLoader::new(LoaderConfig::new(db_path.as_str()));

    // 预置一份外键自洽的数据
    let dataset = sample_dataset();
    for &table in TableKind::sequential_order() {
        loader.load_table(table, &dataset).expect("预置装载失败");
    }
    let conn = Connection::open(&db_path).expect("打开断言连接失败");
    assert_eq!(count_rows(&conn, "order_detail"), 3);

    // 再装一批明细: 第一行合法，第二行引用不存在的合同
    let mut bad_batch = ContractDataset::new();
    bad_batch.order_details.push(OrderDetail {
        contract_number: "C0001".to_string(),
        product_code: "P100".to_string(),
        product_model: "WX-1".to_string(),
        quantity: 2,
        estimated_delivery_date: date(2023, 8, 1),
        lodgement_date: date(2023, 8, 10),
        salesman_number: 3001,
    });
    bad_batch.order_details.push(OrderDetail {
        contract_number: "C9999".to_string(),
        product_code: "P100".to_string(),
        product_model: "WX-1".to_string(),
        quantity: 1,
        estimated_delivery_date: date(2023, 8, 1),
        lodgement_date: date(2023, 8, 10),
        salesman_number: 3001,
    });

    let err = loader
        .load_table(TableKind::OrderDetail, &bad_batch)
        .expect_err("外键违例应使装载失败");
    match err {
        LoadError::TableLoad {
            table,
            rows_attempted,
            ..
        } => {
            assert_eq!(table, "order_detail");
            assert_eq!(rows_attempted, 1, "失败前恰好流入一行");
        }
        other => panic!("意外的错误类型: {}", other),
    }

    // 失败任务的事务整体回滚，已流入的第一行也不留下
    assert_eq!(count_rows(&conn, "order_detail"), 3);
}

#[test]
fn test_unopenable_database_reported_as_connection_error() {
    logging::init_test();

    // 把目录当数据库路径，连接必然失败
    let dir = tempfile::tempdir().expect("创建临时目录失败");
    let dir_path = dir.path().to_str().unwrap().to_string();
    let loader = SqliteTableLoader::new(LoaderConfig::new(dir_path));

    let err = loader
        .load_table(TableKind::SupplyCenter, &ContractDataset::new())
        .expect_err("目录路径应无法作为数据库打开");
    assert!(matches!(err, LoadError::Connection(_)), "应为连接错误: {}", err);
}
