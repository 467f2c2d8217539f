// ==========================================
// 销售合同数据装载系统 - 命令行入口
// ==========================================
// 用法:
//   sales-contract-loader <csv文件> [数据库文件] [--sequential] [--json]
//
// 退出码: 0 = 全部表装载成功; 非 0 = 任何阶段失败（含部分成功）
// ==========================================

use sales_contract_loader::{logging, LoadCoordinator, LoadMode, LoaderConfig, RunReport};
use std::path::Path;
use std::process::ExitCode;

const DEFAULT_DB_PATH: &str = "sales_contracts.db";

fn print_usage() {
    eprintln!("用法: sales-contract-loader <csv文件> [数据库文件] [--sequential] [--json]");
    eprintln!("  --sequential  使用单连接单事务的顺序降级模式");
    eprintln!("  --json        以 JSON 形式输出运行报告");
}

fn print_report(report: &RunReport) {
    println!("========== 装载运行报告 ==========");
    println!("运行 ID:   {}", report.run_id);
    println!("输入文件:  {}", report.csv_path);
    println!("执行模式:  {:?}", report.mode);
    println!("读取记录:  {} 行", report.rows_read);
    println!("----------------------------------");
    for table in &report.load.table_reports {
        println!(
            "成功: {:<15} 流入 {} 行, 实际写入 {} 行 ({} ms)",
            table.table.table_name(),
            table.rows_streamed,
            table.rows_inserted,
            table.elapsed_ms
        );
    }
    for failure in &report.load.failures {
        println!(
            "失败: {:<15} 已尝试 {} 行 - {}",
            failure.table.table_name(),
            failure.rows_attempted,
            failure.message
        );
    }
    if let Some(wave) = report.load.aborted_after_wave {
        println!("装载在第 {} 波后中止，后续波次未执行", wave);
    }
    println!("----------------------------------");
    println!("解析耗时:  {} ms", report.parse_elapsed_ms);
    println!("插入耗时:  {} ms", report.load_elapsed_ms);
    println!("总耗时:    {} ms", report.total_elapsed_ms);
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let sequential = args.iter().any(|a| a == "--sequential");
    let json_output = args.iter().any(|a| a == "--json");
    let positional: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();

    let csv_path = match positional.first() {
        Some(path) => path.to_string(),
        None => {
            print_usage();
            return ExitCode::FAILURE;
        }
    };
    let db_path = positional
        .get(1)
        .map(|s| s.to_string())
        .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());

    let mode = if sequential {
        LoadMode::Sequential
    } else {
        LoadMode::Parallel
    };
    let config = LoaderConfig::new(db_path).with_mode(mode);

    let coordinator = LoadCoordinator::new(config);
    match coordinator.run(Path::new(&csv_path)).await {
        Ok(report) => {
            if json_output {
                match serde_json::to_string_pretty(&report) {
                    Ok(text) => println!("{}", text),
                    Err(e) => {
                        eprintln!("报告序列化失败: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print_report(&report);
            }
            if report.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("装载失败: {}", e);
            ExitCode::FAILURE
        }
    }
}
