// ==========================================
// 销售合同数据装载系统 - SQLite 连接初始化
// ==========================================
// 目标:
// - 统一所有 Connection::open 的 PRAGMA 行为，避免“部分连接外键开启/部分不开启”
// - 统一 busy_timeout：并行波次的多个写入任务在写锁上排队等待，而不是直接报 busy
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// 默认 busy_timeout（毫秒）
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// 配置 SQLite 连接的统一 PRAGMA
///
/// 说明：
/// - foreign_keys 需要“每个连接”单独开启
/// - busy_timeout 需要“每个连接”单独配置
pub fn configure_sqlite_connection(conn: &Connection, busy_timeout_ms: u64) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(busy_timeout_ms))?;
    Ok(())
}

/// 打开 SQLite 连接并应用统一配置（默认 busy_timeout）
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    open_sqlite_connection_with_timeout(db_path, DEFAULT_BUSY_TIMEOUT_MS)
}

/// 打开 SQLite 连接并应用统一配置（指定 busy_timeout）
///
/// 每个装载任务持有独立连接，超时值来自 LoaderConfig
pub fn open_sqlite_connection_with_timeout(
    db_path: &str,
    busy_timeout_ms: u64,
) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn, busy_timeout_ms)?;
    Ok(conn)
}
