use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) RECORD KEYS
    //
    let key_count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?;
    println!(
        "{}• Record keys:{} {}{}{}",
        CYAN, RESET, GREEN, key_count, RESET
    );

    //
    // 3) PER-KEY ENTRY COUNTS
    //
    let mut stmt = pool
        .conn
        .prepare("SELECT key, value FROM records ORDER BY key")?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;

    println!("{}• Keys:{}", CYAN, RESET);
    for r in rows {
        let (key, value) = r?;

        // Array values report their length; single records report "1".
        let entries = match serde_json::from_str::<serde_json::Value>(&value) {
            Ok(serde_json::Value::Array(items)) => items.len().to_string(),
            Ok(_) => "1".to_string(),
            Err(_) => format!("{}corrupt{}", GREY, RESET),
        };

        println!("    {:<28} {} entries", key, entries);
    }

    //
    // 4) AUDIT LOG SIZE
    //
    let log_count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Audit entries:{} {}", CYAN, RESET, log_count);

    println!();
    Ok(())
}
