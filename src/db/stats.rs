use crate::db::pool::DbPool;
use crate::db::queries::{count_rows, load_anchor};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) ANCHOR
    //
    match load_anchor(&pool.conn)? {
        Some(anchor) => {
            println!("{}• Seed:{} {}", CYAN, RESET, anchor.seed);
            println!(
                "{}• Anchored at:{} {}",
                CYAN,
                RESET,
                anchor.anchored_at.format("%Y-%m-%d %H:%M:%S")
            );
        }
        None => println!("{}• Anchor:{} {GREY}--{RESET}", CYAN, RESET),
    }

    //
    // 3) COUNTS
    //
    let resolutions = count_rows(&pool.conn, "alert_resolutions")?;
    let log_rows = count_rows(&pool.conn, "log")?;
    println!(
        "{}• Resolved alerts:{} {}{}{}",
        CYAN, RESET, GREEN, resolutions, RESET
    );
    println!("{}• Audit log rows:{} {}", CYAN, RESET, log_rows);

    println!();
    Ok(())
}
