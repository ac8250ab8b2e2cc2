use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dataset::orphan_resolutions;
use crate::db::audit;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::queries::{count_rows, load_anchor};
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{detail, info, section, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        let mut pool = DbPool::open(&cfg.database)?;

        if *migrate {
            info("Bringing the state file schema up to date…");
            run_pending_migrations(&pool.conn)?;
            success("State file schema is current.");
        }

        if *show_info {
            stats::print_db_info(&mut pool, &cfg.database)?;
        }

        if *check {
            check_state(&pool, cfg)?;
        }

        if *vacuum {
            info("Compacting the state file…");
            pool.conn.execute_batch("VACUUM;")?;
            audit::record_or_warn(&pool.conn, "vacuum", &cfg.database, "State file compacted");
            success("Vacuum completed.");
        }
    }

    Ok(())
}

/// SQLite integrity, dataset anchor and stored resolutions.
fn check_state(pool: &DbPool, cfg: &Config) -> AppResult<()> {
    section("State file check", None);

    let integrity: String = pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
    if integrity == "ok" {
        success("Integrity check passed.");
    } else {
        warning(format!("Integrity check failed: {integrity}"));
    }

    match load_anchor(&pool.conn)? {
        Some(anchor) => success(format!(
            "Dataset anchor present (seed {}, anchored {}).",
            anchor.seed,
            anchor.anchored_at.format("%Y-%m-%d %H:%M:%S")
        )),
        None => warning("No dataset anchor stored. Run `safeentry init`."),
    }

    let resolutions = count_rows(&pool.conn, "alert_resolutions")?;
    let orphans = orphan_resolutions(cfg, pool)?;
    if orphans.is_empty() {
        success(format!(
            "{resolutions} stored resolution(s), all matching current alerts."
        ));
    } else {
        warning(format!(
            "{} of {resolutions} stored resolution(s) match no current alert:",
            orphans.len()
        ));
        detail(orphans.join(", "));
    }

    Ok(())
}
