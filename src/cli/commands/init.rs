use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{Anchor, clear_resolutions, load_anchor, save_anchor};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use chrono::Local;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite state file and its migrations
///  - the dataset anchor (seed + current instant)
///
/// Re-running `init` keeps an existing anchor unless `--seed` is given.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Init { seed } = &cli.command else {
        return Ok(());
    };

    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing SafeEntry…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  State file  : {}", &db_path);

    let pool = DbPool::create(&db_path)?;
    let conn = &pool.conn;

    let existing = load_anchor(conn)?;
    let anchor = match (existing, seed) {
        (Some(a), None) => {
            info(format!(
                "Keeping existing dataset (seed {}, anchored {})",
                a.seed,
                a.anchored_at.format("%Y-%m-%d %H:%M:%S")
            ));
            a
        }
        (prev, _) => {
            if prev.is_some() {
                let dropped = clear_resolutions(conn)?;
                warning(format!(
                    "Re-anchoring dataset: {dropped} stored resolution(s) cleared."
                ));
            }
            let a = Anchor {
                seed: seed.unwrap_or(cfg.seed),
                anchored_at: Local::now(),
            };
            save_anchor(conn, &a)?;
            a
        }
    };

    audit::record_or_warn(
        conn,
        "init",
        &db_path,
        &format!("State file initialized with seed {}", anchor.seed),
    );

    success(format!("Dataset anchored with seed {}", anchor.seed));
    println!("🎉 SafeEntry initialization completed!");
    Ok(())
}
