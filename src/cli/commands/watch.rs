use crate::cli::commands::dashboard::operations_table;
use crate::cli::commands::parse_ward;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::countdown::Countdown;
use crate::core::dashboard::build_view;
use crate::core::dataset;
use crate::errors::AppResult;
use crate::ui::messages::{detail, warning};
use crate::utils::formatting::bold;
use crate::utils::time::format_clock;
use chrono::Local;
use std::thread;
use std::time::Duration;

const CLEAR: &str = "\x1b[2J\x1b[H";

/// Redraw the active-operation countdowns once per second.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { ward, ticks } = cmd {
        let ward = parse_ward(ward)?;
        let state = dataset::load(cfg)?;

        let mut tick: u64 = 0;
        loop {
            let now = Local::now();
            let view = build_view(&state.dataset, ward, now);

            print!("{CLEAR}");
            println!(
                "⏱️  {} - {} (Ctrl+C to stop)\n",
                bold("Active operations"),
                format_clock(&now)
            );

            if view.entries.is_empty() {
                detail("No active operations.");
            } else {
                print!(
                    "{}",
                    operations_table(&view.entries, cfg.warning_ratio, now).render()
                );
            }

            let overstayed: Vec<_> = view
                .entries
                .iter()
                .filter(|e| Countdown::for_entry(e, cfg.warning_ratio).at(now).is_overstay())
                .collect();
            for e in overstayed {
                warning(format!(
                    "{} has overstayed at {} ({})",
                    e.worker_name, e.manhole_id, e.manhole_name
                ));
            }

            tick += 1;
            if ticks.is_some_and(|limit| tick >= limit) {
                break;
            }
            thread::sleep(Duration::from_secs(1));
        }
    }
    Ok(())
}
