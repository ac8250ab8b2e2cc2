use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dataset;
use crate::core::logs::LogFilter;
use crate::errors::AppResult;
use crate::ui::messages::{section, warning};
use crate::utils::colors::{colorize_flag, colorize_optional, risk_badge};
use crate::utils::mins2readable;
use crate::utils::table::Table;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Logs { search, overstay } = cmd {
        let state = dataset::load(cfg)?;
        let now = Local::now();

        let filter = LogFilter {
            search: search.clone(),
            overstay_only: *overstay,
        };
        let logs = filter.apply(&state.dataset.entry_logs, now);

        section(
            "Entry logs",
            Some(format!(
                "{} of {}",
                logs.len(),
                state.dataset.entry_logs.len()
            )),
        );

        if logs.is_empty() {
            warning("No entry logs match the filter.");
            return Ok(());
        }

        let mut table = Table::with_headers(&[
            "ID", "WORKER", "MANHOLE", "WARD", "RISK", "ENTRY", "EXIT", "DURATION", "MAX",
            "OVERSTAY",
        ]);
        for l in logs {
            let over = l.is_overstay(now);
            table.add_row(vec![
                l.id.clone(),
                l.worker_name.clone(),
                l.manhole_id.clone(),
                l.ward.clone(),
                risk_badge(l.risk_level),
                l.entry_time_str(),
                colorize_optional(&l.exit_time_str()),
                mins2readable(l.duration_minutes(now), false, false),
                format!("{} min", l.max_duration),
                colorize_flag(if over { "yes" } else { "no" }, over),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
