use crate::cli::commands::dashboard::print_alert;
use crate::cli::commands::parse_ward;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::alerts::{ResolveOutcome, resolve};
use crate::core::dataset;
use crate::errors::AppResult;
use crate::ui::messages::{detail, info, section, success};
use chrono::Local;

/// Handle `alerts`
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Alerts { ward, kind, open } = cmd {
        let ward = parse_ward(ward)?;
        let state = dataset::load(cfg)?;
        let now = Local::now();

        let alerts: Vec<_> = state
            .dataset
            .alerts
            .iter()
            .filter(|a| ward.is_none_or(|w| a.ward == w))
            .filter(|a| kind.is_none_or(|k| a.kind == k))
            .filter(|a| !*open || !a.resolved)
            .collect();

        section("Alerts", Some(alerts.len().to_string()));
        if alerts.is_empty() {
            detail("No alerts.");
        }
        for alert in alerts {
            print_alert(alert, now);
        }
    }
    Ok(())
}

/// Handle `resolve`
pub fn handle_resolve(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Resolve { id, note } = cmd {
        let mut state = dataset::load(cfg)?;
        let note = note.as_deref().unwrap_or("");

        match resolve(&mut state.pool, &state.dataset, id, note)? {
            ResolveOutcome::Resolved => success(format!("Alert {} resolved.", id.to_uppercase())),
            ResolveOutcome::AlreadyResolved => {
                info(format!("Alert {} was already resolved.", id.to_uppercase()))
            }
        }
    }
    Ok(())
}
