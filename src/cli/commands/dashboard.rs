use crate::cli::commands::parse_ward;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::countdown::Countdown;
use crate::core::dashboard::{DashboardStats, build_view};
use crate::core::dataset;
use crate::errors::AppResult;
use crate::models::alert::Alert;
use crate::models::entry::ActiveEntry;
use crate::ui::messages::{detail, info, section};
use crate::utils::colors::{GREEN, GREY, RESET, color_for_alert, risk_badge};
use crate::utils::formatting::bold;
use crate::utils::table::Table;
use crate::utils::time::{ago, format_datetime};
use chrono::{DateTime, Local};

const BAR_WIDTH: usize = 20;
const MESSAGE_WIDTH: usize = 72;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard { ward } = cmd {
        let ward = parse_ward(ward)?;
        let state = dataset::load(cfg)?;
        let now = Local::now();
        let view = build_view(&state.dataset, ward, now);

        println!(
            "🛡️  {} - supervisor {} - {}",
            bold("SafeEntry dashboard"),
            cfg.supervisor_id,
            format_datetime(&now)
        );
        if let Some(w) = ward {
            info(format!("Showing {w} only"));
        }

        print_stats(&view.stats);

        section(
            "Active Operations",
            Some(format!("{} active", view.entries.len())),
        );
        if view.entries.is_empty() {
            detail("No active operations.");
        } else {
            print!(
                "{}",
                operations_table(&view.entries, cfg.warning_ratio, now).render()
            );
        }

        section(
            "Alerts",
            Some(format!("{} open", view.open_alerts())),
        );
        if view.alerts.is_empty() {
            detail("No alerts.");
        }
        for alert in &view.alerts {
            print_alert(alert, now);
        }
    }
    Ok(())
}

fn print_stats(s: &DashboardStats) {
    section("Overview", None);
    println!("  👷 Active workers    : {}", s.active_workers);
    println!("  📋 Entries today     : {}", s.entries_today);
    println!(
        "  🔴 High-risk zones   : {} of {} manholes",
        s.high_risk_zones, s.total_manholes
    );
    println!(
        "  🚨 Alerts triggered  : {} ({} resolved)",
        s.alerts_triggered, s.resolved_alerts
    );
    if s.overstays_now > 0 {
        println!("  ⏱️  Overstays now     : {}", s.overstays_now);
    }
}

/// Active entries with their live countdown, shared with `watch`.
pub(crate) fn operations_table(
    entries: &[&ActiveEntry],
    warning_ratio: f64,
    now: DateTime<Local>,
) -> Table {
    let mut table = Table::with_headers(&[
        "WORKER", "MANHOLE", "WARD", "RISK", "ENTERED", "COUNTDOWN", "PROGRESS",
    ]);

    for e in entries {
        let state = Countdown::for_entry(e, warning_ratio).at(now);
        table.add_row(vec![
            format!("{} ({})", e.worker_name, e.worker_id),
            e.manhole_id.clone(),
            e.ward.clone(),
            risk_badge(e.risk_level),
            e.entry_time_str(),
            state.colored_full(),
            state.colored_bar(BAR_WIDTH),
        ]);
    }

    table
}

pub(crate) fn print_alert(alert: &Alert, now: DateTime<Local>) {
    let status = if alert.resolved {
        format!("{GREEN}resolved{RESET}")
    } else {
        format!("{}open{}", color_for_alert(alert.kind), RESET)
    };

    println!(
        "  {} {}{}{} {} @ {} [{}] {}{}{}",
        alert.id,
        color_for_alert(alert.kind),
        alert.kind.as_str().to_uppercase(),
        RESET,
        alert.worker_name,
        alert.manhole_id,
        status,
        GREY,
        ago(&alert.timestamp, now),
        RESET
    );
    for line in textwrap::wrap(&alert.message, MESSAGE_WIDTH) {
        detail(line);
    }
}
