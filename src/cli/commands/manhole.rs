use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{dataset, profile, qr};
use crate::errors::AppResult;
use crate::ui::messages::{detail, section};
use crate::utils::colors::{GREEN, RED, RESET, color_for_risk, colorize_flag, risk_badge};
use crate::utils::formatting::{bold, meter, one_decimal};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Manhole { id } = cmd {
        let state = dataset::load(cfg)?;
        let p = profile::build(&state.dataset, &cfg.risk, id)?;
        let m = p.manhole;

        println!("🕳️  {} - {}", bold(&m.id), m.name);
        println!("   Ward        : {}", m.ward);
        println!("   Location    : {:.5}, {:.5}", m.lat, m.lng);
        println!("   Depth       : {} m", one_decimal(m.depth));
        println!("   Last cleaned: {}", m.last_cleaned_str());
        println!("   QR payload  : {}", qr::payload(&cfg.uri_scheme, &m.id));

        section("Risk", None);
        println!("   Level : {}", risk_badge(m.risk_level));
        println!(
            "   Score : {}{}{} {}",
            color_for_risk(m.risk_level),
            one_decimal(p.score),
            RESET,
            meter(p.meter_percent, 25)
        );
        println!("   Entry : {}", p.advice);
        println!("   Incidents          : {}", m.counters.incident_count);
        println!("   Rainfall index     : {}", one_decimal(m.counters.rainfall_index));
        println!("   Blockage frequency : {}", m.counters.blockage_frequency);
        println!("   Overstay count     : {}", m.counters.overstay_count);

        match p.occupied_by {
            Some(name) => println!("   Occupied by {RED}{name}{RESET}"),
            None => println!("   {GREEN}Unoccupied{RESET}"),
        }

        section("Cleaning history", Some(m.cleaning_history.len().to_string()));
        if m.cleaning_history.is_empty() {
            detail("No cleaning records.");
        } else {
            let mut table = Table::with_headers(&["DATE", "CREW", "NOTES"]);
            for c in &m.cleaning_history {
                table.add_row(vec![
                    c.date.format("%Y-%m-%d").to_string(),
                    c.crew.clone(),
                    c.notes.clone(),
                ]);
            }
            print!("{}", table.render());
        }

        section(
            "Incidents",
            Some(format!("{} open", m.open_incidents())),
        );
        if m.incidents.is_empty() {
            detail("No incidents recorded.");
        } else {
            let mut table = Table::with_headers(&["DATE", "TYPE", "STATUS", "DESCRIPTION"]);
            for i in &m.incidents {
                let status = if i.resolved { "resolved" } else { "open" };
                table.add_row(vec![
                    i.date.format("%Y-%m-%d").to_string(),
                    i.kind.clone(),
                    colorize_flag(status, !i.resolved),
                    i.description.clone(),
                ]);
            }
            print!("{}", table.render());
        }
    }
    Ok(())
}
