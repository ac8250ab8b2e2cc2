use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dataset;
use crate::core::heatmap::{count_by_risk, count_by_ward, filter_by_risk, to_geojson};
use crate::errors::{AppError, AppResult};
use crate::export::ensure_writable;
use crate::models::risk_level::RiskLevel;
use crate::ui::messages::{section, success};
use crate::utils::colors::{RESET, color_for_risk, risk_badge};
use crate::utils::table::Table;
use std::fs;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Heatmap {
        risk,
        wards,
        geojson,
        force,
    } = cmd
    {
        let state = dataset::load(cfg)?;
        let ds = &state.dataset;

        let counts = count_by_risk(&ds.manholes);
        section(
            "Risk heatmap",
            Some(format!("{} manholes", counts.total())),
        );
        for level in RiskLevel::ALL {
            println!("  {:<18} {}", risk_badge(level), counts.get(level));
        }

        if *wards {
            section("By ward", None);
            let mut table = Table::with_headers(&["WARD", "SAFE", "CAUTION", "DANGER", "TOTAL"]);
            for (ward, c) in count_by_ward(ds) {
                table.add_row(vec![
                    ward.to_string(),
                    c.safe.to_string(),
                    c.caution.to_string(),
                    format!("{}{}{}", color_for_risk(RiskLevel::Danger), c.danger, RESET),
                    c.total().to_string(),
                ]);
            }
            print!("{}", table.render());
        }

        let selected = filter_by_risk(ds, *risk);

        if let Some(level) = risk {
            section(
                format!("{} manholes", level.label()),
                Some(selected.len().to_string()),
            );
            let mut table = Table::with_headers(&["ID", "WARD", "LAT", "LNG", "LAST CLEANED"]);
            for m in &selected {
                table.add_row(vec![
                    m.id.clone(),
                    m.ward.clone(),
                    format!("{:.5}", m.lat),
                    format!("{:.5}", m.lng),
                    m.last_cleaned_str(),
                ]);
            }
            print!("{}", table.render());
        }

        if let Some(file) = geojson {
            let path = Path::new(file);
            ensure_writable(path, *force)?;
            let body = serde_json::to_string_pretty(&to_geojson(&selected))
                .map_err(|e| AppError::Export(e.to_string()))?;
            fs::write(path, body)?;
            success(format!(
                "{} markers written to {}",
                selected.len(),
                path.display()
            ));
        }
    }
    Ok(())
}
