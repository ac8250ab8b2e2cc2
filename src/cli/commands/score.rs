use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::risk::counters_from_input;
use crate::errors::AppResult;
use crate::utils::colors::{RESET, color_for_risk, risk_badge};
use crate::utils::formatting::{meter, one_decimal};

/// Score ad-hoc counters with the configured policy. Needs no state file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Score {
        incidents,
        rainfall,
        blockages,
        overstays,
    } = cmd
    {
        cfg.validate()?;
        let counters = counters_from_input(*incidents, *rainfall, *blockages, *overstays)?;
        let score = cfg.risk.score(&counters);
        let level = cfg.risk.classify_score(score);

        println!(
            "Score: {}{}{} {}",
            color_for_risk(level),
            one_decimal(score),
            RESET,
            meter(cfg.risk.meter_percent(score), 25)
        );
        println!("Level: {}", risk_badge(level));
        println!("Entry: {}", level.entry_advice());
    }
    Ok(())
}
