use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dataset;
use crate::core::logs::LogFilter;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        search,
        overstay,
        force,
    } = cmd
    {
        let mut state = dataset::load(cfg)?;
        let filter = LogFilter {
            search: search.clone(),
            overstay_only: *overstay,
        };
        ExportLogic::export(
            &mut state.pool,
            &state.dataset,
            *format,
            file,
            range,
            &filter,
            *force,
            Local::now(),
        )?;
    }
    Ok(())
}
