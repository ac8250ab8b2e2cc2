use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{dataset, profile, qr};
use crate::errors::AppResult;
use crate::export::ensure_writable;
use crate::ui::messages::success;
use std::fs;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Qr {
        id,
        svg,
        size,
        force,
    } = cmd
    {
        let state = dataset::load(cfg)?;
        let manhole = profile::lookup(&state.dataset, id)?;
        let payload = qr::payload(&cfg.uri_scheme, &manhole.id);

        match svg {
            Some(file) => {
                let path = Path::new(file);
                ensure_writable(path, *force)?;
                fs::write(path, qr::render_svg(&payload, *size)?)?;
                success(format!("QR tag for {} written to {}", manhole.id, path.display()));
            }
            None => {
                println!("{}", qr::render_terminal(&payload)?);
                println!("{} - {}", manhole.id, manhole.name);
            }
        }
        println!("Payload: {payload}");
    }
    Ok(())
}
