use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{migrate_config_file, missing_fields};
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            if path.exists() {
                println!("📄 Current configuration ({}):\n", path.display());
                ConfigLogic::print(&path)?;
            } else {
                println!("📄 No configuration file yet, effective defaults:\n");
                println!("{}", cfg.to_yaml()?);
            }
        }

        if *check {
            let missing = missing_fields(&path)?;
            if missing.is_empty() {
                success("Configuration is complete.");
            } else {
                warning(format!(
                    "Missing fields (defaults apply): {}",
                    missing.join(", ")
                ));
            }
            cfg.validate()?;
        }

        if *migrate {
            migrate_config_file(&path)?;
        }

        if *edit_config {
            if !path.exists() {
                warning("No configuration file yet: run `safeentry init` first.");
            } else {
                ConfigLogic::edit(&path, editor)?;
            }
        }
    }

    Ok(())
}
