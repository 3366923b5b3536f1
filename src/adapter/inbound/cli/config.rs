//! Handler for the `config` command group.

use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;

/// Execute `config show`.
pub fn execute_show(config: &Config, path: Option<&Path>) -> Result<()> {
    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "path": path.map(|p| p.display().to_string()),
            "config": serde_json::to_value(config)?,
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    match path {
        Some(path) => output::field("Path", path.display()),
        None => output::field("Path", "(defaults)"),
    }

    output::section("Selection");
    let selection = &config.selection;
    output::field("Max trades", selection.max_trades);
    output::field("Max sectors", selection.max_sectors);
    output::field("Max volatility", selection.max_volatility);
    output::field("Solve timeout", format!("{}s", selection.solve_timeout_secs));
    output::field("Candidate limit", selection.candidate_limit);

    output::section("Catalog");
    match &config.catalog.path {
        Some(path) => output::field("Path", path.display()),
        None => output::warning("No catalog configured"),
    }

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "no config file given (use --config)".to_string(),
        }
        .into());
    };

    let config = Config::load(path)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.validate",
            "path": path.display().to_string(),
            "valid": true,
            "catalog_configured": config.catalog.path.is_some(),
        }));
        return Ok(());
    }

    output::section("Config Validation");
    output::field("Path", path.display());
    output::success("Config file is valid");
    if config.catalog.path.is_none() {
        output::warning("No catalog configured; `select` will need --candidates");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;

    #[test]
    fn validate_requires_a_path() {
        let result = execute_validate(None);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "config",
                ..
            }))
        ));
    }

    #[test]
    fn validate_accepts_a_good_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[selection]\nmax_trades = 3\n").unwrap();
        assert!(execute_validate(Some(&path)).is_ok());
    }

    #[test]
    fn validate_rejects_a_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[selection]\nmax_sectors = 0\n").unwrap();
        assert!(execute_validate(Some(&path)).is_err());
    }

    #[test]
    fn validate_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = execute_validate(Some(&dir.path().join("missing.toml")));
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::ReadFile(_)))
        ));
    }

    #[test]
    fn show_prints_defaults() {
        assert!(execute_show(&Config::default(), None).is_ok());
    }
}
