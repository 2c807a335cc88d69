// ⚙️ Runtime Configuration - environment first, CLI flags on top

use crate::ledger::{canonical_month, TypeFilter};
use crate::period::Granularity;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Ledger JSON blob; sample data when None
    pub ledger_file: Option<PathBuf>,
    pub granularity: Granularity,
    pub month: String,
    pub filter: TypeFilter,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidValue(String),
    MissingArgument(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue(msg) => write!(f, "Invalid configuration value: {}", msg),
            ConfigError::MissingArgument(flag) => write!(f, "Missing value for {}", flag),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            ledger_file: None,
            granularity: Granularity::Today,
            month: "January".to_string(),
            filter: TypeFilter::All,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup (env in production, a map in tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(path) = lookup("POCKET_LEDGER_FILE").filter(|p| !p.trim().is_empty()) {
            config.ledger_file = Some(PathBuf::from(path));
        }
        if let Some(tab) = lookup("POCKET_GRANULARITY") {
            config.set_granularity(&tab);
        }
        if let Some(month) = lookup("POCKET_MONTH") {
            config.set_month(&month)?;
        }
        if let Some(filter) = lookup("POCKET_FILTER") {
            config.filter = TypeFilter::from_str_lenient(&filter);
        }

        Ok(config)
    }

    /// Apply `--flag value` pairs; returns the remaining positional args
    pub fn apply_args(&mut self, args: &[String]) -> Result<Vec<String>, ConfigError> {
        let mut rest = Vec::new();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            let mut value = || {
                iter.next()
                    .cloned()
                    .ok_or_else(|| ConfigError::MissingArgument(arg.clone()))
            };
            match arg.as_str() {
                "--file" | "-f" => self.ledger_file = Some(PathBuf::from(value()?)),
                "--granularity" | "-g" => self.set_granularity(&value()?),
                "--month" | "-m" => self.set_month(&value()?)?,
                "--filter" => self.filter = TypeFilter::from_str_lenient(&value()?),
                _ => rest.push(arg.clone()),
            }
        }

        Ok(rest)
    }

    fn set_granularity(&mut self, tab: &str) {
        self.granularity = Granularity::from_tab(tab);
        if self.granularity == Granularity::Date {
            log::warn!("Unknown granularity '{}', charting by raw date", tab);
        }
    }

    fn set_month(&mut self, month: &str) -> Result<(), ConfigError> {
        let canonical = canonical_month(month)
            .ok_or_else(|| ConfigError::InvalidValue(format!("'{}' is not a month name", month)))?;
        self.month = canonical.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_env_values() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("POCKET_LEDGER_FILE", "/tmp/ledger.json"),
            ("POCKET_GRANULARITY", "week"),
            ("POCKET_MONTH", "october"),
            ("POCKET_FILTER", "expense"),
        ]))
        .unwrap();

        assert_eq!(config.ledger_file, Some(PathBuf::from("/tmp/ledger.json")));
        assert_eq!(config.granularity, Granularity::Week);
        assert_eq!(config.month, "October");
        assert_eq!(config.filter, TypeFilter::Expense);
    }

    #[test]
    fn test_unknown_env_granularity_falls_back_to_date() {
        let config = AppConfig::from_lookup(lookup_from(&[("POCKET_GRANULARITY", "Quarter")])).unwrap();
        assert_eq!(config.granularity, Granularity::Date);
    }

    #[test]
    fn test_invalid_month() {
        let err = AppConfig::from_lookup(lookup_from(&[("POCKET_MONTH", "Smarch")])).unwrap_err();
        assert!(err.to_string().contains("Smarch"));
    }

    #[test]
    fn test_args_override() {
        let mut config = AppConfig::default();
        let args: Vec<String> = ["totals", "--month", "feb", "-g", "Year"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        // "feb" is not a full month name
        assert!(config.apply_args(&args).is_err());

        let args: Vec<String> = ["totals", "--month", "February", "-g", "Year"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let rest = config.apply_args(&args).unwrap();

        assert_eq!(rest, vec!["totals".to_string()]);
        assert_eq!(config.month, "February");
        assert_eq!(config.granularity, Granularity::Year);
    }

    #[test]
    fn test_missing_flag_value() {
        let mut config = AppConfig::default();
        let args = vec!["--file".to_string()];
        assert!(matches!(
            config.apply_args(&args),
            Err(ConfigError::MissingArgument(_))
        ));
    }
}
