use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    errors::LedgerError,
    ledger::DEFAULT_STARTING_BALANCE,
    utils::{app_data_dir, ensure_dir},
};

const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// User-tunable settings. `starting_balance` only seeds a wallet that has
/// no snapshot yet; the currency symbol and date format are display-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletConfig {
    #[serde(default = "WalletConfig::default_starting_balance")]
    pub starting_balance: f64,
    #[serde(default = "WalletConfig::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "WalletConfig::default_date_format")]
    pub date_format: String,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            starting_balance: Self::default_starting_balance(),
            currency_symbol: Self::default_currency_symbol(),
            date_format: Self::default_date_format(),
        }
    }
}

impl WalletConfig {
    fn default_starting_balance() -> f64 {
        DEFAULT_STARTING_BALANCE
    }

    fn default_currency_symbol() -> String {
        "₹".into()
    }

    fn default_date_format() -> String {
        "%Y-%m-%d".into()
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, LedgerError> {
        Self::from_base(app_data_dir())
    }

    #[cfg(test)]
    pub fn with_base_dir(base: PathBuf) -> Result<Self, LedgerError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, LedgerError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    /// Reads the config file, falling back to defaults when it is absent.
    pub fn load(&self) -> Result<WalletConfig, LedgerError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(WalletConfig::default())
        }
    }

    pub fn save(&self, config: &WalletConfig) -> Result<(), LedgerError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_defaults_when_file_absent() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.starting_balance, DEFAULT_STARTING_BALANCE);
        assert_eq!(config.currency_symbol, "₹");
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let config = WalletConfig {
            starting_balance: 750.0,
            currency_symbol: "$".into(),
            date_format: "%d/%m/%Y".into(),
        };

        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();
        assert_eq!(loaded.starting_balance, 750.0);
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.date_format, "%d/%m/%Y");
    }

    #[test]
    fn partial_config_fills_missing_keys_with_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        fs::write(manager.path(), r#"{"currency_symbol": "EUR "}"#).unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.currency_symbol, "EUR ");
        assert_eq!(loaded.starting_balance, DEFAULT_STARTING_BALANCE);
    }
}
