use crate::errors::{AppError, AppResult};
use crate::models::threshold::{GapThreshold, LIVE_THRESHOLD_DAYS, REGULATORY_THRESHOLD_DAYS};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Every key a complete configuration file carries.
const KNOWN_FIELDS: [&str; 5] = [
    "database",
    "live_gap_threshold_days",
    "reference_gap_threshold_days",
    "date_format",
    "separator_char",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Minimum gap length shown while editing the history.
    #[serde(default = "default_live_threshold")]
    pub live_gap_threshold_days: i64,
    /// Minimum gap length that triggers reference requests.
    #[serde(default = "default_reference_threshold")]
    pub reference_gap_threshold_days: i64,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_live_threshold() -> i64 {
    LIVE_THRESHOLD_DAYS
}
fn default_reference_threshold() -> i64 {
    REGULATORY_THRESHOLD_DAYS
}
fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            live_gap_threshold_days: default_live_threshold(),
            reference_gap_threshold_days: default_reference_threshold(),
            date_format: default_date_format(),
            separator_char: default_separator_char(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("gapcheck")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".gapcheck")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("gapcheck.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("gapcheck.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let mut cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;

        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    pub fn live_threshold(&self) -> GapThreshold {
        GapThreshold::from_days(self.live_gap_threshold_days)
    }

    pub fn reference_threshold(&self) -> GapThreshold {
        GapThreshold::from_days(self.reference_gap_threshold_days)
    }

    /// Keys missing from the configuration file (served from defaults).
    pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let yaml: serde_yaml::Value = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;

        let Some(map) = yaml.as_mapping() else {
            return Ok(KNOWN_FIELDS.to_vec());
        };

        Ok(KNOWN_FIELDS
            .iter()
            .filter(|k| !map.contains_key(serde_yaml::Value::String(k.to_string())))
            .copied()
            .collect())
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize configuration and database files.
    ///
    /// In test mode the configuration file is left untouched and only the
    /// database file is created. Returns the configuration in effect.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => dir.join("gapcheck.sqlite"),
        };

        let config = Self::with_database(db_path.clone());

        if !is_test {
            config.save(&Self::config_file())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(config)
    }
}
