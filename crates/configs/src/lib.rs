use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ValidatorConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// Snapshot of a JSON policy document on disk.
    Json,
    /// Empty in-process store; useful for dry runs.
    #[default]
    Memory,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct StoreConfig {
    #[serde(default)]
    pub kind: StoreKind,
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
    /// Fallback filter directive when `RUST_LOG` is unset.
    #[serde(default)]
    pub filter: Option<String>,
}

/// Process environment as a lookup, after loading `.env` if present.
pub fn process_env() -> impl Fn(&str) -> Option<String> {
    let _ = dotenvy::dotenv();
    |key: &str| std::env::var(key).ok()
}

pub fn load_default() -> Result<ValidatorConfig> {
    load_with(&process_env())
}

/// Read the file named by `CONFIG_PATH` (default `validator.toml`).
pub fn load_with(env: &dyn Fn(&str) -> Option<String>) -> Result<ValidatorConfig> {
    let path = env("CONFIG_PATH").unwrap_or_else(|| "validator.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<ValidatorConfig> {
    let content = std::fs::read_to_string(path)?;
    load_from_str(&content)
}

pub fn load_from_str(content: &str) -> Result<ValidatorConfig> {
    let cfg: ValidatorConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl ValidatorConfig {
    pub fn load_and_validate() -> Result<Self> {
        Self::load_and_validate_with(&process_env())
    }

    pub fn load_and_validate_with(env: &dyn Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg = load_with(env)?;
        cfg.normalize_and_validate_with(env)?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.normalize_and_validate_with(&process_env())
    }

    pub fn normalize_and_validate_with(&mut self, env: &dyn Fn(&str) -> Option<String>) -> Result<()> {
        self.store.normalize_with(env);
        self.store.validate()?;
        self.logging.normalize();
        Ok(())
    }
}

impl StoreConfig {
    /// Fill an empty path from `STORE_PATH`.
    pub fn normalize_with(&mut self, env: &dyn Fn(&str) -> Option<String>) {
        if self.path.trim().is_empty() {
            if let Some(path) = env("STORE_PATH") {
                self.path = path;
            }
        }
        self.path = self.path.trim().to_string();
    }

    pub fn validate(&self) -> Result<()> {
        if self.kind == StoreKind::Json && self.path.is_empty() {
            return Err(anyhow!("store.path is empty; set it in the config file or via STORE_PATH"));
        }
        if self.kind == StoreKind::Json && !self.path.to_lowercase().ends_with(".json") {
            return Err(anyhow!("store.path must point at a .json document, got {}", self.path));
        }
        Ok(())
    }
}

impl LoggingConfig {
    fn normalize(&mut self) {
        if self.filter.as_deref().is_some_and(|f| f.trim().is_empty()) {
            self.filter = None;
        }
    }
}
