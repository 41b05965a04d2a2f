//! Wiring from configuration to a ready-to-use [`ValidatorSupport`].

use common::utils::logging;
use configs::{LogFormat, LoggingConfig, StoreConfig, StoreKind, ValidatorConfig};
use models::document::PolicyDocument;
use tracing::info;

use crate::errors::StoreError;
use crate::storage::JsonServiceStore;
use crate::validation::ValidatorSupport;

/// Install the global tracing subscriber described by `cfg`.
pub fn init_logging(cfg: &LoggingConfig) {
    match cfg.format {
        LogFormat::Compact => logging::init_logging_default(cfg.filter.as_deref()),
        LogFormat::Json => logging::init_logging_json(cfg.filter.as_deref()),
    }
}

/// Open the configured store and wrap it for validators.
pub async fn open_store(cfg: &StoreConfig) -> Result<ValidatorSupport<JsonServiceStore>, StoreError> {
    let store = match cfg.kind {
        StoreKind::Json => JsonServiceStore::open(&cfg.path).await?,
        StoreKind::Memory => JsonServiceStore::from_document(PolicyDocument::default()),
    };
    info!(kind = ?cfg.kind, "validator_store_ready");
    Ok(ValidatorSupport::new(store))
}

/// Logging plus store for an already loaded configuration.
pub async fn start(cfg: &ValidatorConfig) -> Result<ValidatorSupport<JsonServiceStore>, StoreError> {
    init_logging(&cfg.logging);
    open_store(&cfg.store).await
}

/// Load the configuration named by `CONFIG_PATH` (after `.env`) and start it.
pub async fn from_env() -> anyhow::Result<ValidatorSupport<JsonServiceStore>> {
    from_lookup(&configs::process_env()).await
}

/// Same as [`from_env`] with variables resolved through `env`.
pub async fn from_lookup(
    env: &dyn Fn(&str) -> Option<String>,
) -> anyhow::Result<ValidatorSupport<JsonServiceStore>> {
    let cfg = ValidatorConfig::load_and_validate_with(env)?;
    Ok(start(&cfg).await?)
}
