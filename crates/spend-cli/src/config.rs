//! Optional TOML configuration.
//!
//! ```toml
//! [dataset]
//! publisher = "HM Treasury"
//! top_suppliers = 20
//!
//! [aliases]
//! supplier = ["beneficiary"]
//! amount_gbp = ["gross paid"]
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use spend_map::AliasRegistry;
use spend_model::CanonicalField;
use spend_report::DatasetProfile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown canonical field '{field}' in [aliases]")]
    UnknownField { field: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpendConfig {
    pub dataset: DatasetProfile,
    /// Extra aliases per canonical field name, appended after the built-in
    /// aliases.
    pub aliases: BTreeMap<String, Vec<String>>,
}

impl SpendConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// The built-in registry extended with the configured aliases.
    pub fn alias_registry(&self) -> Result<AliasRegistry, ConfigError> {
        let mut registry = AliasRegistry::builtin();
        for (name, extra) in &self.aliases {
            let field: CanonicalField = name.parse().map_err(|_| ConfigError::UnknownField {
                field: name.clone(),
            })?;
            registry = registry.with_extra_aliases(field, extra);
        }
        Ok(registry)
    }
}
