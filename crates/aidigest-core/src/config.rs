use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

const CONFIG_FILE: &str = ".ai-digest.json";

fn default_output() -> String {
    "ai-digest.md".to_string()
}

fn default_query() -> String {
    "LIST FROM".to_string()
}

/// Vault-local settings, stored as JSON at `<vault>/.ai-digest.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigestConfig {
    /// Query engine command line (argv). Empty means no engine is configured.
    #[serde(default)]
    pub engine: Vec<String>,

    /// Vault-relative path of the digest document.
    #[serde(default = "default_output")]
    pub output: String,

    /// Query pre-filled into the prompt.
    #[serde(default = "default_query")]
    pub default_query: String,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            engine: Vec::new(),
            output: default_output(),
            default_query: default_query(),
        }
    }
}

impl DigestConfig {
    /// Read config from the vault root. A missing file yields the defaults.
    pub fn load(vault_root: &Path) -> Result<Self, CoreError> {
        let path = vault_root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(&path)?;
        let config = serde_json::from_str(&data)?;
        Ok(config)
    }

    /// Write config to the vault root.
    pub fn save(&self, vault_root: &Path) -> Result<(), CoreError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Config(format!("failed to serialize config: {e}")))?;
        fs::write(vault_root.join(CONFIG_FILE), json)?;
        Ok(())
    }

    /// Whether a config file already exists at the vault root.
    pub fn exists(vault_root: &Path) -> bool {
        vault_root.join(CONFIG_FILE).exists()
    }
}
