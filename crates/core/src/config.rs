//! vaultsync configuration file parsing (.vaultsync.toml)

use std::path::Path;

/// vaultsync project configuration
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    /// Regex-like patterns whose literal hidden prefixes become extra
    /// traversal roots
    pub allowlist: Vec<String>,

    /// Identifier of the syncing plugin inside the host application
    pub plugin_id: Option<String>,
}

/// Config file name
pub const CONFIG_FILE: &str = ".vaultsync.toml";

impl VaultConfig {
    /// Load config from a vault root.
    ///
    /// Returns default config if .vaultsync.toml doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(root: &Path) -> color_eyre::Result<Self> {
        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Self = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }
}
