use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AdapterConfig {
    /// Hides the custom derivation path controls on the import page.
    pub hide_import_derivation_path: bool,
    pub onboarding_next_page: String,
    pub default_derivation_path: String,
    /// Where the sealed vault is persisted; memory only when unset.
    pub vault_path: Option<PathBuf>,
    pub vault_kdf_memory_kib: u32,
    pub vault_kdf_iterations: u32,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            hide_import_derivation_path: false,
            onboarding_next_page: "overview".to_owned(),
            default_derivation_path: "m/44'/60'/0'/0".to_owned(),
            vault_path: None,
            vault_kdf_memory_kib: 65536,
            vault_kdf_iterations: 3,
        }
    }
}

impl AdapterConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(hide) = env_flag("HIDE_IMPORT_DERIVATION_PATH") {
            config.hide_import_derivation_path = hide;
        }
        if let Ok(page) = std::env::var("EMBER_ONBOARDING_NEXT_PAGE") {
            if !page.trim().is_empty() {
                config.onboarding_next_page = page.trim().to_owned();
            }
        }
        if let Ok(path) = std::env::var("EMBER_VAULT_PATH") {
            if !path.trim().is_empty() {
                config.vault_path = Some(PathBuf::from(path.trim()));
            }
        }
        config
    }
}

fn env_flag(name: &str) -> Option<bool> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
