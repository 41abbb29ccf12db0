use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use zkvault_core::KdfParams;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct VaultConfig {
    #[serde(default)]
    pub kdf: KdfParams,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default)]
    pub pretty: bool,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

/// Resolve the config path from `--config` or the XDG default.
pub fn resolve_config_path(override_path: Option<&str>) -> anyhow::Result<PathBuf> {
    match override_path {
        Some(path) if !path.trim().is_empty() => Ok(PathBuf::from(path)),
        _ => default_config_path(),
    }
}

/// Load config, falling back to defaults when the file does not exist.
///
/// KDF parameters below their floors are rejected here rather than at first use.
pub fn load_config(path: &Path) -> anyhow::Result<VaultConfig> {
    if !path.exists() {
        return Ok(VaultConfig::default());
    }
    let config = read_config(path)?;
    config
        .kdf
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid [kdf] section in {}: {}", path.display(), e))?;
    Ok(config)
}

pub fn read_config(path: &Path) -> anyhow::Result<VaultConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn render_config(config: &VaultConfig) -> anyhow::Result<String> {
    toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("zkvault"));
        }
    }
    Ok(home_dir()?.join(".config").join("zkvault"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use zkvault_core::KdfAlgorithm;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.kdf, KdfParams::default());
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_parse_argon2_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[kdf]\nalgorithm = \"argon2id\"\nmemory_kib = 131072\n\n[output]\npretty = true\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.kdf.algorithm, KdfAlgorithm::Argon2id);
        assert_eq!(config.kdf.memory_kib, 131_072);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_weakened_kdf_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[kdf]\niterations = 1000\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("at least 600000"));
    }

    #[test]
    fn test_render_round_trips() {
        let rendered = render_config(&VaultConfig::default()).unwrap();
        assert!(rendered.contains("pbkdf2_sha256"));
        let parsed: VaultConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.kdf, KdfParams::default());
    }

    #[test]
    fn test_override_path_wins() {
        let path = resolve_config_path(Some("/tmp/custom.toml")).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/custom.toml"));
    }
}
