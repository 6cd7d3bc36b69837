use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use oav_core::Severity;
use oav_validate::RuleConfig;

pub const CONFIG_FILE_NAME: &str = ".validaterc.toml";

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub operations: OperationsConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OperationsConfig {
    #[serde(default = "default_naming_convention")]
    pub operation_id_naming_convention: String, // "error" | "warning" | "info" | "off"
}

fn default_naming_convention() -> String {
    "warning".to_string()
}

impl Default for OperationsConfig {
    fn default() -> Self {
        Self {
            operation_id_naming_convention: default_naming_convention(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let cfg: Config = toml::from_str(&s).with_context(|| format!("parse {}", path.display()))?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        let s = toml::to_string_pretty(self).with_context(|| "serialize toml")?;
        std::fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }

    /// Typed severities for the rule engine. Unknown strings come out as `off`.
    pub fn rule_config(&self) -> RuleConfig {
        RuleConfig {
            operation_id_naming_convention: Severity::from_config(&self.operations.operation_id_naming_convention),
        }
    }

    pub fn config_path(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE_NAME)
    }

    /// Nearest config file in `start` or any of its ancestors.
    pub fn discover(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(Self::config_path)
            .find(|candidate| candidate.is_file())
    }
}
