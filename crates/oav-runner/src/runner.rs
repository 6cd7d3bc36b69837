use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use oav_core::ResolvedDocument;
use oav_validate::{default_rules, Rule, RuleConfig, ValidateInput};

use crate::report::{FileReport, RunReport};
use crate::Config;

pub struct Runner {
    pub cfg: Config,
    /// Where `cfg` came from; `None` means built-in defaults.
    pub config_source: Option<PathBuf>,
    rule_config: RuleConfig,
    rules: Vec<Box<dyn Rule>>,
}

impl Runner {
    /// Pick up the nearest config file above `cwd`, unless `default_mode`
    /// asks for the built-in defaults.
    pub fn open(cwd: &Path, default_mode: bool) -> Result<Self> {
        if default_mode {
            tracing::debug!("default mode, ignoring config files");
            return Ok(Self::with_config(Config::default(), None));
        }
        match Config::discover(cwd) {
            Some(path) => {
                tracing::debug!(config = %path.display(), "using config file");
                let cfg = Config::load_from(&path)?;
                Ok(Self::with_config(cfg, Some(path)))
            }
            None => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::with_config(Config::default(), None))
            }
        }
    }

    pub fn with_config(cfg: Config, config_source: Option<PathBuf>) -> Self {
        let rule_config = cfg.rule_config();
        Self {
            cfg,
            config_source,
            rule_config,
            rules: default_rules(),
        }
    }

    /// Write (or reset) the default config file in `dir`.
    pub fn init_repo(dir: &Path) -> Result<PathBuf> {
        let path = Config::config_path(dir);
        Config::default().save_to(&path)?;
        Ok(path)
    }

    pub fn rule_ids(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    pub fn validate_document(&self, file: &Path, doc: &ResolvedDocument) -> FileReport {
        let input = ValidateInput::new(doc, &self.rule_config);
        let diagnostics = self
            .rules
            .iter()
            .flat_map(|rule| {
                tracing::debug!(rule = rule.id(), file = %file.display(), "running rule");
                rule.eval(&input)
            })
            .collect();
        FileReport::new(file.to_path_buf(), oav_spec::document_digest(doc), diagnostics)
    }

    /// Load every file first, then validate. A file that cannot be loaded
    /// aborts the run before any rule has looked at anything.
    pub fn run(&self, files: &[PathBuf]) -> Result<RunReport> {
        let mut docs = Vec::with_capacity(files.len());
        for file in files {
            let doc = oav_spec::load_document(file).with_context(|| format!("load {}", file.display()))?;
            docs.push((file, doc));
        }

        let mut report = RunReport::default();
        for (file, doc) in docs {
            let file_report = self.validate_document(file, &doc);
            tracing::info!(
                file = %file.display(),
                errors = file_report.errors.len(),
                warnings = file_report.warnings.len(),
                infos = file_report.infos.len(),
                "validated"
            );
            report.files.push(file_report);
        }
        Ok(report)
    }
}
