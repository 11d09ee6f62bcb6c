use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::engine::RuleCatalog;
use crate::error::{ClausewiseError, Result};
use crate::output::OutputFormat;

pub const CONFIG_FILE_NAME: &str = "clausewise.toml";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ClausewiseConfig {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub profiles: HashMap<String, ProfileOverrides>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AnalysisConfig {
    /// Regulations evaluated when the caller names none. Empty means all.
    #[serde(default)]
    pub regulations: Vec<String>,
    /// Clause types extracted sentence by sentence when the caller names none.
    #[serde(default)]
    pub clause_types: Vec<String>,
    /// Compliance score below which the CLI exits non-zero.
    #[serde(default)]
    pub fail_below: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CatalogConfig {
    /// Built-in or custom regulation names / clause types to leave out.
    #[serde(default)]
    pub disable: Vec<String>,
    #[serde(default)]
    pub regulations: Vec<CustomRegulation>,
    #[serde(default)]
    pub clauses: Vec<CustomClause>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomRegulation {
    pub name: String,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub prohibited: Vec<String>,
    #[serde(default)]
    pub risk_indicators: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomClause {
    pub clause_type: String,
    #[serde(default)]
    pub patterns: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_true")]
    pub color: bool,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProfileOverrides {
    #[serde(default)]
    pub analysis: Option<PartialAnalysisConfig>,
    #[serde(default)]
    pub output: Option<PartialOutputConfig>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct PartialAnalysisConfig {
    pub regulations: Option<Vec<String>>,
    pub clause_types: Option<Vec<String>>,
    pub fail_below: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct PartialOutputConfig {
    pub format: Option<OutputFormat>,
    pub color: Option<bool>,
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: default_true(),
        }
    }
}

impl ClausewiseConfig {
    /// Load `clausewise.toml` from the working directory, or defaults.
    pub fn load() -> Result<Self> {
        let config_path = Path::new(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %config_path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse and validate a configuration document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: ClausewiseConfig =
            toml::from_str(content).map_err(|e| ClausewiseError::Toml(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        validate_fail_below(self.analysis.fail_below)?;
        for overrides in self.profiles.values() {
            if let Some(analysis) = &overrides.analysis {
                validate_fail_below(analysis.fail_below)?;
            }
        }
        self.build_catalog().map(|_| ())
    }

    #[must_use]
    pub fn with_profile(mut self, profile_name: &str) -> Self {
        let Some(overrides) = self.profiles.get(profile_name).cloned() else {
            tracing::warn!(profile = profile_name, "unknown configuration profile, ignoring");
            return self;
        };
        if let Some(analysis) = overrides.analysis {
            if let Some(v) = analysis.regulations {
                self.analysis.regulations = v;
            }
            if let Some(v) = analysis.clause_types {
                self.analysis.clause_types = v;
            }
            if let Some(v) = analysis.fail_below {
                self.analysis.fail_below = Some(v);
            }
        }
        if let Some(output) = overrides.output {
            if let Some(v) = output.format {
                self.output.format = v;
            }
            if let Some(v) = output.color {
                self.output.color = v;
            }
        }
        self
    }

    /// Built-in catalog extended and filtered by the `[catalog]` table.
    pub fn build_catalog(&self) -> Result<RuleCatalog> {
        RuleCatalog::from_config(&self.catalog)
    }
}

fn validate_fail_below(value: Option<f64>) -> Result<()> {
    match value {
        Some(v) if !(0.0..=100.0).contains(&v) => Err(ClausewiseError::Config(format!(
            "fail_below must be between 0 and 100, got {v}"
        ))),
        _ => Ok(()),
    }
}
