//! Layered configuration resolution.
//!
//! Precedence (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (`TUGLINT_RULES`, `TUGLINT_FORMAT`)
//! 3. Project config (`tuglint.json` in the working directory)
//! 4. Defaults
//!
//! Every resolved value remembers where it came from via [`ConfigSource`].

use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::error::LintError;

/// Name of the project config file looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "tuglint.json";

/// Environment variable holding a comma-separated list of rule keys.
pub const ENV_RULES: &str = "TUGLINT_RULES";

/// Environment variable holding the output format.
pub const ENV_FORMAT: &str = "TUGLINT_FORMAT";

/// Default output format.
pub const DEFAULT_FORMAT: &str = "json";

// ============================================================================
// Configuration Sources
// ============================================================================

/// Configuration value source (for precedence tracking).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigSource {
    /// Built-in default value.
    Default = 0,
    /// From `tuglint.json`.
    ProjectConfig = 1,
    /// From environment variable.
    EnvVar = 2,
    /// From CLI flag (highest precedence).
    CliFlag = 3,
}

/// A configuration value with its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValue<T> {
    /// The actual value.
    pub value: T,
    /// Where the value came from.
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    /// Create a new config value with the given source.
    pub fn new(value: T, source: ConfigSource) -> Self {
        ConfigValue { value, source }
    }

    /// Replace this value if `other` comes from an equal or higher source.
    pub fn merge(self, other: ConfigValue<T>) -> ConfigValue<T> {
        if other.source >= self.source {
            other
        } else {
            self
        }
    }
}

/// Contents of `tuglint.json`. All keys are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    pub rules: Option<Vec<String>>,
    pub format: Option<String>,
    pub fail_on_findings: Option<bool>,
}

impl ProjectConfig {
    /// Read a project config file.
    pub fn load(path: &Path) -> Result<Self, LintError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| LintError::malformed(path.display().to_string(), e.to_string()))?;
        serde_json::from_str(&content)
            .map_err(|e| LintError::malformed(path.display().to_string(), e.to_string()))
    }
}

/// CLI configuration overrides.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// --rule flags. Empty means "not given".
    pub rules: Vec<String>,
    /// --format flag.
    pub format: Option<String>,
    /// --fail-on-findings flag (only ever turns the behavior on).
    pub fail_on_findings: bool,
}

// ============================================================================
// Configuration Resolution
// ============================================================================

/// Resolved configuration with precedence information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Rule keys to run. `None` means every rule activated by default.
    pub rules: Option<ConfigValue<Vec<String>>>,
    /// Output format ("json" or "text").
    pub format: ConfigValue<String>,
    /// Exit non-zero when findings are present.
    pub fail_on_findings: ConfigValue<bool>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        ResolvedConfig {
            rules: None,
            format: ConfigValue::new(DEFAULT_FORMAT.to_string(), ConfigSource::Default),
            fail_on_findings: ConfigValue::new(false, ConfigSource::Default),
        }
    }
}

impl ResolvedConfig {
    /// Resolve configuration from all sources using the process environment.
    pub fn resolve(workdir: &Path, cli_overrides: &CliOverrides) -> Result<Self, LintError> {
        Self::resolve_with_env(workdir, cli_overrides, |key| std::env::var(key).ok())
    }

    /// Resolve configuration with an explicit environment lookup.
    pub fn resolve_with_env(
        workdir: &Path,
        cli_overrides: &CliOverrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, LintError> {
        let mut config = ResolvedConfig::default();

        let project_path = workdir.join(PROJECT_CONFIG_FILE);
        if project_path.is_file() {
            let project = ProjectConfig::load(&project_path)?;
            tracing::debug!(path = %project_path.display(), "applying project config");
            config.apply_project_config(project);
        }

        config.apply_env_vars(env);
        config.apply_cli_overrides(cli_overrides);
        config.validate()?;

        Ok(config)
    }

    fn apply_project_config(&mut self, project: ProjectConfig) {
        if let Some(rules) = project.rules {
            self.set_rules(rules, ConfigSource::ProjectConfig);
        }
        if let Some(format) = project.format {
            self.set_format(&format, ConfigSource::ProjectConfig);
        }
        if let Some(fail) = project.fail_on_findings {
            self.fail_on_findings = ConfigValue::new(fail, ConfigSource::ProjectConfig);
        }
    }

    fn apply_env_vars(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(rules) = env(ENV_RULES) {
            self.set_rules(rules.split(','), ConfigSource::EnvVar);
        }
        if let Some(format) = env(ENV_FORMAT) {
            self.set_format(&format, ConfigSource::EnvVar);
        }
    }

    fn apply_cli_overrides(&mut self, overrides: &CliOverrides) {
        if !overrides.rules.is_empty() {
            self.set_rules(&overrides.rules, ConfigSource::CliFlag);
        }
        if let Some(ref format) = overrides.format {
            self.set_format(format, ConfigSource::CliFlag);
        }
        if overrides.fail_on_findings {
            self.fail_on_findings = ConfigValue::new(true, ConfigSource::CliFlag);
        }
    }

    /// Trim rule keys and drop blanks. A layer that names no rule at all
    /// leaves the lower layers in effect.
    fn set_rules<I, S>(&mut self, rules: I, source: ConfigSource)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys: Vec<String> = rules
            .into_iter()
            .map(|k| k.as_ref().trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();
        if keys.is_empty() {
            warn!(?source, "empty rule list ignored");
            return;
        }
        let value = ConfigValue::new(keys, source);
        self.rules = Some(match self.rules.take() {
            Some(existing) => existing.merge(value),
            None => value,
        });
    }

    fn set_format(&mut self, format: &str, source: ConfigSource) {
        let value = ConfigValue::new(format.trim().to_lowercase(), source);
        self.format = self.format.clone().merge(value);
    }

    fn validate(&self) -> Result<(), LintError> {
        match self.format.value.as_str() {
            "json" | "text" => Ok(()),
            other => Err(LintError::invalid_args_with_details(
                format!("unsupported output format '{}'", other),
                serde_json::json!({
                    "format": other,
                    "source": format!("{:?}", self.format.source),
                }),
            )),
        }
    }
}
