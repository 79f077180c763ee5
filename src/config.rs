//! Rule configuration.
//!
//! Selected once before a rewrite pass begins and immutable afterwards; the
//! engine takes the config at construction, never through a mutable global.
//! Two entry points: a TOML section for hosts with config files, and
//! [`RuleConfig::from_values`] for hosts passing a plain list of strategy
//! selectors (at most one — more is a configuration error).

use serde::Deserialize;

use crate::diagnostics::ConfigError;
use crate::strategy::StrategyKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuleConfig {
    pub strategy: StrategyKind,
    /// Skip naming an argument whose value equals the parameter's declared
    /// default. Off by default.
    pub skip_matching_defaults: bool,
}

// ---- TOML deserialization types ----

#[derive(Deserialize)]
struct TomlConfig {
    rule: Option<TomlRuleSection>,
}

#[derive(Deserialize)]
struct TomlRuleSection {
    strategy: Option<String>,
    #[serde(default, rename = "skip-matching-defaults")]
    skip_matching_defaults: bool,
}

impl RuleConfig {
    /// Load from a TOML document with an optional `[rule]` section:
    ///
    /// ```toml
    /// [rule]
    /// strategy = "permissive"
    /// skip-matching-defaults = true
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let raw: TomlConfig =
            toml::from_str(text).map_err(|e| ConfigError::invalid(e.to_string()))?;
        let Some(section) = raw.rule else {
            return Ok(Self::default());
        };
        let strategy = match section.strategy.as_deref() {
            Some(name) => StrategyKind::from_name(name)?,
            None => StrategyKind::default(),
        };
        Ok(Self { strategy, skip_matching_defaults: section.skip_matching_defaults })
    }

    /// Build from a list of strategy selectors. Empty selects the default
    /// strategy; more than one selector is a configuration error.
    pub fn from_values(values: &[&str]) -> Result<Self, ConfigError> {
        if values.len() > 1 {
            return Err(ConfigError::too_many_strategies(values.len()));
        }
        let strategy = match values.first() {
            Some(name) => StrategyKind::from_name(name)?,
            None => StrategyKind::default(),
        };
        Ok(Self { strategy, ..Self::default() })
    }

    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn skip_matching_defaults(mut self, enabled: bool) -> Self {
        self.skip_matching_defaults = enabled;
        self
    }
}
