use thiserror::Error;

/// Configuration-time failures. These are the only errors that escalate:
/// per-call-site resolution ambiguity always degrades to "no change".
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown strategy '{name}', expected 'default' or 'permissive'")]
    UnknownStrategy { name: String },

    #[error("expected at most one strategy, got {count}")]
    TooManyStrategies { count: usize },

    #[error("invalid rule configuration: {msg}")]
    Invalid { msg: String },
}

impl ConfigError {
    pub fn unknown_strategy(name: impl Into<String>) -> Self {
        Self::UnknownStrategy { name: name.into() }
    }

    pub fn too_many_strategies(count: usize) -> Self {
        Self::TooManyStrategies { count }
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid { msg: msg.into() }
    }
}
