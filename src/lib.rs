//! Convert positional call arguments to named arguments where doing so is
//! semantically safe.
//!
//! This crate is the decision engine of a larger analysis/rewrite framework:
//! the host owns parsing, real-codebase type resolution (behind
//! [`reflection::ReflectionProvider`]), and writing source back to disk.
//! Given a call site and the resolved parameter list of its callable, the
//! engine decides whether conversion is safe at all (a pluggable
//! [`strategy::ApplicabilityStrategy`]) and which individual arguments
//! receive names, then annotates the argument list in place. False negatives
//! are acceptable; false positives are not.

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod eval;
pub mod model;
pub mod pretty;
pub mod reflection;
pub mod resolve;
pub mod rule;
pub mod span;
pub mod strategy;

pub use ast::{Argument, CallKind, CallSite, ClassRef, Expr};
pub use config::RuleConfig;
pub use diagnostics::ConfigError;
pub use reflection::{CallableInfo, ClassInfo, ParameterInfo, ReflectionProvider, TypeRepr};
pub use rule::AddNamedArguments;
pub use strategy::{ApplicabilityStrategy, StrategyKind};

/// Build the rule from `config` and apply it to every call site. Returns how
/// many call sites were changed.
pub fn apply(
    config: &RuleConfig,
    calls: &mut [CallSite],
    provider: &dyn ReflectionProvider,
) -> usize {
    AddNamedArguments::from_config(config).apply_all(calls, provider)
}
