//! Applicability strategies.
//!
//! A strategy decides whether a whole call site qualifies for conversion.
//! Two ship by default: the conservative [`DefaultStrategy`] and the
//! broad-adoption [`PermissiveStrategy`]. The set is open — anything
//! implementing [`ApplicabilityStrategy`] can be plugged into the rule via
//! [`crate::rule::AddNamedArguments::with_strategy`]; the string-selected
//! registry is the closed [`StrategyKind`] enum, validated at configuration
//! time.

use serde::{Deserialize, Serialize};

use crate::ast::CallSite;
use crate::diagnostics::ConfigError;
use crate::reflection::{
    ancestor_disallows_named_arguments, ClassInfo, ParameterInfo, ReflectionProvider,
};
use crate::resolve::resolve_callable;

/// Decides whether a call site should be converted at all. Per-argument
/// naming decisions stay with the rewrite engine.
pub trait ApplicabilityStrategy {
    fn should_apply(
        &self,
        call: &CallSite,
        parameters: &[ParameterInfo],
        class: Option<&ClassInfo>,
        provider: &dyn ReflectionProvider,
    ) -> bool;
}

/// Mechanical per-argument safety checks shared by both shipped strategies.
///
/// Rejects when any argument flows into an undeclared slot, binds to a
/// variadic parameter, is a spread or placeholder, or already carries a
/// name (nothing left to do).
pub(crate) fn arguments_are_nameable(call: &CallSite, parameters: &[ParameterInfo]) -> bool {
    for (index, arg) in call.args.iter().enumerate() {
        let Some(parameter) = parameters.get(index) else {
            return false;
        };
        if parameter.variadic {
            return false;
        }
        if arg.unpack || arg.placeholder {
            return false;
        }
        if arg.name.is_some() {
            return false;
        }
    }
    true
}

/// Conservative, safety-first policy: convert only when the callable is
/// fully known and nothing at the call site or in the declaration chain
/// objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStrategy;

impl ApplicabilityStrategy for DefaultStrategy {
    fn should_apply(
        &self,
        call: &CallSite,
        parameters: &[ParameterInfo],
        class: Option<&ClassInfo>,
        provider: &dyn ReflectionProvider,
    ) -> bool {
        if !arguments_are_nameable(call, parameters) {
            return false;
        }
        if let Some(class) = class {
            // A call through an interface binds a concrete implementation at
            // runtime whose parameter names may differ.
            if class.is_interface {
                return false;
            }
            if ancestor_disallows_named_arguments(class, provider) {
                return false;
            }
        }
        let Some(callable) = resolve_callable(call, provider) else {
            return false;
        };
        !callable.disallows_named_arguments()
    }
}

/// Broad-adoption heuristic: name almost everything, but skip calls where
/// names add no disambiguation value. A single parameter is unambiguous; so
/// are two parameters of different declared types.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveStrategy;

impl ApplicabilityStrategy for PermissiveStrategy {
    fn should_apply(
        &self,
        call: &CallSite,
        parameters: &[ParameterInfo],
        _class: Option<&ClassInfo>,
        _provider: &dyn ReflectionProvider,
    ) -> bool {
        if !arguments_are_nameable(call, parameters) {
            return false;
        }
        if parameters.len() == 1 {
            return false;
        }
        if parameters.len() == 2 && !parameters[0].ty.same_as(&parameters[1].ty) {
            return false;
        }
        if let Some(doc) = &call.doc {
            if doc.disallows_named_arguments() {
                return false;
            }
        }
        true
    }
}

/// The shipped strategies selectable by name in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    #[default]
    Default,
    Permissive,
}

impl StrategyKind {
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name {
            "default" => Ok(Self::Default),
            "permissive" => Ok(Self::Permissive),
            _ => Err(ConfigError::unknown_strategy(name)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Permissive => "permissive",
        }
    }

    pub fn instantiate(self) -> Box<dyn ApplicabilityStrategy> {
        match self {
            Self::Default => Box::new(DefaultStrategy),
            Self::Permissive => Box::new(PermissiveStrategy),
        }
    }
}
