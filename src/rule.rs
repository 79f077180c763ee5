//! The rewrite engine.
//!
//! Orchestrates resolution and the applicability strategy, then attaches
//! parameter names to arguments in place. Conversion is opportunistic and
//! best-effort: every resolution failure degrades to "no change", and a pass
//! that attaches zero names reports no change so hosts never record no-op
//! rewrites.

use crate::ast::{Argument, CallSite};
use crate::config::RuleConfig;
use crate::eval::const_eval;
use crate::reflection::{ParameterInfo, ReflectionProvider};
use crate::resolve::{resolve_class, resolve_parameters};
use crate::strategy::{ApplicabilityStrategy, StrategyKind};

/// The call node kinds the rule wants to be invoked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    FunctionCall,
    MethodCall,
    StaticCall,
    New,
}

/// Self-description of the rule for host documentation surfaces.
#[derive(Debug, Clone, Copy)]
pub struct RuleDefinition {
    pub name: &'static str,
    pub summary: &'static str,
    pub bad_code: &'static str,
    pub good_code: &'static str,
}

pub struct AddNamedArguments {
    strategy: Box<dyn ApplicabilityStrategy>,
    skip_matching_defaults: bool,
}

impl Default for AddNamedArguments {
    fn default() -> Self {
        Self::new()
    }
}

impl AddNamedArguments {
    /// Rule with the default strategy and no refinements.
    pub fn new() -> Self {
        Self::from_config(&RuleConfig::default())
    }

    pub fn from_config(config: &RuleConfig) -> Self {
        Self {
            strategy: config.strategy.instantiate(),
            skip_matching_defaults: config.skip_matching_defaults,
        }
    }

    /// Rule with a caller-supplied strategy implementation. Refinements
    /// default off; enable them with [`Self::skip_matching_defaults`].
    pub fn with_strategy(strategy: Box<dyn ApplicabilityStrategy>) -> Self {
        Self { strategy, skip_matching_defaults: false }
    }

    pub fn skip_matching_defaults(mut self, enabled: bool) -> Self {
        self.skip_matching_defaults = enabled;
        self
    }

    pub fn with_kind(kind: StrategyKind) -> Self {
        Self::from_config(&RuleConfig::default().with_strategy(kind))
    }

    pub fn node_kinds() -> &'static [NodeKind] {
        &[NodeKind::FunctionCall, NodeKind::MethodCall, NodeKind::StaticCall, NodeKind::New]
    }

    pub fn rule_definition() -> RuleDefinition {
        RuleDefinition {
            name: "add-named-arguments",
            summary: "Convert all arguments to named arguments",
            bad_code: r#"$user->setPassword("123456");"#,
            good_code: r#"$user->setPassword(password: "123456");"#,
        }
    }

    /// Rewrite one call site in place. Returns true only if at least one
    /// argument gained a name.
    pub fn refactor(&self, call: &mut CallSite, provider: &dyn ReflectionProvider) -> bool {
        let parameters = resolve_parameters(call, provider);
        let class = resolve_class(call, provider);
        if !self.strategy.should_apply(call, &parameters, class, provider) {
            return false;
        }
        self.add_names_to_args(call, &parameters, provider)
    }

    /// Convenience driver for hosts holding a flat list of candidate calls.
    /// Returns how many were changed.
    pub fn apply_all(&self, calls: &mut [CallSite], provider: &dyn ReflectionProvider) -> usize {
        let mut changed = 0;
        for call in calls.iter_mut() {
            if self.refactor(call, provider) {
                changed += 1;
            }
        }
        changed
    }

    fn add_names_to_args(
        &self,
        call: &mut CallSite,
        parameters: &[ParameterInfo],
        provider: &dyn ReflectionProvider,
    ) -> bool {
        let mut named = false;
        for (index, arg) in call.args.iter_mut().enumerate() {
            let Some(parameter) = parameters.get(index) else {
                continue;
            };
            if arg.name.is_some() {
                continue;
            }
            if parameter.variadic || arg.unpack || arg.placeholder {
                continue;
            }
            if self.skip_matching_defaults && matches_default(arg, parameter, provider) {
                // Naming a default-matching value adds no information; the
                // argument stays positional. A skip on its own is not a
                // change: only attached names count.
                continue;
            }
            arg.name = Some(parameter.name.clone());
            named = true;
        }
        named
    }
}

fn matches_default(
    arg: &Argument,
    parameter: &ParameterInfo,
    provider: &dyn ReflectionProvider,
) -> bool {
    if !parameter.optional {
        return false;
    }
    let Some(default) = &parameter.default else {
        return false;
    };
    // Either side failing to evaluate means "values differ".
    let Some(arg_value) = const_eval(&arg.value, provider) else {
        return false;
    };
    let Some(default_value) = const_eval(default, provider) else {
        return false;
    };
    arg_value == default_value
}
