//! End-to-end rewrite-engine scenarios.

mod common;

use common::{int, param, s, standard_model, var};
use named_args::ast::{Argument, CallSite, ClassRef, Expr};
use named_args::config::RuleConfig;
use named_args::model::ProgramModel;
use named_args::reflection::CallableInfo;
use named_args::rule::AddNamedArguments;
use named_args::strategy::{DefaultStrategy, StrategyKind};

#[test]
fn method_argument_gains_parameter_name() {
    let model = standard_model();
    let rule = AddNamedArguments::new();
    let mut call = CallSite::method(
        var("user"),
        "setPassword",
        vec![Argument::positional(s("123456"))],
    );

    assert!(rule.refactor(&mut call, &model));
    assert_eq!(call.args[0].name.as_deref(), Some("password"));
    assert_eq!(call.to_string(), r#"$user.setPassword(password: "123456")"#);
}

#[test]
fn variadic_parameter_rejects_whole_call() {
    let model = standard_model();
    let rule = AddNamedArguments::new();
    let mut call = CallSite::function(
        "foo",
        vec![
            Argument::positional(var("a")),
            Argument::unpack(var("rest")),
        ],
    );

    assert!(!rule.refactor(&mut call, &model));
    assert!(call.args.iter().all(|arg| arg.name.is_none()));
}

#[test]
fn class_level_marker_rejects_constructor_call() {
    let model = standard_model();
    let rule = AddNamedArguments::new();
    let mut call = CallSite::ctor(
        ClassRef::Named("Foo".to_string()),
        vec![Argument::positional(var("x"))],
    );

    assert!(!rule.refactor(&mut call, &model));
    assert!(call.args[0].name.is_none());
}

#[test]
fn already_named_call_is_idempotent() {
    let model = standard_model();
    let rule = AddNamedArguments::new();
    let mut call = CallSite::function("bar", vec![Argument::named("value", Expr::Int(5))]);
    let before = call.clone();

    assert!(!rule.refactor(&mut call, &model));
    assert_eq!(call, before);
}

#[test]
fn rewriting_twice_never_changes_twice() {
    let model = standard_model();
    let rule = AddNamedArguments::new();
    let mut call = CallSite::function(
        "make",
        vec![Argument::positional(Expr::Int(1)), Argument::positional(Expr::Int(2))],
    );

    assert!(rule.refactor(&mut call, &model));
    let after_first = call.clone();
    assert!(!rule.refactor(&mut call, &model));
    assert_eq!(call, after_first);
}

#[test]
fn default_matching_argument_stays_positional_when_skip_enabled() {
    let model = standard_model();
    let config = RuleConfig::default().skip_matching_defaults(true);
    let rule = AddNamedArguments::from_config(&config);
    let mut call = CallSite::function(
        "make",
        vec![Argument::positional(var("a")), Argument::positional(Expr::Int(10))],
    );

    // Argument 1 is named, argument 2 matches the default and stays
    // positional; the attached name is what makes this a change.
    assert!(rule.refactor(&mut call, &model));
    assert_eq!(call.args[0].name.as_deref(), Some("a"));
    assert!(call.args[1].name.is_none());
}

#[test]
fn all_skipped_arguments_report_no_change() {
    let mut model = ProgramModel::new();
    model.add_function(CallableInfo::new(
        "opt",
        vec![param("b", 0, int()).with_default(Expr::Int(10))],
    ));
    let config = RuleConfig::default().skip_matching_defaults(true);
    let rule = AddNamedArguments::from_config(&config);
    let mut call = CallSite::function("opt", vec![Argument::positional(Expr::Int(10))]);
    let before = call.clone();

    // Every argument matches its default, so nothing is mutated and the
    // pass must not report a rewrite.
    assert!(!rule.refactor(&mut call, &model));
    assert_eq!(call, before);
}

#[test]
fn custom_strategy_rule_can_enable_default_skip() {
    let model = standard_model();
    let rule = AddNamedArguments::with_strategy(Box::new(DefaultStrategy))
        .skip_matching_defaults(true);
    let mut call = CallSite::function(
        "make",
        vec![Argument::positional(var("a")), Argument::positional(Expr::Int(10))],
    );

    assert!(rule.refactor(&mut call, &model));
    assert_eq!(call.args[0].name.as_deref(), Some("a"));
    assert!(call.args[1].name.is_none());
}

#[test]
fn default_matching_argument_is_named_when_skip_disabled() {
    let model = standard_model();
    let rule = AddNamedArguments::new();
    let mut call = CallSite::function(
        "make",
        vec![Argument::positional(var("a")), Argument::positional(Expr::Int(10))],
    );

    assert!(rule.refactor(&mut call, &model));
    assert_eq!(call.args[1].name.as_deref(), Some("b"));
}

#[test]
fn non_matching_value_is_named_despite_skip_toggle() {
    let model = standard_model();
    let config = RuleConfig::default().skip_matching_defaults(true);
    let rule = AddNamedArguments::from_config(&config);
    let mut call = CallSite::function(
        "make",
        vec![Argument::positional(var("a")), Argument::positional(Expr::Int(11))],
    );

    assert!(rule.refactor(&mut call, &model));
    assert_eq!(call.args[1].name.as_deref(), Some("b"));
}

#[test]
fn unevaluable_value_is_named_despite_skip_toggle() {
    let model = standard_model();
    let config = RuleConfig::default().skip_matching_defaults(true);
    let rule = AddNamedArguments::from_config(&config);
    let mut call = CallSite::function(
        "make",
        vec![Argument::positional(var("a")), Argument::positional(var("b"))],
    );

    assert!(rule.refactor(&mut call, &model));
    assert_eq!(call.args[1].name.as_deref(), Some("b"));
}

#[test]
fn permissive_rejects_single_parameter_call() {
    let model = standard_model();
    let rule = AddNamedArguments::with_kind(StrategyKind::Permissive);
    let mut call = CallSite::function("f", vec![Argument::positional(var("x"))]);

    assert!(!rule.refactor(&mut call, &model));
    assert!(call.args[0].name.is_none());

    // The default strategy would have approved the same call.
    let default_rule = AddNamedArguments::new();
    assert!(default_rule.refactor(&mut call, &model));
}

#[test]
fn interface_receiver_is_left_unchanged() {
    let model = standard_model();
    let rule = AddNamedArguments::new();
    let mut call = CallSite::method(
        var("logger"),
        "log",
        vec![Argument::positional(s("boot")), Argument::positional(s("ctx"))],
    );

    assert!(!rule.refactor(&mut call, &model));
}

#[test]
fn unknown_class_and_callable_are_left_unchanged() {
    let model = standard_model();
    let rule = AddNamedArguments::new();

    let mut ctor = CallSite::ctor(ClassRef::Named("Missing".to_string()), vec![]);
    assert!(!rule.refactor(&mut ctor, &model));

    let mut func = CallSite::function("missing", vec![Argument::positional(Expr::Int(1))]);
    assert!(!rule.refactor(&mut func, &model));

    let mut method = CallSite::method(var("nobody"), "run", vec![]);
    assert!(!rule.refactor(&mut method, &model));
}

#[test]
fn top_level_apply_uses_configured_strategy() {
    let model = standard_model();
    let config = RuleConfig::from_values(&["permissive"]).unwrap();
    let mut calls = vec![
        CallSite::function("f", vec![Argument::positional(var("x"))]),
        CallSite::function(
            "make",
            vec![Argument::positional(Expr::Int(1)), Argument::positional(Expr::Int(2))],
        ),
    ];

    // `f` has one parameter (rejected by permissive); `make` has two
    // same-typed parameters (accepted).
    assert_eq!(named_args::apply(&config, &mut calls, &model), 1);
    assert!(calls[0].args[0].name.is_none());
    assert_eq!(calls[1].args[0].name.as_deref(), Some("a"));
}
