//! Shared fixtures: a small program model exercising every call shape.

#![allow(dead_code)]

use named_args::ast::Expr;
use named_args::model::ProgramModel;
use named_args::reflection::{CallableInfo, ClassInfo, ParameterInfo, TypeRepr};

pub fn int() -> TypeRepr {
    TypeRepr::named("int")
}

pub fn string() -> TypeRepr {
    TypeRepr::named("string")
}

pub fn param(name: &str, position: usize, ty: TypeRepr) -> ParameterInfo {
    ParameterInfo::new(name, position, ty)
}

/// A model with:
/// - `User` exposing `setPassword(string $password)`, bound to `$user`
/// - `Foo`, doc-marked `@no-named-arguments`, with a one-parameter constructor
/// - `Logger` interface with `log($message, $context)`, bound to `$logger`
/// - free functions `bar($value)`, `make($a, $b = 10)`,
///   `foo($a, ...$rest)`, and `f($x)`
pub fn standard_model() -> ProgramModel {
    let mut model = ProgramModel::new();

    model.add_class(ClassInfo::new("User").with_method(CallableInfo::new(
        "setPassword",
        vec![param("password", 0, string())],
    )));
    model.bind_var("user", TypeRepr::named("User"));

    model.add_class(
        ClassInfo::new("Foo")
            .with_doc("/** @no-named-arguments */")
            .with_constructor(vec![param("x", 0, int())]),
    );

    model.add_class(
        ClassInfo::interface("Logger").with_method(CallableInfo::new(
            "log",
            vec![param("message", 0, string()), param("context", 1, string())],
        )),
    );
    model.bind_var("logger", TypeRepr::named("Logger"));

    model.add_function(CallableInfo::new("bar", vec![param("value", 0, int())]));
    model.add_function(CallableInfo::new(
        "make",
        vec![
            param("a", 0, int()),
            param("b", 1, int()).with_default(Expr::Int(10)),
        ],
    ));
    model.add_function(CallableInfo::new(
        "foo",
        vec![param("a", 0, int()), param("rest", 1, int()).variadic()],
    ));
    model.add_function(CallableInfo::new("f", vec![param("x", 0, int())]));

    model
}

pub fn var(name: &str) -> Expr {
    Expr::Var(name.to_string())
}

pub fn s(text: &str) -> Expr {
    Expr::Str(text.to_string())
}
