//! Constant-expression evaluation.
//!
//! Used only by the default-match skip refinement: an optional parameter
//! whose argument evaluates to the parameter's declared default adds no
//! information when named. Evaluation failure is not an error — the caller
//! treats it as "values differ" and names the argument anyway.

use crate::ast::Expr;
use crate::reflection::ReflectionProvider;

/// A fully evaluated compile-time constant.
///
/// Comparison is strict: `Int(10)` and `Float(10.0)` are different values.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    Null,
}

/// Evaluate an expression to a constant, or `None` if it cannot be decided
/// statically. Named constants are resolved through the provider.
pub fn const_eval(expr: &Expr, provider: &dyn ReflectionProvider) -> Option<ConstValue> {
    match expr {
        Expr::Int(n) => Some(ConstValue::Int(*n)),
        Expr::Float(f) => Some(ConstValue::Float(*f)),
        Expr::Bool(b) => Some(ConstValue::Bool(*b)),
        Expr::Str(s) => Some(ConstValue::Str(s.clone())),
        Expr::Null => Some(ConstValue::Null),
        Expr::ConstFetch(name) => provider.constant(name),
        Expr::Neg(inner) => match const_eval(inner, provider)? {
            ConstValue::Int(n) => Some(ConstValue::Int(n.checked_neg()?)),
            ConstValue::Float(f) => Some(ConstValue::Float(-f)),
            _ => None,
        },
        Expr::Var(_) | Expr::Opaque(_) => None,
    }
}
