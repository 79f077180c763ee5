//! In-memory program model.
//!
//! A [`ReflectionProvider`] backed by plain maps, populated through
//! registration methods. Tests build fixtures with it; embedders without a
//! full host framework can use it directly.

use std::collections::HashMap;

use crate::ast::{Expr, LexicalScope};
use crate::eval::ConstValue;
use crate::reflection::{CallableInfo, ClassInfo, ReflectionProvider, TypeRepr};

#[derive(Debug, Default)]
pub struct ProgramModel {
    classes: HashMap<String, ClassInfo>,
    functions: HashMap<String, CallableInfo>,
    constants: HashMap<String, ConstValue>,
    var_types: HashMap<String, TypeRepr>,
}

impl ProgramModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_class(&mut self, class: ClassInfo) {
        self.classes.insert(class.name.clone(), class);
    }

    pub fn add_function(&mut self, function: CallableInfo) {
        self.functions.insert(function.name.clone(), function);
    }

    pub fn define_constant(&mut self, name: impl Into<String>, value: ConstValue) {
        self.constants.insert(name.into(), value);
    }

    /// Declare the static type of a variable, so that method calls through
    /// it can resolve their receiver class.
    pub fn bind_var(&mut self, name: impl Into<String>, ty: TypeRepr) {
        self.var_types.insert(name.into(), ty);
    }
}

impl ReflectionProvider for ProgramModel {
    fn class(&self, name: &str) -> Option<&ClassInfo> {
        self.classes.get(name)
    }

    fn function(&self, name: &str, _scope: Option<&LexicalScope>) -> Option<&CallableInfo> {
        self.functions.get(name)
    }

    fn type_of(&self, expr: &Expr, _scope: Option<&LexicalScope>) -> TypeRepr {
        match expr {
            Expr::Var(name) => {
                self.var_types.get(name).cloned().unwrap_or(TypeRepr::Unknown)
            }
            Expr::Str(_) => TypeRepr::named("string"),
            Expr::Int(_) => TypeRepr::named("int"),
            Expr::Float(_) => TypeRepr::named("float"),
            Expr::Bool(_) => TypeRepr::named("bool"),
            _ => TypeRepr::Unknown,
        }
    }

    fn constant(&self, name: &str) -> Option<ConstValue> {
        self.constants.get(name).cloned()
    }
}
