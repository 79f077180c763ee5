//! The reflection-provider boundary.
//!
//! All class, function, and type lookups flow through the
//! [`ReflectionProvider`] trait; the host framework supplies the real
//! implementation backed by its program model, and [`crate::model`] ships an
//! in-memory one. The snapshot types here (`ClassInfo`, `CallableInfo`,
//! `ParameterInfo`) are read-only for the duration of one call-site decision.

use std::collections::HashMap;

use crate::ast::{DocComment, Expr, LexicalScope};
use crate::eval::ConstValue;

/// Declared type of a parameter, as far as the rule needs to compare them.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeRepr {
    Named(String),
    Nullable(Box<TypeRepr>),
    Unknown,
}

impl TypeRepr {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn nullable(inner: TypeRepr) -> Self {
        Self::Nullable(Box::new(inner))
    }

    /// Type equality for the permissive same-type heuristic. `Unknown` never
    /// equals `Unknown`: two undeclared types must not count as "same type".
    pub fn same_as(&self, other: &TypeRepr) -> bool {
        match (self, other) {
            (TypeRepr::Named(a), TypeRepr::Named(b)) => a == b,
            (TypeRepr::Nullable(a), TypeRepr::Nullable(b)) => a.same_as(b),
            _ => false,
        }
    }
}

/// One formal parameter of a resolved callable.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterInfo {
    pub name: String,
    pub position: usize,
    pub variadic: bool,
    pub optional: bool,
    /// Declared default value, present only for optional parameters that
    /// have a statically visible default.
    pub default: Option<Expr>,
    pub ty: TypeRepr,
}

impl ParameterInfo {
    pub fn new(name: impl Into<String>, position: usize, ty: TypeRepr) -> Self {
        Self { name: name.into(), position, variadic: false, optional: false, default: None, ty }
    }

    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn with_default(mut self, default: Expr) -> Self {
        self.optional = true;
        self.default = Some(default);
        self
    }
}

/// One resolved parameter-list shape of a callable.
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    pub params: Vec<ParameterInfo>,
}

impl Signature {
    pub fn new(params: Vec<ParameterInfo>) -> Self {
        Self { params }
    }
}

/// A resolved function, method, or constructor declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct CallableInfo {
    pub name: String,
    pub doc: Option<DocComment>,
    pub variants: Vec<Signature>,
}

impl CallableInfo {
    /// A callable with a single signature variant.
    pub fn new(name: impl Into<String>, params: Vec<ParameterInfo>) -> Self {
        Self { name: name.into(), doc: None, variants: vec![Signature::new(params)] }
    }

    /// A callable with several signature variants (overloads or
    /// template-like declarations that cannot be collapsed).
    pub fn overloaded(name: impl Into<String>, variants: Vec<Signature>) -> Self {
        Self { name: name.into(), doc: None, variants }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(DocComment::new(doc));
        self
    }

    /// The single resolved signature variant. `None` unless exactly one
    /// variant exists: ambiguous callables are refused, never guessed at.
    pub fn only_variant(&self) -> Option<&Signature> {
        match self.variants.as_slice() {
            [variant] => Some(variant),
            _ => None,
        }
    }

    pub fn disallows_named_arguments(&self) -> bool {
        self.doc.as_ref().is_some_and(DocComment::disallows_named_arguments)
    }
}

/// A resolved class or interface declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassInfo {
    pub name: String,
    pub parent: Option<String>,
    pub is_interface: bool,
    pub doc: Option<DocComment>,
    pub constructor: Option<CallableInfo>,
    pub methods: HashMap<String, CallableInfo>,
}

impl ClassInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            is_interface: false,
            doc: None,
            constructor: None,
            methods: HashMap::new(),
        }
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self { is_interface: true, ..Self::new(name) }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(DocComment::new(doc));
        self
    }

    pub fn with_constructor(mut self, params: Vec<ParameterInfo>) -> Self {
        self.constructor = Some(CallableInfo::new("__construct", params));
        self
    }

    pub fn with_method(mut self, method: CallableInfo) -> Self {
        self.methods.insert(method.name.clone(), method);
        self
    }

    pub fn has_constructor(&self) -> bool {
        self.constructor.is_some()
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    pub fn method(&self, name: &str) -> Option<&CallableInfo> {
        self.methods.get(name)
    }

    pub fn disallows_named_arguments(&self) -> bool {
        self.doc.as_ref().is_some_and(DocComment::disallows_named_arguments)
    }
}

/// Synchronous, in-memory lookups against the host's already-built program
/// model. No call in this trait blocks or fails loudly; absence is `None`.
pub trait ReflectionProvider {
    fn class(&self, name: &str) -> Option<&ClassInfo>;

    fn has_class(&self, name: &str) -> bool {
        self.class(name).is_some()
    }

    fn function(&self, name: &str, scope: Option<&LexicalScope>) -> Option<&CallableInfo>;

    fn has_function(&self, name: &str, scope: Option<&LexicalScope>) -> bool {
        self.function(name, scope).is_some()
    }

    /// Static type of a receiver expression.
    fn type_of(&self, expr: &Expr, scope: Option<&LexicalScope>) -> TypeRepr;

    /// Value of a named constant, if defined.
    fn constant(&self, name: &str) -> Option<ConstValue>;
}

/// The class declaration behind a receiver type, if any.
pub fn class_of_type<'a>(
    provider: &'a dyn ReflectionProvider,
    ty: &TypeRepr,
) -> Option<&'a ClassInfo> {
    match ty {
        TypeRepr::Named(name) => provider.class(name),
        TypeRepr::Nullable(inner) => class_of_type(provider, inner),
        TypeRepr::Unknown => None,
    }
}

/// Method lookup including inherited methods, walking the parent chain.
pub fn find_method<'a>(
    class: &'a ClassInfo,
    name: &str,
    provider: &'a dyn ReflectionProvider,
) -> Option<&'a CallableInfo> {
    let mut current = Some(class);
    let mut seen = Vec::new();
    while let Some(class) = current {
        if seen.contains(&class.name) {
            return None;
        }
        if let Some(method) = class.method(name) {
            return Some(method);
        }
        seen.push(class.name.clone());
        current = class.parent.as_deref().and_then(|p| provider.class(p));
    }
    None
}

/// Whether the class or any ancestor carries the no-named-arguments marker.
/// Iterative walk over the provider's parent lookup; cycles in a malformed
/// model terminate the walk rather than loop.
pub fn ancestor_disallows_named_arguments(
    class: &ClassInfo,
    provider: &dyn ReflectionProvider,
) -> bool {
    let mut current = Some(class);
    let mut seen = Vec::new();
    while let Some(class) = current {
        if seen.contains(&class.name) {
            return false;
        }
        if class.disallows_named_arguments() {
            return true;
        }
        seen.push(class.name.clone());
        current = class.parent.as_deref().and_then(|p| provider.class(p));
    }
    false
}
