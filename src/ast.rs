//! Call-site data model.
//!
//! These nodes are the slice of a host AST that the conversion rule needs to
//! see: the four call-like node kinds, their argument lists, and the lexical
//! context (doc comment, enclosing class) used by the applicability checks.
//! Argument order is significant and is never changed — arguments are only
//! annotated with names in place.

use serde::{Deserialize, Serialize};

use crate::span::Span;

/// Doc-comment marker that opts a class, callable, or call site out of
/// named-argument conversion. The singular spelling also matches the plural
/// `@no-named-arguments` form via substring containment.
pub const NO_NAMED_ARGUMENTS_MARKER: &str = "@no-named-argument";

/// Raw doc-comment text attached to a declaration or call site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocComment(pub String);

impl DocComment {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Whether the comment carries the no-named-arguments marker.
    pub fn disallows_named_arguments(&self) -> bool {
        self.0.contains(NO_NAMED_ARGUMENTS_MARKER)
    }
}

/// Lexical context of a call site, used to resolve `self`/`static`/`parent`
/// class references and scoped function lookups.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LexicalScope {
    pub enclosing_class: Option<String>,
}

impl LexicalScope {
    pub fn in_class(name: impl Into<String>) -> Self {
        Self { enclosing_class: Some(name.into()) }
    }
}

/// The value expression of an argument or receiver.
///
/// Only the shapes the rule must understand are modeled; everything else is
/// `Opaque` and is never const-evaluable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    Null,
    /// A variable reference, e.g. `$user`.
    Var(String),
    /// A named constant reference, resolved through the reflection provider.
    ConstFetch(String),
    Neg(Box<Expr>),
    /// Source text the rule does not need to understand.
    Opaque(String),
}

/// A class reference at a static call or constructor call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClassRef {
    Named(String),
    SelfType,
    StaticType,
    ParentType,
    /// Class name computed at runtime; never statically resolvable.
    Dynamic,
}

/// A method name at a method or static call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MethodName {
    Ident(String),
    /// Method name computed at runtime; never statically resolvable.
    Dynamic,
}

/// A function name at a free-function call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FunctionName {
    Named(String),
    Dynamic,
}

/// One actual argument at a call site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    pub value: Expr,
    /// Explicit argument name, present if the source already named it or
    /// after the rule attaches one.
    pub name: Option<String>,
    /// Spread of a collection into positional arguments; cannot be named.
    pub unpack: bool,
    /// First-class-callable placeholder (`...`); cannot be named.
    pub placeholder: bool,
    pub span: Span,
}

impl Argument {
    pub fn positional(value: Expr) -> Self {
        Self { value, name: None, unpack: false, placeholder: false, span: Span::dummy() }
    }

    pub fn named(name: impl Into<String>, value: Expr) -> Self {
        Self { name: Some(name.into()), ..Self::positional(value) }
    }

    pub fn unpack(value: Expr) -> Self {
        Self { unpack: true, ..Self::positional(value) }
    }

    pub fn placeholder() -> Self {
        Self { placeholder: true, ..Self::positional(Expr::Opaque("...".to_string())) }
    }
}

/// The callee shape of a call site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CallKind {
    Function { name: FunctionName },
    Method { receiver: Expr, method: MethodName },
    Static { class: ClassRef, method: MethodName },
    New { class: ClassRef },
}

/// A syntactic invocation that is a candidate for argument naming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallSite {
    pub kind: CallKind,
    pub args: Vec<Argument>,
    pub doc: Option<DocComment>,
    pub scope: Option<LexicalScope>,
    pub span: Span,
}

impl CallSite {
    pub fn function(name: impl Into<String>, args: Vec<Argument>) -> Self {
        Self::with_kind(CallKind::Function { name: FunctionName::Named(name.into()) }, args)
    }

    pub fn method(receiver: Expr, method: impl Into<String>, args: Vec<Argument>) -> Self {
        Self::with_kind(
            CallKind::Method { receiver, method: MethodName::Ident(method.into()) },
            args,
        )
    }

    pub fn static_call(class: ClassRef, method: impl Into<String>, args: Vec<Argument>) -> Self {
        Self::with_kind(CallKind::Static { class, method: MethodName::Ident(method.into()) }, args)
    }

    pub fn ctor(class: ClassRef, args: Vec<Argument>) -> Self {
        Self::with_kind(CallKind::New { class }, args)
    }

    pub fn with_kind(kind: CallKind, args: Vec<Argument>) -> Self {
        Self { kind, args, doc: None, scope: None, span: Span::dummy() }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(DocComment::new(doc));
        self
    }

    pub fn with_scope(mut self, scope: LexicalScope) -> Self {
        self.scope = Some(scope);
        self
    }
}
