//! Parameter resolution.
//!
//! Maps a call site to the ordered formal parameter list of the callable it
//! references, through the reflection provider. Resolution never fails:
//! unknown callables, dynamic names, and ambiguous multi-variant signatures
//! all yield an empty list, which downstream checks treat as "do not touch".

use crate::ast::{CallKind, CallSite, ClassRef, Expr, FunctionName, LexicalScope, MethodName};
use crate::reflection::{
    class_of_type, find_method, CallableInfo, ClassInfo, ParameterInfo, ReflectionProvider,
};

/// The ordered formal parameters of the callable behind `call`.
pub fn resolve_parameters(
    call: &CallSite,
    provider: &dyn ReflectionProvider,
) -> Vec<ParameterInfo> {
    let scope = call.scope.as_ref();
    match &call.kind {
        CallKind::New { class } => constructor_parameters(class, scope, provider),
        CallKind::Method { receiver, method } => {
            method_parameters(receiver, method, scope, provider)
        }
        CallKind::Static { class, method } => {
            static_method_parameters(class, method, scope, provider)
        }
        CallKind::Function { name } => function_parameters(name, scope, provider),
    }
}

/// The class declaration relevant to `call`: the receiver's static type for
/// method calls, the referenced class for static and constructor calls.
pub fn resolve_class<'a>(
    call: &CallSite,
    provider: &'a dyn ReflectionProvider,
) -> Option<&'a ClassInfo> {
    let scope = call.scope.as_ref();
    match &call.kind {
        CallKind::Method { receiver, .. } => {
            let ty = provider.type_of(receiver, scope);
            class_of_type(provider, &ty)
        }
        CallKind::Static { class, .. } | CallKind::New { class } => {
            resolve_class_ref(class, scope, provider)
        }
        CallKind::Function { .. } => None,
    }
}

/// The declaration backing `call`. `None` signals an unknown callable.
pub fn resolve_callable<'a>(
    call: &CallSite,
    provider: &'a dyn ReflectionProvider,
) -> Option<&'a CallableInfo> {
    let scope = call.scope.as_ref();
    match &call.kind {
        CallKind::Function { name } => {
            let FunctionName::Named(name) = name else { return None };
            provider.function(name, scope)
        }
        CallKind::Method { method, .. } | CallKind::Static { method, .. } => {
            let MethodName::Ident(method) = method else { return None };
            let class = resolve_class(call, provider)?;
            find_method(class, method, provider)
        }
        CallKind::New { .. } => {
            let class = resolve_class(call, provider)?;
            class.constructor.as_ref()
        }
    }
}

/// Resolve a class reference, with `self`/`static`/`parent` looked up
/// against the lexical scope's enclosing class.
fn resolve_class_ref<'a>(
    class: &ClassRef,
    scope: Option<&LexicalScope>,
    provider: &'a dyn ReflectionProvider,
) -> Option<&'a ClassInfo> {
    match class {
        ClassRef::Named(name) => provider.class(name),
        ClassRef::SelfType | ClassRef::StaticType => enclosing_class(scope, provider),
        ClassRef::ParentType => {
            let class = enclosing_class(scope, provider)?;
            provider.class(class.parent.as_deref()?)
        }
        ClassRef::Dynamic => None,
    }
}

fn enclosing_class<'a>(
    scope: Option<&LexicalScope>,
    provider: &'a dyn ReflectionProvider,
) -> Option<&'a ClassInfo> {
    provider.class(scope?.enclosing_class.as_deref()?)
}

fn constructor_parameters(
    class: &ClassRef,
    scope: Option<&LexicalScope>,
    provider: &dyn ReflectionProvider,
) -> Vec<ParameterInfo> {
    let Some(class) = resolve_class_ref(class, scope, provider) else {
        return Vec::new();
    };
    let Some(constructor) = &class.constructor else {
        return Vec::new();
    };
    single_variant_parameters(constructor)
}

fn method_parameters(
    receiver: &Expr,
    method: &MethodName,
    scope: Option<&LexicalScope>,
    provider: &dyn ReflectionProvider,
) -> Vec<ParameterInfo> {
    let MethodName::Ident(method) = method else {
        return Vec::new();
    };
    let ty = provider.type_of(receiver, scope);
    let Some(class) = class_of_type(provider, &ty) else {
        return Vec::new();
    };
    match find_method(class, method, provider) {
        Some(callable) => single_variant_parameters(callable),
        None => Vec::new(),
    }
}

fn static_method_parameters(
    class: &ClassRef,
    method: &MethodName,
    scope: Option<&LexicalScope>,
    provider: &dyn ReflectionProvider,
) -> Vec<ParameterInfo> {
    let MethodName::Ident(method) = method else {
        return Vec::new();
    };
    let Some(class) = resolve_class_ref(class, scope, provider) else {
        return Vec::new();
    };
    match find_method(class, method, provider) {
        Some(callable) => single_variant_parameters(callable),
        None => Vec::new(),
    }
}

fn function_parameters(
    name: &FunctionName,
    scope: Option<&LexicalScope>,
    provider: &dyn ReflectionProvider,
) -> Vec<ParameterInfo> {
    let FunctionName::Named(name) = name else {
        return Vec::new();
    };
    match provider.function(name, scope) {
        Some(callable) => single_variant_parameters(callable),
        None => Vec::new(),
    }
}

// Multi-variant signatures are ambiguous (the name bound at runtime may have
// a different parameter list per variant), so anything but exactly one
// variant resolves to an empty list.
fn single_variant_parameters(callable: &CallableInfo) -> Vec<ParameterInfo> {
    callable
        .only_variant()
        .map(|variant| variant.params.clone())
        .unwrap_or_default()
}
