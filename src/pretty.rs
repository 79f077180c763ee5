//! Render a call site back into neutral call syntax.
//!
//! Used by tests and `Display`; writing real source back to disk belongs to
//! the host rewrite framework.

use std::fmt;

use crate::ast::{Argument, CallKind, CallSite, ClassRef, Expr, FunctionName, MethodName};

/// Pretty-print a single call site, e.g. `user.setPassword(password: "123456")`.
pub fn print_call(call: &CallSite) -> String {
    let mut pp = Printer::new();
    pp.emit_call(call);
    pp.buf
}

struct Printer {
    buf: String,
}

impl Printer {
    fn new() -> Self {
        Self { buf: String::new() }
    }

    fn write(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    fn emit_call(&mut self, call: &CallSite) {
        match &call.kind {
            CallKind::Function { name } => match name {
                FunctionName::Named(name) => self.write(name),
                FunctionName::Dynamic => self.write("{dynamic}"),
            },
            CallKind::Method { receiver, method } => {
                self.emit_expr(receiver);
                self.write(".");
                self.emit_method_name(method);
            }
            CallKind::Static { class, method } => {
                self.emit_class_ref(class);
                self.write("::");
                self.emit_method_name(method);
            }
            CallKind::New { class } => {
                self.write("new ");
                self.emit_class_ref(class);
            }
        }
        self.write("(");
        for (index, arg) in call.args.iter().enumerate() {
            if index > 0 {
                self.write(", ");
            }
            self.emit_arg(arg);
        }
        self.write(")");
    }

    fn emit_method_name(&mut self, method: &MethodName) {
        match method {
            MethodName::Ident(name) => self.write(name),
            MethodName::Dynamic => self.write("{dynamic}"),
        }
    }

    fn emit_class_ref(&mut self, class: &ClassRef) {
        match class {
            ClassRef::Named(name) => self.write(name),
            ClassRef::SelfType => self.write("self"),
            ClassRef::StaticType => self.write("static"),
            ClassRef::ParentType => self.write("parent"),
            ClassRef::Dynamic => self.write("{dynamic}"),
        }
    }

    fn emit_arg(&mut self, arg: &Argument) {
        if arg.placeholder {
            self.write("...");
            return;
        }
        if let Some(name) = &arg.name {
            self.write(name);
            self.write(": ");
        }
        if arg.unpack {
            self.write("...");
        }
        self.emit_expr(&arg.value);
    }

    fn emit_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Int(n) => self.write(&n.to_string()),
            Expr::Float(f) => self.write(&f.to_string()),
            Expr::Bool(b) => self.write(if *b { "true" } else { "false" }),
            Expr::Str(s) => {
                self.write("\"");
                self.write(&s.replace('\\', "\\\\").replace('"', "\\\""));
                self.write("\"");
            }
            Expr::Null => self.write("null"),
            Expr::Var(name) => {
                self.write("$");
                self.write(name);
            }
            Expr::ConstFetch(name) => self.write(name),
            Expr::Neg(inner) => {
                self.write("-");
                self.emit_expr(inner);
            }
            Expr::Opaque(text) => self.write(text),
        }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print_call(self))
    }
}
