//! Single-line canonical rendering.
//!
//! One spelling per construct: single spaces around binary and assignment
//! operators, `, ` between list items and statements (`;` is accepted on
//! input only), single-quoted strings, no trailing commas. Structure is
//! never changed: explicit parentheses are [`ExprKind::Paren`] nodes and
//! print exactly where the author wrote them, so re-parsing the output
//! rebuilds a structurally identical tree.

use std::fmt::Write;

use dsx_ir::{
    Attribute, AttributeDetail, ElementRange, ExprArena, ExprId, ExprKind, Modifier, Name,
    Property, PropertyKey, PropertyRange, Root, SignalLink, StmtKind, StringLookup, UnaryOp,
};

/// Renders a parse result in canonical form.
#[must_use]
pub fn format_root(root: Root, arena: &ExprArena, names: &impl StringLookup) -> String {
    let mut printer = Printer::new(arena, names);
    printer.root(root);
    printer.out
}

/// Renders one expression in canonical form.
#[must_use]
pub fn format_expr(expr: ExprId, arena: &ExprArena, names: &impl StringLookup) -> String {
    let mut printer = Printer::new(arena, names);
    printer.expr(expr);
    printer.out
}

struct Printer<'a, L> {
    arena: &'a ExprArena,
    names: &'a L,
    out: String,
}

impl<'a, L: StringLookup> Printer<'a, L> {
    fn new(arena: &'a ExprArena, names: &'a L) -> Self {
        Printer {
            arena,
            names,
            out: String::new(),
        }
    }

    #[inline]
    fn push(&mut self, text: &str) {
        self.out.push_str(text);
    }

    #[inline]
    fn name(&mut self, name: Name) {
        let text = self.names.resolve(name);
        self.out.push_str(text);
    }

    fn root(&mut self, root: Root) {
        match root {
            Root::Attribute(attribute) => self.attribute(attribute),
            Root::Statement(id) => {
                let kind = self.arena.get_stmt(id).kind;
                self.stmt(kind);
            }
            Root::Sequence(range) => {
                let stmts = self.arena.get_stmts(range);
                for (i, stmt) in stmts.iter().enumerate() {
                    if i > 0 {
                        self.push(", ");
                    }
                    self.stmt(stmt.kind);
                }
            }
        }
    }

    fn stmt(&mut self, kind: StmtKind) {
        match kind {
            StmtKind::Expr(expr) => self.expr(expr),
            StmtKind::Assign { target, op, value } => {
                self.expr(target);
                self.out.push(' ');
                self.push(op.symbol());
                self.out.push(' ');
                self.expr(value);
            }
        }
    }

    fn expr(&mut self, id: ExprId) {
        let expr = *self.arena.get_expr(id);
        match expr.kind {
            ExprKind::Number(bits) => self.number(f64::from_bits(bits)),
            ExprKind::String(name) => self.string(name),
            ExprKind::Bool(value) => self.push(if value { "true" } else { "false" }),
            ExprKind::Null => self.push("null"),
            ExprKind::Undefined => self.push("undefined"),
            ExprKind::Ident(name) => self.name(name),
            ExprKind::Signal { head, chain } => {
                self.out.push('$');
                self.name(head);
                let links = self.arena.get_links(chain);
                for link in links {
                    match *link {
                        SignalLink::Member { name, optional, .. } => {
                            self.push(if optional { "?." } else { "." });
                            self.name(name);
                        }
                        SignalLink::Index { index, optional, .. } => {
                            self.push(if optional { "?.[" } else { "[" });
                            self.expr(index);
                            self.out.push(']');
                        }
                    }
                }
            }
            ExprKind::ActionCall { name, args } => {
                self.out.push('@');
                self.name(name);
                self.arguments(args);
            }
            ExprKind::Array(elements) => {
                self.out.push('[');
                self.elements(elements);
                self.out.push(']');
            }
            ExprKind::Object(properties) => self.object(properties),
            ExprKind::Binary { op, lhs, rhs } => {
                self.expr(lhs);
                self.out.push(' ');
                self.push(op.symbol());
                self.out.push(' ');
                self.expr(rhs);
            }
            ExprKind::Unary { op, operand } => {
                self.push(op.symbol());
                if op.is_word() || self.signs_would_fuse(op, operand) {
                    self.out.push(' ');
                }
                self.expr(operand);
            }
            ExprKind::Postfix { op, operand } => {
                self.expr(operand);
                self.push(op.symbol());
            }
            ExprKind::Conditional {
                test,
                consequent,
                alternate,
            } => {
                self.expr(test);
                self.push(" ? ");
                self.expr(consequent);
                self.push(" : ");
                self.expr(alternate);
            }
            ExprKind::Call { callee, args } => {
                self.expr(callee);
                self.arguments(args);
            }
            ExprKind::Member {
                object,
                property,
                optional,
            } => {
                self.expr(object);
                self.push(if optional { "?." } else { "." });
                self.name(property);
            }
            ExprKind::Index {
                object,
                index,
                optional,
            } => {
                self.expr(object);
                self.push(if optional { "?.[" } else { "[" });
                self.expr(index);
                self.out.push(']');
            }
            ExprKind::Paren(inner) => {
                self.out.push('(');
                self.expr(inner);
                self.out.push(')');
            }
            ExprKind::Arrow { params, body } => {
                let params = self.arena.get_params(params);
                if let [param] = params {
                    self.name(param.name);
                } else {
                    self.out.push('(');
                    for (i, param) in params.iter().enumerate() {
                        if i > 0 {
                            self.push(", ");
                        }
                        self.name(param.name);
                    }
                    self.out.push(')');
                }
                self.push(" => ");
                self.expr(body);
            }
        }
    }

    /// Adjacent `-`/`+` signs would lex as `--`/`++`, which have no prefix
    /// reading. A space keeps them apart.
    fn signs_would_fuse(&self, op: UnaryOp, operand: ExprId) -> bool {
        let sigil = match op {
            UnaryOp::Neg | UnaryOp::Plus => op.symbol(),
            _ => return false,
        };
        match self.arena.get_expr(operand).kind {
            ExprKind::Unary { op: inner, .. } => inner.symbol() == sigil,
            _ => false,
        }
    }

    fn arguments(&mut self, args: ElementRange) {
        self.out.push('(');
        self.elements(args);
        self.out.push(')');
    }

    fn elements(&mut self, range: ElementRange) {
        let elements = self.arena.get_elements(range);
        for (i, element) in elements.iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            if element.is_spread {
                self.push("...");
            }
            self.expr(element.value);
        }
    }

    fn object(&mut self, range: PropertyRange) {
        let properties = self.arena.get_properties(range);
        if properties.is_empty() {
            self.push("{}");
            return;
        }
        self.push("{ ");
        for (i, property) in properties.iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            match *property {
                Property::Entry { key, value, .. } => {
                    self.key(key);
                    self.push(": ");
                    self.expr(value);
                }
                Property::Spread { expr, .. } => {
                    self.push("...");
                    self.expr(expr);
                }
            }
        }
        self.push(" }");
    }

    fn key(&mut self, key: PropertyKey) {
        match key {
            PropertyKey::Ident(name) => self.name(name),
            PropertyKey::String(name) => self.string(name),
            PropertyKey::Computed(expr) => {
                self.out.push('[');
                self.expr(expr);
                self.out.push(']');
            }
        }
    }

    fn number(&mut self, value: f64) {
        if value.is_infinite() {
            // Literals past f64 range overflow to infinity during lexing;
            // 2e308 is a literal that lexes back to the same value.
            self.push("2e308");
        } else {
            // Writing to a String is infallible
            let _ = write!(self.out, "{value}");
        }
    }

    /// Strings always print single-quoted, whatever quote the author used.
    /// Contents were unescaped during lexing, so control characters and the
    /// delimiter re-escape here; everything else is raw.
    fn string(&mut self, name: Name) {
        let text = self.names.resolve(name);
        self.out.push('\'');
        for c in text.chars() {
            match c {
                '\\' => self.out.push_str("\\\\"),
                '\'' => self.out.push_str("\\'"),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                '\u{0008}' => self.out.push_str("\\b"),
                '\u{000C}' => self.out.push_str("\\f"),
                _ => self.out.push(c),
            }
        }
        self.out.push('\'');
    }

    fn attribute(&mut self, attribute: Attribute) {
        self.push("data-");
        self.push(attribute.plugin.as_str());
        match attribute.detail {
            AttributeDetail::Plain => {}
            AttributeDetail::Modified(modifier) => self.modifier(modifier),
            AttributeDetail::Keyed { key, modifier } => {
                self.out.push(':');
                self.name(key);
                if let Some(modifier) = modifier {
                    self.modifier(modifier);
                }
            }
        }
    }

    fn modifier(&mut self, modifier: Modifier) {
        self.push("__");
        self.name(modifier.name);
        if let Some(arg) = modifier.arg {
            self.out.push('.');
            self.name(arg);
        }
    }
}
