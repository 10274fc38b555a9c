//! Arena storage for parsed trees.

use crate::ast::collections::{Element, Param, Property, SignalLink};
use crate::ast::expr::Expr;
use crate::ast::ranges::{ElementRange, ParamRange, PropertyRange, SignalLinkRange, StmtRange};
use crate::ast::stmt::Stmt;
use crate::ids::{ExprId, StmtId};

/// Owns every node of one parse.
///
/// Expressions and statements are appended during parsing and addressed by
/// id; list payloads (elements, properties, parameters, signal links,
/// statement sequences) live in side tables addressed by range. Dropping
/// the arena drops the whole tree at once.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    stmts: Vec<Stmt>,
    elements: Vec<Element>,
    properties: Vec<Property>,
    params: Vec<Param>,
    links: Vec<SignalLink>,
}

impl ExprArena {
    #[must_use]
    pub fn new() -> Self {
        ExprArena::default()
    }

    /// Appends an expression and returns its id.
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let index = u32::try_from(self.exprs.len())
            .unwrap_or_else(|_| panic!("expression arena overflow"));
        self.exprs.push(expr);
        ExprId::new(index)
    }

    /// Resolves an expression id.
    ///
    /// Panics if `id` did not come from this arena.
    #[inline]
    #[must_use]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Appends a statement and returns its id.
    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let index =
            u32::try_from(self.stmts.len()).unwrap_or_else(|_| panic!("statement arena overflow"));
        self.stmts.push(stmt);
        StmtId::new(index)
    }

    /// Resolves a statement id.
    ///
    /// Panics if `id` did not come from this arena.
    #[inline]
    #[must_use]
    pub fn get_stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    /// Appends a statement sequence, returning the covering range.
    pub fn alloc_stmts(&mut self, stmts: Vec<Stmt>) -> StmtRange {
        let start =
            u32::try_from(self.stmts.len()).unwrap_or_else(|_| panic!("statement arena overflow"));
        let len = u16::try_from(stmts.len())
            .unwrap_or_else(|_| panic!("statement sequence exceeds {} entries", u16::MAX));
        self.stmts.extend(stmts);
        StmtRange::new(start, len)
    }

    #[inline]
    #[must_use]
    pub fn get_stmts(&self, range: StmtRange) -> &[Stmt] {
        &self.stmts[range.start as usize..range.start as usize + range.len()]
    }

    /// Appends call arguments or array elements, returning the range.
    pub fn alloc_elements(&mut self, elements: Vec<Element>) -> ElementRange {
        let start = u32::try_from(self.elements.len())
            .unwrap_or_else(|_| panic!("element table overflow"));
        let len = u16::try_from(elements.len())
            .unwrap_or_else(|_| panic!("element list exceeds {} entries", u16::MAX));
        self.elements.extend(elements);
        ElementRange::new(start, len)
    }

    #[inline]
    #[must_use]
    pub fn get_elements(&self, range: ElementRange) -> &[Element] {
        &self.elements[range.start as usize..range.start as usize + range.len()]
    }

    /// Appends object literal entries, returning the range.
    pub fn alloc_properties(&mut self, properties: Vec<Property>) -> PropertyRange {
        let start = u32::try_from(self.properties.len())
            .unwrap_or_else(|_| panic!("property table overflow"));
        let len = u16::try_from(properties.len())
            .unwrap_or_else(|_| panic!("property list exceeds {} entries", u16::MAX));
        self.properties.extend(properties);
        PropertyRange::new(start, len)
    }

    #[inline]
    #[must_use]
    pub fn get_properties(&self, range: PropertyRange) -> &[Property] {
        &self.properties[range.start as usize..range.start as usize + range.len()]
    }

    /// Appends arrow parameters, returning the range.
    pub fn alloc_params(&mut self, params: Vec<Param>) -> ParamRange {
        let start =
            u32::try_from(self.params.len()).unwrap_or_else(|_| panic!("param table overflow"));
        let len = u16::try_from(params.len())
            .unwrap_or_else(|_| panic!("param list exceeds {} entries", u16::MAX));
        self.params.extend(params);
        ParamRange::new(start, len)
    }

    #[inline]
    #[must_use]
    pub fn get_params(&self, range: ParamRange) -> &[Param] {
        &self.params[range.start as usize..range.start as usize + range.len()]
    }

    /// Appends signal chain segments, returning the range.
    pub fn alloc_links(&mut self, links: Vec<SignalLink>) -> SignalLinkRange {
        let start =
            u32::try_from(self.links.len()).unwrap_or_else(|_| panic!("link table overflow"));
        let len = u16::try_from(links.len())
            .unwrap_or_else(|_| panic!("signal chain exceeds {} segments", u16::MAX));
        self.links.extend(links);
        SignalLinkRange::new(start, len)
    }

    #[inline]
    #[must_use]
    pub fn get_links(&self, range: SignalLinkRange) -> &[SignalLink] {
        &self.links[range.start as usize..range.start as usize + range.len()]
    }
}
