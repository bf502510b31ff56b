//! Operator precedence chain.
//!
//! One method per level; each level loops over its own operators and
//! descends to the next tighter level for operands, building left-assoc
//! `Binary` nodes. `^` is the exception: its right operand is a `factor`,
//! which makes it right-associative and lets it bind tighter than a leading
//! sign (`-2^2` is `-(2^2)`).

use basic_ir::{BinaryOp, ExprId, ExprKind, Keyword, TokenKind, TokenTag, UnaryOp};
use basic_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

fn logical_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Keyword(Keyword::And) => Some(BinaryOp::And),
        TokenKind::Keyword(Keyword::Or) => Some(BinaryOp::Or),
        _ => None,
    }
}

fn comparison_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::EqEq => Some(BinaryOp::Eq),
        TokenKind::NotEq => Some(BinaryOp::NotEq),
        TokenKind::Lt => Some(BinaryOp::Lt),
        TokenKind::LtEq => Some(BinaryOp::LtEq),
        TokenKind::Gt => Some(BinaryOp::Gt),
        TokenKind::GtEq => Some(BinaryOp::GtEq),
        _ => None,
    }
}

fn additive_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Sub),
        _ => None,
    }
}

fn multiplicative_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Star => Some(BinaryOp::Mul),
        TokenKind::Slash => Some(BinaryOp::Div),
        TokenKind::Percent => Some(BinaryOp::Mod),
        _ => None,
    }
}

impl Parser<'_> {
    /// `auto NAME = expr`, or a chain of `and`/`or`.
    pub(crate) fn expr(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| {
            if self.check_keyword(Keyword::Auto) {
                let start = self.cursor.advance().span;
                let (name, _) = self.cursor.expect_ident()?;
                self.cursor.expect(TokenTag::Eq)?;
                let value = self.expr()?;
                let span = start.merge(self.span_of(value));
                return Ok(self.alloc(ExprKind::Assign { name, value }, span));
            }
            self.binary_level(Self::comp_expr, logical_op)
        })
    }

    /// `not comp_expr`, or a chain of comparisons.
    fn comp_expr(&mut self) -> Result<ExprId, ParseError> {
        if self.check_keyword(Keyword::Not) {
            let start = self.cursor.advance().span;
            let operand = ensure_sufficient_stack(|| self.comp_expr())?;
            let span = start.merge(self.span_of(operand));
            return Ok(self.alloc(
                ExprKind::Unary {
                    op: UnaryOp::Not,
                    operand,
                },
                span,
            ));
        }
        self.binary_level(Self::arith_expr, comparison_op)
    }

    fn arith_expr(&mut self) -> Result<ExprId, ParseError> {
        self.binary_level(Self::term, additive_op)
    }

    fn term(&mut self) -> Result<ExprId, ParseError> {
        self.binary_level(Self::factor, multiplicative_op)
    }

    /// Leading `+`/`-`, then `power`.
    fn factor(&mut self) -> Result<ExprId, ParseError> {
        let op = match self.cursor.current_kind() {
            TokenKind::Plus => UnaryOp::Plus,
            TokenKind::Minus => UnaryOp::Neg,
            _ => return self.power(),
        };
        let start = self.cursor.advance().span;
        let operand = ensure_sufficient_stack(|| self.factor())?;
        let span = start.merge(self.span_of(operand));
        Ok(self.alloc(ExprKind::Unary { op, operand }, span))
    }

    fn power(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.call()?;
        while self.cursor.current_kind() == TokenKind::Caret {
            self.cursor.advance();
            let right = self.factor()?;
            left = self.make_binary(BinaryOp::Pow, left, right);
        }
        Ok(left)
    }

    /// `operand (op operand)*`, left-associative.
    fn binary_level(
        &mut self,
        operand: fn(&mut Self) -> Result<ExprId, ParseError>,
        match_op: fn(TokenKind) -> Option<BinaryOp>,
    ) -> Result<ExprId, ParseError> {
        let mut left = operand(self)?;
        while let Some(op) = match_op(self.cursor.current_kind()) {
            self.cursor.advance();
            let right = operand(self)?;
            left = self.make_binary(op, left, right);
        }
        Ok(left)
    }

    fn make_binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        let span = self.span_of(left).merge(self.span_of(right));
        self.alloc(ExprKind::Binary { op, left, right }, span)
    }
}
