//! `if`, `for` and `while`.
//!
//! Each body has two forms:
//!
//! ```text
//! if x > 1 then print(x) else print(0)      # single-line: one statement
//!
//! if x > 1 then                             # block: NEWLINE statements ... end
//!     print(x)
//! elif x == 1 then
//!     print(1)
//! end
//! ```

use basic_ir::{ElseBranch, ExprId, ExprKind, IfBranch, Keyword, Span, TokenTag, UnaryOp};

use crate::{ParseError, Parser, TokenSet};

const BLOCK_IF_END: TokenSet = TokenSet::new()
    .with_keyword(Keyword::Elif)
    .with_keyword(Keyword::Else)
    .with_keyword(Keyword::End);

/// A parsed body and whether it was the block form.
struct Body {
    expr: ExprId,
    multiline: bool,
    /// Last token of the body (`end` for blocks).
    end: Span,
}

impl Parser<'_> {
    pub(crate) fn if_expr(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.advance().span;
        let mut branches = Vec::new();
        let mut else_branch = None;

        let end = loop {
            let condition = self.expr()?;
            self.cursor.expect_keyword(Keyword::Then)?;

            if self.check(TokenTag::Newline) {
                self.cursor.advance();
                let body = self.statements()?;
                branches.push(IfBranch {
                    condition,
                    body,
                    multiline: true,
                });
                if self.check_keyword(Keyword::End) {
                    break self.cursor.advance().span;
                }
                if !self.check_keyword(Keyword::Elif) && !self.check_keyword(Keyword::Else) {
                    return Err(ParseError::expected(BLOCK_IF_END, self.current_span()));
                }
            } else {
                let body = self.statement()?;
                branches.push(IfBranch {
                    condition,
                    body,
                    multiline: false,
                });
                if !self.check_keyword(Keyword::Elif) && !self.check_keyword(Keyword::Else) {
                    break self.span_of(body);
                }
            }

            if self.check_keyword(Keyword::Elif) {
                self.cursor.advance();
                continue;
            }

            // `else`
            self.cursor.advance();
            let body = self.body()?;
            else_branch = Some(ElseBranch {
                body: body.expr,
                multiline: body.multiline,
            });
            break body.end;
        };

        let branches = self.arena.alloc_branches(branches);
        Ok(self.alloc(
            ExprKind::If {
                branches,
                else_branch,
            },
            start.merge(end),
        ))
    }

    /// `for NAME = start to end ((increment | decrement) step)? then body`
    pub(crate) fn for_expr(&mut self) -> Result<ExprId, ParseError> {
        let start_span = self.cursor.advance().span;
        let (var, _) = self.cursor.expect_ident()?;
        self.cursor.expect(TokenTag::Eq)?;
        let start = self.expr()?;
        self.cursor.expect_keyword(Keyword::To)?;
        let end = self.expr()?;

        let step = if self.check_keyword(Keyword::Increment) {
            self.cursor.advance();
            Some(self.expr()?)
        } else if self.check_keyword(Keyword::Decrement) {
            let kw = self.cursor.advance().span;
            let amount = self.expr()?;
            let span = kw.merge(self.span_of(amount));
            Some(self.alloc(
                ExprKind::Unary {
                    op: UnaryOp::Neg,
                    operand: amount,
                },
                span,
            ))
        } else {
            None
        };

        self.cursor.expect_keyword(Keyword::Then)?;
        let body = self.body()?;
        Ok(self.alloc(
            ExprKind::For {
                var,
                start,
                end,
                step,
                body: body.expr,
                multiline: body.multiline,
            },
            start_span.merge(body.end),
        ))
    }

    /// `while cond then body`
    pub(crate) fn while_expr(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.advance().span;
        let cond = self.expr()?;
        self.cursor.expect_keyword(Keyword::Then)?;
        let body = self.body()?;
        Ok(self.alloc(
            ExprKind::While {
                cond,
                body: body.expr,
                multiline: body.multiline,
            },
            start.merge(body.end),
        ))
    }

    /// `statement` or `NEWLINE statements 'end'`.
    fn body(&mut self) -> Result<Body, ParseError> {
        if self.check(TokenTag::Newline) {
            self.cursor.advance();
            let expr = self.statements()?;
            let end = self.cursor.expect_keyword(Keyword::End)?.span;
            Ok(Body {
                expr,
                multiline: true,
                end,
            })
        } else {
            let expr = self.statement()?;
            Ok(Body {
                expr,
                multiline: false,
                end: self.span_of(expr),
            })
        }
    }
}
