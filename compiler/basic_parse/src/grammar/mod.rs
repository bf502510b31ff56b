//! Grammar rules, lowest binding power first.
//!
//! ```text
//! statements : NEWLINE* statement (NEWLINE+ statement)* NEWLINE*
//! statement  : 'return' expr? | 'continue' | 'break' | expr
//! expr       : 'auto' IDENT '=' expr | comp_expr (('and' | 'or') comp_expr)*
//! comp_expr  : 'not' comp_expr | arith_expr (cmp_op arith_expr)*
//! arith_expr : term (('+' | '-') term)*
//! term       : factor (('*' | '/' | '%') factor)*
//! factor     : ('+' | '-') factor | power
//! power      : call ('^' factor)*
//! call       : atom ('(' (expr (',' expr)*)? ')')*
//! atom       : INT | FLOAT | STRING | IDENT | '(' expr ')' | list
//!            | if_expr | for_expr | while_expr | func_def
//! ```

mod control;
mod expr;
mod function;
mod primary;
mod stmt;
