#![allow(clippy::unwrap_used, clippy::expect_used)]

mod errors;

use basic_ir::{ExprId, ExprKind, StringInterner};

use crate::{parse, ParseError, ParseOutput};

pub(super) fn parse_source(source: &str) -> (Result<ParseOutput, ParseError>, StringInterner) {
    let interner = StringInterner::new();
    let tokens = basic_lexer::lex(source, &interner).unwrap();
    (parse(&tokens), interner)
}

/// Parse and render the tree compactly, panicking on errors.
pub(super) fn sexpr_of(source: &str) -> String {
    let (result, interner) = parse_source(source);
    let output = result.unwrap_or_else(|e| panic!("parse failed for {source:?}: {e}"));
    sexpr(&output, output.root, &interner)
}

pub(super) fn error_of(source: &str) -> ParseError {
    let (result, _) = parse_source(source);
    match result {
        Ok(_) => panic!("expected a parse error for {source:?}"),
        Err(e) => e,
    }
}

pub(super) fn sexpr(out: &ParseOutput, id: ExprId, interner: &StringInterner) -> String {
    let arena = &out.arena;
    let go = |id: ExprId| sexpr(out, id, interner);
    let list = |ids: &[ExprId], sep: &str| ids.iter().map(|&e| go(e)).collect::<Vec<_>>().join(sep);

    match arena.get_expr(id).kind {
        ExprKind::Int(n) => n.to_string(),
        ExprKind::Float(bits) => format!("{:?}", f64::from_bits(bits)),
        ExprKind::Str(id) => format!("{:?}", arena.get_str(id)),
        ExprKind::List(range) => format!("[{}]", list(arena.get_expr_list(range), " ")),
        ExprKind::Ident(name) => interner.lookup(name).to_owned(),
        ExprKind::Assign { name, value } => {
            format!("(auto {} {})", interner.lookup(name), go(value))
        }
        ExprKind::Unary { op, operand } => format!("({} {})", op.as_symbol(), go(operand)),
        ExprKind::Binary { op, left, right } => {
            format!("({} {} {})", op.as_symbol(), go(left), go(right))
        }
        ExprKind::If {
            branches,
            else_branch,
        } => {
            let mut s = String::from("(if");
            for arm in arena.get_branches(branches) {
                let tag = if arm.multiline { "block " } else { "" };
                s.push_str(&format!(" [{}{} {}]", tag, go(arm.condition), go(arm.body)));
            }
            if let Some(e) = else_branch {
                s.push_str(&format!(" else {}", go(e.body)));
            }
            s.push(')');
            s
        }
        ExprKind::For {
            var,
            start,
            end,
            step,
            body,
            multiline,
        } => format!(
            "({} {} {} {}{} {})",
            if multiline { "for-block" } else { "for" },
            interner.lookup(var),
            go(start),
            go(end),
            step.map(|s| format!(" step {}", go(s))).unwrap_or_default(),
            go(body)
        ),
        ExprKind::While {
            cond,
            body,
            multiline,
        } => format!(
            "({} {} {})",
            if multiline { "while-block" } else { "while" },
            go(cond),
            go(body)
        ),
        ExprKind::FunctionDef {
            name,
            params,
            body,
            auto_return,
        } => {
            let params: Vec<_> = arena
                .get_params(params)
                .iter()
                .map(|&p| interner.lookup(p))
                .collect();
            format!(
                "(const {} ({}) {}{})",
                name.map_or("<anonymous>", |n| interner.lookup(n)),
                params.join(" "),
                if auto_return { "=> " } else { "" },
                go(body)
            )
        }
        ExprKind::Call { callee, args } => {
            let args = arena.get_expr_list(args);
            if args.is_empty() {
                format!("(call {})", go(callee))
            } else {
                format!("(call {} {})", go(callee), list(args, " "))
            }
        }
        ExprKind::Return(Some(value)) => format!("(return {})", go(value)),
        ExprKind::Return(None) => "(return)".to_owned(),
        ExprKind::Continue => "continue".to_owned(),
        ExprKind::Break => "break".to_owned(),
        ExprKind::Block(range) => format!("{{{}}}", list(arena.get_expr_list(range), "; ")),
    }
}
