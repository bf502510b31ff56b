#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn span_merge_covers_both() {
    let a = Span::new(4, 7);
    let b = Span::new(1, 5);
    assert_eq!(a.merge(b), Span::new(1, 7));
    assert_eq!(format!("{:?}", a), "4..7");
}

#[test]
fn span_from_range_and_point() {
    assert_eq!(Span::from_range(2..9), Span::new(2, 9));
    assert!(Span::point(3).is_empty());
    assert_eq!(Span::new(2, 9).len(), 7);
    assert_eq!(Span::new(2, 9).to_range(), 2..9);
}

#[test]
fn interner_round_trips_and_dedups() {
    let interner = StringInterner::new();
    let a = interner.intern("counter");
    let b = interner.intern("counter");
    let c = interner.intern("other");
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(interner.lookup(a), "counter");
    assert_eq!(interner.lookup(Name::EMPTY), "");
    assert_eq!(interner.len(), 3);
}

#[test]
fn position_advances_over_newline() {
    let mut pos = Position::START;
    pos.advance('a').advance('b');
    assert_eq!(pos, Position { index: 2, line: 0, column: 2 });
    pos.advance('\n');
    assert_eq!(pos, Position { index: 3, line: 1, column: 0 });
}

#[test]
fn position_at_maps_offsets_to_lines() {
    let src = SourceFile::new("<test>", "auto x = 1\nx + 2");
    assert_eq!(src.position_at(0), Position::START);
    assert_eq!(
        src.position_at(11),
        Position { index: 11, line: 1, column: 0 }
    );
    assert_eq!(
        src.position_at(15),
        Position { index: 15, line: 1, column: 4 }
    );
    // Past the end clamps.
    assert_eq!(src.position_at(99).index, 16);
}

#[test]
fn position_columns_count_characters() {
    let src = SourceFile::new("<test>", "\"é\" + 1");
    // 'é' is two bytes; the '+' sits at byte 5 but column 4.
    assert_eq!(src.position_at(5).column, 4);
}

#[test]
fn keyword_lookup() {
    assert_eq!(Keyword::lookup("while"), Some(Keyword::While));
    assert_eq!(Keyword::lookup("While"), None);
    for kw in Keyword::ALL {
        assert_eq!(Keyword::lookup(kw.as_str()), Some(kw));
    }
}

#[test]
fn token_display_includes_payload() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let mut list = TokenList::new();
    list.push(Token::new(TokenKind::Keyword(Keyword::Auto), Span::new(0, 4)));
    list.push(Token::new(TokenKind::Ident(x), Span::new(5, 6)));
    list.push(Token::new(TokenKind::Eq, Span::new(7, 8)));
    list.push(Token::new(TokenKind::float(1.5), Span::new(9, 12)));
    list.push(Token::new(TokenKind::Eof, Span::point(12)));
    assert_eq!(
        list.dump(&interner),
        "[KEYWORD:auto, IDENTIFIER:x, EQ, FLOAT:1.5, EOF]"
    );
    assert!(list.get(0).unwrap().matches_keyword(Keyword::Auto));
}

#[test]
fn token_tag_skips_keywords() {
    assert_eq!(TokenKind::Keyword(Keyword::If).tag(), None);
    assert_eq!(TokenKind::Int(3).tag(), Some(TokenTag::Int));
    assert_eq!(TokenTag::Arrow.describe(), "'=>'");
}

#[test]
fn arena_lists_are_contiguous() {
    let mut arena = ExprArena::new();
    let one = arena.alloc_expr(Expr::new(ExprKind::Int(1), Span::new(1, 2)));
    let two = arena.alloc_expr(Expr::new(ExprKind::Int(2), Span::new(4, 5)));
    let inner = arena.alloc_expr_list([two]);
    let inner_list = arena.alloc_expr(Expr::new(ExprKind::List(inner), Span::new(3, 6)));
    let outer = arena.alloc_expr_list([one, inner_list]);

    assert_eq!(arena.get_expr_list(outer), &[one, inner_list]);
    assert_eq!(arena.get_expr_list(inner), &[two]);
    assert_eq!(arena.get_expr(two).kind, ExprKind::Int(2));
    assert_eq!(arena.expr_count(), 3);
}

#[test]
fn arena_params_and_branches() {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let params = arena.alloc_params([interner.intern("a"), interner.intern("b")]);
    assert_eq!(arena.get_params(params).len(), 2);
    assert!(arena.get_params(ParamRange::EMPTY).is_empty());

    let c = arena.alloc_expr(Expr::new(ExprKind::Int(1), Span::new(3, 4)));
    let b = arena.alloc_expr(Expr::new(ExprKind::Int(2), Span::new(10, 11)));
    let arms = arena.alloc_branches([IfBranch {
        condition: c,
        body: b,
        multiline: false,
    }]);
    assert_eq!(arena.get_branches(arms)[0].body, b);
}
