//! Source excerpts with caret underlines.

use basic_ir::Position;

/// Print every line between `start` and `end` with `^` under the span.
///
/// The first line is underlined from the start column, inner lines in full,
/// and the last line up to the end column. A span that ends at column 0 of
/// the following line (a newline token) stays on its own line. Every
/// underlined line gets at least one caret, so empty spans still point
/// somewhere.
pub fn string_with_arrows(text: &str, start: Position, end: Position) -> String {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect();

    let last_line = if end.line > start.line && end.column == 0 {
        end.line - 1
    } else {
        end.line.max(start.line)
    };

    let mut out = String::new();
    for line_no in start.line..=last_line {
        let Some(line) = lines.get(line_no) else {
            break;
        };
        let width = line.chars().count();
        let col_start = if line_no == start.line {
            start.column.min(width)
        } else {
            0
        };
        let col_end = if line_no == end.line {
            end.column.min(width)
        } else {
            width
        };
        let carets = col_end.saturating_sub(col_start).max(1);

        out.push_str(line);
        out.push('\n');
        out.extend(std::iter::repeat(' ').take(col_start));
        out.extend(std::iter::repeat('^').take(carets));
        out.push('\n');
    }

    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out
}
