//! Span removal for rewritten documents.
//!
//! Removing a `using` directive discards the trivia attached solely to it:
//! the indentation before it (when nothing else shares the line) and the
//! line break after it. Trivia shared with other code on the same line is
//! left alone.

/// Removes the given byte spans from `text`, expanding each to swallow the
/// whitespace-only remainder of its line and the trailing newline.
///
/// Spans must not overlap; they are applied back-to-front so earlier spans
/// keep their offsets.
pub fn remove_spans(text: &str, spans: &[(usize, usize)]) -> String {
    let mut expanded: Vec<(usize, usize)> = spans
        .iter()
        .map(|&(start, end)| expand_span(text, start, end))
        .collect();
    expanded.sort();

    let mut result = text.to_string();
    for &(start, end) in expanded.iter().rev() {
        result.replace_range(start..end, "");
    }
    result
}

/// Grows `[start, end)` to cover the whole source line when the directive is
/// alone on it.
fn expand_span(text: &str, start: usize, end: usize) -> (usize, usize) {
    let bytes = text.as_bytes();

    // Leading indentation, when only whitespace precedes the span on its line.
    let mut line_start = start;
    while line_start > 0 && bytes[line_start - 1] != b'\n' {
        line_start -= 1;
    }
    let leading_is_blank = bytes[line_start..start]
        .iter()
        .all(|b| matches!(b, b' ' | b'\t'));
    let new_start = if leading_is_blank { line_start } else { start };

    // Trailing whitespace and the line break, when nothing else follows.
    let mut scan = end;
    while scan < bytes.len() && matches!(bytes[scan], b' ' | b'\t' | b'\r') {
        scan += 1;
    }
    let new_end = if scan >= bytes.len() {
        scan
    } else if bytes[scan] == b'\n' {
        scan + 1
    } else {
        end
    };

    (new_start, new_end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_whole_line() {
        let text = "using System;\nusing System.Text;\nclass A { }\n";
        let result = remove_spans(text, &[(14, 32)]);
        assert_eq!(result, "using System;\nclass A { }\n");
    }

    #[test]
    fn test_removes_indented_line() {
        let text = "namespace N\n{\n    using System.Text;\n    class A { }\n}\n";
        let span_start = text.find("using").unwrap();
        let span_end = span_start + "using System.Text;".len();

        let result = remove_spans(text, &[(span_start, span_end)]);
        assert_eq!(result, "namespace N\n{\n    class A { }\n}\n");
    }

    #[test]
    fn test_removes_multiple_spans() {
        let text = "using A;\nusing B;\nusing C;\nclass X { }\n";
        let result = remove_spans(text, &[(0, 8), (18, 26)]);
        assert_eq!(result, "using B;\nclass X { }\n");
    }

    #[test]
    fn test_keeps_code_sharing_the_line() {
        let text = "using A; class X { }\n";
        let result = remove_spans(text, &[(0, 8)]);
        assert_eq!(result, " class X { }\n");
    }

    #[test]
    fn test_removes_line_with_trailing_spaces() {
        let text = "using A;   \nclass X { }\n";
        let result = remove_spans(text, &[(0, 8)]);
        assert_eq!(result, "class X { }\n");
    }

    #[test]
    fn test_removes_crlf_line() {
        let text = "using A;\r\nclass X { }\r\n";
        let result = remove_spans(text, &[(0, 8)]);
        assert_eq!(result, "class X { }\r\n");
    }

    #[test]
    fn test_span_at_end_of_file() {
        let text = "class X { }\nusing A;";
        let result = remove_spans(text, &[(12, 20)]);
        assert_eq!(result, "class X { }\n");
    }

    #[test]
    fn test_no_spans_is_identity() {
        let text = "using A;\nclass X { }\n";
        assert_eq!(remove_spans(text, &[]), text);
    }
}
