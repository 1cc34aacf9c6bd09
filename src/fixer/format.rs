//! Canonical formatting for rewritten documents.
//!
//! Applied only to documents whose tree actually changed, so untouched
//! files are never reformatted. The rules are deliberately small:
//!
//! - trailing whitespace is stripped from every line
//! - runs of blank lines collapse to a single blank line
//! - blank lines at the start of the file are dropped
//! - the file ends with exactly one line break
//! - the original line-ending style (LF or CRLF) is preserved

/// Normalizes `text` per the rules above. Idempotent.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let eol = if text.contains("\r\n") { "\r\n" } else { "\n" };

    let mut lines: Vec<&str> = text
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l).trim_end_matches([' ', '\t']))
        .collect();

    // split leaves a phantom empty line after a trailing newline.
    if lines.last() == Some(&"") {
        lines.pop();
    }

    let mut result = String::with_capacity(text.len());
    let mut previous_blank = true; // swallows leading blank lines
    for line in &lines {
        let blank = line.is_empty();
        if blank && previous_blank {
            continue;
        }
        result.push_str(line);
        result.push_str(eol);
        previous_blank = blank;
    }

    // Trailing blank line, if any survived.
    if result.ends_with(&format!("{eol}{eol}")) {
        result.truncate(result.len() - eol.len());
    }

    result
}
