use super::oracle::{inside_quotes, is_commented, COMMENT};
use super::Error;

type Result<T> = std::result::Result<T, Error>;

/// Statement kinds, recomputed from the text on every visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Arithmetic,
    If,
    Read,
    Print,
    Stop,
    End,
    Goto,
    Comment,
}

// Keywords in priority order, each with the substrings that select it.
const KEYWORDS: [(StatementKind, &str, &[&str]); 6] = [
    (StatementKind::If, "if", &["if"]),
    (StatementKind::Read, "read", &["read"]),
    (StatementKind::Print, "print", &["print"]),
    (StatementKind::Stop, "stop", &["stop;", "stop ;"]),
    (StatementKind::End, "end", &["end;", "end ;"]),
    (StatementKind::Goto, "goto", &["goto"]),
];

/// Classify a normalized statement.
///
/// Keywords are found by substring search, first match wins, and an
/// occurrence that is quoted or commented does not count. Anything left
/// over with a terminating `;` is arithmetic.
pub fn classify(statement: &str) -> Result<StatementKind> {
    if let Some(comment) = statement.find(COMMENT) {
        match statement.find(';') {
            Some(semicolon) if semicolon < comment => {}
            _ => return Ok(StatementKind::Comment),
        }
    }
    for (kind, keyword, forms) in KEYWORDS.iter() {
        if !forms.iter().any(|form| statement.contains(form)) {
            continue;
        }
        if inside_quotes(keyword, statement) || is_commented(keyword, statement) {
            continue;
        }
        return Ok(*kind);
    }
    if !statement.contains(';') {
        return Err(error!(MalformedStatement; statement));
    }
    Ok(StatementKind::Arithmetic)
}

#[cfg(test)]
mod tests {
    use super::StatementKind::*;
    use super::*;

    #[test]
    fn test_whole_line_comment() {
        assert_eq!(classify("// just words").unwrap(), Comment);
        assert_eq!(classify("// x = 1;").unwrap(), Comment);
    }

    #[test]
    fn test_trailing_comment_is_not_comment() {
        assert_eq!(classify("x = 1; // note").unwrap(), Arithmetic);
    }

    #[test]
    fn test_keywords() {
        assert_eq!(classify("if x < 3 goto loop;").unwrap(), If);
        assert_eq!(classify("read x;").unwrap(), Read);
        assert_eq!(classify("print x;").unwrap(), Print);
        assert_eq!(classify("stop;").unwrap(), Stop);
        assert_eq!(classify("stop ;").unwrap(), Stop);
        assert_eq!(classify("end;").unwrap(), End);
        assert_eq!(classify("goto loop;").unwrap(), Goto);
    }

    #[test]
    fn test_priority() {
        // "if" outranks "goto" even though goto is also present.
        assert_eq!(classify("if 1 goto a;").unwrap(), If);
        // "read" outranks "print".
        assert_eq!(classify(r#"read "print me" , x;"#).unwrap(), Read);
    }

    #[test]
    fn test_quoted_keyword_is_skipped() {
        assert_eq!(classify(r#"print "if you goto" , x;"#).unwrap(), Print);
    }

    #[test]
    fn test_stop_needs_exact_form() {
        assert_eq!(classify("stopper = 1;").unwrap(), Arithmetic);
        assert_eq!(classify("x = weekend + 1;").unwrap(), Arithmetic);
        assert_eq!(classify("x = weekend;").unwrap(), End);
    }

    #[test]
    fn test_substring_match() {
        assert_eq!(classify("diff = 1;").unwrap(), If);
    }

    #[test]
    fn test_malformed() {
        let e = classify("x = 1").unwrap_err();
        assert!(e.is_code(crate::lang::ErrorCode::MalformedStatement));
    }

    #[test]
    fn test_idempotent() {
        let s = r#"print "Value:", x;"#;
        assert_eq!(classify(s).unwrap(), classify(s).unwrap());
    }
}
