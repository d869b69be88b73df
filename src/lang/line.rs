use super::oracle::{inside_quotes, is_commented, QUOTE};

/// One source line with its optional label removed and spacing normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    label: Option<String>,
    text: String,
}

impl Line {
    pub fn new(source: &str) -> Line {
        let source = source.trim_end_matches(|c| c == '\r' || c == '\n');
        let (label, rest) = split_label(source);
        Line {
            label,
            text: normalize(rest.trim()),
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

fn split_label(s: &str) -> (Option<String>, &str) {
    let colon = match s.find(':') {
        Some(colon) => colon,
        None => return (None, s),
    };
    if inside_quotes(":", s) || is_commented(":", s) {
        return (None, s);
    }
    let label = s[..colon].trim();
    if label.is_empty() {
        return (None, s);
    }
    (Some(label.to_string()), &s[colon + 1..])
}

fn needs_space(ch: char) -> bool {
    !ch.is_alphanumeric() && ch != '_' && !ch.is_whitespace() && ch != ';'
}

// Whitespace already separates, so no space is inserted next to it.
fn is_spaced(ch: char) -> bool {
    ch.is_whitespace()
}

fn is_decimal_point(s: &[char], i: usize) -> bool {
    s[i] == '.'
        && i > 0
        && s[i - 1].is_ascii_digit()
        && s.get(i + 1).map_or(false, |c| c.is_ascii_digit())
}

/// Separate punctuation from its neighbours with spaces.
///
/// Quoted regions are copied verbatim and everything from `//` on is left
/// alone. `!` and `(` are always split from a preceding punctuation mark
/// and `)` from a following one, so runs like `!!x` and `((a` tokenize
/// one symbol at a time while `!=`, `==` and `<=` stay joined.
pub fn normalize(line: &str) -> String {
    let mut s: Vec<char> = line.chars().collect();
    let mut i = 0;
    while i < s.len() {
        let ch = s[i];
        if ch == QUOTE {
            match s[i + 1..].iter().position(|&c| c == QUOTE) {
                Some(offset) => {
                    i += offset + 2;
                    continue;
                }
                None => break,
            }
        }
        if ch == '/' && s.get(i + 1) == Some(&'/') {
            break;
        }
        if !needs_space(ch) || is_decimal_point(&s, i) {
            i += 1;
            continue;
        }
        if i == 0 {
            if !s.get(1).map_or(true, |&c| needs_space(c) || is_spaced(c)) {
                s.insert(1, ' ');
                i += 1;
            }
            i += 1;
            continue;
        }
        if i == s.len() - 1 {
            if !needs_space(s[i - 1]) && !is_spaced(s[i - 1]) {
                s.insert(i, ' ');
                i += 1;
            }
            i += 1;
            continue;
        }
        if !is_spaced(s[i - 1]) && !(needs_space(s[i - 1]) && ch != '!' && ch != '(') {
            s.insert(i, ' ');
            i += 1;
        }
        if !is_spaced(s[i + 1]) && !(needs_space(s[i + 1]) && ch != ')') {
            s.insert(i + 1, ' ');
            i += 1;
        }
        i += 1;
    }
    s.into_iter().collect()
}
