use super::Var;
use crate::error;
use crate::lang::{Error, Token, Tokens, QUOTE};
use tracing::trace;

type Result<T> = std::result::Result<T, Error>;

/// One argument of a `print` or `read` statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Item<'a> {
    Text(String),
    Name(&'a str),
    Number(&'a str),
}

/// Walk the arguments following the keyword of a `print` or `read`.
///
/// Lone commas are separators. A token holding a quote starts a prompt that
/// runs until a token holding the closing quote; the spaces lost to
/// tokenizing are put back as single spaces.
pub fn items(statement: &str) -> Vec<Item<'_>> {
    let mut items = vec![];
    let mut tokens = Tokens::new(statement);
    match tokens.next() {
        Some(keyword) if keyword.next.is_some() => {}
        _ => return items,
    }
    while let Some(element) = tokens.next() {
        let text = element.token.text();
        if text == "," || text == ";" {
            continue;
        }
        if let Some(open) = text.find(QUOTE) {
            items.push(Item::Text(quoted(&text[open + 1..], &mut tokens)));
            continue;
        }
        items.push(match element.token {
            Token::Number(..) => Item::Number(text),
            Token::Word(word) => Item::Name(strip_comma(word)),
        });
    }
    items
}

fn quoted(first: &str, tokens: &mut Tokens) -> String {
    if let Some(close) = first.find(QUOTE) {
        return first[..close].to_string();
    }
    let mut text = first.to_string();
    for element in tokens {
        let word = element.token.text();
        text.push(' ');
        match word.find(QUOTE) {
            Some(close) => {
                text.push_str(&word[..close]);
                break;
            }
            None => text.push_str(word),
        }
    }
    text
}

fn strip_comma(word: &str) -> &str {
    if word.len() > 1 && word.ends_with(',') {
        &word[..word.len() - 1]
    } else {
        word
    }
}

/// Render a `print` statement, newline included.
///
/// Names that are not variables and bare numbers print nothing.
pub fn print(statement: &str, vars: &Var) -> String {
    let mut parts: Vec<String> = vec![];
    for item in items(statement) {
        match item {
            Item::Text(text) => parts.push(text),
            Item::Name(name) => match vars.fetch(name) {
                Some(val) => parts.push(format_number(val)),
                None => trace!(name = name, "print skips unknown name"),
            },
            Item::Number(text) => trace!(text = text, "print skips literal"),
        }
    }
    let mut s = parts.join(" ");
    s.push('\n');
    s
}

/// Pending work for a `read` statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Read {
    Prompt(String),
    Target(String),
    Newline,
}

/// Plan a `read` statement: prompts and targets in order, then a newline.
pub fn read(statement: &str) -> Result<Vec<Read>> {
    let mut plan = vec![];
    for item in items(statement) {
        plan.push(match item {
            Item::Text(text) => Read::Prompt(text),
            Item::Name(name) => Read::Target(name.to_string()),
            Item::Number(text) => {
                return Err(error!(MalformedStatement; format!("CANNOT READ INTO {}", text)))
            }
        });
    }
    plan.push(Read::Newline);
    Ok(plan)
}

/// Format like C's `%g`: six significant digits, trailing zeros removed.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "nan".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let sci = format!("{:.5e}", n);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return sci,
    };
    if exp < -4 || exp >= 6 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exp.abs())
    } else {
        let decimals = (5 - exp).max(0) as usize;
        trim_zeros(&format!("{:.*}", decimals, n)).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
