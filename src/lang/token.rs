/// A single whitespace-delimited element of a statement.
///
/// Numbers are recognized only by a leading decimal digit and keep their
/// source text so quoted prompts can echo them verbatim.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'a> {
    Number(f64, &'a str),
    Word(&'a str),
}

impl<'a> Token<'a> {
    fn from_word(s: &'a str) -> Token<'a> {
        match s.chars().next() {
            Some(ch) if ch.is_ascii_digit() => Token::Number(leading_integer(s), s),
            _ => Token::Word(s),
        }
    }

    pub fn text(&self) -> &'a str {
        match self {
            Token::Number(_, s) | Token::Word(s) => *s,
        }
    }

    pub fn number(&self) -> Option<f64> {
        match self {
            Token::Number(n, _) => Some(*n),
            Token::Word(_) => None,
        }
    }

    pub fn is_word(&self, word: &str) -> bool {
        match self {
            Token::Word(s) => *s == word,
            Token::Number(..) => false,
        }
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}

// Only the leading run of digits counts, so "3.75" reads as 3.
fn leading_integer(s: &str) -> f64 {
    let end = s
        .char_indices()
        .find(|(_, ch)| !ch.is_ascii_digit())
        .map_or(s.len(), |(idx, _)| idx);
    s[..end].parse::<f64>().unwrap_or(0.0)
}

/// A scanned token plus the index of the token after it.
/// `next` is `None` once the statement terminator has been consumed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element<'a> {
    pub token: Token<'a>,
    pub next: Option<usize>,
}

/// Returns the token at `index`, or `None` when the statement has no such token.
pub fn element(statement: &str, index: usize) -> Option<Element<'_>> {
    Tokens::starting_at(statement, index).next()
}

/// Iterator over the tokens of one statement, stopping after the terminator.
pub struct Tokens<'a> {
    words: std::str::SplitWhitespace<'a>,
    index: usize,
    done: bool,
}

impl<'a> Tokens<'a> {
    pub fn new(statement: &'a str) -> Tokens<'a> {
        Tokens::starting_at(statement, 0)
    }

    pub fn starting_at(statement: &'a str, index: usize) -> Tokens<'a> {
        let mut words = statement.split_whitespace();
        let mut done = false;
        if index > 0 && words.nth(index - 1).is_none() {
            done = true;
        }
        Tokens { words, index, done }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Element<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut word = self.words.next()?;
        let mut end_of_statement = word == ";";
        if !end_of_statement && word.len() > 1 && word.ends_with(';') {
            word = &word[..word.len() - 1];
            end_of_statement = true;
        }
        self.index += 1;
        let next = if end_of_statement {
            self.done = true;
            None
        } else {
            Some(self.index)
        };
        Some(Element {
            token: Token::from_word(word),
            next,
        })
    }
}

/// The closed set of binary operators plus the opening parenthesis,
/// which shares the operator stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operator {
    LParen,
    Equal,
    NotEqual,
    GreaterEqual,
    LessEqual,
    Greater,
    Less,
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulus,
}

impl Operator {
    pub fn from_symbol(s: &str) -> Option<Operator> {
        use Operator::*;
        Some(match s {
            "(" => LParen,
            "==" => Equal,
            "!=" => NotEqual,
            ">=" => GreaterEqual,
            "<=" => LessEqual,
            ">" => Greater,
            "<" => Less,
            "+" => Plus,
            "-" => Minus,
            "*" => Multiply,
            "/" => Divide,
            "%" => Modulus,
            _ => return None,
        })
    }

    /// Binding strength; a statement terminator would rank 1, below everything here.
    pub fn precedence(&self) -> u8 {
        use Operator::*;
        match self {
            LParen => 2,
            Equal | NotEqual | GreaterEqual | LessEqual | Greater | Less => 3,
            Plus | Minus => 4,
            Multiply | Divide | Modulus => 5,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            LParen => write!(f, "("),
            Equal => write!(f, "=="),
            NotEqual => write!(f, "!="),
            GreaterEqual => write!(f, ">="),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            Less => write!(f, "<"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Modulus => write!(f, "%"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_and_next() {
        let e = element("x = 5;", 0).unwrap();
        assert_eq!(e.token, Token::Word("x"));
        assert_eq!(e.next, Some(1));
    }

    #[test]
    fn test_terminator_is_stripped() {
        let e = element("x = 5;", 2).unwrap();
        assert_eq!(e.token.number(), Some(5.0));
        assert_eq!(e.token.text(), "5");
        assert_eq!(e.next, None);
    }

    #[test]
    fn test_lone_semicolon() {
        let e = element("if x < 3 ;", 4).unwrap();
        assert!(e.token.is_word(";"));
        assert_eq!(e.next, None);
    }

    #[test]
    fn test_past_end() {
        assert_eq!(element("stop;", 1), None);
        assert_eq!(element("", 0), None);
    }

    #[test]
    fn test_fraction_truncates() {
        let e = element("3.75", 0).unwrap();
        assert_eq!(e.token.number(), Some(3.0));
    }

    #[test]
    fn test_negative_is_not_numeric() {
        let e = element("-4", 0).unwrap();
        assert_eq!(e.token, Token::Word("-4"));
        let e = element(".5", 0).unwrap();
        assert_eq!(e.token.number(), None);
    }

    #[test]
    fn test_whitespace_runs() {
        let words: Vec<&str> = Tokens::new("a  \t b   c;")
            .map(|e| e.token.text())
            .collect();
        assert_eq!(words, ["a", "b", "c"]);
    }

    #[test]
    fn test_iteration_stops_at_terminator() {
        let words: Vec<&str> = Tokens::new("print x; // y z")
            .map(|e| e.token.text())
            .collect();
        assert_eq!(words, ["print", "x"]);
    }

    #[test]
    fn test_starting_at() {
        let e: Vec<Element> = Tokens::starting_at("a b c;", 1).collect();
        assert_eq!(e.len(), 2);
        assert_eq!(e[0].next, Some(2));
        assert_eq!(e[1].next, None);
    }

    #[test]
    fn test_operator_precedence_order() {
        let add = Operator::from_symbol("+").unwrap();
        let mul = Operator::from_symbol("*").unwrap();
        let lt = Operator::from_symbol("<").unwrap();
        assert!(mul.precedence() > add.precedence());
        assert!(add.precedence() > lt.precedence());
        assert!(lt.precedence() > Operator::LParen.precedence());
        assert_eq!(Operator::from_symbol("^"), None);
    }
}
