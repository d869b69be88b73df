use super::{Operation, Stack, Var};
use crate::error;
use crate::lang::{Error, Operator, Token, Tokens};
use tracing::trace;

type Result<T> = std::result::Result<T, Error>;

/// Evaluate the expression starting at token `start` of `statement`.
///
/// Operator precedence parsing over two stacks that live only for this
/// call. Evaluation stops at the statement terminator.
pub fn evaluate(statement: &str, start: usize, vars: &Var) -> Result<f64> {
    let mut operands: Stack<f64> = Stack::new("EXPRESSION TOO COMPLEX");
    let mut operators: Stack<Operator> = Stack::new("EXPRESSION TOO COMPLEX");

    for element in Tokens::starting_at(statement, start) {
        let word = match element.token {
            Token::Number(n, _) => {
                operands.push(n)?;
                continue;
            }
            Token::Word(word) => word,
        };
        if word == ";" || word == "!" {
            continue;
        }
        if word == "(" {
            operators.push(Operator::LParen)?;
        } else if let Some(val) = vars.fetch(word) {
            operands.push(val)?;
        } else if word == ")" {
            while operators.last().map_or(false, |op| *op != Operator::LParen) {
                reduce(&mut operands, &mut operators)?;
            }
            operators.pop()?;
        } else if let Some(op) = Operator::from_symbol(word) {
            while operators
                .last()
                .map_or(false, |top| top.precedence() >= op.precedence())
            {
                reduce(&mut operands, &mut operators)?;
            }
            operators.push(op)?;
        } else if is_identifier(word) {
            return Err(error!(UnknownVariable; word));
        } else {
            return Err(error!(UnknownOperator; word));
        }
    }

    while !operators.is_empty() {
        reduce(&mut operands, &mut operators)?;
    }
    let result = operands.pop()?;
    if !operands.is_empty() {
        trace!(left_over = operands.len(), "operands remain after evaluation");
    }
    Ok(result)
}

fn reduce(operands: &mut Stack<f64>, operators: &mut Stack<Operator>) -> Result<()> {
    let op = operators.pop()?;
    let (lhs, rhs) = operands.pop_2()?;
    let val = Operation::apply(op, lhs, rhs)?;
    trace!(op = %op, lhs = lhs, rhs = rhs, val = val, "reduce");
    operands.push(val)
}

fn is_identifier(word: &str) -> bool {
    word.chars()
        .next()
        .map_or(false, |ch| ch.is_alphabetic() || ch == '_')
}

/// Strip unary `!` markers from a condition.
///
/// Returns the cleaned text and whether an odd number of markers was
/// removed. A `!` directly followed by `=` belongs to `!=` and is kept.
pub fn strip_not(condition: &str) -> (String, bool) {
    let mut out = String::with_capacity(condition.len());
    let mut count = 0;
    let mut chars = condition.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '!' && chars.peek() != Some(&'=') {
            count += 1;
            continue;
        }
        out.push(ch);
    }
    (out, count % 2 == 1)
}

/// Evaluate an `if` condition, honouring `!` parity.
pub fn evaluate_condition(condition: &str, start: usize, vars: &Var) -> Result<f64> {
    let (condition, invert) = strip_not(condition);
    let val = evaluate(&condition, start, vars)?;
    if invert {
        Ok(Operation::not(val))
    } else {
        Ok(val)
    }
}
