use crate::error;
use crate::lang::{Error, Operator};

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    /// Apply a binary operator. Relational operators yield `1.0` or `0.0`.
    pub fn apply(op: Operator, lhs: f64, rhs: f64) -> Result<f64> {
        use Operator::*;
        Ok(match op {
            Plus => lhs + rhs,
            Minus => lhs - rhs,
            Multiply => lhs * rhs,
            Divide => lhs / rhs,
            Modulus => lhs % rhs,
            Less => truth(lhs < rhs),
            LessEqual => truth(lhs <= rhs),
            Greater => truth(lhs > rhs),
            GreaterEqual => truth(lhs >= rhs),
            Equal => truth(lhs == rhs),
            NotEqual => truth(lhs != rhs),
            LParen => return Err(error!(UnknownOperator; "UNMATCHED (")),
        })
    }

    /// Logical not: zero becomes one, anything else becomes zero.
    pub fn not(val: f64) -> f64 {
        truth(val == 0.0)
    }
}

fn truth(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Operator::*;

    #[test]
    fn test_arithmetic() {
        assert_eq!(Operation::apply(Plus, 2.0, 3.0).unwrap(), 5.0);
        assert_eq!(Operation::apply(Minus, 2.0, 3.0).unwrap(), -1.0);
        assert_eq!(Operation::apply(Multiply, 2.5, 4.0).unwrap(), 10.0);
        assert_eq!(Operation::apply(Divide, 7.0, 2.0).unwrap(), 3.5);
    }

    #[test]
    fn test_float_remainder() {
        assert_eq!(Operation::apply(Modulus, 7.0, 3.0).unwrap(), 1.0);
        assert_eq!(Operation::apply(Modulus, 7.5, 2.0).unwrap(), 1.5);
    }

    #[test]
    fn test_relational() {
        assert_eq!(Operation::apply(Less, 1.0, 2.0).unwrap(), 1.0);
        assert_eq!(Operation::apply(GreaterEqual, 1.0, 2.0).unwrap(), 0.0);
        assert_eq!(Operation::apply(Equal, 2.0, 2.0).unwrap(), 1.0);
        assert_eq!(Operation::apply(NotEqual, 2.0, 2.0).unwrap(), 0.0);
    }

    #[test]
    fn test_paren_is_not_applicable() {
        assert!(Operation::apply(LParen, 1.0, 2.0).is_err());
    }

    #[test]
    fn test_not() {
        assert_eq!(Operation::not(0.0), 1.0);
        assert_eq!(Operation::not(-3.0), 0.0);
    }
}
