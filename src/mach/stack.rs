use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector

pub struct Stack<T> {
    overflow_message: &'static str,
    vec: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new(overflow_message: &'static str) -> Stack<T> {
        Stack {
            overflow_message,
            vec: vec![],
        }
    }
    fn max_len(&self) -> usize {
        u16::max_value() as usize
    }
    fn overflow_check(&self) -> Result<()> {
        if self.vec.len() > self.max_len() {
            Err(error!(InternalError; self.overflow_message))
        } else {
            Ok(())
        }
    }
    fn underflow_error(&self) -> Error {
        error!(StackUnderflow)
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        self.vec.push(val);
        self.overflow_check()
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(self.underflow_error()),
        }
    }
    pub fn pop_2(&mut self) -> Result<(T, T)> {
        let two = self.pop()?;
        let one = self.pop()?;
        Ok((one, two))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_pop_2_order() {
        let mut s: Stack<i32> = Stack::new("TEST");
        s.push(1).unwrap();
        s.push(2).unwrap();
        assert_eq!(s.pop_2().unwrap(), (1, 2));
        assert!(s.is_empty());
    }

    #[test]
    fn test_underflow() {
        let mut s: Stack<f64> = Stack::new("TEST");
        s.push(1.0).unwrap();
        let e = s.pop_2().unwrap_err();
        assert!(e.is_code(ErrorCode::StackUnderflow));
    }

    #[test]
    fn test_overflow() {
        let mut s: Stack<u8> = Stack::new("TOO DEEP");
        let mut result = Ok(());
        for _ in 0..=u16::max_value() as usize + 1 {
            result = s.push(0);
            if result.is_err() {
                break;
            }
        }
        assert!(result.is_err());
    }
}
