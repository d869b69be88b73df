use super::LineNumber;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: u16,
    line_number: LineNumber,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn is_code(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }

    /// Attach the source line unless one is already known.
    pub fn in_line_number(self, line: LineNumber) -> Error {
        if self.line_number.is_some() {
            return self;
        }
        Error {
            line_number: line,
            ..self
        }
    }

    pub fn message<S: AsRef<str>>(self, message: S) -> Error {
        Error {
            message: message.as_ref().to_string(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorCode {
    MalformedStatement = 2,
    StackUnderflow = 3,
    UnknownOperator = 4,
    UnknownVariable = 5,
    UndefinedLabel = 8,
    StatementOutOfRange = 9,
    InvalidInput = 13,
    StatementAfterEnd = 16,
    Break = 17,
    InternalError = 51,
    FileNotFound = 53,
    InputPastEnd = 62,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            2 => "MALFORMED STATEMENT",
            3 => "STACK UNDERFLOW",
            4 => "UNKNOWN OPERATOR",
            5 => "UNKNOWN VARIABLE",
            8 => "UNDEFINED LABEL",
            9 => "STATEMENT OUT OF RANGE",
            13 => "INVALID INPUT",
            16 => "STATEMENT AFTER END",
            17 => "BREAK",
            51 => "INTERNAL ERROR",
            53 => "FILE NOT FOUND",
            62 => "INPUT PAST END",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" LINE {}", line_number));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            if suffix.is_empty() {
                write!(f, "PROGRAM ERROR {}", self.code)
            } else {
                write!(f, "PROGRAM ERROR {} IN{}", self.code, suffix)
            }
        } else if self.line_number.is_some() {
            write!(f, "{} IN{}", code_str, suffix)
        } else {
            write!(f, "{}{}", code_str, suffix)
        }
    }
}
