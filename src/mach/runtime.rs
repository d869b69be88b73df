use super::console::{self, Read};
use super::{expr, Address, Program, Var};
use crate::error;
use crate::lang::{classify, element, Error, StatementKind, COMMENT};
use std::collections::VecDeque;
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// ## Statement dispatcher
///
/// Runs a loaded `Program` one statement at a time. Everything the outside
/// world needs to see comes back from `execute` as an `Event`.

pub struct Runtime {
    program: Program,
    vars: Var,
    pc: Address,
    reading: VecDeque<Read>,
    input: VecDeque<String>,
    output: String,
    finished: Option<Event>,
}

/// Terminal statements. Both end the program normally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Halt {
    Stop,
    End,
}

impl Halt {
    pub fn farewell(&self) -> String {
        let how = match self {
            Halt::Stop => "a stop",
            Halt::End => "an end",
        };
        format!(
            "**Exiting by {} statement**\n**Duck thanks you for using this language. Quack**",
            how
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Error(Error),
    Input(String),
    Print(String),
    Running,
    Stopped(Halt),
}

// Where control goes after a statement.
enum Flow {
    Next,
    Stay,
    Jump(Address),
    Halt(Halt),
}

impl Runtime {
    pub fn new(program: Program) -> Runtime {
        Runtime {
            program,
            vars: Var::new(),
            pc: 0,
            reading: VecDeque::new(),
            input: VecDeque::new(),
            output: String::new(),
            finished: None,
        }
    }

    /// Build a runtime straight from source text.
    pub fn from_source(source: &str) -> Result<Runtime> {
        Ok(Runtime::new(Program::parse(source)?))
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    /// Queue console input for `read` statements.
    pub fn enter(&mut self, line: &str) {
        self.input
            .extend(line.split_whitespace().map(|word| word.to_string()));
    }

    pub fn interrupt(&mut self) {
        self.fail(error!(Break));
    }

    /// The console closed; a waiting `read` can never be satisfied.
    pub fn end_of_input(&mut self) {
        self.fail(error!(InputPastEnd));
    }

    fn fail(&mut self, error: Error) {
        if self.finished.is_none() {
            let line = self.program.line_of(self.pc);
            self.finished = Some(Event::Error(error.in_line_number(line)));
        }
    }

    /// Run up to `cycles` statements.
    pub fn execute(&mut self, cycles: usize) -> Event {
        for _ in 0..cycles {
            if self.awaiting_input() {
                return Event::Input(std::mem::take(&mut self.output));
            }
            if !self.output.is_empty() {
                return Event::Print(std::mem::take(&mut self.output));
            }
            if let Some(event) = &self.finished {
                return event.clone();
            }
            if let Err(error) = self.step() {
                self.fail(error);
            }
        }
        Event::Running
    }

    fn awaiting_input(&self) -> bool {
        self.finished.is_none()
            && self.input.is_empty()
            && matches!(self.reading.front(), Some(Read::Target(_)))
    }

    fn step(&mut self) -> Result<()> {
        if let Some(read) = self.reading.pop_front() {
            self.read_one(read)?;
            if self.reading.is_empty() {
                self.pc += 1;
            }
            return Ok(());
        }
        let flow = self.dispatch()?;
        match flow {
            Flow::Next => self.pc += 1,
            Flow::Stay => {}
            Flow::Jump(addr) => {
                debug!(from = self.pc, to = addr, "jump");
                self.pc = addr;
            }
            Flow::Halt(halt) => {
                debug!(halt = ?halt, "halt");
                self.finished = Some(Event::Stopped(halt));
            }
        }
        Ok(())
    }

    fn dispatch(&mut self) -> Result<Flow> {
        let statement = self.program.statement_at(self.pc)?.to_string();
        let kind = classify(&statement)?;
        debug!(pc = self.pc, kind = ?kind, statement = statement.as_str(), "dispatch");
        match kind {
            StatementKind::Arithmetic => {
                self.assign(&statement)?;
                Ok(Flow::Next)
            }
            StatementKind::If => self.branch(&statement),
            StatementKind::Goto => self.goto(&statement),
            StatementKind::Print => {
                let text = console::print(&statement, &self.vars);
                self.output.push_str(&text);
                Ok(Flow::Next)
            }
            StatementKind::Read => {
                // The pointer stays on the read until its plan is done.
                self.reading.extend(console::read(&statement)?);
                Ok(Flow::Stay)
            }
            StatementKind::Stop => Ok(Flow::Halt(Halt::Stop)),
            StatementKind::End => Ok(Flow::Halt(Halt::End)),
            StatementKind::Comment => Ok(Flow::Next),
        }
    }

    fn assign(&mut self, statement: &str) -> Result<()> {
        let code = strip_comment(statement);
        for (op, delta) in [("++", 1.0), ("--", -1.0)].iter() {
            if let Some(pos) = code.find(op) {
                let name = code[..pos].trim();
                if name.is_empty() {
                    return Err(error!(MalformedStatement; statement));
                }
                let val = match self.vars.fetch(name) {
                    Some(val) => val,
                    None => return Err(error!(UnknownVariable; name)),
                };
                self.vars.store(name, val + delta);
                return Ok(());
            }
        }
        let name = match element(statement, 0) {
            Some(e) if e.next.is_some() && e.token.number().is_none() => e.token.text(),
            _ => return Err(error!(MalformedStatement; statement)),
        };
        let start = match element(statement, 1) {
            Some(e) if e.token.is_word("=") => e.next,
            _ => return Err(error!(MalformedStatement; statement)),
        };
        let val = match start {
            Some(start) => expr::evaluate(statement, start, &self.vars)?,
            None => return Err(error!(StackUnderflow; statement)),
        };
        self.vars.store(name, val);
        Ok(())
    }

    fn branch(&mut self, statement: &str) -> Result<Flow> {
        let code = strip_comment(statement);
        let (condition, label) = match code.rfind(" goto") {
            Some(pos) => (&code[..pos], label_after(&code[pos + 5..])),
            None => (code, None),
        };
        let label = match label {
            Some(label) => label,
            None => return Err(error!(MalformedStatement; statement)),
        };
        let target = self.resolve(label)?;
        let condition = format!("{} ;", condition);
        let val = expr::evaluate_condition(&condition, 1, &self.vars)?;
        if val != 0.0 {
            Ok(Flow::Jump(target))
        } else {
            Ok(Flow::Next)
        }
    }

    fn goto(&mut self, statement: &str) -> Result<Flow> {
        let label = match element(statement, 1) {
            Some(e) => e.token.text(),
            None => return Err(error!(MalformedStatement; statement)),
        };
        Ok(Flow::Jump(self.resolve(label)?))
    }

    fn resolve(&self, label: &str) -> Result<Address> {
        let addr = self.program.label_index(label)?;
        self.program.statement_at(addr)?;
        Ok(addr)
    }

    fn read_one(&mut self, read: Read) -> Result<()> {
        match read {
            Read::Prompt(text) => {
                self.output.push_str(&text);
                self.output.push(' ');
            }
            Read::Target(name) => {
                let word = match self.input.pop_front() {
                    Some(word) => word,
                    None => return Err(error!(InternalError; "READ WITHOUT INPUT")),
                };
                match word.parse::<f64>() {
                    Ok(val) => self.vars.store(&name, val),
                    Err(_) => return Err(error!(InvalidInput; word)),
                }
            }
            Read::Newline => self.output.push('\n'),
        }
        Ok(())
    }
}

fn strip_comment(statement: &str) -> &str {
    match statement.find(COMMENT) {
        Some(pos) => &statement[..pos],
        None => statement,
    }
}

// The label is the first word after `goto`, without its terminator.
fn label_after(rest: &str) -> Option<&str> {
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let word = rest.split_whitespace().next()?;
    let word = word.strip_suffix(';').unwrap_or(word);
    if word.is_empty() {
        None
    } else {
        Some(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_after() {
        assert_eq!(label_after(" loop;"), Some("loop"));
        assert_eq!(label_after(" loop ;"), Some("loop"));
        assert_eq!(label_after("x loop;"), None);
        assert_eq!(label_after(" ;"), None);
    }

    #[test]
    fn test_halt_farewell() {
        assert!(Halt::Stop.farewell().contains("stop statement"));
        assert!(Halt::End.farewell().contains("end statement"));
    }

    #[test]
    fn test_read_waits_for_input() {
        let mut r = Runtime::from_source("read x;\nprint x;\nend;").unwrap();
        assert_eq!(r.execute(100), Event::Input(String::new()));
        r.enter("42");
        assert_eq!(r.execute(100), Event::Print("\n".into()));
        assert_eq!(r.execute(100), Event::Print("42\n".into()));
        assert_eq!(r.execute(100), Event::Stopped(Halt::End));
        assert_eq!(r.vars().fetch("x"), Some(42.0));
    }

    #[test]
    fn test_cycle_budget() {
        let mut r = Runtime::from_source("top: goto top;").unwrap();
        assert_eq!(r.execute(10), Event::Running);
        r.interrupt();
        match r.execute(10) {
            Event::Error(e) => assert_eq!(e.to_string(), "BREAK IN LINE 1"),
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn test_finished_is_sticky() {
        let mut r = Runtime::from_source("stop;").unwrap();
        assert_eq!(r.execute(10), Event::Stopped(Halt::Stop));
        assert_eq!(r.execute(10), Event::Stopped(Halt::Stop));
    }
}
