use super::Address;
use crate::error;
use crate::lang::{classify, Error, Line, LineNumber, StatementKind};
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Program image
///
/// The ordered, normalized statements of one source file together with the
/// label table. Built line by line, then read-only while running.

#[derive(Debug, Default)]
pub struct Program {
    statements: Vec<String>,
    lines: Vec<usize>,
    labels: HashMap<String, Address>,
    pending_labels: Vec<String>,
    source_lines: usize,
    ended: bool,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    /// Load a whole source text.
    pub fn parse(source: &str) -> Result<Program> {
        let mut program = Program::new();
        for line in source.lines() {
            program.load_str(line)?;
        }
        program.finish();
        Ok(program)
    }

    /// Record the next source line.
    pub fn load_str(&mut self, source: &str) -> Result<()> {
        self.source_lines += 1;
        let line_number = self.source_lines;
        if source.trim().is_empty() {
            return Ok(());
        }
        if self.ended {
            return Err(error!(StatementAfterEnd, Some(line_number); source.trim()));
        }
        let line = Line::new(source);
        if let Some(label) = line.label() {
            self.pending_labels.push(label.to_string());
        }
        if line.is_empty() {
            return Ok(());
        }
        let addr = self.statements.len();
        for label in self.pending_labels.drain(..) {
            self.labels.insert(label, addr);
        }
        if let Ok(StatementKind::End) = classify(line.text()) {
            self.ended = true;
        }
        self.statements.push(line.into_text());
        self.lines.push(line_number);
        Ok(())
    }

    /// Bind any trailing labels; they address one past the last statement.
    pub fn finish(&mut self) {
        let addr = self.statements.len();
        for label in self.pending_labels.drain(..) {
            self.labels.insert(label, addr);
        }
    }

    pub fn statement_at(&self, addr: Address) -> Result<&str> {
        match self.statements.get(addr) {
            Some(s) => Ok(s.as_str()),
            None => Err(error!(StatementOutOfRange; format!("STATEMENT {}", addr))),
        }
    }

    pub fn label_index(&self, label: &str) -> Result<Address> {
        match self.labels.get(label) {
            Some(addr) => Ok(*addr),
            None => Err(error!(UndefinedLabel; label)),
        }
    }

    pub fn line_of(&self, addr: Address) -> LineNumber {
        self.lines.get(addr).copied()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
