/*!
## Rust Machine Module

This Rust module loads Duck programs and runs them one statement at a time.

*/

pub type Address = usize;

mod console;
mod expr;
mod operation;
mod program;
mod runtime;
mod stack;
mod var;

pub use console::format_number;
pub use expr::{evaluate, evaluate_condition};
pub use operation::Operation;
pub use program::Program;
pub use runtime::{Event, Halt, Runtime};
pub use stack::Stack;
pub use var::Var;
