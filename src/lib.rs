//! # Duck
//!
//! A tiny line-oriented language: numeric variables, arithmetic and
//! relational expressions, labels, `goto`, conditional jumps and console
//! `print`/`read`.
//!
//! Run a program with `duck program.duck`. A short example:
//! ```text
//! x = 0;
//! loop: x = x + 1;
//! if x < 3 goto loop;
//! print "Value:", x;
//! end;
//! ```
//! prints `Value: 3` followed by the farewell banner.
//!
//! Every statement ends with `;` and a `label:` prefix may name it.
//! Text after `//` is a comment. Programs finish with `stop;` or `end;`;
//! nothing but blank lines may follow `end;`.

pub mod lang;
pub mod mach;
pub mod term;
