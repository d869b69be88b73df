/*!
## Rust Terminal Module

Command line, console and process exit status for the `duck` binary.

*/

extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::lang::Error;
use crate::mach::{Event, Program, Runtime};
use crate::error;
use ansi_term::Style;
use clap::error::ErrorKind as ClapErrorKind;
use clap::Parser;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::fs::File;
use std::io::{self, BufRead, BufReader, ErrorKind, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "duck", version, about = "Run a Duck program")]
struct Cli {
    /// Program to run
    source: PathBuf,

    /// Statements executed between Ctrl-C checks
    #[arg(long, default_value_t = 5000)]
    cycles: usize,

    /// Logging filter, e.g. `duck=debug`
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,
}

/// Run the binary and return its exit status.
pub fn main() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return match error.kind() {
                ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => 0,
                _ => 1,
            };
        }
    };
    install_tracing(cli.log.as_deref());

    let program = match load(&cli.source) {
        Ok(program) => program,
        Err(error) => {
            report(&error);
            return 1;
        }
    };

    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!(error = %error, "Ctrl-C handler not installed");
    }

    let result = Console::new().and_then(|mut console| {
        main_loop(Runtime::new(program), cli.cycles.max(1), interrupted, &mut console)
    });
    match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", error);
            1
        }
    }
}

// `--log` wins over `RUST_LOG`; anything unusable falls back to warnings.
fn log_filter(directive: Option<&str>) -> EnvFilter {
    match directive {
        Some(directive) => EnvFilter::try_new(directive).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    }
    .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn install_tracing(directive: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(directive))
        .with_writer(io::stderr)
        .try_init();
}

fn report(error: &Error) {
    eprintln!("{}", Style::new().bold().paint(error.to_string()));
}

fn main_loop(
    mut runtime: Runtime,
    cycles: usize,
    interrupted: Arc<AtomicBool>,
    console: &mut Console,
) -> io::Result<i32> {
    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute(cycles) {
            Event::Running => {}
            Event::Print(s) => console.write(&s)?,
            Event::Input(prompt) => match console.read_line(&prompt)? {
                Reply::Line(line) => runtime.enter(&line),
                Reply::Interrupt => runtime.interrupt(),
                Reply::Eof => runtime.end_of_input(),
            },
            Event::Stopped(halt) => {
                console.write(&format!("{}\n", halt.farewell()))?;
                return Ok(0);
            }
            Event::Error(error) => {
                report(&error);
                return Ok(1);
            }
        }
    }
}

/// Load a source file into a program image.
pub fn load(path: &Path) -> Result<Program, Error> {
    let reader = match File::open(path) {
        Ok(file) => BufReader::new(file),
        Err(error) => {
            let msg = format!("{}: {}", path.display(), error);
            match error.kind() {
                ErrorKind::NotFound => return Err(error!(FileNotFound; msg)),
                _ => return Err(error!(InternalError; msg)),
            }
        }
    };
    let mut program = Program::new();
    for line in reader.lines() {
        match line {
            Err(error) => return Err(error!(InternalError; error.to_string())),
            Ok(line) => program.load_str(&line)?,
        }
    }
    program.finish();
    if program.is_empty() {
        warn!(path = %path.display(), "program has no statements");
    }
    info!(
        path = %path.display(),
        statements = program.len(),
        "program loaded"
    );
    Ok(program)
}

enum Reply {
    Line(String),
    Interrupt,
    Eof,
}

enum Console {
    Terminal(Interface<DefaultTerminal>),
    Piped(io::StdinLock<'static>),
}

impl Console {
    fn new() -> io::Result<Console> {
        if io::stdin().is_terminal() {
            let interface = Interface::new("duck")?;
            interface.set_report_signal(Signal::Interrupt, true);
            Ok(Console::Terminal(interface))
        } else {
            Ok(Console::Piped(io::stdin().lock()))
        }
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        match self {
            Console::Terminal(interface) => interface.write_fmt(format_args!("{}", text)),
            Console::Piped(_) => {
                let mut stdout = io::stdout();
                stdout.write_all(text.as_bytes())?;
                stdout.flush()
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Reply> {
        // linefeed prompts are single line; earlier lines are plain output.
        let (before, prompt) = match prompt.rfind('\n') {
            Some(pos) => prompt.split_at(pos + 1),
            None => ("", prompt),
        };
        self.write(before)?;
        match self {
            Console::Terminal(interface) => {
                interface.set_prompt(prompt)?;
                Ok(match interface.read_line()? {
                    ReadResult::Input(line) => Reply::Line(line),
                    ReadResult::Signal(Signal::Interrupt) => Reply::Interrupt,
                    ReadResult::Signal(_) | ReadResult::Eof => Reply::Eof,
                })
            }
            Console::Piped(stdin) => {
                let mut stdout = io::stdout();
                stdout.write_all(prompt.as_bytes())?;
                stdout.flush()?;
                let mut line = String::new();
                if stdin.read_line(&mut line)? == 0 {
                    return Ok(Reply::Eof);
                }
                Ok(Reply::Line(line))
            }
        }
    }
}
