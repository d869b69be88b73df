use duck::mach::{Event, Runtime};

pub fn runtime(source: &str) -> Runtime {
    match Runtime::from_source(source) {
        Ok(runtime) => runtime,
        Err(error) => panic!("load failed: {}", error),
    }
}

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

/// Run until the program halts, fails or waits for input.
pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped(_) => break,
            Event::Error(error) => {
                s.push_str(&format!("{}\n", error));
                break;
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => s.push_str(ps),
            Event::Input(ps) => {
                s.push_str(ps);
                break;
            }
        }
        prev_running = event == Event::Running;
    }
    s
}

/// Run a whole program, answering each `read` with the next line of `input`.
pub fn exec_with_input(source: &str, input: &[&str]) -> String {
    let mut r = runtime(source);
    let mut input = input.iter();
    let mut s = String::new();
    loop {
        match r.execute(5000) {
            Event::Stopped(_) => break,
            Event::Error(error) => {
                s.push_str(&format!("{}\n", error));
                break;
            }
            Event::Running => {}
            Event::Print(ps) => s.push_str(&ps),
            Event::Input(ps) => {
                s.push_str(&ps);
                match input.next() {
                    Some(line) => r.enter(line),
                    None => r.end_of_input(),
                }
            }
        }
    }
    s
}

pub fn run(source: &str) -> String {
    exec(&mut runtime(source))
}
