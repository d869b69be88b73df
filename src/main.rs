fn main() {
    std::process::exit(duck::term::main());
}
