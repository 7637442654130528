fn main() {
    if let Err(err) = rlinq::run(std::env::args().skip(1).peekable()) {
        err.termination();
    }
}
