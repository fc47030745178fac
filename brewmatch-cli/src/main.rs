//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

#[expect(
    clippy::print_stderr,
    reason = "the binary reports failures on stderr before exiting"
)]
fn main() {
    if let Err(err) = brewmatch_cli::init_logging() {
        eprintln!("brewmatch: logging disabled: {err}");
    }
    if let Err(err) = brewmatch_cli::run() {
        eprintln!("brewmatch: {err}");
        std::process::exit(1);
    }
}
