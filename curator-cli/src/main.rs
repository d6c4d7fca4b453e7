//! Entry point for the curator command-line interface.
#![forbid(unsafe_code)]

fn main() {
    env_logger::init();
    if let Err(err) = curator_cli::run() {
        eprintln!("curator: {err}");
        std::process::exit(1);
    }
}
