//! Reggy CLI binary entrypoint.

fn main() {
    if let Err(err) = reggy_cli::app::run() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
